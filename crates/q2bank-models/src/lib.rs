//! # q2bank Models
//!
//! Domain models and DTOs for the q2bank account API.
//!
//! - [`accounts`]: request/response bodies, [`UserType`] and storage rows

pub mod accounts;

pub use accounts::{
    AccountCredentials, CreateAccountRequest, FieldOrder, LoginRequest, LoginResponse,
    MessageResponse, NewAccount, UserType,
};
