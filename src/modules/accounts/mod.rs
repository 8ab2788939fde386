//! Account registration and login.
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: validation sequence and data-access translation
//! - `repository.rs`: storage trait and implementations
//! - `router.rs`: route table

pub mod controller;
pub mod repository;
pub mod router;
pub mod service;
