//! JWT claim structure for identity tokens.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims carried by a login token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Account id (subject claim)
    pub sub: String,
    /// Account user type, e.g. `person` or `store`
    pub role: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}
