//! `tutordesk-auth`: pure identity/role domain for the TutorDesk platform.
//!
//! This crate is intentionally decoupled from HTTP and storage. Token
//! decoding, request enforcement, and persistence live in outer layers.

pub mod account;
pub mod claims;
pub mod roles;

pub use account::{Account, AccountCommand, AccountEvent, AccountStatus};
pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use roles::{InvalidRoleError, Role};
