//! Shared types used across all modules.
//!
//! This module defines the wire types for the user resource and the
//! form draft the controller binds to. Other modules import from here
//! rather than reaching into each other's internals.

pub mod form;
pub mod user;

pub use form::{FormMode, FormState};
pub use user::{User, UserId, UserPayload};
