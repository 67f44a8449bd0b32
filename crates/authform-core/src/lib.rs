//! authform core
//!
//! Pure validation and scoring functions for the login/registration page.
//! Nothing in here touches a rendering surface; the controller in the
//! `authform` crate and the WASM bindings both call into these.

pub mod email;
pub mod name;
pub mod password;
pub mod result;
pub mod strength;

// Re-export all validators
pub use email::*;
pub use name::*;
pub use password::*;
pub use result::*;
pub use strength::*;
