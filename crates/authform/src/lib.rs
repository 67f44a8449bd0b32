//! # authform
//!
//! Headless controller for a login/registration page.
//!
//! The controller never queries a global document. Every handler receives the
//! page as an injected [`Page`] surface, and every simulated network call goes
//! through an injected [`Submitter`], so the whole flow runs under test
//! without a browser or real timers.
//!
//! ## Example
//!
//! ```rust
//! use authform::{AuthFormConfig, FormController, MemoryPage, Page, SimulatedLatency, UiEvent};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = AuthFormConfig::default();
//!     let submitter = SimulatedLatency::from_config(&config.submission);
//!     let controller = FormController::new(config, submitter);
//!
//!     let mut page = MemoryPage::login_page();
//!     page.set_fragment("register");
//!     controller.init(&mut page);
//!
//!     controller.handle(&mut page, UiEvent::Input { id: "registerPassword".into() }).await;
//! }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod field_errors;
pub mod live;
pub mod page;
pub mod strength_meter;
pub mod submit;
pub mod tabs;
pub mod telemetry;

pub use authform_core as validation;
pub use config::{AuthFormConfig, BrandingConfig, ElementIds, LoggingConfig, SubmissionConfig};
pub use controller::{FormController, Handled, UiEvent};
pub use error::{AuthFormError, Result};
pub use page::{InputKind, MemoryPage, Page};
pub use submit::{
    SimulatedLatency, SocialProvider, SubmissionRequest, SubmitReport, Submitter,
};
pub use tabs::{Tab, TabController};
