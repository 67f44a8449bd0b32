//! Simulated form submission
//!
//! The page never talks to a server. Each action puts its button into a
//! loading state, awaits a [`Submitter`], restores the button and shows a
//! confirmation. The stock [`SimulatedLatency`] submitter just sleeps.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::SubmissionConfig;
use crate::error::Result;
use crate::page::Page;

/// Class carried by a button while its submission is in flight
pub const LOADING_CLASS: &str = "loading";

/// Social login providers offered on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialProvider {
    Google,
    LinkedIn,
    Microsoft,
}

impl SocialProvider {
    /// Pick the provider from a social button's classes.
    ///
    /// Falls back to Microsoft for a button that names neither Google nor
    /// LinkedIn.
    pub fn from_button<P: Page>(page: &P, button_id: &str) -> Self {
        if page.has_class(button_id, "google-btn") {
            SocialProvider::Google
        } else if page.has_class(button_id, "linkedin-btn") {
            SocialProvider::LinkedIn
        } else {
            SocialProvider::Microsoft
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::LinkedIn => "LinkedIn",
            SocialProvider::Microsoft => "Microsoft",
        }
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What is being submitted.
#[derive(Clone, PartialEq, Eq)]
pub enum SubmissionRequest {
    Login {
        email: String,
        password: String,
    },
    Register {
        name: String,
        email: String,
        password: String,
    },
    Guest,
    Social(SocialProvider),
}

// Passwords never reach the logs
impl fmt::Debug for SubmissionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionRequest::Login { email, .. } => f
                .debug_struct("Login")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
            SubmissionRequest::Register { name, email, .. } => f
                .debug_struct("Register")
                .field("name", name)
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
            SubmissionRequest::Guest => f.write_str("Guest"),
            SubmissionRequest::Social(provider) => {
                f.debug_tuple("Social").field(provider).finish()
            }
        }
    }
}

impl SubmissionRequest {
    /// Button label while the request is in flight
    pub fn loading_text(&self) -> String {
        match self {
            SubmissionRequest::Login { .. } => "Signing in...".to_string(),
            SubmissionRequest::Register { .. } => "Creating account...".to_string(),
            SubmissionRequest::Guest => "Starting guest session...".to_string(),
            SubmissionRequest::Social(provider) => format!("Connecting to {}...", provider),
        }
    }

    /// Confirmation shown once the request completes
    pub fn completion_message(&self, app_name: &str) -> String {
        match self {
            SubmissionRequest::Login { .. } => {
                "Login successful! Redirecting to dashboard...".to_string()
            }
            SubmissionRequest::Register { .. } => {
                format!("Registration successful! Welcome to {}!", app_name)
            }
            SubmissionRequest::Guest => "Welcome! You're now browsing as a guest.".to_string(),
            SubmissionRequest::Social(provider) => {
                format!("{} authentication would be handled here.", provider)
            }
        }
    }
}

/// The asynchronous half of a submission.
///
/// Implementations stand in for the network call the page would make.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, request: &SubmissionRequest) -> Result<()>;
}

/// Submitter that succeeds after a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &SubmissionConfig) -> Self {
        Self::new(config.latency())
    }

    /// Completes without waiting
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::from_config(&SubmissionConfig::default())
    }
}

#[async_trait]
impl Submitter for SimulatedLatency {
    async fn submit(&self, request: &SubmissionRequest) -> Result<()> {
        tracing::debug!(?request, delay_ms = self.delay.as_millis() as u64, "simulating submission");
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(())
    }
}

/// How a submission attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    /// Field validation or the terms gate stopped the attempt
    Blocked,
    /// The user declined a confirmation dialog
    Cancelled,
    /// The submitter resolved and the confirmation was shown
    Completed,
    /// The submitter returned an error
    Failed(String),
}

impl SubmitReport {
    pub fn is_completed(&self) -> bool {
        matches!(self, SubmitReport::Completed)
    }
}

/// Run one submission against `button_id`.
///
/// While the submitter is pending the button shows the loading text and
/// carries [`LOADING_CLASS`]. Its original label is put back before the
/// confirmation is shown. A missing button only skips the visual state.
/// Nothing prevents a second call for the same button while the first is
/// still pending.
pub async fn simulate<P, S>(
    page: &mut P,
    button_id: &str,
    submitter: &S,
    request: SubmissionRequest,
    app_name: &str,
) -> SubmitReport
where
    P: Page,
    S: Submitter + ?Sized,
{
    let original_label = page.text(button_id);

    if original_label.is_some() {
        page.add_class(button_id, LOADING_CLASS);
        page.set_text(button_id, &request.loading_text());
    }

    let outcome = submitter.submit(&request).await;

    if let Some(label) = &original_label {
        page.remove_class(button_id, LOADING_CLASS);
        page.set_text(button_id, label);
    }

    match outcome {
        Ok(()) => {
            page.alert(&request.completion_message(app_name));
            tracing::info!(?request, "submission completed");
            SubmitReport::Completed
        }
        Err(err) => {
            tracing::warn!(?request, error = %err, "submission failed");
            page.alert(&err.to_string());
            SubmitReport::Failed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthFormError;
    use crate::page::{Element, MemoryPage};

    struct Refuse;

    #[async_trait]
    impl Submitter for Refuse {
        async fn submit(&self, _request: &SubmissionRequest) -> Result<()> {
            Err(AuthFormError::Submission("service unavailable".to_string()))
        }
    }

    #[test]
    fn test_debug_redacts_password() {
        let request = SubmissionRequest::Login {
            email: "user@example.com".to_string(),
            password: "TestPass123!".to_string(),
        };
        let debug = format!("{:?}", request);
        assert!(debug.contains("user@example.com"));
        assert!(!debug.contains("TestPass123!"));
    }

    #[test]
    fn test_messages() {
        let social = SubmissionRequest::Social(SocialProvider::LinkedIn);
        assert_eq!(social.loading_text(), "Connecting to LinkedIn...");
        assert_eq!(
            social.completion_message("Acme"),
            "LinkedIn authentication would be handled here."
        );
        assert_eq!(
            SubmissionRequest::Register {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                password: "x".into(),
            }
            .completion_message("Acme"),
            "Registration successful! Welcome to Acme!"
        );
    }

    #[test]
    fn test_provider_fallback() {
        let mut page = MemoryPage::new();
        page.insert("a", Element::new().with_class("google-btn"))
            .insert("b", Element::new().with_class("linkedin-btn"))
            .insert("c", Element::new().with_class("social-btn"));

        assert_eq!(SocialProvider::from_button(&page, "a"), SocialProvider::Google);
        assert_eq!(SocialProvider::from_button(&page, "b"), SocialProvider::LinkedIn);
        assert_eq!(SocialProvider::from_button(&page, "c"), SocialProvider::Microsoft);
    }

    #[tokio::test]
    async fn test_failed_submission_restores_button() {
        let mut page = MemoryPage::login_page();

        let report = simulate(
            &mut page,
            "continueAsGuest",
            &Refuse,
            SubmissionRequest::Guest,
            "Acme",
        )
        .await;

        assert_eq!(report, SubmitReport::Failed("submission failed: service unavailable".to_string()));
        assert!(!page.has_class("continueAsGuest", LOADING_CLASS));
        assert_eq!(page.text("continueAsGuest").as_deref(), Some("Continue as Guest"));
        assert_eq!(page.alerts(), ["submission failed: service unavailable"]);
    }

    #[tokio::test]
    async fn test_missing_button_still_completes() {
        let mut page = MemoryPage::new();
        let report = simulate(
            &mut page,
            "nowhere",
            &SimulatedLatency::instant(),
            SubmissionRequest::Guest,
            "Acme",
        )
        .await;

        assert!(report.is_completed());
        assert_eq!(page.alerts(), ["Welcome! You're now browsing as a guest."]);
    }
}
