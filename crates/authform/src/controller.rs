// File: src/controller.rs
// Purpose: Wires page events to tabs, live feedback and submissions

use authform_core::{validate_email, validate_name, validate_password};

use crate::config::AuthFormConfig;
use crate::field_errors::{clear_all_errors, show_error};
use crate::live::{self, INVALID_EMAIL};
use crate::page::Page;
use crate::strength_meter;
use crate::submit::{simulate, SocialProvider, SubmissionRequest, SubmitReport, Submitter};
use crate::tabs::{Tab, TabController};

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const NAME_REQUIRED: &str = "Full name is required";
pub const NAME_INVALID: &str = "Name must be at least 2 characters long";
pub const TERMS_REQUIRED: &str = "Please agree to the Terms of Service and Privacy Policy";
pub const GUEST_CONFIRMATION: &str = "Continue as guest? You'll have limited access to features.";

/// Something the user did on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    TabClicked { button_id: String },
    TogglePassword { button_id: String },
    Input { id: String },
    Blur { id: String },
    Focus { id: String },
    SubmitLogin,
    SubmitRegister,
    ContinueAsGuest,
    SocialLogin { button_id: String },
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    /// The event only updated page state
    Updated,
    TabActivated(Tab),
    Submission(SubmitReport),
}

/// The login/registration page controller.
pub struct FormController<S> {
    config: AuthFormConfig,
    tabs: TabController,
    submitter: S,
}

impl<S: Submitter> FormController<S> {
    pub fn new(config: AuthFormConfig, submitter: S) -> Self {
        Self {
            config,
            tabs: TabController::new(),
            submitter,
        }
    }

    pub fn config(&self) -> &AuthFormConfig {
        &self.config
    }

    /// Page-load setup: restore the tab from the fragment and put the
    /// strength meter in its empty state.
    pub fn init<P: Page>(&self, page: &mut P) -> Option<Tab> {
        let restored = self.tabs.restore_from_fragment(page);

        let ids = &self.config.elements;
        if page.contains(&ids.register_password) {
            strength_meter::update(page, ids, "");
        }

        restored
    }

    /// Dispatch one event.
    pub async fn handle<P: Page>(&self, page: &mut P, event: UiEvent) -> Handled {
        match event {
            UiEvent::TabClicked { button_id } => match self.tabs.activate(page, &button_id) {
                Some(tab) => Handled::TabActivated(tab),
                None => Handled::Updated,
            },
            UiEvent::TogglePassword { button_id } => {
                live::toggle_password_visibility(page, &button_id);
                Handled::Updated
            }
            UiEvent::Input { id } => {
                live::on_input(page, &self.config.elements, &id);
                Handled::Updated
            }
            UiEvent::Blur { id } => {
                live::on_blur(page, &id);
                Handled::Updated
            }
            UiEvent::Focus { id } => {
                live::on_focus(page, &id);
                Handled::Updated
            }
            UiEvent::SubmitLogin => Handled::Submission(self.submit_login(page).await),
            UiEvent::SubmitRegister => Handled::Submission(self.submit_register(page).await),
            UiEvent::ContinueAsGuest => Handled::Submission(self.continue_as_guest(page).await),
            UiEvent::SocialLogin { button_id } => {
                Handled::Submission(self.social_login(page, &button_id).await)
            }
        }
    }

    /// Validate the login form and submit it.
    ///
    /// Only presence is checked for the password; the complexity rules apply
    /// to registration.
    pub async fn submit_login<P: Page>(&self, page: &mut P) -> SubmitReport {
        clear_all_errors(page);
        let ids = &self.config.elements;

        let email = trimmed_value(page, &ids.login_email);
        let password = page.value(&ids.login_password).unwrap_or_default();

        let mut is_valid = check_email(page, &ids.login_email, &email);

        if password.is_empty() {
            show_error(page, &ids.login_password, &[PASSWORD_REQUIRED]);
            is_valid = false;
        }

        if !is_valid {
            return SubmitReport::Blocked;
        }

        let request = SubmissionRequest::Login { email, password };
        simulate(page, &ids.login_submit, &self.submitter, request, &self.config.branding.app_name)
            .await
    }

    /// Validate the registration form and submit it.
    ///
    /// Every field is checked so all problems show at once. An unchecked
    /// terms box raises a blocking alert and stops the submission even when
    /// every field passes.
    pub async fn submit_register<P: Page>(&self, page: &mut P) -> SubmitReport {
        clear_all_errors(page);
        let ids = &self.config.elements;

        let name = trimmed_value(page, &ids.register_name);
        let email = trimmed_value(page, &ids.register_email);
        let password = page.value(&ids.register_password).unwrap_or_default();
        let agreed = page.is_checked(&ids.agree_terms).unwrap_or(false);

        let mut is_valid = true;

        if name.is_empty() {
            show_error(page, &ids.register_name, &[NAME_REQUIRED]);
            is_valid = false;
        } else if !validate_name(&name).is_valid {
            show_error(page, &ids.register_name, &[NAME_INVALID]);
            is_valid = false;
        }

        is_valid &= check_email(page, &ids.register_email, &email);

        if password.is_empty() {
            show_error(page, &ids.register_password, &[PASSWORD_REQUIRED]);
            is_valid = false;
        } else {
            let result = validate_password(&password);
            if !result.is_valid {
                show_error(page, &ids.register_password, &result.errors);
                is_valid = false;
            }
        }

        if !agreed {
            page.alert(TERMS_REQUIRED);
            is_valid = false;
        }

        if !is_valid {
            return SubmitReport::Blocked;
        }

        let request = SubmissionRequest::Register {
            name,
            email,
            password,
        };
        simulate(
            page,
            &ids.register_submit,
            &self.submitter,
            request,
            &self.config.branding.app_name,
        )
        .await
    }

    /// Ask for confirmation, then start a guest session. No validation.
    pub async fn continue_as_guest<P: Page>(&self, page: &mut P) -> SubmitReport {
        if !page.confirm(GUEST_CONFIRMATION) {
            return SubmitReport::Cancelled;
        }

        simulate(
            page,
            &self.config.elements.guest_button,
            &self.submitter,
            SubmissionRequest::Guest,
            &self.config.branding.app_name,
        )
        .await
    }

    /// Start a social login from one of the provider buttons. No validation.
    pub async fn social_login<P: Page>(&self, page: &mut P, button_id: &str) -> SubmitReport {
        let provider = SocialProvider::from_button(page, button_id);

        simulate(
            page,
            button_id,
            &self.submitter,
            SubmissionRequest::Social(provider),
            &self.config.branding.app_name,
        )
        .await
    }
}

fn trimmed_value<P: Page>(page: &P, id: &str) -> String {
    page.value(id).unwrap_or_default().trim().to_string()
}

/// Required + format check shared by both forms. Returns whether it passed.
fn check_email<P: Page>(page: &mut P, field_id: &str, email: &str) -> bool {
    if email.is_empty() {
        show_error(page, field_id, &[EMAIL_REQUIRED]);
        false
    } else if !validate_email(email) {
        show_error(page, field_id, &[INVALID_EMAIL]);
        false
    } else {
        true
    }
}
