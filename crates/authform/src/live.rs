//! Per-keystroke, blur and focus feedback on individual inputs

use authform_core::{validate_email, validate_name, validate_password};

use crate::config::ElementIds;
use crate::field_errors::{clear_error, show_error};
use crate::page::{InputKind, Page};
use crate::strength_meter;

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
/// Class marking a password input that currently passes validation
pub const VALID_CLASS: &str = "valid";

const EYE_CLASS: &str = "fa-eye";
const EYE_SLASH_CLASS: &str = "fa-eye-slash";

/// Validate an input when it loses focus.
///
/// The trimmed value is checked by the validator matching the input's type.
/// Text inputs are only checked when their id mentions a name. An empty
/// value just clears any error already shown.
pub fn on_blur<P: Page>(page: &mut P, id: &str) {
    let Some(kind) = page.input_kind(id) else {
        return;
    };
    let value = page.value(id).unwrap_or_default();
    let value = value.trim();

    if value.is_empty() {
        clear_error(page, id);
        return;
    }

    match kind {
        InputKind::Email => {
            if validate_email(value) {
                clear_error(page, id);
            } else {
                show_error(page, id, &[INVALID_EMAIL]);
            }
        }
        InputKind::Password => {
            let result = validate_password(value);
            if result.is_valid {
                clear_error(page, id);
            } else {
                show_error(page, id, &result.errors);
            }
        }
        InputKind::Text if is_name_field(id) => {
            let result = validate_name(value);
            if result.is_valid {
                clear_error(page, id);
            } else {
                show_error(page, id, &result.errors);
            }
        }
        InputKind::Text | InputKind::Checkbox => {}
    }
}

/// React to a keystroke.
///
/// Any visible error is cleared straight away. Non-empty password inputs get
/// the [`VALID_CLASS`] marker while they pass validation. The register
/// password drives the strength meter whatever its current input type, so
/// the meter keeps scoring while the password is shown as plain text.
pub fn on_input<P: Page>(page: &mut P, ids: &ElementIds, id: &str) {
    clear_error(page, id);

    let value = page.value(id).unwrap_or_default();

    if id == ids.register_password {
        strength_meter::update(page, ids, &value);
    }

    if page.input_kind(id) != Some(InputKind::Password) || value.is_empty() {
        return;
    }

    if validate_password(&value).errors.is_empty() {
        page.add_class(id, VALID_CLASS);
    } else {
        page.remove_class(id, VALID_CLASS);
    }
}

/// Point password inputs at their help and error text for screen readers.
pub fn on_focus<P: Page>(page: &mut P, id: &str) {
    if page.input_kind(id) == Some(InputKind::Password) {
        page.set_attribute(id, "aria-describedby", &format!("{}Help {}Error", id, id));
    }
}

/// Show or hide the password behind a toggle button.
///
/// The button names its input in `data-target`; the eye icon classes live
/// on the button itself. Returns the input's new kind.
pub fn toggle_password_visibility<P: Page>(page: &mut P, button_id: &str) -> Option<InputKind> {
    let target = page.attribute(button_id, "data-target")?;

    let (kind, remove, add) = match page.input_kind(&target)? {
        InputKind::Password => (InputKind::Text, EYE_CLASS, EYE_SLASH_CLASS),
        _ => (InputKind::Password, EYE_SLASH_CLASS, EYE_CLASS),
    };

    page.set_input_kind(&target, kind);
    page.remove_class(button_id, remove);
    page.add_class(button_id, add);
    Some(kind)
}

fn is_name_field(id: &str) -> bool {
    id.contains("name") || id.contains("Name")
}
