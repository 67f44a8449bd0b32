//! Inline error presentation next to form fields
//!
//! Each field `x` owns an error region with id `xError`. When that region is
//! absent the field has nowhere to show errors and every call is a no-op.

use crate::page::Page;

/// Class carried by every error region
pub const ERROR_REGION_CLASS: &str = "error-message";
/// Class marking an input with a visible error
pub const INPUT_ERROR_CLASS: &str = "error";
/// Separator between messages shown together
pub const MESSAGE_SEPARATOR: &str = ". ";

pub fn error_region_id(field_id: &str) -> String {
    format!("{}Error", field_id)
}

/// Show `messages` under `field_id` and flag the input as invalid.
pub fn show_error<P, S>(page: &mut P, field_id: &str, messages: &[S])
where
    P: Page,
    S: AsRef<str>,
{
    let region = error_region_id(field_id);
    if !page.contains(&region) {
        tracing::warn!(field = field_id, "no error region for field");
        return;
    }

    let text = messages
        .iter()
        .map(|message| message.as_ref())
        .collect::<Vec<&str>>()
        .join(MESSAGE_SEPARATOR);

    page.set_text(&region, &text);
    page.set_style(&region, "display", "block");
    page.set_attribute(&region, "role", "alert");

    if page.contains(field_id) {
        page.add_class(field_id, INPUT_ERROR_CLASS);
        page.set_attribute(field_id, "aria-invalid", "true");
        page.set_attribute(field_id, "aria-describedby", &region);
    }
}

/// Undo [`show_error`] for one field.
pub fn clear_error<P: Page>(page: &mut P, field_id: &str) {
    let region = error_region_id(field_id);
    if !page.contains(&region) {
        return;
    }

    page.set_style(&region, "display", "none");
    page.set_text(&region, "");
    page.remove_attribute(&region, "role");

    if page.contains(field_id) {
        page.remove_class(field_id, INPUT_ERROR_CLASS);
        page.set_attribute(field_id, "aria-invalid", "false");
        page.remove_attribute(field_id, "aria-describedby");
    }
}

/// Blank and hide every error region on the page.
///
/// Input flags are left as they are; only the regions are reset.
pub fn clear_all_errors<P: Page>(page: &mut P) {
    for region in page.ids_with_class(ERROR_REGION_CLASS) {
        page.set_text(&region, "");
        page.set_style(&region, "display", "none");
    }
}
