//! Login/register tab switching, kept in sync with the URL fragment

use std::fmt;

use crate::page::Page;

/// Class shared by every tab button
pub const TAB_BUTTON_CLASS: &str = "tab-btn";
/// Class shared by every form wrapper
pub const FORM_WRAPPER_CLASS: &str = "form-wrapper";
/// Attribute on a tab button naming its tab
pub const TAB_ATTRIBUTE: &str = "data-tab";
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Login,
    Register,
}

impl Tab {
    /// Parse a URL fragment, with or without the leading `#`.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        match fragment.strip_prefix('#').unwrap_or(fragment) {
            "login" => Some(Tab::Login),
            "register" => Some(Tab::Register),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Tab::Login => "login",
            Tab::Register => "register",
        }
    }

    /// Id of the form wrapper shown for this tab
    pub fn form_id(&self) -> String {
        format!("{}-form", self.key())
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Activates tab/form pairs on a page.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabController;

impl TabController {
    pub fn new() -> Self {
        Self
    }

    /// Show the tab named by the URL fragment, if any.
    ///
    /// Returns the tab that was activated. Nothing changes when the fragment
    /// is absent or unknown, when the page has no tab buttons or form
    /// wrappers, or when the named tab button or form is missing.
    pub fn restore_from_fragment<P: Page>(&self, page: &mut P) -> Option<Tab> {
        let tab = page.fragment().as_deref().and_then(Tab::from_fragment)?;

        let buttons = page.ids_with_class(TAB_BUTTON_CLASS);
        let wrappers = page.ids_with_class(FORM_WRAPPER_CLASS);
        if buttons.is_empty() || wrappers.is_empty() {
            tracing::debug!(%tab, "no tab markup on page, keeping default tab");
            return None;
        }

        deactivate_all(page, &buttons, &wrappers);

        let button = find_tab_button(page, &buttons, tab)?;
        let form = tab.form_id();
        if !page.contains(&form) {
            return None;
        }

        page.add_class(&button, ACTIVE_CLASS);
        page.add_class(&form, ACTIVE_CLASS);
        tracing::debug!(%tab, "restored tab from fragment");
        Some(tab)
    }

    /// Handle a click on a tab button.
    ///
    /// The clicked button is activated along with its form (when the form
    /// exists) and the tab key is written into the fragment. A button
    /// without a recognised `data-tab` is ignored.
    pub fn activate<P: Page>(&self, page: &mut P, button_id: &str) -> Option<Tab> {
        let tab = page
            .attribute(button_id, TAB_ATTRIBUTE)
            .as_deref()
            .and_then(Tab::from_fragment)?;

        let buttons = page.ids_with_class(TAB_BUTTON_CLASS);
        let wrappers = page.ids_with_class(FORM_WRAPPER_CLASS);
        deactivate_all(page, &buttons, &wrappers);

        page.add_class(button_id, ACTIVE_CLASS);
        let form = tab.form_id();
        if page.contains(&form) {
            page.add_class(&form, ACTIVE_CLASS);
        } else {
            tracing::warn!(%tab, form = %form, "tab has no form wrapper");
        }

        page.set_fragment(tab.key());
        Some(tab)
    }

    /// The tab whose button is currently marked active.
    pub fn active<P: Page>(&self, page: &P) -> Option<Tab> {
        page.ids_with_class(TAB_BUTTON_CLASS)
            .into_iter()
            .filter(|id| page.has_class(id, ACTIVE_CLASS))
            .find_map(|id| {
                page.attribute(&id, TAB_ATTRIBUTE)
                    .as_deref()
                    .and_then(Tab::from_fragment)
            })
    }
}

fn deactivate_all<P: Page>(page: &mut P, buttons: &[String], wrappers: &[String]) {
    for id in buttons.iter().chain(wrappers) {
        page.remove_class(id, ACTIVE_CLASS);
    }
}

fn find_tab_button<P: Page>(page: &P, buttons: &[String], tab: Tab) -> Option<String> {
    buttons
        .iter()
        .find(|id| page.attribute(id, TAB_ATTRIBUTE).as_deref() == Some(tab.key()))
        .cloned()
}
