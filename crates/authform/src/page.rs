//! Page surface the controller renders into
//!
//! [`Page`] is the element contract of the login/registration markup,
//! expressed as a capability trait instead of global document lookups.
//! Queries return `Option`, and mutators on an id the page does not have are
//! no-ops, so handlers decide explicitly what to do when a region is absent.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

/// `type` of an input element, as far as the controller cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Email,
    Password,
    Text,
    Checkbox,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Email => "email",
            InputKind::Password => "password",
            InputKind::Text => "text",
            InputKind::Checkbox => "checkbox",
        }
    }
}

/// Element and dialog operations the controller needs from a page.
pub trait Page {
    /// Whether an element with this id exists
    fn contains(&self, id: &str) -> bool;

    /// Ids of every element carrying `class`, in document order
    fn ids_with_class(&self, class: &str) -> Vec<String>;

    fn has_class(&self, id: &str, class: &str) -> bool;
    fn add_class(&mut self, id: &str, class: &str);
    fn remove_class(&mut self, id: &str, class: &str);

    fn attribute(&self, id: &str, name: &str) -> Option<String>;
    fn set_attribute(&mut self, id: &str, name: &str, value: &str);
    fn remove_attribute(&mut self, id: &str, name: &str);

    /// Text content (for buttons: the label)
    fn text(&self, id: &str) -> Option<String>;
    fn set_text(&mut self, id: &str, text: &str);

    /// Inline style property, e.g. `width` or `display`
    fn set_style(&mut self, id: &str, property: &str, value: &str);

    /// Current value of an input
    fn value(&self, id: &str) -> Option<String>;

    /// Checked state of a checkbox
    fn is_checked(&self, id: &str) -> Option<bool>;

    fn input_kind(&self, id: &str) -> Option<InputKind>;
    fn set_input_kind(&mut self, id: &str, kind: InputKind);

    /// URL fragment without the leading `#`
    fn fragment(&self) -> Option<String>;
    fn set_fragment(&mut self, fragment: &str);

    /// Blocking notification
    fn alert(&mut self, message: &str);

    /// Blocking yes/no question
    fn confirm(&mut self, message: &str) -> bool;
}

/// A single element of a [`MemoryPage`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
    pub styles: BTreeMap<String, String>,
    pub text: String,
    pub value: String,
    pub checked: bool,
    pub kind: Option<InputKind>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(kind: InputKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }
}

/// In-memory page for headless use and tests.
///
/// Dialogs are recorded; `confirm` answers come from a queue and default to
/// `false` once the queue is empty.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    elements: HashMap<String, Element>,
    order: Vec<String>,
    fragment: Option<String>,
    alerts: Vec<String>,
    confirms: Vec<String>,
    confirm_answers: VecDeque<bool>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an element. Document order follows first insertion.
    pub fn insert(&mut self, id: &str, element: Element) -> &mut Self {
        if self.elements.insert(id.to_string(), element).is_none() {
            self.order.push(id.to_string());
        }
        self
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.order.retain(|existing| existing != id);
        self.elements.remove(id)
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn set_value(&mut self, id: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.value = value.to_string();
        }
    }

    pub fn set_checked(&mut self, id: &str, checked: bool) {
        if let Some(element) = self.elements.get_mut(id) {
            element.checked = checked;
        }
    }

    pub fn style(&self, id: &str, property: &str) -> Option<&str> {
        self.elements.get(id).and_then(|e| e.style(property))
    }

    pub fn queue_confirm(&mut self, answer: bool) {
        self.confirm_answers.push_back(answer);
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn confirms(&self) -> &[String] {
        &self.confirms
    }

    /// The markup of the stock login/registration page.
    ///
    /// Login tab active, register password meter in its empty state, one
    /// button per social provider.
    pub fn login_page() -> Self {
        let mut page = Self::new();

        page.insert(
            "loginTab",
            Element::new()
                .with_class("tab-btn")
                .with_class("active")
                .with_attribute("data-tab", "login"),
        )
        .insert(
            "registerTab",
            Element::new()
                .with_class("tab-btn")
                .with_attribute("data-tab", "register"),
        )
        .insert(
            "login-form",
            Element::new().with_class("form-wrapper").with_class("active"),
        )
        .insert("register-form", Element::new().with_class("form-wrapper"));

        for (id, kind) in [
            ("loginEmail", InputKind::Email),
            ("loginPassword", InputKind::Password),
            ("registerName", InputKind::Text),
            ("registerEmail", InputKind::Email),
            ("registerPassword", InputKind::Password),
        ] {
            page.insert(id, Element::input(kind));
            page.insert(
                &format!("{}Error", id),
                Element::new().with_class("error-message"),
            );
        }
        page.insert("agreeTerms", Element::input(InputKind::Checkbox));

        for target in ["loginPassword", "registerPassword"] {
            page.insert(
                &format!("{}Toggle", target),
                Element::new()
                    .with_class("toggle-password")
                    .with_class("fa-eye")
                    .with_attribute("data-target", target),
            );
        }

        page.insert("strengthFill", Element::new())
            .insert("strengthFeedback", Element::new())
            .insert("weakLevel", Element::new())
            .insert("mediumLevel", Element::new())
            .insert("strongLevel", Element::new())
            .insert("loginSubmit", Element::new().with_text("Sign In"))
            .insert("registerSubmit", Element::new().with_text("Create Account"))
            .insert("continueAsGuest", Element::new().with_text("Continue as Guest"));

        for (id, class, label) in [
            ("googleLogin", "google-btn", "Google"),
            ("linkedinLogin", "linkedin-btn", "LinkedIn"),
            ("microsoftLogin", "microsoft-btn", "Microsoft"),
        ] {
            page.insert(
                id,
                Element::new()
                    .with_class("social-btn")
                    .with_class(class)
                    .with_text(label),
            );
        }

        page
    }

    fn with_element(&mut self, id: &str, f: impl FnOnce(&mut Element)) {
        if let Some(element) = self.elements.get_mut(id) {
            f(element);
        }
    }
}

impl Page for MemoryPage {
    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn ids_with_class(&self, class: &str) -> Vec<String> {
        self.order
            .iter()
            .filter(|id| self.has_class(id, class))
            .cloned()
            .collect()
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .map(|e| e.classes.contains(class))
            .unwrap_or(false)
    }

    fn add_class(&mut self, id: &str, class: &str) {
        self.with_element(id, |e| {
            e.classes.insert(class.to_string());
        });
    }

    fn remove_class(&mut self, id: &str, class: &str) {
        self.with_element(id, |e| {
            e.classes.remove(class);
        });
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.elements.get(id)?.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) {
        self.with_element(id, |e| {
            e.attributes.insert(name.to_string(), value.to_string());
        });
    }

    fn remove_attribute(&mut self, id: &str, name: &str) {
        self.with_element(id, |e| {
            e.attributes.remove(name);
        });
    }

    fn text(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|e| e.text.clone())
    }

    fn set_text(&mut self, id: &str, text: &str) {
        self.with_element(id, |e| e.text = text.to_string());
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) {
        self.with_element(id, |e| {
            e.styles.insert(property.to_string(), value.to_string());
        });
    }

    fn value(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|e| e.value.clone())
    }

    fn is_checked(&self, id: &str) -> Option<bool> {
        self.elements.get(id).map(|e| e.checked)
    }

    fn input_kind(&self, id: &str) -> Option<InputKind> {
        self.elements.get(id)?.kind
    }

    fn set_input_kind(&mut self, id: &str, kind: InputKind) {
        self.with_element(id, |e| e.kind = Some(kind));
    }

    fn fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn set_fragment(&mut self, fragment: &str) {
        self.fragment = Some(fragment.trim_start_matches('#').to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirms.push(message.to_string());
        self.confirm_answers.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutating_missing_element_is_noop() {
        let mut page = MemoryPage::new();
        page.add_class("ghost", "active");
        page.set_text("ghost", "boo");
        assert!(!page.contains("ghost"));
        assert_eq!(page.text("ghost"), None);
    }

    #[test]
    fn test_ids_with_class_keeps_document_order() {
        let page = MemoryPage::login_page();
        assert_eq!(page.ids_with_class("tab-btn"), vec!["loginTab", "registerTab"]);
        assert_eq!(
            page.ids_with_class("social-btn"),
            vec!["googleLogin", "linkedinLogin", "microsoftLogin"]
        );
    }

    #[test]
    fn test_confirm_defaults_to_cancel() {
        let mut page = MemoryPage::new();
        page.queue_confirm(true);
        assert!(page.confirm("first?"));
        assert!(!page.confirm("second?"));
        assert_eq!(page.confirms(), ["first?", "second?"]);
    }

    #[test]
    fn test_fragment_strips_hash() {
        let mut page = MemoryPage::new();
        page.set_fragment("#register");
        assert_eq!(page.fragment().as_deref(), Some("register"));
    }
}
