/// Tab selection against the URL fragment
///
/// Covers restoring the active tab on load and writing the fragment back
/// when a tab button is clicked.

use authform::{
    AuthFormConfig, FormController, Handled, MemoryPage, Page, SimulatedLatency, Tab, UiEvent,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn controller() -> FormController<SimulatedLatency> {
    FormController::new(AuthFormConfig::default(), SimulatedLatency::instant())
}

fn active(page: &MemoryPage) -> Vec<String> {
    ["loginTab", "registerTab", "login-form", "register-form"]
        .into_iter()
        .filter(|id| page.has_class(id, "active"))
        .map(String::from)
        .collect()
}

#[test]
fn test_register_fragment_activates_register_pair_only() {
    let mut page = MemoryPage::login_page();
    page.set_fragment("register");

    let restored = controller().init(&mut page);

    assert_eq!(restored, Some(Tab::Register));
    assert_eq!(active(&page), vec!["registerTab", "register-form"]);
}

#[rstest]
#[case(None)]
#[case(Some("signup"))]
#[case(Some("REGISTER"))]
#[case(Some(""))]
fn test_unrecognised_fragment_keeps_default(#[case] fragment: Option<&str>) {
    let mut page = MemoryPage::login_page();
    if let Some(fragment) = fragment {
        page.set_fragment(fragment);
    }

    assert_eq!(controller().init(&mut page), None);
    assert_eq!(active(&page), vec!["loginTab", "login-form"]);
}

#[test]
fn test_init_resets_strength_meter() {
    let mut page = MemoryPage::login_page();
    controller().init(&mut page);

    assert_eq!(page.style("strengthFill", "width"), Some("0%"));
    assert_eq!(
        page.text("strengthFeedback").as_deref(),
        Some("Enter password to see strength")
    );
}

#[tokio::test]
async fn test_tab_click_switches_and_writes_fragment() {
    let mut page = MemoryPage::login_page();
    let controller = controller();

    let handled = controller
        .handle(&mut page, UiEvent::TabClicked { button_id: "registerTab".into() })
        .await;

    assert_eq!(handled, Handled::TabActivated(Tab::Register));
    assert_eq!(active(&page), vec!["registerTab", "register-form"]);
    assert_eq!(page.fragment().as_deref(), Some("register"));

    controller
        .handle(&mut page, UiEvent::TabClicked { button_id: "loginTab".into() })
        .await;

    assert_eq!(active(&page), vec!["loginTab", "login-form"]);
    assert_eq!(page.fragment().as_deref(), Some("login"));
}

#[tokio::test]
async fn test_tab_click_without_form_still_updates_fragment() {
    let mut page = MemoryPage::login_page();
    page.remove("register-form");

    controller()
        .handle(&mut page, UiEvent::TabClicked { button_id: "registerTab".into() })
        .await;

    assert_eq!(active(&page), vec!["registerTab"]);
    assert_eq!(page.fragment().as_deref(), Some("register"));
}
