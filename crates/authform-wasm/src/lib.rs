//! authform WASM
//!
//! WebAssembly bindings for the login/registration page.
//! The page script calls these for live feedback, using the same rules as
//! the headless controller.

use authform_core as validation;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Strength report returned to JavaScript
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    pub score: u8,
    pub level: validation::StrengthLevel,
    pub criteria: validation::Criteria,
    /// Fill bar width, e.g. "66%"
    pub width: String,
    pub feedback: String,
    /// Descriptions of the criteria still unmet
    pub missing: Vec<String>,
}

impl From<validation::PasswordStrength> for StrengthReport {
    fn from(strength: validation::PasswordStrength) -> Self {
        Self {
            score: strength.score,
            level: strength.level,
            criteria: strength.criteria,
            width: format!("{}%", strength.level.fill_percent()),
            feedback: strength.feedback(),
            missing: strength
                .unmet()
                .iter()
                .map(|criterion| criterion.describe().to_string())
                .collect(),
        }
    }
}

/// Score a password for the strength meter
///
/// # Example (JavaScript)
/// ```javascript
/// const report = evaluatePassword('TestPass123!');
/// // { score: 5, level: 'strong', width: '100%', ... }
/// ```
#[wasm_bindgen(js_name = evaluatePassword)]
pub fn evaluate_password(password: &str) -> Result<JsValue, JsValue> {
    let report = StrengthReport::from(validation::evaluate(password));
    Ok(serde_wasm_bindgen::to_value(&report)?)
}

/// Quick email validation
#[wasm_bindgen(js_name = validateEmail)]
pub fn validate_email(email: &str) -> bool {
    validation::validate_email(email)
}

/// Password validation
///
/// Returns `{ isValid, errors }`.
#[wasm_bindgen(js_name = validatePassword)]
pub fn validate_password(password: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&validation::validate_password(password))?)
}

/// Name validation
///
/// Returns `{ isValid, errors }`.
#[wasm_bindgen(js_name = validateName)]
pub fn validate_name(name: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&validation::validate_name(name))?)
}

/// Log a strength evaluation to the browser console
#[wasm_bindgen(js_name = logStrength)]
pub fn log_strength(password: &str) {
    let strength = validation::evaluate(password);
    web_sys::console::log_1(&JsValue::from_str(&format!(
        "Password strength: score={} level={:?}",
        strength.score, strength.level
    )));
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_email_validation() {
        assert!(validate_email("user@example.com"));
        assert!(!validate_email("not-an-email"));
    }

    #[wasm_bindgen_test]
    fn test_strength_report() {
        let report = StrengthReport::from(validation::evaluate("aB1"));
        assert_eq!(report.score, 3);
        assert_eq!(report.width, "66%");
        assert_eq!(report.missing, vec!["at least 8 characters", "a special character"]);
    }

    #[wasm_bindgen_test]
    fn test_empty_report() {
        let report = StrengthReport::from(validation::evaluate(""));
        assert_eq!(report.width, "0%");
        assert!(report.missing.is_empty());
    }
}
