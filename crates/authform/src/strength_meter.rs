//! Renders a password strength score onto the page

use authform_core::{evaluate, PasswordStrength, StrengthLevel};

use crate::config::ElementIds;
use crate::page::Page;
use crate::tabs::ACTIVE_CLASS;

const LEVEL_CLASSES: [&str; 3] = ["weak", "medium", "strong"];

/// Score `password` and update the meter. Returns the computed strength.
pub fn update<P: Page>(page: &mut P, ids: &ElementIds, password: &str) -> PasswordStrength {
    let strength = evaluate(password);
    render(page, ids, &strength);

    if strength.level != StrengthLevel::None {
        tracing::debug!(
            score = strength.score,
            level = ?strength.level,
            criteria = ?strength.criteria,
            "password strength"
        );
    }

    strength
}

/// Apply an already computed strength to the fill bar, level markers and
/// feedback text. Each of those regions is optional.
pub fn render<P: Page>(page: &mut P, ids: &ElementIds, strength: &PasswordStrength) {
    let level = strength.level;

    let markers = [
        (&ids.weak_level, StrengthLevel::Weak),
        (&ids.medium_level, StrengthLevel::Medium),
        (&ids.strong_level, StrengthLevel::Strong),
    ];
    // Markers are cumulative: a medium password lights weak and medium
    for (id, threshold) in markers {
        if level >= threshold {
            page.add_class(id, ACTIVE_CLASS);
        } else {
            page.remove_class(id, ACTIVE_CLASS);
        }
    }

    if page.contains(&ids.strength_fill) {
        for class in LEVEL_CLASSES {
            page.remove_class(&ids.strength_fill, class);
        }
        if let Some(class) = level.as_class() {
            page.add_class(&ids.strength_fill, class);
        }
        page.set_style(
            &ids.strength_fill,
            "width",
            &format!("{}%", level.fill_percent()),
        );
    }

    page.set_text(&ids.strength_feedback, &strength.feedback());
}
