//! Read-only profile records consumed by the composer.
//!
//! These mirror what the profile store hands over per request; the composer
//! never mutates or persists them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's profile as read from the profile store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub bio: String,
    pub mission_statement: String,
    pub skills: Vec<String>,
    /// The user's selected content mode key (e.g. `"business"`).
    pub content_mode: String,
    /// Subscription tier key; unknown values resolve to `free`.
    pub subscription_tier: String,
    /// Custom prompt templates owned by the user, already filtered to this
    /// user by the store.
    pub prompt_templates: Vec<CustomTemplate>,
}

impl UserProfile {
    /// First active custom template bound to `content_mode`, if any.
    ///
    /// At most one active template per (user, mode) pair is consulted; extra
    /// matches are ignored.
    #[must_use]
    pub fn active_template_for(&self, content_mode: &str) -> Option<&CustomTemplate> {
        self.prompt_templates
            .iter()
            .find(|template| template.is_active && template.content_mode == content_mode)
    }

    /// Skills joined for placeholder substitution.
    #[must_use]
    pub fn skills_joined(&self) -> String {
        self.skills.join(", ")
    }
}

/// A user-authored prompt template, tier-gated and scoped to one mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomTemplate {
    pub content_mode: String,
    pub prompt_text: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(mode: &str, active: bool, text: &str) -> CustomTemplate {
        CustomTemplate {
            content_mode: mode.to_string(),
            prompt_text: text.to_string(),
            is_active: active,
            created_at: Utc::now(),
        }
    }

    fn profile_with(templates: Vec<CustomTemplate>) -> UserProfile {
        UserProfile {
            name: "Avery".to_string(),
            bio: String::new(),
            mission_statement: String::new(),
            skills: vec![],
            content_mode: "business".to_string(),
            subscription_tier: "pro".to_string(),
            prompt_templates: templates,
        }
    }

    #[test]
    fn inactive_templates_are_skipped() {
        let profile = profile_with(vec![
            template("business", false, "inactive"),
            template("business", true, "active"),
        ]);
        let found = profile.active_template_for("business").expect("template");
        assert_eq!(found.prompt_text, "active");
    }

    #[test]
    fn templates_are_scoped_by_mode() {
        let profile = profile_with(vec![template("influencer", true, "wrong mode")]);
        assert!(profile.active_template_for("business").is_none());
    }

    #[test]
    fn first_active_match_wins() {
        let profile = profile_with(vec![
            template("business", true, "first"),
            template("business", true, "second"),
        ]);
        let found = profile.active_template_for("business").expect("template");
        assert_eq!(found.prompt_text, "first");
    }
}
