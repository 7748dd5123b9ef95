//! Subscription tier registry.
//!
//! Maps a tier key (`free`, `pro`, `ultimate`) to its feature flags, usage
//! limits, and image rules. The table is static data: unknown or empty keys
//! resolve to the `free` definition so tier lookups can never fail.

use serde::Serialize;

use crate::modes;

/// A monthly generation allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Quota {
    Limited(u32),
    Unlimited,
}

impl Quota {
    /// Returns `true` if `used` generations still leave room this month.
    #[must_use]
    pub fn allows(&self, used: u32) -> bool {
        match self {
            Quota::Limited(limit) => used < *limit,
            Quota::Unlimited => true,
        }
    }
}

/// Feature keys a tier may grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Feature {
    UseAi,
    EditPrompts,
    AddContentModes,
    SchedulePosts,
    UseAnalytics,
    PlatformVariants,
    UseOwnApiKeys,
    Autopilot,
    InteractiveChat,
    UploadImages,
    GenerateLinkedinBio,
    WhiteLabel,
    MonthlyGenerations,
    AvailablePlatforms,
}

/// The value a tier's feature table maps a [`Feature`] to.
///
/// Only `Bool(true)`, `Unlimited`, and `All` count as "granted" — numeric
/// counts and `Bool(false)` do not, even though a count is a nonzero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeatureValue {
    Bool(bool),
    Count(u32),
    Unlimited,
    All,
}

/// Rate limits for the AI autopilot (ultimate tier only).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AutopilotLimits {
    pub posts_per_day: u32,
    pub min_interval_hours: u32,
    pub max_tokens_per_day: u32,
}

/// Per-tier image upload rules.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ImageRules {
    pub max_size_mb: u32,
    pub max_per_post: u32,
    pub allowed_formats: &'static [&'static str],
    pub uploads_enabled: bool,
}

/// Which content modes or platforms a tier may use.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum Availability {
    All,
    Only(&'static [&'static str]),
}

impl Availability {
    /// Returns `true` if `key` is within this availability set.
    #[must_use]
    pub fn permits(&self, key: &str) -> bool {
        match self {
            Availability::All => true,
            Availability::Only(keys) => keys.contains(&key),
        }
    }
}

/// One subscription tier's complete definition.
#[derive(Debug, Serialize)]
pub struct TierDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub generation_quota: Quota,
    pub features: &'static [(Feature, FeatureValue)],
    /// `None` means the tier carries no cap for that rate.
    pub posts_per_hour: Option<u32>,
    pub scheduled_posts_per_day: Option<u32>,
    pub concurrent_campaigns: Option<u32>,
    pub autopilot: Option<AutopilotLimits>,
    pub image_rules: ImageRules,
    pub content_modes: Availability,
    pub platforms: Availability,
}

impl TierDefinition {
    /// Returns `true` iff this tier's feature table maps `feature` to
    /// `Bool(true)`, `Unlimited`, or `All`. Absent keys, `Bool(false)`, and
    /// numeric counts are all `false`.
    #[must_use]
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features
            .iter()
            .find(|(key, _)| *key == feature)
            .is_some_and(|(_, value)| {
                matches!(
                    value,
                    FeatureValue::Bool(true) | FeatureValue::Unlimited | FeatureValue::All
                )
            })
    }

    /// Content-mode keys this tier may use, resolving `All` against the
    /// mode registry.
    #[must_use]
    pub fn available_content_modes(&self) -> Vec<&'static str> {
        match self.content_modes {
            Availability::All => modes::mode_keys(),
            Availability::Only(keys) => keys.to_vec(),
        }
    }
}

/// All tier definitions, ordered free → ultimate.
pub const TIERS: &[TierDefinition] = &[FREE, PRO, ULTIMATE];

const FREE: TierDefinition = TierDefinition {
    key: "free",
    name: "Free",
    generation_quota: Quota::Limited(10),
    features: &[
        (Feature::UseAi, FeatureValue::Bool(true)),
        (Feature::EditPrompts, FeatureValue::Bool(false)),
        (Feature::AddContentModes, FeatureValue::Bool(false)),
        (Feature::SchedulePosts, FeatureValue::Bool(true)),
        (Feature::UseAnalytics, FeatureValue::Bool(false)),
        (Feature::UploadImages, FeatureValue::Bool(true)),
        (Feature::GenerateLinkedinBio, FeatureValue::Bool(false)),
        (Feature::MonthlyGenerations, FeatureValue::Count(10)),
        (Feature::AvailablePlatforms, FeatureValue::All),
    ],
    posts_per_hour: Some(1),
    scheduled_posts_per_day: Some(1),
    concurrent_campaigns: Some(1),
    autopilot: None,
    image_rules: ImageRules {
        max_size_mb: 8,
        max_per_post: 1,
        allowed_formats: &["jpg", "jpeg", "png"],
        uploads_enabled: true,
    },
    content_modes: Availability::Only(&["business", "influencer", "personal"]),
    platforms: Availability::All,
};

const PRO: TierDefinition = TierDefinition {
    key: "pro",
    name: "Pro",
    generation_quota: Quota::Limited(100),
    features: &[
        (Feature::UseAi, FeatureValue::Bool(true)),
        (Feature::EditPrompts, FeatureValue::Bool(true)),
        (Feature::AddContentModes, FeatureValue::Bool(false)),
        (Feature::SchedulePosts, FeatureValue::Bool(true)),
        (Feature::UseAnalytics, FeatureValue::Bool(true)),
        (Feature::PlatformVariants, FeatureValue::Bool(true)),
        (Feature::UploadImages, FeatureValue::Bool(true)),
        (Feature::GenerateLinkedinBio, FeatureValue::Bool(true)),
        (Feature::MonthlyGenerations, FeatureValue::Count(100)),
        (Feature::AvailablePlatforms, FeatureValue::All),
    ],
    posts_per_hour: Some(5),
    scheduled_posts_per_day: Some(10),
    concurrent_campaigns: Some(3),
    autopilot: None,
    image_rules: ImageRules {
        max_size_mb: 15,
        max_per_post: 4,
        allowed_formats: &["jpg", "jpeg", "png", "gif", "webp"],
        uploads_enabled: true,
    },
    content_modes: Availability::All,
    platforms: Availability::All,
};

const ULTIMATE: TierDefinition = TierDefinition {
    key: "ultimate",
    name: "Ultimate",
    generation_quota: Quota::Unlimited,
    features: &[
        (Feature::UseAi, FeatureValue::Bool(true)),
        (Feature::EditPrompts, FeatureValue::Bool(true)),
        (Feature::AddContentModes, FeatureValue::Bool(true)),
        (Feature::SchedulePosts, FeatureValue::Bool(true)),
        (Feature::UseAnalytics, FeatureValue::Bool(true)),
        (Feature::PlatformVariants, FeatureValue::Bool(true)),
        (Feature::UseOwnApiKeys, FeatureValue::Bool(true)),
        (Feature::Autopilot, FeatureValue::Bool(true)),
        (Feature::InteractiveChat, FeatureValue::Bool(true)),
        (Feature::UploadImages, FeatureValue::Bool(true)),
        (Feature::GenerateLinkedinBio, FeatureValue::Bool(true)),
        (Feature::WhiteLabel, FeatureValue::Bool(false)),
        (Feature::MonthlyGenerations, FeatureValue::Unlimited),
        (Feature::AvailablePlatforms, FeatureValue::All),
    ],
    posts_per_hour: None,
    scheduled_posts_per_day: None,
    concurrent_campaigns: None,
    autopilot: Some(AutopilotLimits {
        posts_per_day: 6,
        min_interval_hours: 2,
        max_tokens_per_day: 5000,
    }),
    image_rules: ImageRules {
        max_size_mb: 50,
        max_per_post: 20,
        allowed_formats: &["jpg", "jpeg", "png", "gif", "webp", "svg", "bmp", "tiff"],
        uploads_enabled: true,
    },
    content_modes: Availability::All,
    platforms: Availability::All,
};

/// Looks up a tier definition by key.
///
/// Unknown or empty keys resolve to the `free` definition — tier lookups
/// never fail.
#[must_use]
pub fn definition_for(key: &str) -> &'static TierDefinition {
    TIERS
        .iter()
        .find(|tier| tier.key == key)
        .unwrap_or(&FREE)
}

/// Outcome of validating an image upload against a tier's rules.
#[derive(Debug)]
pub struct ImageValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Validates an upload's size and extension against the tier's image rules.
///
/// Tiers without upload rights are rejected outright; otherwise every
/// violated rule contributes one user-facing error string.
#[must_use]
pub fn validate_image_upload(
    tier: &TierDefinition,
    filename: &str,
    size_bytes: u64,
) -> ImageValidation {
    let rules = &tier.image_rules;

    if !rules.uploads_enabled {
        return ImageValidation {
            valid: false,
            errors: vec!["Image uploads not available in your plan".to_string()],
        };
    }

    let mut errors = Vec::new();

    #[allow(clippy::cast_precision_loss)]
    let size_mb = size_bytes as f64 / (1024.0 * 1024.0);
    if size_mb > f64::from(rules.max_size_mb) {
        errors.push(format!(
            "Image too large ({size_mb:.1}MB). Maximum: {}MB",
            rules.max_size_mb
        ));
    }

    let extension = filename
        .rsplit('.')
        .next()
        .filter(|ext| *ext != filename)
        .unwrap_or("")
        .to_lowercase();
    if !rules.allowed_formats.contains(&extension.as_str()) {
        errors.push(format!(
            "Format '{extension}' not supported. Allowed: {}",
            rules.allowed_formats.join(", ")
        ));
    }

    ImageValidation {
        valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_resolves_to_free() {
        assert_eq!(definition_for("platinum").key, "free");
        assert_eq!(definition_for("").key, "free");
    }

    #[test]
    fn known_keys_resolve_to_their_tier() {
        assert_eq!(definition_for("free").key, "free");
        assert_eq!(definition_for("pro").key, "pro");
        assert_eq!(definition_for("ultimate").key, "ultimate");
    }

    #[test]
    fn has_feature_accepts_true() {
        assert!(definition_for("free").has_feature(Feature::UseAi));
    }

    #[test]
    fn has_feature_rejects_false() {
        assert!(!definition_for("free").has_feature(Feature::EditPrompts));
        assert!(!definition_for("ultimate").has_feature(Feature::WhiteLabel));
    }

    #[test]
    fn has_feature_rejects_absent_keys() {
        // Free has no autopilot entry at all.
        assert!(!definition_for("free").has_feature(Feature::Autopilot));
        assert!(!definition_for("free").has_feature(Feature::UseOwnApiKeys));
    }

    #[test]
    fn has_feature_rejects_numeric_counts() {
        // A 10-generation quota is a count, not a grant.
        assert!(!definition_for("free").has_feature(Feature::MonthlyGenerations));
        assert!(!definition_for("pro").has_feature(Feature::MonthlyGenerations));
    }

    #[test]
    fn has_feature_accepts_unlimited_and_all() {
        assert!(definition_for("ultimate").has_feature(Feature::MonthlyGenerations));
        assert!(definition_for("free").has_feature(Feature::AvailablePlatforms));
    }

    #[test]
    fn quota_allows_under_limit_only() {
        assert!(Quota::Limited(10).allows(9));
        assert!(!Quota::Limited(10).allows(10));
        assert!(Quota::Unlimited.allows(1_000_000));
    }

    #[test]
    fn free_lists_explicit_content_modes() {
        let modes = definition_for("free").available_content_modes();
        assert_eq!(modes, vec!["business", "influencer", "personal"]);
    }

    #[test]
    fn pro_resolves_all_content_modes_via_registry() {
        let modes = definition_for("pro").available_content_modes();
        assert!(modes.contains(&"business"));
        assert!(modes.contains(&"influencer"));
        assert!(modes.contains(&"personal"));
    }

    #[test]
    fn image_validation_accepts_within_limits() {
        let result = validate_image_upload(definition_for("free"), "photo.png", 2 * 1024 * 1024);
        assert!(result.valid, "errors: {:?}", result.errors);
    }

    #[test]
    fn image_validation_rejects_oversize() {
        let result = validate_image_upload(definition_for("free"), "photo.png", 9 * 1024 * 1024);
        assert!(!result.valid);
        assert!(result.errors[0].contains("too large"), "{:?}", result.errors);
    }

    #[test]
    fn image_validation_rejects_disallowed_format() {
        let result = validate_image_upload(definition_for("free"), "vector.svg", 1024);
        assert!(!result.valid);
        assert!(
            result.errors[0].contains("'svg' not supported"),
            "{:?}",
            result.errors
        );
    }

    #[test]
    fn image_validation_uppercase_extension_is_normalized() {
        let result = validate_image_upload(definition_for("free"), "PHOTO.JPG", 1024);
        assert!(result.valid, "errors: {:?}", result.errors);
    }

    #[test]
    fn image_validation_missing_extension_is_rejected() {
        let result = validate_image_upload(definition_for("free"), "photo", 1024);
        assert!(!result.valid);
    }

    #[test]
    fn ultimate_allows_svg() {
        let result = validate_image_upload(definition_for("ultimate"), "vector.svg", 1024);
        assert!(result.valid, "errors: {:?}", result.errors);
    }

    #[test]
    fn ultimate_carries_autopilot_limits() {
        let autopilot = definition_for("ultimate").autopilot.expect("autopilot limits");
        assert_eq!(autopilot.posts_per_day, 6);
        assert_eq!(autopilot.min_interval_hours, 2);
        assert_eq!(autopilot.max_tokens_per_day, 5000);
        assert!(definition_for("free").autopilot.is_none());
    }

    #[test]
    fn ultimate_has_no_rate_caps() {
        let ultimate = definition_for("ultimate");
        assert!(ultimate.posts_per_hour.is_none());
        assert!(ultimate.scheduled_posts_per_day.is_none());
        assert_eq!(definition_for("free").posts_per_hour, Some(1));
    }
}
