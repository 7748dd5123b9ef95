//! Social platform registry.
//!
//! Single source of truth for per-platform posting constraints: character
//! and hashtag limits, image specs, and the style hints fed to the AI
//! composer. Lookups are case-insensitive and unknown keys return `None` —
//! callers fall back to [`FALLBACK_CONTENT_HINTS`] instead of erroring.

use serde::Serialize;

use crate::tiers::TierDefinition;

/// Character limits for a platform's post body.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CharLimits {
    pub min: u32,
    pub max: u32,
    /// Sweet spot the AI should aim for, in words.
    pub optimal: u32,
}

/// How many hashtags a post should carry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HashtagLimits {
    pub min: u32,
    pub max: u32,
}

/// Platform-side image constraints, independent of the user's tier.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ImageSpecs {
    pub max_size_mb: u32,
    pub max_count: u32,
    pub formats: &'static [&'static str],
}

/// Style hints rendered into the AI system prompt.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContentStyle {
    pub tone: &'static str,
    pub focus: &'static str,
    pub engagement: &'static str,
    pub hashtag_style: &'static str,
}

/// One platform's registry entry.
#[derive(Debug, Serialize)]
pub struct PlatformDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub enabled: bool,
    pub oauth_implemented: bool,
    pub posting_implemented: bool,
    pub char_limits: CharLimits,
    pub hashtag_limits: HashtagLimits,
    pub image_specs: ImageSpecs,
    pub content_style: ContentStyle,
}

/// All registered platforms.
pub const PLATFORMS: &[PlatformDefinition] = &[
    PlatformDefinition {
        key: "linkedin",
        name: "LinkedIn",
        enabled: true,
        oauth_implemented: true,
        posting_implemented: true,
        char_limits: CharLimits {
            min: 150,
            max: 3000,
            optimal: 300,
        },
        hashtag_limits: HashtagLimits { min: 2, max: 5 },
        image_specs: ImageSpecs {
            max_size_mb: 25,
            max_count: 1,
            formats: &["jpg", "jpeg", "png", "gif"],
        },
        content_style: ContentStyle {
            tone: "Professional but authentic",
            focus: "Business insights and professional growth",
            engagement: "End with thoughtful questions",
            hashtag_style: "Professional industry tags",
        },
    },
    PlatformDefinition {
        key: "facebook",
        name: "Facebook",
        enabled: true,
        oauth_implemented: false,
        posting_implemented: false,
        char_limits: CharLimits {
            min: 100,
            max: 63206,
            optimal: 250,
        },
        hashtag_limits: HashtagLimits { min: 1, max: 3 },
        image_specs: ImageSpecs {
            max_size_mb: 25,
            max_count: 10,
            formats: &["jpg", "jpeg", "png", "gif"],
        },
        content_style: ContentStyle {
            tone: "Conversational and community-focused",
            focus: "Stories and community building",
            engagement: "Encourage discussion and shares",
            hashtag_style: "Broad community tags",
        },
    },
    PlatformDefinition {
        key: "instagram",
        name: "Instagram",
        enabled: true,
        oauth_implemented: false,
        posting_implemented: false,
        char_limits: CharLimits {
            min: 50,
            max: 2200,
            optimal: 150,
        },
        hashtag_limits: HashtagLimits { min: 5, max: 30 },
        image_specs: ImageSpecs {
            max_size_mb: 25,
            max_count: 10,
            formats: &["jpg", "jpeg", "png"],
        },
        content_style: ContentStyle {
            tone: "Visual-friendly and engaging",
            focus: "Strong hooks and visual storytelling",
            engagement: "Call-to-action and interaction prompts",
            hashtag_style: "Mix of niche and trending tags",
        },
    },
    PlatformDefinition {
        key: "tiktok",
        name: "TikTok",
        enabled: true,
        oauth_implemented: false,
        posting_implemented: false,
        char_limits: CharLimits {
            min: 30,
            max: 2200,
            optimal: 100,
        },
        hashtag_limits: HashtagLimits { min: 3, max: 10 },
        image_specs: ImageSpecs {
            max_size_mb: 25,
            max_count: 1,
            formats: &["jpg", "jpeg", "png", "gif", "mp4"],
        },
        content_style: ContentStyle {
            tone: "Casual, authentic, and trendy",
            focus: "Entertainment and quick tips",
            engagement: "Hook viewers in first 3 seconds",
            hashtag_style: "Trending and viral hashtags",
        },
    },
    PlatformDefinition {
        key: "youtube",
        name: "YouTube",
        enabled: true,
        oauth_implemented: false,
        posting_implemented: false,
        char_limits: CharLimits {
            min: 100,
            max: 5000,
            optimal: 500,
        },
        hashtag_limits: HashtagLimits { min: 3, max: 15 },
        image_specs: ImageSpecs {
            max_size_mb: 25,
            max_count: 1,
            formats: &["jpg", "jpeg", "png"],
        },
        content_style: ContentStyle {
            tone: "Descriptive and keyword-rich",
            focus: "SEO optimization and discoverability",
            engagement: "Include timestamps and links",
            hashtag_style: "SEO-focused keyword tags",
        },
    },
    PlatformDefinition {
        key: "twitter",
        name: "Twitter/X",
        enabled: true,
        oauth_implemented: false,
        posting_implemented: false,
        char_limits: CharLimits {
            min: 10,
            max: 280,
            optimal: 200,
        },
        hashtag_limits: HashtagLimits { min: 1, max: 2 },
        image_specs: ImageSpecs {
            max_size_mb: 5,
            max_count: 4,
            formats: &["jpg", "jpeg", "png", "gif"],
        },
        content_style: ContentStyle {
            tone: "Concise and punchy",
            focus: "Quick thoughts and commentary",
            engagement: "Encourage retweets and replies",
            hashtag_style: "Trending topics and keywords",
        },
    },
];

/// The style block used when a platform has no registry entry.
pub const FALLBACK_CONTENT_HINTS: &str = "CONTENT STYLE:\n\
     - Engaging and platform-neutral\n\
     - Universal appeal and readability\n\
     - Include 2-5 relevant hashtags\n\
     - Aim for 250 words";

impl PlatformDefinition {
    /// Renders the "CONTENT STYLE" block fed to the AI for this platform.
    #[must_use]
    pub fn content_hints(&self) -> String {
        format!(
            "CONTENT STYLE:\n- {}\n- {}\n- {}\n- Include {}-{} relevant hashtags\n- Aim for {} words ({}-{} range)",
            self.content_style.tone,
            self.content_style.focus,
            self.content_style.engagement,
            self.hashtag_limits.min,
            self.hashtag_limits.max,
            self.char_limits.optimal,
            self.char_limits.min,
            self.char_limits.max,
        )
    }

    /// Effective image limits for a user: elementwise minimum of the tier's
    /// rules and this platform's specs; formats are the intersection.
    #[must_use]
    pub fn image_limits_for(&self, tier: &TierDefinition) -> EffectiveImageLimits {
        let tier_rules = &tier.image_rules;
        EffectiveImageLimits {
            max_size_mb: tier_rules.max_size_mb.min(self.image_specs.max_size_mb),
            max_count: tier_rules.max_per_post.min(self.image_specs.max_count),
            allowed_formats: tier_rules
                .allowed_formats
                .iter()
                .copied()
                .filter(|format| self.image_specs.formats.contains(format))
                .collect(),
        }
    }
}

/// Tier∧platform image limits, computed per request.
#[derive(Debug, Serialize)]
pub struct EffectiveImageLimits {
    pub max_size_mb: u32,
    pub max_count: u32,
    pub allowed_formats: Vec<&'static str>,
}

/// Finds a platform by key, case-insensitively. Unknown keys return `None`.
#[must_use]
pub fn definition_for(key: &str) -> Option<&'static PlatformDefinition> {
    PLATFORMS
        .iter()
        .find(|platform| platform.key.eq_ignore_ascii_case(key))
}

/// Returns `true` if the platform exists and is enabled.
#[must_use]
pub fn is_supported(key: &str) -> bool {
    definition_for(key).is_some_and(|platform| platform.enabled)
}

/// All enabled platforms.
#[must_use]
pub fn enabled_platforms() -> Vec<&'static PlatformDefinition> {
    PLATFORMS.iter().filter(|p| p.enabled).collect()
}

/// Platforms with both OAuth and posting actually implemented.
#[must_use]
pub fn ready_for_posting() -> Vec<&'static PlatformDefinition> {
    PLATFORMS
        .iter()
        .filter(|p| p.oauth_implemented && p.posting_implemented)
        .collect()
}

/// Platforms a tier may post to: the intersection of ready-for-posting
/// platforms and the tier's allowed-platform set.
#[must_use]
pub fn available_to_tier(tier: &TierDefinition) -> Vec<&'static PlatformDefinition> {
    ready_for_posting()
        .into_iter()
        .filter(|platform| tier.platforms.permits(platform.key))
        .collect()
}
