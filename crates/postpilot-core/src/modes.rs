//! Content-mode registry.
//!
//! A content mode is a persona configuration (business, influencer,
//! personal) carrying the AI role instruction, topic suggestions, and the
//! extra guidelines appended to the final prompt layer.

use serde::Serialize;

/// One content mode's registry entry.
#[derive(Debug, Serialize)]
pub struct ContentModeDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// The non-negotiable persona anchor for the system prompt.
    pub ai_role: &'static str,
    pub topics: &'static [&'static str],
    pub extra_guidelines: &'static [&'static str],
}

/// All registered content modes.
pub const MODES: &[ContentModeDefinition] = &[
    ContentModeDefinition {
        key: "business",
        name: "Business",
        description: "Professional & corporate tone",
        ai_role: "You are a professional business content creator specializing in authentic, \
                  value-driven social media posts. You help small business owners share their \
                  expertise and build trust with their audience without corporate buzzwords or \
                  salesy language.",
        topics: &[
            "Share a lesson learned from a recent project challenge",
            "Discuss the importance of transparent business practices in your industry",
            "Explain a technical concept in simple terms for non-technical business owners",
            "Share insights about process optimization or automation",
            "Discuss industry trends and their impact on small businesses",
        ],
        extra_guidelines: &[
            "Focus on providing real business value and insights",
            "Share practical experience and lessons learned",
            "Position as a trusted expert, not a salesperson",
        ],
    },
    ContentModeDefinition {
        key: "influencer",
        name: "Influencer",
        description: "Engaging & social media focused",
        ai_role: "You are a social media strategist helping influencers create engaging, \
                  authentic content that builds genuine connections with their audience while \
                  showcasing their unique personality and expertise.",
        topics: &[
            "Share behind-the-scenes of your work process",
            "Give advice to someone starting in your field",
            "Share a success story from your experience",
            "Discuss current industry trends and your perspective",
            "Share productivity tips or tools you use daily",
        ],
        extra_guidelines: &[
            "Focus on building genuine connections",
            "Share personal stories and experiences",
            "Encourage engagement and conversation",
        ],
    },
    ContentModeDefinition {
        key: "personal",
        name: "Personal",
        description: "Casual & authentic voice",
        ai_role: "You are helping create authentic personal social media content that feels \
                  genuine and relatable while maintaining professionalism appropriate for the \
                  person's career and interests.",
        topics: &[
            "Share a personal insight from your professional journey",
            "Discuss work-life balance in your field",
            "Share learning experiences or growth moments",
            "Discuss challenges you've overcome in your career",
            "Share appreciation for your team or community",
        ],
        extra_guidelines: &[
            "Keep it genuine and relatable",
            "Share personal perspectives and emotions",
            "Balance professional and personal elements",
        ],
    },
];

/// Finds a content mode by key. Unknown keys return `None`; the composer
/// substitutes a generic role rather than failing.
#[must_use]
pub fn definition_for(key: &str) -> Option<&'static ContentModeDefinition> {
    MODES.iter().find(|mode| mode.key == key)
}

/// Returns `true` if `key` names a registered content mode.
#[must_use]
pub fn is_supported(key: &str) -> bool {
    definition_for(key).is_some()
}

/// All registered mode keys, in registry order.
#[must_use]
pub fn mode_keys() -> Vec<&'static str> {
    MODES.iter().map(|mode| mode.key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_contains_the_three_modes() {
        assert_eq!(mode_keys(), vec!["business", "influencer", "personal"]);
    }

    #[test]
    fn unknown_mode_returns_none() {
        assert!(definition_for("educator").is_none());
        assert!(!is_supported("educator"));
    }

    #[test]
    fn each_mode_has_five_topics_and_three_guidelines() {
        for mode in MODES {
            assert_eq!(mode.topics.len(), 5, "mode {}", mode.key);
            assert_eq!(mode.extra_guidelines.len(), 3, "mode {}", mode.key);
        }
    }

    #[test]
    fn business_role_anchors_the_persona() {
        let business = definition_for("business").expect("business mode");
        assert!(business.ai_role.starts_with("You are a professional business content creator"));
    }
}
