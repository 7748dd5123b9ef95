//! Topic auto-selection for generation requests without a user prompt.
//!
//! The candidate pool is the content mode's topic list plus two templated
//! topics per skill, capped at the first three skills. One entry is drawn
//! uniformly at random; picks are not tracked across calls, so repetition
//! is possible and accepted.

use rand::seq::IndexedRandom;

use postpilot_core::modes::ContentModeDefinition;

/// How many skills contribute templated topics.
const SKILL_TOPIC_LIMIT: usize = 3;

/// Builds the full candidate pool for a mode and skill list.
///
/// With a 5-topic mode and 3+ skills the pool has exactly 5 + 3×2 entries.
#[must_use]
pub fn candidate_pool(mode: &ContentModeDefinition, skills: &[String]) -> Vec<String> {
    let mut pool: Vec<String> = mode.topics.iter().map(ToString::to_string).collect();
    for skill in skills.iter().take(SKILL_TOPIC_LIMIT) {
        pool.push(format!("Share practical tips about {skill}"));
        pool.push(format!("Discuss recent developments in {skill}"));
    }
    pool
}

/// Draws one topic uniformly at random from the candidate pool.
///
/// Registry modes always have topics, so the pool is never empty; the
/// fallback string covers a hypothetical topicless mode without panicking.
#[must_use]
pub fn select_topic(mode: &ContentModeDefinition, skills: &[String]) -> String {
    let pool = candidate_pool(mode, skills);
    pool.choose(&mut rand::rng())
        .cloned()
        .unwrap_or_else(|| "Share an insight from your recent work".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use postpilot_core::modes;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn pool_combines_mode_topics_and_skill_templates() {
        let mode = modes::definition_for("business").expect("business mode");
        let pool = candidate_pool(mode, &skills(&["Rust", "DevOps", "Kubernetes"]));
        assert_eq!(pool.len(), 5 + 3 * 2);
        assert!(pool.contains(&"Share practical tips about Rust".to_string()));
        assert!(pool.contains(&"Discuss recent developments in Kubernetes".to_string()));
    }

    #[test]
    fn only_first_three_skills_contribute() {
        let mode = modes::definition_for("personal").expect("personal mode");
        let pool = candidate_pool(mode, &skills(&["a", "b", "c", "d", "e"]));
        assert_eq!(pool.len(), 5 + 3 * 2);
        assert!(!pool
            .iter()
            .any(|topic| topic.ends_with(" d") || topic.ends_with(" e")));
    }

    #[test]
    fn no_skills_leaves_base_topics_only() {
        let mode = modes::definition_for("influencer").expect("influencer mode");
        let pool = candidate_pool(mode, &[]);
        assert_eq!(pool.len(), 5);
    }

    #[test]
    fn selected_topic_is_always_a_pool_member() {
        let mode = modes::definition_for("business").expect("business mode");
        let skill_list = skills(&["Rust"]);
        let pool = candidate_pool(mode, &skill_list);
        for _ in 0..50 {
            let topic = select_topic(mode, &skill_list);
            assert!(pool.contains(&topic), "{topic} not in pool");
        }
    }
}
