//! Recommendation generation — deterministic template-filling over the skill
//! score map. At most one improvement entry (weakest skill below 60) and one
//! strength entry (strongest skill above 80), never more.

use serde::{Deserialize, Serialize};

use crate::assessment::scorer::SkillScores;

const IMPROVEMENT_THRESHOLD: u32 = 60;
const STRENGTH_THRESHOLD: u32 = 80;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum RecommendationKind {
    #[serde(rename = "Skill Development")]
    SkillDevelopment,
    #[serde(rename = "Career Advancement")]
    CareerAdvancement,
}

/// A learning resource stub attached to a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub provider: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub description: String,
    pub priority: Priority,
    pub estimated_time: String,
    pub resources: Vec<Resource>,
}

/// Produces zero, one, or two recommendations from a score map.
///
/// Tie-breaks are stable: equal scores resolve to whichever skill appears
/// first in the score map's iteration order (question-bank order).
pub fn generate_recommendations(scores: &SkillScores) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let mut weakest: Vec<(&str, u32)> = scores
        .iter()
        .filter(|(_, score)| *score < IMPROVEMENT_THRESHOLD)
        .collect();
    weakest.sort_by_key(|(_, score)| *score);
    if let Some((skill, _)) = weakest.first() {
        recommendations.push(improvement_recommendation(skill));
    }

    let mut strongest: Vec<(&str, u32)> = scores
        .iter()
        .filter(|(_, score)| *score > STRENGTH_THRESHOLD)
        .collect();
    strongest.sort_by(|(_, a), (_, b)| b.cmp(a));
    if let Some((skill, _)) = strongest.first() {
        recommendations.push(strength_recommendation(skill));
    }

    recommendations
}

fn improvement_recommendation(skill: &str) -> Recommendation {
    Recommendation {
        title: format!("Improve {skill} Skills"),
        kind: RecommendationKind::SkillDevelopment,
        description: format!(
            "Focus on strengthening your {} abilities to unlock new opportunities.",
            skill.to_lowercase()
        ),
        priority: Priority::High,
        estimated_time: "2-3 months".to_string(),
        resources: vec![
            Resource {
                title: format!("{skill} Fundamentals Course"),
                kind: "Course".to_string(),
                provider: "Online Learning Platform".to_string(),
                url: "#".to_string(),
            },
            Resource {
                title: format!("{skill} Best Practices Guide"),
                kind: "Article".to_string(),
                provider: "Tech Blog".to_string(),
                url: "#".to_string(),
            },
        ],
    }
}

fn strength_recommendation(skill: &str) -> Recommendation {
    Recommendation {
        title: format!("Leverage Your {skill} Expertise"),
        kind: RecommendationKind::CareerAdvancement,
        description: format!(
            "Your strong {} skills position you well for senior roles and mentoring opportunities.",
            skill.to_lowercase()
        ),
        priority: Priority::Medium,
        estimated_time: "1-2 months".to_string(),
        resources: vec![
            Resource {
                title: format!("Advanced {skill} Techniques"),
                kind: "Course".to_string(),
                provider: "Professional Development".to_string(),
                url: "#".to_string(),
            },
            Resource {
                title: format!("{skill} Leadership Guide"),
                kind: "Book".to_string(),
                provider: "Industry Expert".to_string(),
                url: "#".to_string(),
            },
        ],
    }
}
