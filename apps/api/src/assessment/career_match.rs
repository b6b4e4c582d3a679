//! Career path matching — composite indicators over named skills drive a
//! fixed set of candidate paths. The constituent skill lists live in a
//! declarative table so new paths can be added without touching the rules.

use serde::{Deserialize, Serialize};

use crate::assessment::scorer::SkillScores;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub title: String,
    #[serde(rename = "match")]
    pub match_pct: u32,
    pub description: String,
    pub next_steps: Vec<String>,
}

/// Indicator name → constituent skills. Missing skills count as 0, which
/// only makes thresholds harder to clear.
#[derive(Debug, Clone)]
pub struct IndicatorTable {
    pub technical: Vec<String>,
    pub soft_skills: Vec<String>,
}

impl Default for IndicatorTable {
    fn default() -> Self {
        Self {
            technical: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "Frontend Development".to_string(),
            ],
            soft_skills: vec![
                "Communication".to_string(),
                "Leadership".to_string(),
                "Problem Solving".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CareerMatcher {
    indicators: IndicatorTable,
}

impl CareerMatcher {
    pub fn new(indicators: IndicatorTable) -> Self {
        Self { indicators }
    }

    /// Emits zero to three candidate paths, sorted by match descending.
    /// Equal matches keep emission order (Senior Frontend Developer,
    /// Technical Team Lead, Solutions Architect).
    pub fn match_paths(&self, scores: &SkillScores) -> Vec<CareerPath> {
        let technical = mean_of(scores, &self.indicators.technical);
        let soft = mean_of(scores, &self.indicators.soft_skills);
        let problem_solving = scores.get("Problem Solving").unwrap_or(0) as f64;

        let mut paths = Vec::new();

        if technical > 70.0 {
            paths.push(CareerPath {
                title: "Senior Frontend Developer".to_string(),
                match_pct: technical.round() as u32,
                description: "Lead frontend development projects and architect scalable solutions"
                    .to_string(),
                next_steps: vec![
                    "Master advanced React patterns".to_string(),
                    "Learn system design principles".to_string(),
                    "Develop mentoring skills".to_string(),
                ],
            });
        }

        if soft > 70.0 && technical > 60.0 {
            paths.push(CareerPath {
                title: "Technical Team Lead".to_string(),
                match_pct: ((soft + technical) / 2.0).round() as u32,
                description:
                    "Combine technical expertise with leadership to guide development teams"
                        .to_string(),
                next_steps: vec![
                    "Strengthen project management skills".to_string(),
                    "Practice technical communication".to_string(),
                    "Learn team building strategies".to_string(),
                ],
            });
        }

        if problem_solving > 75.0 {
            paths.push(CareerPath {
                title: "Solutions Architect".to_string(),
                match_pct: problem_solving.round() as u32,
                description:
                    "Design and implement complex technical solutions for business challenges"
                        .to_string(),
                next_steps: vec![
                    "Study system architecture patterns".to_string(),
                    "Learn cloud technologies".to_string(),
                    "Develop business analysis skills".to_string(),
                ],
            });
        }

        // sort_by is stable: ties keep emission order.
        paths.sort_by(|a, b| b.match_pct.cmp(&a.match_pct));
        paths
    }
}

fn mean_of(scores: &SkillScores, skills: &[String]) -> f64 {
    if skills.is_empty() {
        return 0.0;
    }
    let total: f64 = skills
        .iter()
        .map(|s| scores.get(s).unwrap_or(0) as f64)
        .sum();
    total / skills.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::scorer::SkillScores;

    fn matcher() -> CareerMatcher {
        CareerMatcher::default()
    }

    fn scores(pairs: &[(&str, u32)]) -> SkillScores {
        SkillScores::from_pairs(pairs.iter().map(|(s, v)| (s.to_string(), *v)))
    }

    #[test]
    fn test_no_paths_when_all_thresholds_unmet() {
        let s = scores(&[
            ("JavaScript", 33),
            ("React", 33),
            ("Frontend Development", 33),
            ("Communication", 33),
            ("Leadership", 33),
            ("Problem Solving", 33),
        ]);
        assert!(matcher().match_paths(&s).is_empty());
    }

    #[test]
    fn test_strong_technical_emits_senior_frontend() {
        let s = scores(&[
            ("JavaScript", 100),
            ("React", 100),
            ("Frontend Development", 100),
        ]);
        let paths = matcher().match_paths(&s);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].title, "Senior Frontend Developer");
        assert_eq!(paths[0].match_pct, 100);
    }

    #[test]
    fn test_team_lead_requires_both_indicators() {
        // Soft skills alone are not enough.
        let s = scores(&[
            ("Communication", 90),
            ("Leadership", 90),
            ("Problem Solving", 40),
        ]);
        assert!(matcher().match_paths(&s).is_empty());

        // Adding a technical base over 60 unlocks the path.
        let s = scores(&[
            ("JavaScript", 65),
            ("React", 65),
            ("Frontend Development", 65),
            ("Communication", 90),
            ("Leadership", 90),
            ("Problem Solving", 40),
        ]);
        let paths = matcher().match_paths(&s);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].title, "Technical Team Lead");
        // round((73.33 + 65) / 2) = round(69.17) = 69
        assert_eq!(paths[0].match_pct, 69);
    }

    #[test]
    fn test_solutions_architect_keys_off_raw_problem_solving() {
        let s = scores(&[("Problem Solving", 76)]);
        let paths = matcher().match_paths(&s);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].title, "Solutions Architect");
        assert_eq!(paths[0].match_pct, 76);
    }

    #[test]
    fn test_problem_solving_at_75_is_excluded() {
        let s = scores(&[("Problem Solving", 75)]);
        assert!(matcher().match_paths(&s).is_empty());
    }

    #[test]
    fn test_paths_sorted_by_match_descending() {
        let s = scores(&[
            ("JavaScript", 72),
            ("React", 72),
            ("Frontend Development", 72),
            ("Communication", 95),
            ("Leadership", 95),
            ("Problem Solving", 95),
        ]);
        let paths = matcher().match_paths(&s);
        assert_eq!(paths.len(), 3);
        let matches: Vec<u32> = paths.iter().map(|p| p.match_pct).collect();
        let mut sorted = matches.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(matches, sorted);
        assert_eq!(paths[0].title, "Solutions Architect");
    }

    #[test]
    fn test_equal_matches_keep_emission_order() {
        // Technical mean 80 and Problem Solving 80 tie: Senior Frontend
        // Developer was emitted first and must stay first.
        let s = scores(&[
            ("JavaScript", 80),
            ("React", 80),
            ("Frontend Development", 80),
            ("Problem Solving", 80),
        ]);
        let paths = matcher().match_paths(&s);
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].match_pct, paths[1].match_pct);
        assert_eq!(paths[0].title, "Senior Frontend Developer");
        assert_eq!(paths[1].title, "Solutions Architect");
    }

    #[test]
    fn test_missing_skills_default_to_zero() {
        // Only JavaScript present: technical mean = 100/3 ≈ 33 → no path.
        let s = scores(&[("JavaScript", 100)]);
        assert!(matcher().match_paths(&s).is_empty());
    }

    #[test]
    fn test_custom_indicator_table() {
        let m = CareerMatcher::new(IndicatorTable {
            technical: vec!["Rust".to_string()],
            soft_skills: vec!["Communication".to_string()],
        });
        let s = scores(&[("Rust", 90)]);
        let paths = m.match_paths(&s);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].title, "Senior Frontend Developer");
        assert_eq!(paths[0].match_pct, 90);
    }

    #[test]
    fn test_serialized_field_names() {
        let s = scores(&[("Problem Solving", 90)]);
        let paths = matcher().match_paths(&s);
        let json = serde_json::to_value(&paths[0]).unwrap();
        assert_eq!(json["match"], 90);
        assert!(json["nextSteps"].is_array());
    }
}
