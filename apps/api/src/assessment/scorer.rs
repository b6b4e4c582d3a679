//! Skill scoring — turns a user's answer selections into normalized
//! percentage scores per skill.
//!
//! Pure computation over the injected question bank: no I/O, no hidden
//! state, safe to call concurrently for different users.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::assessment::question_bank::QuestionBank;

/// Question id → selected option index (0-based, least → most proficient).
pub type AnswerMap = BTreeMap<u32, usize>;

/// Skill name → integer percentage in [0, 100].
///
/// Iteration order is first-appearance order in the question bank. The
/// recommendation generator's tie-breaks are stable with respect to this
/// order, so it must not be alphabetized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillScores {
    entries: Vec<(String, u32)>,
}

impl SkillScores {
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            entries: pairs.into_iter().map(|(s, v)| (s.into(), v)).collect(),
        }
    }

    pub fn get(&self, skill: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(name, _)| name == skill)
            .map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(name, score)| (name.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SkillScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, score) in &self.entries {
            map.serialize_entry(name, score)?;
        }
        map.end()
    }
}

/// How the scorer treats unanswered questions.
///
/// The source product silently scored incomplete submissions as lowest
/// proficiency. That stays the default, but it is an explicit policy here so
/// callers can opt into strict validation instead.
#[derive(Debug, Clone, Copy)]
pub struct ScorePolicy {
    pub allow_partial: bool,
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self {
            allow_partial: true,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("assessment incomplete: unanswered questions {0:?}")]
    Incomplete(Vec<u32>),
}

/// Deterministic skill scorer over an immutable question bank.
pub struct Scorer {
    bank: Arc<QuestionBank>,
    policy: ScorePolicy,
}

impl Scorer {
    pub fn new(bank: Arc<QuestionBank>, policy: ScorePolicy) -> Self {
        Self { bank, policy }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn policy(&self) -> ScorePolicy {
        self.policy
    }

    /// Scores with the scorer's configured policy.
    pub fn score(&self, answers: &AnswerMap) -> Result<SkillScores, ScoreError> {
        self.score_with(answers, self.policy)
    }

    /// Scores with an explicit per-call policy.
    ///
    /// Per question: `raw = index / (options - 1) * 100`. Each skill
    /// accumulates `raw * weight` and is normalized by its total weight,
    /// rounded half-away-from-zero, and clamped to [0, 100]. With every
    /// answer at the highest index, every skill scores exactly 100; at the
    /// lowest index, exactly 0. Missing answers count as index 0 when
    /// partial scoring is allowed; out-of-range indices are clamped to the
    /// last option (rejected earlier at the HTTP boundary).
    pub fn score_with(
        &self,
        answers: &AnswerMap,
        policy: ScorePolicy,
    ) -> Result<SkillScores, ScoreError> {
        if !policy.allow_partial {
            let missing: Vec<u32> = self
                .bank
                .questions()
                .iter()
                .filter(|q| !answers.contains_key(&q.id))
                .map(|q| q.id)
                .collect();
            if !missing.is_empty() {
                return Err(ScoreError::Incomplete(missing));
            }
        }

        // (skill, weighted total, total weight), in first-appearance order.
        let mut totals: Vec<(String, f64, f64)> = Vec::new();

        for q in self.bank.questions() {
            let selected = answers
                .get(&q.id)
                .copied()
                .unwrap_or(0)
                .min(q.options.len() - 1);
            let raw = selected as f64 / (q.options.len() - 1) as f64 * 100.0;

            for (skill, weight) in &q.skill_weights {
                match totals.iter_mut().find(|(name, _, _)| name == skill) {
                    Some((_, total, weight_sum)) => {
                        *total += raw * weight;
                        *weight_sum += weight;
                    }
                    None => totals.push((skill.clone(), raw * weight, *weight)),
                }
            }
        }

        Ok(SkillScores {
            entries: totals
                .into_iter()
                .map(|(skill, total, weight_sum)| {
                    let pct = (total / weight_sum).round().clamp(0.0, 100.0) as u32;
                    (skill, pct)
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> Scorer {
        Scorer::new(Arc::new(QuestionBank::standard()), ScorePolicy::default())
    }

    fn uniform_answers(bank: &QuestionBank, index: usize) -> AnswerMap {
        bank.questions().iter().map(|q| (q.id, index)).collect()
    }

    #[test]
    fn test_all_highest_answers_score_100_everywhere() {
        let s = scorer();
        let answers = uniform_answers(s.bank(), 3);
        let scores = s.score(&answers).unwrap();
        for (skill, score) in scores.iter() {
            assert_eq!(score, 100, "skill {skill}");
        }
    }

    #[test]
    fn test_all_lowest_answers_score_0_everywhere() {
        let s = scorer();
        let answers = uniform_answers(s.bank(), 0);
        let scores = s.score(&answers).unwrap();
        for (skill, score) in scores.iter() {
            assert_eq!(score, 0, "skill {skill}");
        }
    }

    #[test]
    fn test_output_keys_are_exactly_bank_skills_in_order() {
        let s = scorer();
        let scores = s.score(&uniform_answers(s.bank(), 2)).unwrap();
        let keys: Vec<&str> = scores.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, s.bank().skill_names());
    }

    #[test]
    fn test_all_index_one_scores_33_everywhere() {
        // raw = 1/3 * 100 = 33.33; weighted mean stays 33.33 → rounds to 33.
        let s = scorer();
        let scores = s.score(&uniform_answers(s.bank(), 1)).unwrap();
        for (skill, score) in scores.iter() {
            assert_eq!(score, 33, "skill {skill}");
        }
    }

    #[test]
    fn test_missing_answers_default_to_lowest_proficiency() {
        let s = scorer();
        let scores = s.score(&AnswerMap::new()).unwrap();
        assert_eq!(scores.len(), s.bank().skill_names().len());
        for (_, score) in scores.iter() {
            assert_eq!(score, 0);
        }
    }

    #[test]
    fn test_strict_policy_rejects_incomplete_answers() {
        let s = scorer();
        let mut answers = uniform_answers(s.bank(), 2);
        answers.remove(&3);
        answers.remove(&7);
        let err = s
            .score_with(&answers, ScorePolicy {
                allow_partial: false,
            })
            .unwrap_err();
        assert_eq!(err, ScoreError::Incomplete(vec![3, 7]));
    }

    #[test]
    fn test_strict_policy_accepts_complete_answers() {
        let s = scorer();
        let answers = uniform_answers(s.bank(), 2);
        assert!(s
            .score_with(&answers, ScorePolicy {
                allow_partial: false,
            })
            .is_ok());
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let s = scorer();
        let answers: AnswerMap =
            [(1, 3), (2, 0), (3, 2), (4, 1), (5, 3), (6, 0), (7, 2), (8, 1)]
                .into_iter()
                .collect();
        let first = s.score(&answers).unwrap();
        let second = s.score(&answers).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mixed_frontend_answers_split_scores() {
        // Questions 1-3 and 7-8 at max, 4-6 at min: frontend skills hit 100,
        // soft skills hit 0.
        let answers: AnswerMap =
            [(1, 3), (2, 3), (3, 3), (4, 0), (5, 0), (6, 0), (7, 3), (8, 3)]
                .into_iter()
                .collect();
        let scores = scorer().score(&answers).unwrap();
        assert_eq!(scores.get("JavaScript"), Some(100));
        assert_eq!(scores.get("React"), Some(100));
        assert_eq!(scores.get("Frontend Development"), Some(100));
        assert_eq!(scores.get("Problem Solving"), Some(100));
        assert_eq!(scores.get("Communication"), Some(0));
        assert_eq!(scores.get("Leadership"), Some(0));
        assert_eq!(scores.get("Project Management"), Some(0));
    }

    #[test]
    fn test_out_of_range_index_clamps_to_highest_option() {
        let s = scorer();
        let mut answers = uniform_answers(s.bank(), 0);
        answers.insert(1, 99);
        let scores = s.score(&answers).unwrap();
        assert_eq!(scores.get("JavaScript"), Some(100));
    }

    #[test]
    fn test_skill_scores_serialize_as_ordered_map() {
        let scores = SkillScores::from_pairs([("JavaScript", 85), ("Communication", 40)]);
        let json = serde_json::to_string(&scores).unwrap();
        assert_eq!(json, r#"{"JavaScript":85,"Communication":40}"#);
    }
}
