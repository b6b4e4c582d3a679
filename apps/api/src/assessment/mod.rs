// Skill assessment core: question bank, scorer, recommendation generator,
// career path matcher. Every function here is pure over its inputs; the only
// I/O lives in store.rs and handlers.rs.

pub mod career_match;
pub mod handlers;
pub mod question_bank;
pub mod recommendation;
pub mod scorer;
pub mod store;

#[cfg(test)]
mod tests {
    //! Full-pipeline scenarios: scorer output feeding both generators.

    use std::sync::Arc;

    use crate::assessment::career_match::CareerMatcher;
    use crate::assessment::question_bank::QuestionBank;
    use crate::assessment::recommendation::{generate_recommendations, RecommendationKind};
    use crate::assessment::scorer::{AnswerMap, ScorePolicy, Scorer};

    fn scorer() -> Scorer {
        Scorer::new(Arc::new(QuestionBank::standard()), ScorePolicy::default())
    }

    #[test]
    fn test_middling_answers_yield_one_recommendation_and_no_paths() {
        // Every question answered at index 1: every skill lands on 33.
        let answers: AnswerMap = (1..=8).map(|id| (id, 1)).collect();
        let scores = scorer().score(&answers).unwrap();

        let recs = generate_recommendations(&scores);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].kind, RecommendationKind::SkillDevelopment);
        // All skills tie at 33; the first skill in bank order wins.
        assert_eq!(recs[0].title, "Improve JavaScript Skills");

        assert!(CareerMatcher::default().match_paths(&scores).is_empty());
    }

    #[test]
    fn test_frontend_heavy_answers_yield_senior_frontend_path() {
        // Technical questions at max, soft-skill questions at min.
        let answers: AnswerMap =
            [(1, 3), (2, 3), (3, 3), (4, 0), (5, 0), (6, 0), (7, 3), (8, 3)]
                .into_iter()
                .collect();
        let scores = scorer().score(&answers).unwrap();

        let paths = CareerMatcher::default().match_paths(&scores);
        assert!(paths.iter().any(|p| p.title == "Senior Frontend Developer"));
        // Problem Solving also maxed out, so Solutions Architect qualifies;
        // Technical Team Lead does not (soft indicator is 33).
        assert!(!paths.iter().any(|p| p.title == "Technical Team Lead"));

        let recs = generate_recommendations(&scores);
        let improvement = recs
            .iter()
            .find(|r| r.kind == RecommendationKind::SkillDevelopment)
            .unwrap();
        // Communication is the first zero-scoring skill in bank order.
        assert_eq!(improvement.title, "Improve Communication Skills");
    }
}
