//! The assessment question bank.
//!
//! A fixed, version-controlled set of questions. Each question carries four
//! answer options ordered from least to most proficient and an ordered
//! skill → weight map with weights in (0, 1]. The bank is an immutable value
//! injected into the `Scorer` at construction time, so tests can substitute
//! smaller banks.

use thiserror::Error;

/// A single assessment question. Options are ordered least → most proficient;
/// the selected index is the ordinal proficiency rank.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: u32,
    pub category: String,
    pub prompt: String,
    pub options: Vec<String>,
    /// Ordered so downstream iteration is deterministic.
    pub skill_weights: Vec<(String, f64)>,
}

#[derive(Debug, Error, PartialEq)]
pub enum BankError {
    #[error("duplicate question id {0}")]
    DuplicateId(u32),

    #[error("question {0} has fewer than 2 options")]
    TooFewOptions(u32),

    #[error("question {0} has no skill weights")]
    NoWeights(u32),

    #[error("question {question}: weight {weight} for '{skill}' outside (0, 1]")]
    WeightOutOfRange {
        question: u32,
        skill: String,
        weight: f64,
    },
}

/// Immutable, validated question bank.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Builds a bank from arbitrary questions, enforcing the invariants the
    /// scorer relies on: unique ids, at least two options per question, and
    /// every weight in (0, 1] so a weighted average can never exceed 100.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        let mut seen = std::collections::HashSet::new();
        for q in &questions {
            if !seen.insert(q.id) {
                return Err(BankError::DuplicateId(q.id));
            }
            if q.options.len() < 2 {
                return Err(BankError::TooFewOptions(q.id));
            }
            if q.skill_weights.is_empty() {
                return Err(BankError::NoWeights(q.id));
            }
            for (skill, weight) in &q.skill_weights {
                if !(*weight > 0.0 && *weight <= 1.0) {
                    return Err(BankError::WeightOutOfRange {
                        question: q.id,
                        skill: skill.clone(),
                        weight: *weight,
                    });
                }
            }
        }
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Every skill name referenced by any question, in first-appearance order.
    pub fn skill_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for q in &self.questions {
            for (skill, _) in &q.skill_weights {
                if !names.contains(&skill.as_str()) {
                    names.push(skill);
                }
            }
        }
        names
    }

    /// The built-in eight-question bank shipped with the product.
    pub fn standard() -> Self {
        let questions = vec![
            question(
                1,
                "Technical Skills",
                "How comfortable are you with JavaScript ES6+ features like arrow functions, destructuring, and async/await?",
                [
                    "I'm not familiar with these concepts",
                    "I understand the basics but need more practice",
                    "I'm comfortable using them in projects",
                    "I can teach others and use advanced patterns",
                ],
                &[("JavaScript", 1.0), ("Frontend Development", 0.8)],
            ),
            question(
                2,
                "Technical Skills",
                "What's your experience with React or similar frontend frameworks?",
                [
                    "No experience with frontend frameworks",
                    "I've built simple components and understand basics",
                    "I can build complete applications with state management",
                    "I'm proficient with advanced patterns, testing, and optimization",
                ],
                &[
                    ("React", 1.0),
                    ("Frontend Development", 0.9),
                    ("Component Architecture", 0.7),
                ],
            ),
            question(
                3,
                "Technical Skills",
                "How would you approach debugging a performance issue in a web application?",
                [
                    "I would ask for help from a senior developer",
                    "I'd use browser dev tools to identify obvious issues",
                    "I'd systematically profile and optimize bottlenecks",
                    "I'd implement monitoring and create performance budgets",
                ],
                &[
                    ("Problem Solving", 1.0),
                    ("Performance Optimization", 0.8),
                    ("Debugging", 0.9),
                ],
            ),
            question(
                4,
                "Soft Skills",
                "When working on a team project with conflicting opinions, how do you typically handle it?",
                [
                    "I usually go along with the majority decision",
                    "I present my viewpoint and listen to others",
                    "I facilitate discussion to find common ground",
                    "I lead collaborative decision-making processes",
                ],
                &[
                    ("Communication", 1.0),
                    ("Leadership", 0.8),
                    ("Conflict Resolution", 0.9),
                ],
            ),
            question(
                5,
                "Soft Skills",
                "How do you approach learning new technologies or skills?",
                [
                    "I wait for formal training opportunities",
                    "I follow tutorials and documentation",
                    "I build projects and experiment actively",
                    "I mentor others while learning and contribute to communities",
                ],
                &[
                    ("Learning Agility", 1.0),
                    ("Self-Direction", 0.8),
                    ("Knowledge Sharing", 0.6),
                ],
            ),
            question(
                6,
                "Project Management",
                "How do you handle project deadlines and priorities?",
                [
                    "I work on tasks as they're assigned to me",
                    "I create basic to-do lists and track progress",
                    "I use project management tools and break down tasks",
                    "I optimize workflows and help teams improve processes",
                ],
                &[
                    ("Project Management", 1.0),
                    ("Time Management", 0.8),
                    ("Process Improvement", 0.7),
                ],
            ),
            question(
                7,
                "Technical Skills",
                "What's your experience with version control systems like Git?",
                [
                    "I'm not familiar with version control",
                    "I can commit and push basic changes",
                    "I understand branching, merging, and collaboration workflows",
                    "I can resolve complex conflicts and optimize team workflows",
                ],
                &[
                    ("Git", 1.0),
                    ("Collaboration", 0.7),
                    ("Development Workflow", 0.8),
                ],
            ),
            question(
                8,
                "Problem Solving",
                "When faced with a complex technical problem, what's your approach?",
                [
                    "I look for similar solutions online",
                    "I break it down into smaller, manageable parts",
                    "I research thoroughly and consider multiple approaches",
                    "I design systematic solutions and document for future reference",
                ],
                &[
                    ("Problem Solving", 1.0),
                    ("Analytical Thinking", 0.9),
                    ("Research Skills", 0.7),
                ],
            ),
        ];
        // The built-in data satisfies every `new` invariant.
        Self { questions }
    }
}

fn question(
    id: u32,
    category: &str,
    prompt: &str,
    options: [&str; 4],
    weights: &[(&str, f64)],
) -> Question {
    Question {
        id,
        category: category.to_string(),
        prompt: prompt.to_string(),
        options: options.iter().map(|s| s.to_string()).collect(),
        skill_weights: weights
            .iter()
            .map(|(skill, w)| (skill.to_string(), *w))
            .collect(),
    }
}
