use crate::QuestionId;

pub const MAX_SEARCH_RESULTS: usize = 10;

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: String,
}

impl Question {
    /// `needle` must already be lowercase
    fn matches(&self, needle: &str) -> bool {
        [&self.question, &self.answer, &self.category]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Case-insensitive substring search, a blank query matches nothing
pub fn search_questions<'a>(questions: &'a [Question], query: &str) -> Vec<&'a Question> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    questions
        .iter()
        .filter(|q| q.matches(&needle))
        .take(MAX_SEARCH_RESULTS)
        .collect()
}
