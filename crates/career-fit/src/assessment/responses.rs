use super::domain::{AnswerValue, Response};

/// Answers for a single attempt, at most one per question.
///
/// Re-answering a question replaces the earlier response and moves it to the
/// end, so iteration order is the order in which answers were last given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseStore {
    responses: Vec<Response>,
}

impl ResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, returning the value it replaced.
    pub fn record(&mut self, response: Response) -> Option<AnswerValue> {
        let previous = self.remove(&response.question_id);
        self.responses.push(response);
        previous
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.responses
            .iter()
            .find(|response| response.question_id == question_id)
            .map(|response| &response.value)
    }

    pub fn remove(&mut self, question_id: &str) -> Option<AnswerValue> {
        let index = self
            .responses
            .iter()
            .position(|response| response.question_id == question_id)?;
        Some(self.responses.remove(index).value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Response> {
        self.responses.iter()
    }

    pub fn as_slice(&self) -> &[Response] {
        &self.responses
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn clear(&mut self) {
        self.responses.clear();
    }
}

impl FromIterator<Response> for ResponseStore {
    fn from_iter<I: IntoIterator<Item = Response>>(iter: I) -> Self {
        let mut store = Self::new();
        for response in iter {
            store.record(response);
        }
        store
    }
}
