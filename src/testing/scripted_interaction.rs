use std::collections::VecDeque;

use crate::domain::{ActionKind, AppError, ProductAction};
use crate::ports::Interaction;

/// Replays canned answers. Runs out into "no" / cancelled.
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    confirmations: VecDeque<bool>,
    answers: VecDeque<Option<String>>,
    choices: VecDeque<Option<ActionKind>>,
    pub questions: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirming(mut self, answer: bool) -> Self {
        self.confirmations.push_back(answer);
        self
    }

    pub fn answering(mut self, answer: &str) -> Self {
        self.answers.push_back(Some(answer.to_string()));
        self
    }

    pub fn cancelling(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    pub fn choosing(mut self, kind: Option<ActionKind>) -> Self {
        self.choices.push_back(kind);
        self
    }
}

impl Interaction for ScriptedInteraction {
    fn confirm(&mut self, question: &str) -> Result<bool, AppError> {
        self.questions.push(question.to_string());
        Ok(self.confirmations.pop_front().unwrap_or(false))
    }

    fn prompt(&mut self, question: &str) -> Result<Option<String>, AppError> {
        self.questions.push(question.to_string());
        Ok(self.answers.pop_front().flatten())
    }

    fn choose(&mut self, actions: &[ProductAction]) -> Result<Option<ProductAction>, AppError> {
        let kind = self.choices.pop_front().flatten();
        Ok(kind.and_then(|kind| actions.iter().find(|action| action.kind == kind).cloned()))
    }
}
