use std::collections::VecDeque;

use crate::domain::ports::Prompt;
use crate::utils::error::{ClinicError, Result};

/// Answers questions from a fixed list and records everything shown.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    questions: Vec<String>,
    transcript: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
            transcript: Vec::new(),
        }
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Messages passed to `say`, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn said(&self, fragment: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(fragment))
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.questions.push(question.to_string());
        self.answers.pop_front().ok_or(ClinicError::InputClosed)
    }

    fn say(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }
}
