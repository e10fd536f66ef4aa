//! Operator interaction surface.
//!
//! The engine and selector never touch a terminal directly; they talk to a
//! [`Prompt`] implementation. The CLI provides a console-backed one, tests
//! drive the pipeline with [`ScriptedPrompt`].

use std::collections::VecDeque;
use std::io;

use crate::error::Error;
use crate::model::LinkedPair;

/// Blocking, single-operator interaction channel.
///
/// The progress hooks have default no-op implementations, so embedders only
/// interested in the decision protocol implement `show` and `ask`.
pub trait Prompt {
    /// Display a line of output to the operator.
    fn show(&mut self, message: &str);

    /// Ask a question and block until the operator answers. Returns the raw
    /// response line; the caller trims and interprets it.
    fn ask(&mut self, question: &str) -> Result<String, Error>;

    fn on_collected(&mut self, _media: usize, _scripts: usize) {}
    fn on_progress(&mut self, _current: usize, _total: usize, _name: &str) {}
    fn on_linked(&mut self, _pair: &LinkedPair) {}
}

/// Canned-response prompt for tests and non-interactive embedding.
///
/// Answers questions from a fixed queue and records everything shown or
/// asked, so a test can assert both the terminal state and the dialogue
/// that led to it. Running out of responses is an error rather than a hang.
pub struct ScriptedPrompt {
    responses: VecDeque<String>,
    pub transcript: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn show(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }

    fn ask(&mut self, question: &str) -> Result<String, Error> {
        self.transcript.push(question.to_string());
        self.responses.pop_front().ok_or_else(|| {
            Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "scripted prompt ran out of responses",
            ))
        })
    }
}
