//! Line-oriented chat session over an [`Assistant`].
//!
//! The session owns the transcript. It opens with the greeting, skips
//! blank input, and ends on end of input or `/quit`.

use std::{
    io::{BufRead, Write},
    time::{SystemTime, UNIX_EPOCH},
};

use serde::Serialize;

use crate::{
    error::Result,
    generation::TextGenerator,
    strategy::{Assistant, Strategy},
    templates::GREETING,
};

pub const QUIT_COMMAND: &str = "/quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: u64,
    pub kind: Sender,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// Ordered record of a conversation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// A transcript holding only the greeting.
    pub fn new() -> Self {
        let mut transcript = Self::default();
        transcript.push(Sender::Bot, GREETING);
        transcript
    }

    pub fn push(&mut self, kind: Sender, content: impl Into<String>) -> &Message {
        let id = self.messages.len() as u64 + 1;
        self.messages.push(Message {
            id,
            kind,
            content: content.into(),
            timestamp: now_millis(),
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Run a chat session reading queries from `input` and writing bot
/// messages to `output`. Returns the finished transcript.
pub async fn run_session<G, R, W>(
    assistant: &Assistant<G>,
    strategy: Strategy,
    input: R,
    mut output: W,
) -> Result<Transcript>
where
    G: TextGenerator,
    R: BufRead,
    W: Write,
{
    let mut transcript = Transcript::new();
    writeln!(output, "{GREETING}\n")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query == QUIT_COMMAND {
            break;
        }

        transcript.push(Sender::User, query);
        let answer = assistant.respond(query, strategy).await;
        writeln!(output, "{answer}\n")?;
        output.flush()?;
        transcript.push(Sender::Bot, answer);
    }

    tracing::debug!(messages = transcript.len(), "chat session ended");
    Ok(transcript)
}
