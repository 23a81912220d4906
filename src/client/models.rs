//! The core models for a chat transcript with the policy assistant.
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

/// A document backing an answer. Order in a message is the relevance
/// order returned by the upstream.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Source {
    pub url: String,
    pub domain: String,
    pub r#type: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    role: Role,
    text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    sources: Vec<Source>,
}

impl Message {
    pub fn new(role: Role, text: &str) -> Self {
        Message {
            role,
            text: text.to_string(),
            sources: Vec::new(),
        }
    }

    pub fn new_with_sources(text: &str, sources: Vec<Source>) -> Self {
        Message {
            role: Role::Assistant,
            text: text.to_string(),
            sources,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }
}

/// Append-only list of messages for one session. Messages are never
/// mutated or removed once pushed.
#[derive(Default, Debug)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, msg: Message) -> &Message {
        self.0.push(msg);
        &self.0[self.0.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn count_role(&self, role: Role) -> usize {
        self.0.iter().filter(|m| m.role == role).count()
    }
}
