//! Request-scoped, user-facing status messages.

use std::fmt;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Kind of a system message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Error,
    Success,
    Notice,
    /// Caller-defined kind, passed through verbatim to the renderer.
    Custom(CompactString),
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Error => write!(f, "error"),
            MessageKind::Success => write!(f, "success"),
            MessageKind::Notice => write!(f, "notice"),
            MessageKind::Custom(kind) => write!(f, "{kind}"),
        }
    }
}

/// A single user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

/// Append-only, insertion-ordered log of user-facing messages.
///
/// Scoped to one listing request; messages are never deduplicated or
/// removed once added.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageSink {
    messages: Vec<Message>,
}

impl MessageSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message.
    pub fn push(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.messages.push(Message {
            kind,
            text: text.into(),
        });
    }

    /// Append an error message.
    pub fn error(&mut self, text: impl Into<String>) {
        self.push(MessageKind::Error, text);
    }

    /// All messages in insertion order, or `None` when nothing was recorded.
    pub fn all(&self) -> Option<&[Message]> {
        if self.messages.is_empty() {
            None
        } else {
            Some(&self.messages)
        }
    }

    /// Iterate over messages in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Number of recorded messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check whether no messages have been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
