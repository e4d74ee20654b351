//! Append-only in-memory transcript.
//!
//! Holds the displayed conversation. Cleared only by an explicit reset or
//! by session replacement; turns are never edited in place.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single displayed turn.
#[derive(Debug, Clone, Serialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: &str) {
        self.turns.push(Turn {
            role: Role::User,
            content: content.to_string(),
        });
    }

    pub fn push_assistant(&mut self, content: &str) {
        self.turns.push(Turn {
            role: Role::Assistant,
            content: content.to_string(),
        });
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_keep_append_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("question");
        transcript.push_assistant("answer");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.turns()[0].role, Role::User);
        assert_eq!(transcript.turns()[1].role, Role::Assistant);
        assert_eq!(transcript.turns()[1].content, "answer");
    }

    #[test]
    fn clear_removes_everything() {
        let mut transcript = Transcript::new();
        transcript.push_user("question");
        transcript.clear();
        assert!(transcript.is_empty());
    }
}
