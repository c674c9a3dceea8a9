//! Per-intro chat threads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{IntroId, MessageId, ProfileId, ThreadId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub thread: ThreadId,
    pub from: ProfileId,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

/// A thread keyed by an intro and a fixed pair of members.
///
/// Messages are append-only; insertion order is chronological order, so the
/// vector is strictly non-decreasing by send order by construction. All
/// appends go through [`ChatThread::append`], which keeps the preview in
/// sync with the newest message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatThread {
    pub id: ThreadId,
    pub intro: IntroId,
    pub members: [ProfileId; 2],
    pub messages: Vec<ChatMessage>,
    pub last_message_preview: String,
}

impl ChatThread {
    #[must_use]
    pub fn new(intro: IntroId, members: [ProfileId; 2]) -> Self {
        Self {
            id: ThreadId::new(),
            intro,
            members,
            messages: Vec::new(),
            last_message_preview: String::new(),
        }
    }

    #[must_use]
    pub fn is_member(&self, user: ProfileId) -> bool {
        self.members.contains(&user)
    }

    /// The other member relative to `user`. Falls back to the first member
    /// when `user` is not in the thread at all.
    #[must_use]
    pub fn counterpart(&self, user: ProfileId) -> ProfileId {
        if self.members[0] == user {
            self.members[1]
        } else {
            self.members[0]
        }
    }

    /// Append a message and refresh the preview with its raw body.
    pub fn append(&mut self, from: ProfileId, body: String, sent_at: DateTime<Utc>) -> MessageId {
        let id = MessageId::new();
        self.last_message_preview = body.clone();
        self.messages.push(ChatMessage {
            id,
            thread: self.id,
            from,
            body,
            sent_at,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn append_preserves_order_and_preview() {
        let a = ProfileId::new();
        let b = ProfileId::new();
        let mut thread = ChatThread::new(IntroId::new(), [a, b]);
        let now = Utc::now();

        thread.append(a, "first".into(), now);
        thread.append(b, "second".into(), now);

        assert_eq!(thread.messages.len(), 2);
        assert_eq!(thread.messages[0].body, "first");
        assert_eq!(thread.messages[1].body, "second");
        assert_eq!(thread.last_message_preview, "second");
        assert_eq!(thread.counterpart(a), b);
        assert_eq!(thread.counterpart(b), a);
    }
}
