//! Per-intro chat threads.

use chrono::{DateTime, Utc};

use introspark_providers::ReplyWriter;
use introspark_types::{ChatThread, IntroId, MessageId, ThreadId};

use crate::{Engine, EngineError};

impl Engine {
    /// Open the chat thread for an intro, creating it on first use. The
    /// members are fixed at creation: the account owner and the intro's
    /// counterpart.
    pub fn open_thread(&mut self, intro_id: IntroId) -> Result<ThreadId, EngineError> {
        if let Some(existing) = self
            .state
            .threads
            .iter()
            .find(|thread| thread.intro == intro_id)
        {
            return Ok(existing.id);
        }
        let intro = self
            .state
            .intros
            .iter()
            .find(|intro| intro.id == intro_id)
            .ok_or_else(|| EngineError::not_found("intro", intro_id))?;
        let thread = ChatThread::new(intro.id, [self.state.profile.id, intro.target]);
        let id = thread.id;
        self.state.threads.push(thread);
        Ok(id)
    }

    /// Append a message from the account owner and refresh the thread
    /// preview with the raw body.
    pub fn send_message(
        &mut self,
        thread_id: ThreadId,
        body: String,
        now: DateTime<Utc>,
    ) -> Result<MessageId, EngineError> {
        let from = self.state.profile.id;
        let thread = self.thread_mut(thread_id)?;
        Ok(thread.append(from, body, now))
    }

    /// Merge point for the counterpart-reply collaborator: append a message
    /// from the other member of the thread.
    pub fn append_counterpart_reply(
        &mut self,
        thread_id: ThreadId,
        body: String,
        now: DateTime<Utc>,
    ) -> Result<MessageId, EngineError> {
        let me = self.state.profile.id;
        let thread = self.thread_mut(thread_id)?;
        let from = thread.counterpart(me);
        Ok(thread.append(from, body, now))
    }

    /// Drive the demo reply collaborator for one thread. Not authoritative:
    /// real counterpart messaging is out of scope, and this exists so demo
    /// builds can plug a stand-in through the same seam.
    pub async fn simulate_reply(
        &mut self,
        thread_id: ThreadId,
        writer: &dyn ReplyWriter,
        now: DateTime<Utc>,
    ) -> Result<MessageId, EngineError> {
        let preview = self.thread_mut(thread_id)?.last_message_preview.clone();
        let body = writer.write_reply(preview).await?;
        self.append_counterpart_reply(thread_id, body, now)
    }

    fn thread_mut(&mut self, thread_id: ThreadId) -> Result<&mut ChatThread, EngineError> {
        self.state
            .threads
            .iter_mut()
            .find(|thread| thread.id == thread_id)
            .ok_or_else(|| EngineError::not_found("thread", thread_id))
    }
}
