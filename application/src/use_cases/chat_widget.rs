//! Chat widget use case.
//!
//! Owns the conversation state (transcript, session id, busy flag) and runs
//! one exchange at a time against a [`ChatEndpoint`].
//!
//! # Exchange flow
//!
//! 1. Reject blank input and submissions made while a request is outstanding
//! 2. Append the user message and mark the widget busy
//! 3. Send `{message, session_id?}` to the endpoint
//! 4. Adopt the returned session id if none is held yet, append the reply
//! 5. On any failure append [`FALLBACK_REPLY`] instead
//! 6. Return to idle
//!
//! Failures never escape [`ChatWidget::submit`]; the caller only ever sees a
//! [`SubmitOutcome`].

use crate::ports::chat_endpoint::{ChatEndpoint, ChatRequest};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{ExchangeProgress, NoProgress};
use chrono::Utc;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};
use twin_domain::util::{is_blank, preview};
use twin_domain::{
    ExchangeState, FALLBACK_REPLY, Message, MessageIdGenerator, Role, SessionId, Transcript,
};

/// Why a submission was dropped without touching the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Input was empty or whitespace only
    Empty,
    /// Another exchange is still awaiting its response
    Busy,
}

/// Result of [`ChatWidget::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was appended and no request was sent
    Ignored(IgnoreReason),
    /// The endpoint answered; carries the appended assistant message
    Replied(Message),
    /// The exchange failed; carries the appended fallback message
    Failed(Message),
}

impl SubmitOutcome {
    /// The assistant message appended by this submission, if any
    pub fn reply(&self) -> Option<&Message> {
        match self {
            SubmitOutcome::Replied(msg) | SubmitOutcome::Failed(msg) => Some(msg),
            SubmitOutcome::Ignored(_) => None,
        }
    }
}

#[derive(Default)]
struct WidgetState {
    transcript: Transcript,
    session_id: Option<SessionId>,
    ids: MessageIdGenerator,
}

impl WidgetState {
    fn append(&mut self, role: Role, content: impl Into<String>) -> Message {
        let now = Utc::now();
        let message = Message::new(self.ids.next_at(now), role, content, now);
        self.transcript.push(message.clone());
        message
    }
}

/// Clears the busy flag when the exchange ends, however it ends.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// The chat widget: one conversation with the remote endpoint.
pub struct ChatWidget {
    endpoint: Arc<dyn ChatEndpoint>,
    conversation_logger: Arc<dyn ConversationLogger>,
    busy: AtomicBool,
    state: Mutex<WidgetState>,
}

impl ChatWidget {
    pub fn new(endpoint: Arc<dyn ChatEndpoint>) -> Self {
        Self {
            endpoint,
            conversation_logger: Arc::new(NoConversationLogger),
            busy: AtomicBool::new(false),
            state: Mutex::new(WidgetState::default()),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Snapshot of the transcript in insertion order
    pub fn messages(&self) -> Vec<Message> {
        self.lock_state().transcript.messages().to_vec()
    }

    pub fn len(&self) -> usize {
        self.lock_state().transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_state().transcript.is_empty()
    }

    /// Session id adopted from the first successful response, if any
    pub fn session_id(&self) -> Option<SessionId> {
        self.lock_state().session_id.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn state(&self) -> ExchangeState {
        if self.is_busy() {
            ExchangeState::AwaitingResponse
        } else {
            ExchangeState::Idle
        }
    }

    /// Submit one user turn.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        self.submit_with_progress(text, &NoProgress).await
    }

    /// Submit one user turn, reporting the exchange lifecycle to `progress`.
    pub async fn submit_with_progress(
        &self,
        text: &str,
        progress: &dyn ExchangeProgress,
    ) -> SubmitOutcome {
        if is_blank(text) {
            debug!("Ignoring blank submission");
            return SubmitOutcome::Ignored(IgnoreReason::Empty);
        }

        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Ignoring submission while an exchange is in flight");
            return SubmitOutcome::Ignored(IgnoreReason::Busy);
        }
        let _busy = BusyGuard(&self.busy);

        let (request, user_event) = {
            let mut state = self.lock_state();
            let user_message = state.append(Role::User, text);
            (
                ChatRequest::new(text, state.session_id.clone()),
                message_event("user_message", &user_message),
            )
        };
        self.conversation_logger.log(user_event);

        info!(
            "Sending message (session: {}): {}",
            request
                .session_id
                .as_ref()
                .map(SessionId::as_str)
                .unwrap_or("<none>"),
            preview(text, 80)
        );

        progress.on_exchange_start();
        let result = self.endpoint.send(&request).await;
        progress.on_exchange_end(result.is_ok());

        // Events are written after the state lock is released
        let mut events = Vec::with_capacity(2);
        let outcome = {
            let mut state = self.lock_state();
            match result {
                Ok(response) => {
                    if state.session_id.is_none() {
                        match SessionId::new(response.session_id) {
                            Ok(session_id) => {
                                info!("Session established: {}", session_id);
                                events.push(ConversationEvent::new(
                                    "session_started",
                                    json!({ "session_id": session_id.as_str() }),
                                ));
                                state.session_id = Some(session_id);
                            }
                            Err(e) => warn!("Endpoint did not assign a session: {}", e),
                        }
                    } else if state
                        .session_id
                        .as_ref()
                        .is_some_and(|held| held.as_str() != response.session_id)
                    {
                        debug!(
                            "Keeping existing session; endpoint returned {}",
                            response.session_id
                        );
                    }

                    let reply = state.append(Role::Assistant, response.response);
                    events.push(message_event("assistant_message", &reply));
                    SubmitOutcome::Replied(reply)
                }
                Err(e) => {
                    warn!("Exchange failed: {}", e);
                    events.push(ConversationEvent::new(
                        "exchange_failed",
                        json!({ "error": e.to_string() }),
                    ));
                    let reply = state.append(Role::Assistant, FALLBACK_REPLY);
                    events.push(message_event("assistant_message", &reply));
                    SubmitOutcome::Failed(reply)
                }
            }
        };

        for event in events {
            self.conversation_logger.log(event);
        }
        outcome
    }

    fn lock_state(&self) -> MutexGuard<'_, WidgetState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn message_event(event_type: &'static str, message: &Message) -> ConversationEvent {
    ConversationEvent::new(
        event_type,
        json!({
            "id": message.id.to_string(),
            "role": message.role.as_str(),
            "content": message.content,
        }),
    )
}
