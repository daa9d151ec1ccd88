//! Report absence use case
//!
//! Drives one inbound message through the caller's conversation and
//! carries out the resulting side effect.
//!
//! # Flow
//!
//! ```text
//! (session, text)
//!        ↓
//! SessionRegistry::slot()        one conversation per session
//!        ↓
//! Conversation::handle()         validate against the roster
//!        ↓
//! Effect::Persist? → AbsenceLog::append()
//!        ↓
//! Reply                          only after the append succeeded
//! ```
//!
//! The session's conversation stays locked until the append returns, so a
//! caregiver's next message cannot overtake the one being filed.

use crate::ports::absence_log::{AbsenceLog, PersistenceError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::sessions::SessionRegistry;
use absence_domain::{
    Conversation, DomainError, Effect, GroupOptions, Inbound, Outcome, Reply, Roster, SessionId,
    StepContext, Transition,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while handling a message
#[derive(Error, Debug)]
pub enum ReportAbsenceError {
    #[error("Absence could not be saved: {0}")]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ReportAbsenceError {
    /// True when the caregiver's report was complete but never written
    pub fn is_unsaved_report(&self) -> bool {
        matches!(self, ReportAbsenceError::Persistence(_))
    }
}

/// A message from a caregiver, tagged with their session
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub session: SessionId,
    pub text: String,
}

impl InboundMessage {
    pub fn new(session: impl Into<SessionId>, text: impl Into<String>) -> Self {
        Self {
            session: session.into(),
            text: text.into(),
        }
    }
}

/// Use case for reporting a child's absence through a conversation
pub struct ReportAbsenceUseCase<L: AbsenceLog + 'static> {
    roster: Arc<Roster>,
    groups: GroupOptions,
    log: Arc<L>,
    sessions: SessionRegistry,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<L: AbsenceLog + 'static> ReportAbsenceUseCase<L> {
    pub fn new(roster: Arc<Roster>, log: Arc<L>) -> Self {
        Self {
            roster,
            groups: GroupOptions::default(),
            log,
            sessions: SessionRegistry::new(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Set the group menu
    pub fn with_groups(mut self, groups: GroupOptions) -> Self {
        self.groups = groups;
        self
    }

    /// Set the conversation transcript logger
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn groups(&self) -> &GroupOptions {
        &self.groups
    }

    /// Number of sessions with a report in progress
    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    /// Handle one inbound message and return the reply to send.
    ///
    /// A `Persistence` error means the report was complete but could not be
    /// written; the conversation has ended and no success reply exists.
    pub async fn handle(&self, message: InboundMessage) -> Result<Reply, ReportAbsenceError> {
        let input = Inbound::parse(&message.text);
        let slot = self.sessions.slot(&message.session);
        let mut conversation = slot.lock().await;

        let result = self
            .step(&message.session, &mut conversation, input)
            .await;

        // Idle and Terminated conversations hold nothing worth keeping
        if !conversation.state().is_in_progress() {
            self.sessions.release(&message.session, &slot);
        }
        result
    }

    async fn step(
        &self,
        session: &SessionId,
        conversation: &mut Conversation,
        input: Inbound,
    ) -> Result<Reply, ReportAbsenceError> {
        let ctx = StepContext::new(&self.roster, &self.groups);
        let transition = conversation.handle(input, ctx)?;
        self.trace(session, conversation, &transition);

        if let Effect::Persist(entry) = &transition.effect {
            match self.log.append(entry).await {
                Ok(receipt) => {
                    info!(
                        "Absence recorded for {} {} (group {}) in {}",
                        entry.first_name,
                        entry.last_name,
                        entry.group,
                        receipt.path.display()
                    );
                    self.conversation_logger.log(ConversationEvent::new(
                        "absence_recorded",
                        session.clone(),
                        serde_json::json!({
                            "entry": entry,
                            "file": receipt.path.display().to_string(),
                            "header_written": receipt.header_written,
                        }),
                    ));
                }
                Err(e) => {
                    warn!("Absence for session {} could not be saved: {}", session, e);
                    self.conversation_logger.log(ConversationEvent::new(
                        "persistence_failed",
                        session.clone(),
                        serde_json::json!({ "entry": entry, "error": e.to_string() }),
                    ));
                    return Err(e.into());
                }
            }
        }

        Ok(transition.reply)
    }

    /// Operation log and transcript for one transition
    fn trace(&self, session: &SessionId, conversation: &Conversation, transition: &Transition) {
        let (event_type, payload) = match &transition.outcome {
            Outcome::Started => {
                info!("Session {} started an absence report", session);
                ("conversation_started", serde_json::json!({}))
            }
            Outcome::Accepted(field) => {
                let value = conversation.candidate().get(*field).unwrap_or_default();
                info!("Session {} {}: {}", session, field, value);
                (
                    "field_accepted",
                    serde_json::json!({ "field": field, "value": value }),
                )
            }
            Outcome::Rejected(field) => {
                warn!("Session {} {} not in roster", session, field);
                ("field_rejected", serde_json::json!({ "field": field }))
            }
            Outcome::Reprompted => {
                debug!("Session {} answered the group menu with free text", session);
                return;
            }
            Outcome::Completed => {
                info!("Session {} matched a roster child", session);
                return;
            }
            Outcome::Cancelled => {
                info!("Session {} canceled the conversation", session);
                (
                    "conversation_cancelled",
                    serde_json::json!({ "from": transition.from }),
                )
            }
            Outcome::Ignored => {
                debug!(
                    "Session {} sent input with nothing to do in state {}",
                    session, transition.from
                );
                return;
            }
        };

        self.conversation_logger.log(ConversationEvent::new(
            event_type,
            session.clone(),
            payload,
        ));
    }
}
