//! The absence reporting conversation
//!
//! One [`Conversation`] per session. Each inbound message goes through
//! [`Conversation::handle`], which maps `(state, input)` to a [`Transition`]:
//! the next state, the reply to send, and at most one side effect.
//!
//! Validation fails fast: the last name is checked with the group, the
//! first name with both, and the birth date against the full identity
//! tuple. The only transition carrying [`Effect::Persist`] is the
//! successful birth-date step.

use super::input::Inbound;
use super::reply::Reply;
use super::state::ConversationState;
use crate::absence::entities::{AbsenceLogEntry, CandidateRecord, Field};
use crate::absence::group::GroupOptions;
use crate::core::error::DomainError;
use crate::prompt::ReplyTemplate;
use crate::roster::entities::Roster;

/// What a conversation step needs to look at besides its own state
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    pub roster: &'a Roster,
    pub groups: &'a GroupOptions,
}

impl<'a> StepContext<'a> {
    pub fn new(roster: &'a Roster, groups: &'a GroupOptions) -> Self {
        Self { roster, groups }
    }
}

/// Why a transition happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `/start` opened a fresh report
    Started,
    /// The field was recorded and the next one is asked for
    Accepted(Field),
    /// The field does not extend any roster child; the report is dropped
    Rejected(Field),
    /// The group answer was not a menu label; asked again
    Reprompted,
    /// Every field matched; the entry must be persisted
    Completed,
    /// `/cancel`
    Cancelled,
    /// Nothing to do with this input in the current state
    Ignored,
}

/// Side effect the caller must carry out before sending the reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Persist(AbsenceLogEntry),
}

/// Result of one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: ConversationState,
    pub to: ConversationState,
    pub outcome: Outcome,
    /// Only valid once `effect` has been applied
    pub reply: Reply,
    pub effect: Effect,
}

impl Transition {
    pub fn persists(&self) -> bool {
        matches!(self.effect, Effect::Persist(_))
    }
}

/// A single caregiver's reporting conversation (Entity)
///
/// Owns its candidate record exclusively; sessions never share one.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    state: ConversationState,
    candidate: CandidateRecord,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn candidate(&self) -> &CandidateRecord {
        &self.candidate
    }

    /// The transition function: route an input to the handler for the current state.
    pub fn handle(
        &mut self,
        input: Inbound,
        ctx: StepContext<'_>,
    ) -> Result<Transition, DomainError> {
        use ConversationState::*;

        match (self.state, input) {
            (_, Inbound::Start) => Ok(self.start(ctx)),
            (_, Inbound::Cancel) => Ok(self.cancel()),
            (Idle | Terminated, Inbound::Text(_) | Inbound::Command(_)) => {
                Ok(self.stay(ReplyTemplate::start_hint()))
            }
            (
                AwaitingGroup | AwaitingLastName | AwaitingFirstName | AwaitingBirthDate,
                Inbound::Command(command),
            ) => Ok(self.stay(ReplyTemplate::unknown_command(&command))),
            (AwaitingGroup, Inbound::Text(label)) => self.choose_group(&label, ctx),
            (AwaitingLastName, Inbound::Text(text)) => self.enter_last_name(text, ctx),
            (AwaitingFirstName, Inbound::Text(text)) => self.enter_first_name(text, ctx),
            (AwaitingBirthDate, Inbound::Text(text)) => self.enter_birth_date(text, ctx),
        }
    }

    /// Entry trigger. Valid from any state; always starts from an empty record.
    pub fn start(&mut self, ctx: StepContext<'_>) -> Transition {
        self.candidate.reset();
        self.go(
            ConversationState::AwaitingGroup,
            Outcome::Started,
            ReplyTemplate::group_choice(ctx.groups),
            Effect::None,
        )
    }

    /// Record the group picked from the menu. No roster check yet.
    pub fn choose_group(
        &mut self,
        label: &str,
        ctx: StepContext<'_>,
    ) -> Result<Transition, DomainError> {
        self.require_state(ConversationState::AwaitingGroup)?;

        let Some(group) = ctx.groups.resolve(label) else {
            return Ok(self.go(
                ConversationState::AwaitingGroup,
                Outcome::Reprompted,
                ReplyTemplate::group_choice_again(ctx.groups),
                Effect::None,
            ));
        };

        self.candidate.set(Field::Group, group);
        Ok(self.go(
            ConversationState::AwaitingLastName,
            Outcome::Accepted(Field::Group),
            ReplyTemplate::ask_for(Field::LastName, ctx.groups),
            Effect::None,
        ))
    }

    pub fn enter_last_name(
        &mut self,
        last_name: impl Into<String>,
        ctx: StepContext<'_>,
    ) -> Result<Transition, DomainError> {
        self.require_state(ConversationState::AwaitingLastName)?;
        self.candidate.set(Field::LastName, last_name);

        if ctx.roster.matches_group_and_last_name(&self.candidate) {
            Ok(self.accept(Field::LastName, ConversationState::AwaitingFirstName, ctx))
        } else {
            Ok(self.reject(Field::LastName))
        }
    }

    pub fn enter_first_name(
        &mut self,
        first_name: impl Into<String>,
        ctx: StepContext<'_>,
    ) -> Result<Transition, DomainError> {
        self.require_state(ConversationState::AwaitingFirstName)?;
        self.candidate.set(Field::FirstName, first_name);

        if ctx
            .roster
            .matches_group_and_last_name_and_first_name(&self.candidate)
        {
            Ok(self.accept(Field::FirstName, ConversationState::AwaitingBirthDate, ctx))
        } else {
            Ok(self.reject(Field::FirstName))
        }
    }

    /// Last step: on a full match the transition carries the entry to persist.
    pub fn enter_birth_date(
        &mut self,
        birth_date: impl Into<String>,
        ctx: StepContext<'_>,
    ) -> Result<Transition, DomainError> {
        self.require_state(ConversationState::AwaitingBirthDate)?;
        self.candidate.set(Field::BirthDate, birth_date);

        if !ctx.roster.matches_full_tuple(&self.candidate) {
            return Ok(self.reject(Field::BirthDate));
        }

        let entry = self
            .candidate
            .to_entry()
            .ok_or_else(|| DomainError::IncompleteRecord(self.first_missing()))?;
        self.candidate.reset();
        Ok(self.go(
            ConversationState::Terminated,
            Outcome::Completed,
            ReplyTemplate::recorded(),
            Effect::Persist(entry),
        ))
    }

    /// Abandon the report. Valid from any state, never persists.
    pub fn cancel(&mut self) -> Transition {
        self.candidate.reset();
        self.go(
            ConversationState::Terminated,
            Outcome::Cancelled,
            ReplyTemplate::cancelled(),
            Effect::None,
        )
    }

    fn accept(
        &mut self,
        field: Field,
        next: ConversationState,
        ctx: StepContext<'_>,
    ) -> Transition {
        let reply = match next.expected_field() {
            Some(next_field) => ReplyTemplate::ask_for(next_field, ctx.groups),
            None => ReplyTemplate::recorded(),
        };
        self.go(next, Outcome::Accepted(field), reply, Effect::None)
    }

    fn reject(&mut self, field: Field) -> Transition {
        self.candidate.reset();
        self.go(
            ConversationState::Terminated,
            Outcome::Rejected(field),
            ReplyTemplate::not_found(),
            Effect::None,
        )
    }

    fn stay(&mut self, reply: Reply) -> Transition {
        let state = self.state;
        self.go(state, Outcome::Ignored, reply, Effect::None)
    }

    fn go(
        &mut self,
        to: ConversationState,
        outcome: Outcome,
        reply: Reply,
        effect: Effect,
    ) -> Transition {
        let from = std::mem::replace(&mut self.state, to);
        Transition {
            from,
            to,
            outcome,
            reply,
            effect,
        }
    }

    fn require_state(&self, expected: ConversationState) -> Result<(), DomainError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(DomainError::OutOfOrder {
                expected,
                actual: self.state,
            })
        }
    }

    fn first_missing(&self) -> Field {
        [Field::Group, Field::LastName, Field::FirstName, Field::BirthDate]
            .into_iter()
            .find(|field| self.candidate.get(*field).is_none())
            .unwrap_or(Field::BirthDate)
    }
}
