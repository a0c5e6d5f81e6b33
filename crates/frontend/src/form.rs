use std::fmt;

use musicroom_common::{CreateRoomRequest, DEFAULT_GUEST_CAN_PAUSE, DEFAULT_VOTES_TO_SKIP};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VotesToSkip {
    Valid(u32),
    /// Raw input that did not parse to a positive integer.
    Invalid(String),
}

impl VotesToSkip {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<u32>() {
            Ok(votes) if votes >= 1 => VotesToSkip::Valid(votes),
            _ => VotesToSkip::Invalid(raw.to_owned()),
        }
    }

    pub fn value(&self) -> Option<u32> {
        match self {
            VotesToSkip::Valid(votes) => Some(*votes),
            VotesToSkip::Invalid(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    InFlight,
    InvalidVotes(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::InFlight => write!(f, "a room is already being created"),
            SubmitError::InvalidVotes(raw) => {
                write!(f, "votes to skip must be a positive whole number, got {:?}", raw)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum SubmitState {
    Idle,
    Pending,
    Created(Value),
    Failed(String),
}

/// Local state of the create-room page.
///
/// Lives exactly as long as the page is mounted. At most one submission is
/// pending at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateRoomForm {
    guest_can_pause: bool,
    votes_to_skip: VotesToSkip,
    state: SubmitState,
}

impl Default for CreateRoomForm {
    fn default() -> Self {
        Self {
            guest_can_pause: DEFAULT_GUEST_CAN_PAUSE,
            votes_to_skip: VotesToSkip::Valid(DEFAULT_VOTES_TO_SKIP),
            state: SubmitState::Idle,
        }
    }
}

impl CreateRoomForm {
    pub fn guest_can_pause(&self) -> bool {
        self.guest_can_pause
    }

    pub fn votes_to_skip(&self) -> &VotesToSkip {
        &self.votes_to_skip
    }

    pub fn set_guest_can_pause(&mut self, guest_can_pause: bool) {
        self.guest_can_pause = guest_can_pause;
        self.clear_outcome();
    }

    pub fn set_votes_to_skip(&mut self, raw: &str) {
        self.votes_to_skip = VotesToSkip::parse(raw);
        self.clear_outcome();
    }

    /// Drops the result of the last submission once the user edits the form.
    /// A pending submission is left alone.
    fn clear_outcome(&mut self) {
        if !self.is_pending() {
            self.state = SubmitState::Idle;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == SubmitState::Pending
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SubmitState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn last_response(&self) -> Option<&Value> {
        match &self.state {
            SubmitState::Created(res) => Some(res),
            _ => None,
        }
    }

    /// Builds the request body from the current fields and marks the form
    /// pending. The caller must send exactly one request per `Ok`.
    pub fn begin_submit(&mut self) -> Result<CreateRoomRequest, SubmitError> {
        if self.is_pending() {
            return Err(SubmitError::InFlight);
        }

        let votes_to_skip = match &self.votes_to_skip {
            VotesToSkip::Valid(votes) => *votes,
            VotesToSkip::Invalid(raw) => {
                let err = SubmitError::InvalidVotes(raw.clone());
                self.state = SubmitState::Failed(err.to_string());
                return Err(err);
            }
        };

        self.state = SubmitState::Pending;

        Ok(CreateRoomRequest::new(self.guest_can_pause, votes_to_skip))
    }

    pub fn finish_submit(&mut self, result: anyhow::Result<Value>) {
        self.state = match result {
            Ok(res) => SubmitState::Created(res),
            Err(err) => SubmitState::Failed(format!("{:#}", err)),
        };
    }
}
