//! Vote types and the toggle/switch transition rule.
//!
//! A user holds at most one vote per answer. Casting a vote is resolved
//! against the user's current vote (if any) into exactly one of three
//! store operations, see [`VoteTransition::resolve`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Stored value for an upvote.
pub const VOTE_UP: &str = "UP";

/// Stored value for a downvote.
pub const VOTE_DOWN: &str = "DOWN";

/// Direction of a vote on an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoteType {
    Up,
    Down,
}

impl VoteType {
    /// The value stored in `votes.vote_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            VoteType::Up => VOTE_UP,
            VoteType::Down => VOTE_DOWN,
        }
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            VOTE_UP => Ok(VoteType::Up),
            VOTE_DOWN => Ok(VoteType::Down),
            other => Err(CoreError::Validation(format!(
                "Invalid vote type '{other}'. Must be one of: {VOTE_UP}, {VOTE_DOWN}"
            ))),
        }
    }
}

/// The store operation a vote request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTransition {
    /// No vote exists yet: insert one with the requested type.
    Create(VoteType),
    /// The same type was cast again: delete the existing vote.
    Remove,
    /// A different type was cast: update the existing vote.
    Switch(VoteType),
}

impl VoteTransition {
    /// Decide what casting `requested` does given the user's `existing` vote.
    pub fn resolve(existing: Option<VoteType>, requested: VoteType) -> Self {
        match existing {
            None => VoteTransition::Create(requested),
            Some(current) if current == requested => VoteTransition::Remove,
            Some(_) => VoteTransition::Switch(requested),
        }
    }

    /// The vote the user holds once this transition is applied.
    pub fn resulting_vote(self) -> Option<VoteType> {
        match self {
            VoteTransition::Create(t) | VoteTransition::Switch(t) => Some(t),
            VoteTransition::Remove => None,
        }
    }
}
