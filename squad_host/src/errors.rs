//! Defines errors returned by the other modules

use crate::prelude::*;
use thiserror::Error;

/// Types of error that can occur while looking up server objects
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("No such player {0}")]
    NoSuchPlayer(SteamId),
    #[error("No squad {0} on team {1}")]
    NoSuchSquad(SquadId, TeamId),
    #[error("No leader for squad {0} on team {1}")]
    NoLeaderForSquad(SquadId, TeamId),
}

/// Convenience definition of a Result type used to look up server objects.
pub type LookupResult<T> = std::result::Result<T, LookupError>;

/// An error returned by a chat command handler.
///
/// These are never shown to players; the dispatcher logs them and carries on.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("{0}")]
    Rcon(#[from] RconError),
    #[error("{0}")]
    Lookup(#[from] LookupError),
    #[error("Unknown error: {0}")]
    UnknownError(String),
}

impl From<&str> for HandlerError
{
    fn from(value: &str) -> Self {
        Self::UnknownError(value.to_owned())
    }
}

impl From<String> for HandlerError
{
    fn from(value: String) -> Self {
        Self::UnknownError(value)
    }
}
