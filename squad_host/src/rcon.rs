use crate::prelude::*;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RconError {
    #[error("RCON connection is not established")]
    NotConnected,
    #[error("RCON transport error: {0}")]
    Transport(String),
}

/// The host's command and control channel to the game server.
#[async_trait]
pub trait Rcon: Send + Sync {
    /// Deliver a private warning message to a single player.
    async fn warn(&self, steam_id: SteamId, message: &str) -> Result<(), RconError>;
}
