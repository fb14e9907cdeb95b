//! Client for the external playtime lookup service.
//!
//! The service aggregates a player's recorded playtime for a game from several
//! sources. Callers only ever need the largest of those figures, which is what
//! [`PlaytimeLookup::player_max_seconds_playtime`] returns.

mod error;
pub use error::*;

mod result;
pub use result::*;

mod api;
pub use api::*;

use async_trait::async_trait;
use squad_host::id::SteamId;

/// Steam application ID of the game whose playtime is queried
pub const SQUAD_GAME_ID: u64 = 393380;

/// Anything which can report how long a player has played.
#[async_trait]
pub trait PlaytimeLookup: Send + Sync
{
    /// The player's maximum recorded playtime, in seconds, across all sources
    /// known to the lookup. `Ok(PlaytimeResult::Unknown)` means the lookup worked
    /// but had nothing to report.
    async fn player_max_seconds_playtime(&self, steam_id: SteamId) -> Result<PlaytimeResult, PlaytimeError>;
}
