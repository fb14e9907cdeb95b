//! Snapshots of host-owned player and squad state.

use crate::prelude::*;

use serde::{
    Serialize,
    Deserialize
};

/// Maximum number of members a squad can hold.
pub const SQUAD_CAPACITY: usize = 9;

/// A connected player.
///
/// Owned and updated by the host; plugins only ever see copies taken at the
/// time of a [`GameServer`] call.
#[derive(Debug,Clone,PartialEq,Eq,Serialize,Deserialize)]
pub struct Player {
    pub steam_id: SteamId,
    pub name: String,
    pub team_id: TeamId,
    pub squad_id: Option<SquadId>,
    pub is_leader: bool,
}

/// A squad within a team.
#[derive(Debug,Clone,PartialEq,Eq,Serialize,Deserialize)]
pub struct Squad {
    pub squad_id: SquadId,
    pub team_id: TeamId,
    pub name: String,
    /// Current member count
    pub size: usize,
}

impl Player
{
    pub fn new(steam_id: SteamId, name: impl Into<String>, team_id: TeamId) -> Self
    {
        Self { steam_id, name: name.into(), team_id, squad_id: None, is_leader: false }
    }

    /// Builder-style helper placing this player in a squad
    pub fn in_squad(mut self, squad_id: SquadId) -> Self
    {
        self.squad_id = Some(squad_id);
        self
    }

    /// Builder-style helper marking this player as their squad's leader
    pub fn leading(mut self) -> Self
    {
        self.is_leader = true;
        self
    }

    /// Whether this player leads the given squad on the given team
    pub fn leads(&self, squad_id: SquadId, team_id: TeamId) -> bool
    {
        self.is_leader && self.squad_id == Some(squad_id) && self.team_id == team_id
    }
}

impl Squad
{
    pub fn new(squad_id: SquadId, team_id: TeamId, name: impl Into<String>, size: usize) -> Self
    {
        Self { squad_id, team_id, name: name.into(), size }
    }
}
