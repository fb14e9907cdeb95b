use crate::prelude::*;

use crate::errors::LookupError::*;

/// Read-only access to the host's live server state.
///
/// Implementations return the state as it is at the moment of the call. There
/// is no consistency guarantee between a `squads()` call and a following
/// `players()` call beyond what the host itself provides.
pub trait GameServer: Send + Sync {
    /// All squads on both teams.
    fn squads(&self) -> Vec<Squad>;

    /// All connected players.
    fn players(&self) -> Vec<Player>;

    /// Look up a player by Steam ID.
    fn player(&self, steam_id: SteamId) -> LookupResult<Player> {
        self.players()
            .into_iter()
            .find(|p| p.steam_id == steam_id)
            .ok_or(NoSuchPlayer(steam_id))
    }

    /// Look up a squad by number within a team.
    fn squad(&self, squad_id: SquadId, team_id: TeamId) -> LookupResult<Squad> {
        self.squads()
            .into_iter()
            .find(|s| s.squad_id == squad_id && s.team_id == team_id)
            .ok_or(NoSuchSquad(squad_id, team_id))
    }

    /// Find the player leading the given squad.
    fn squad_leader(&self, squad_id: SquadId, team_id: TeamId) -> LookupResult<Player> {
        self.players()
            .into_iter()
            .find(|p| p.leads(squad_id, team_id))
            .ok_or(NoLeaderForSquad(squad_id, team_id))
    }
}
