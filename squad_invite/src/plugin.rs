use crate::{
    config::*,
    messages,
    validation::{self, InviteRejection},
    warn::Warner,
};

use playtime_client::{PlaytimeLookup, PlaytimeResult, PlaytimeServiceApi, SQUAD_GAME_ID};
use squad_host::prelude::*;

use async_trait::async_trait;
use std::{sync::Arc, time::Duration};

/// How a single chat command was dealt with
#[derive(Debug,Clone,PartialEq,Eq)]
pub enum InviteOutcome
{
    /// The event lacked a message or a player
    Ignored,
    /// The requester was told why the request couldn't be made
    Rejected(InviteRejection),
    /// The leader was notified and the requester told so
    Sent {
        leader: Player,
        playtime: PlaytimeResult,
    },
}

/// Forwards squad invite requests to squad leaders.
pub struct InviteToSquad
{
    config: InviteToSquadConfig,
    server: Arc<dyn GameServer>,
    warner: Warner,
    playtime: Arc<dyn PlaytimeLookup>,
}

impl InviteToSquad
{
    /// Construct the plugin, talking to the playtime service named in `config`.
    pub fn new(config: InviteToSquadConfig, server: Arc<dyn GameServer>, rcon: Arc<dyn Rcon>) -> Result<Self, ConfigError>
    {
        config.validate()?;

        let playtime = PlaytimeServiceApi::new(
            &config.playtime_service_api_url,
            config.playtime_service_api_secret_key.clone(),
            SQUAD_GAME_ID,
        ).map_err(|_| ConfigError::InvalidUrl(config.playtime_service_api_url.clone()))?;

        Ok(Self::with_playtime_lookup(config, server, rcon, Arc::new(playtime)))
    }

    /// Construct the plugin with a caller-supplied playtime source.
    pub fn with_playtime_lookup(config: InviteToSquadConfig,
                                server: Arc<dyn GameServer>,
                                rcon: Arc<dyn Rcon>,
                                playtime: Arc<dyn PlaytimeLookup>) -> Self
    {
        Self {
            config,
            server,
            warner: Warner::new(rcon),
            playtime,
        }
    }

    pub fn config(&self) -> &InviteToSquadConfig
    {
        &self.config
    }

    /// Send a single private warning to a player.
    pub async fn warn(&self, steam_id: SteamId, message: &str) -> Result<(), RconError>
    {
        self.warner.warn(steam_id, message).await
    }

    /// Send the same private warning several times; see [`Warner::warn_repeated`].
    pub async fn warn_repeated(&self, steam_id: SteamId, message: &str, repeat: usize, interval: Duration) -> Result<(), RconError>
    {
        self.warner.warn_repeated(steam_id, message, repeat, interval).await
    }

    async fn requester_playtime(&self, steam_id: SteamId) -> PlaytimeResult
    {
        match self.playtime.player_max_seconds_playtime(steam_id).await
        {
            Ok(playtime) => playtime,
            Err(error) => {
                tracing::debug!(%steam_id, %error, "Failed to get player max seconds playtime");
                PlaytimeResult::Unknown
            }
        }
    }

    /// Handle one chat command event.
    ///
    /// Only delivery failures are returned as errors; everything a player did
    /// wrong is answered with a warning and reported as [`InviteOutcome::Rejected`].
    pub async fn on_chat_command(&self, event: ChatCommandEvent) -> Result<InviteOutcome, HandlerError>
    {
        let (Some(message), Some(requester)) = (event.message, event.player) else {
            return Ok(InviteOutcome::Ignored);
        };
        if message.is_empty()
        {
            return Ok(InviteOutcome::Ignored);
        }

        let target = match validation::validate_request(self.server.as_ref(), &requester, &message)
        {
            Ok(target) => target,
            Err(rejection) => {
                tracing::trace!(steam_id = %requester.steam_id, ?rejection, "Invite request rejected");
                self.warn(requester.steam_id, &rejection.to_string()).await?;
                return Ok(InviteOutcome::Rejected(rejection));
            }
        };

        let playtime = self.requester_playtime(requester.steam_id).await;
        let leader = target.leader;

        self.warn(leader.steam_id, &messages::invite_request(&requester, playtime)).await?;
        self.warn(requester.steam_id, &messages::request_sent(&leader)).await?;

        tracing::debug!(
            requester = %requester.steam_id,
            leader = %leader.steam_id,
            squad = %target.squad.squad_id,
            ?playtime,
            "Sent squad invite request"
        );

        Ok(InviteOutcome::Sent { leader, playtime })
    }
}

#[async_trait]
impl ChatCommandHandler for InviteToSquad
{
    async fn handle(&self, event: ChatCommandEvent) -> Result<(), HandlerError>
    {
        self.on_chat_command(event).await.map(|_| ())
    }
}

#[async_trait]
impl Plugin for InviteToSquad
{
    fn name(&self) -> &'static str
    {
        "InviteToSquad"
    }

    fn description(&self) -> &'static str
    {
        "The plugin to send invite to squad leader"
    }

    fn default_enabled(&self) -> bool
    {
        false
    }

    async fn mount(self: Arc<Self>, dispatcher: &mut EventDispatcher)
    {
        let commands = self.config.unique_commands();

        for command in &commands
        {
            dispatcher.on(chat_command_event_name(command), self.clone());
        }

        tracing::info!(?commands, "Mounted squad invite commands");
    }
}
