use crate::prelude::*;

use async_trait::async_trait;

const CHAT_COMMAND_PREFIX: &str = "CHAT_COMMAND:";

/// The event name under which a chat command is dispatched
pub fn chat_command_event_name(command: &str) -> String
{
    format!("{}{}", CHAT_COMMAND_PREFIX, command)
}

/// A chat command typed by a player, e.g. `!invite 4`.
///
/// The host may not be able to fill in every field; handlers are expected to
/// ignore events which lack what they need.
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct ChatCommandEvent
{
    /// The command keyword, without any prefix character
    pub command: String,
    /// The rest of the chat line after the command
    pub message: Option<String>,
    /// The player who sent the command
    pub player: Option<Player>,
}

impl ChatCommandEvent
{
    pub fn new(command: impl Into<String>, message: impl Into<String>, player: Player) -> Self
    {
        Self {
            command: command.into(),
            message: Some(message.into()),
            player: Some(player),
        }
    }

    /// The name this event is dispatched under
    pub fn event_name(&self) -> String
    {
        chat_command_event_name(&self.command)
    }
}

/// Something that can respond to chat command events.
#[async_trait]
pub trait ChatCommandHandler: Send + Sync + 'static
{
    async fn handle(&self, event: ChatCommandEvent) -> Result<(), HandlerError>;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn event_names()
    {
        assert_eq!(chat_command_event_name("invite"), "CHAT_COMMAND:invite");
        assert_eq!(chat_command_event_name("инвайт"), "CHAT_COMMAND:инвайт");

        let player = Player::new(SteamId::new(1), "someone", TeamId::new(1));
        let event = ChatCommandEvent::new("inv", "3", player);
        assert_eq!(event.event_name(), "CHAT_COMMAND:inv");
    }
}
