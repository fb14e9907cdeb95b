use async_trait::async_trait;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use squad_host::prelude::*;

use std::sync::Arc;

/// Replies to every command with the number of squads on the sender's team
struct SquadCounter {
    squads: Vec<Squad>,
    replies: Mutex<Vec<(SteamId, String)>>,
}

impl GameServer for SquadCounter {
    fn squads(&self) -> Vec<Squad> {
        self.squads.clone()
    }

    fn players(&self) -> Vec<Player> {
        Vec::new()
    }
}

#[async_trait]
impl Rcon for SquadCounter {
    async fn warn(&self, steam_id: SteamId, message: &str) -> Result<(), RconError> {
        self.replies.lock().push((steam_id, message.to_owned()));
        Ok(())
    }
}

#[async_trait]
impl ChatCommandHandler for SquadCounter {
    async fn handle(&self, event: ChatCommandEvent) -> Result<(), HandlerError> {
        let player = event.player.ok_or("no player")?;
        let count = self.squads().iter().filter(|s| s.team_id == player.team_id).count();
        self.warn(player.steam_id, &count.to_string()).await?;
        Ok(())
    }
}

#[tokio::test]
async fn one_task_per_handler() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let counter = Arc::new(SquadCounter {
        squads: vec![
            Squad::new(SquadId::new(1), TeamId::new(1), "A", 3),
            Squad::new(SquadId::new(2), TeamId::new(1), "B", 9),
            Squad::new(SquadId::new(1), TeamId::new(2), "C", 1),
        ],
        replies: Mutex::new(Vec::new()),
    });

    let mut dispatcher = EventDispatcher::new();
    dispatcher.on(chat_command_event_name("squads"), counter.clone());
    dispatcher.on(chat_command_event_name("squads"), counter.clone());

    let player = Player::new(SteamId::new(1), "someone", TeamId::new(1));
    let handles = dispatcher.dispatch(ChatCommandEvent::new("squads", "", player.clone()));
    assert_eq!(handles.len(), 2);
    futures::future::join_all(handles).await;

    assert_eq!(
        *counter.replies.lock(),
        vec![(player.steam_id, "2".to_string()), (player.steam_id, "2".to_string())]
    );
}

#[tokio::test]
async fn failing_handler_does_not_affect_others() {
    let counter = Arc::new(SquadCounter { squads: Vec::new(), replies: Mutex::new(Vec::new()) });

    let mut dispatcher = EventDispatcher::new();
    dispatcher.on(chat_command_event_name("squads"), counter.clone());

    let no_player = ChatCommandEvent { command: "squads".into(), message: None, player: None };
    let player = Player::new(SteamId::new(9), "someone", TeamId::new(2));

    let mut handles = dispatcher.dispatch(no_player);
    handles.extend(dispatcher.dispatch(ChatCommandEvent::new("squads", "", player)));

    for result in futures::future::join_all(handles).await {
        assert!(result.is_ok());
    }
    assert_eq!(*counter.replies.lock(), vec![(SteamId::new(9), "0".to_string())]);
}
