#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use playtime_client::*;
use squad_host::prelude::*;
use squad_invite::*;

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

pub const TEAM_ONE: TeamId = TeamId::new(1);
pub const TEAM_TWO: TeamId = TeamId::new(2);

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Server state held in memory, counting how often it is read
#[derive(Default)]
pub struct FakeServer {
    pub squads: RwLock<Vec<Squad>>,
    pub players: RwLock<Vec<Player>>,
    pub squad_reads: AtomicUsize,
    pub player_reads: AtomicUsize,
}

impl FakeServer {
    pub fn add_squad(&self, squad: Squad) {
        self.squads.write().push(squad);
    }

    pub fn add_player(&self, player: Player) {
        self.players.write().push(player);
    }

    pub fn squad_reads(&self) -> usize {
        self.squad_reads.load(Ordering::SeqCst)
    }

    pub fn player_reads(&self) -> usize {
        self.player_reads.load(Ordering::SeqCst)
    }
}

impl GameServer for FakeServer {
    fn squads(&self) -> Vec<Squad> {
        self.squad_reads.fetch_add(1, Ordering::SeqCst);
        self.squads.read().clone()
    }

    fn players(&self) -> Vec<Player> {
        self.player_reads.fetch_add(1, Ordering::SeqCst);
        self.players.read().clone()
    }
}

/// Records every warning instead of delivering it
#[derive(Default)]
pub struct RecordingRcon {
    pub sent: Mutex<Vec<(SteamId, String)>>,
    pub broken: bool,
}

impl RecordingRcon {
    pub fn sent(&self) -> Vec<(SteamId, String)> {
        self.sent.lock().clone()
    }

    pub fn sent_to(&self, steam_id: SteamId) -> Vec<String> {
        self.sent
            .lock()
            .iter()
            .filter(|(id, _)| *id == steam_id)
            .map(|(_, text)| text.clone())
            .collect()
    }
}

#[async_trait]
impl Rcon for RecordingRcon {
    async fn warn(&self, steam_id: SteamId, message: &str) -> Result<(), RconError> {
        if self.broken {
            return Err(RconError::NotConnected);
        }
        self.sent.lock().push((steam_id, message.to_string()));
        Ok(())
    }
}

/// Answers every playtime lookup the same way
pub struct FakePlaytime {
    answer: Option<PlaytimeResult>,
    pub lookups: AtomicUsize,
}

impl FakePlaytime {
    pub fn known(seconds: u64) -> Self {
        Self { answer: Some(PlaytimeResult::Known(seconds)), lookups: AtomicUsize::new(0) }
    }

    pub fn unknown() -> Self {
        Self { answer: Some(PlaytimeResult::Unknown), lookups: AtomicUsize::new(0) }
    }

    pub fn failing() -> Self {
        Self { answer: None, lookups: AtomicUsize::new(0) }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlaytimeLookup for FakePlaytime {
    async fn player_max_seconds_playtime(&self, _steam_id: SteamId) -> Result<PlaytimeResult, PlaytimeError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.answer.ok_or(PlaytimeError::Status(503))
    }
}

pub struct Harness {
    pub server: Arc<FakeServer>,
    pub rcon: Arc<RecordingRcon>,
    pub playtime: Arc<FakePlaytime>,
    pub plugin: Arc<InviteToSquad>,
}

impl Harness {
    pub fn new(playtime: FakePlaytime) -> Self {
        Self::with_rcon(playtime, RecordingRcon::default())
    }

    pub fn with_rcon(playtime: FakePlaytime, rcon: RecordingRcon) -> Self {
        init_tracing();

        let server = Arc::new(FakeServer::default());
        let rcon = Arc::new(rcon);
        let playtime = Arc::new(playtime);
        let config = InviteToSquadConfig::new("http://playtime.local", "secret");

        let plugin = Arc::new(InviteToSquad::with_playtime_lookup(
            config,
            server.clone(),
            rcon.clone(),
            playtime.clone(),
        ));

        Self { server, rcon, playtime, plugin }
    }
}

pub fn requester() -> Player {
    Player::new(SteamId::new(76561198000000001), "Rookie", TEAM_ONE)
}

pub fn leader_of(squad_id: u32, team_id: TeamId) -> Player {
    Player::new(SteamId::new(76561198000000100 + squad_id as u64), format!("Lead{}", squad_id), team_id)
        .in_squad(SquadId::new(squad_id))
        .leading()
}
