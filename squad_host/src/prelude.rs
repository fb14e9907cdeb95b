//! Collects commonly-used names for convenient import

pub use crate::{
    id::*,
    state::{
        Player,
        Squad,
        SQUAD_CAPACITY,
    },
    errors::{
        LookupError,
        LookupResult,
        HandlerError,
    },
    server::GameServer,
    rcon::{
        Rcon,
        RconError,
    },
    event::{
        ChatCommandEvent,
        ChatCommandHandler,
        chat_command_event_name,
    },
    dispatcher::EventDispatcher,
    plugin::Plugin,
};
