//! Host-facing model for game server plugins.
//!
//! The administration host owns the live server state (players, squads), the
//! RCON connection used to deliver messages, and the chat command event stream.
//! This crate defines the seams through which plugins see those things:
//!
//! - [`GameServer`](server::GameServer) gives a read-only view of the current
//!   players and squads. Every call re-reads the host's state; nothing is
//!   cached between events.
//! - [`Rcon`](rcon::Rcon) delivers private warning messages to a player.
//! - [`EventDispatcher`](dispatcher::EventDispatcher) binds `CHAT_COMMAND:<name>`
//!   events to [`ChatCommandHandler`](event::ChatCommandHandler)s, and runs each
//!   handler invocation in its own task.
//! - [`Plugin`](plugin::Plugin) is implemented by anything that can be mounted
//!   onto a dispatcher.

pub mod prelude;

pub mod id;
pub mod state;
pub mod errors;

pub mod server;
pub mod rcon;

pub mod event;
pub mod dispatcher;
pub mod plugin;
