//! Squad invitation plugin.
//!
//! Players who are not in a squad can type a chat command such as `!invite 4`
//! to ask the leader of squad 4 on their team to invite them. The leader gets a
//! private warning naming the player and, where the playtime service knows it,
//! how many hours they have played; the player gets a confirmation naming the
//! leader.
//!
//! # Request handling
//!
//! [`InviteToSquad::on_chat_command`] runs a fixed sequence of checks against the
//! host's live state (see [`validation`]). The first check to fail produces an
//! [`InviteRejection`], whose text is sent to the requester and which ends the
//! request. Only a request that passes every check reaches the playtime service.
//!
//! Playtime lookup failures are never shown to players: the notification to the
//! leader is simply sent without a playtime figure.

mod config;
pub use config::*;

pub mod messages;

pub mod validation;
pub use validation::{InviteRejection, InviteTarget};

mod warn;
pub use warn::*;

mod plugin;
pub use plugin::*;
