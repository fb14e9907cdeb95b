//! The checks an invite request must pass before anyone is notified.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the requester must not already be in a squad;
//! 2. the message must start with a non-zero squad number;
//! 3. that squad must exist on the requester's team;
//! 4. it must not be full;
//! 5. it must have a leader.

use crate::messages;
use squad_host::prelude::*;
use thiserror::Error;

/// Why an invite request was turned down. The `Display` text is what the
/// requester is told.
#[derive(Debug,Error,Clone,PartialEq,Eq)]
pub enum InviteRejection
{
    #[error("{}", messages::ALREADY_IN_SQUAD)]
    AlreadyInSquad,
    #[error("{}", messages::ENTER_SQUAD_NUMBER)]
    NoSquadNumber,
    #[error("{}", messages::squad_not_found(.0))]
    SquadNotFound(i64),
    #[error("{}", messages::squad_full(.0))]
    SquadFull(SquadId),
    #[error("{}", messages::leader_not_found(.0))]
    LeaderNotFound(SquadId),
}

/// A squad which passed every check, along with its leader
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct InviteTarget
{
    pub squad: Squad,
    pub leader: Player,
}

/// Read a squad number from the start of a chat message.
///
/// Leading whitespace and a sign are accepted, and anything after the leading
/// digits is ignored, so `" 4 please"` is squad 4. Returns `None` when there are
/// no digits or the number is zero; squad 0 can't be asked for.
pub fn parse_squad_number(message: &str) -> Option<i64>
{
    let text = message.trim_start();
    let (negative, rest) = match text.as_bytes().first()
    {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0
    {
        return None;
    }

    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    let number = if negative { -magnitude } else { magnitude };

    (number != 0).then_some(number)
}

fn check_not_in_squad(requester: &Player) -> Result<(), InviteRejection>
{
    match requester.squad_id
    {
        Some(_) => Err(InviteRejection::AlreadyInSquad),
        None => Ok(()),
    }
}

fn check_squad_number(message: &str) -> Result<i64, InviteRejection>
{
    parse_squad_number(message).ok_or(InviteRejection::NoSquadNumber)
}

fn find_squad(server: &dyn GameServer, number: i64, team_id: TeamId) -> Result<Squad, InviteRejection>
{
    let squad_id = u32::try_from(number)
                      .map(SquadId::new)
                      .map_err(|_| InviteRejection::SquadNotFound(number))?;

    server.squad(squad_id, team_id).map_err(|_| InviteRejection::SquadNotFound(number))
}

fn check_not_full(squad: &Squad) -> Result<(), InviteRejection>
{
    // Exact match only: a squad reported above capacity is not refused
    if squad.size == SQUAD_CAPACITY
    {
        Err(InviteRejection::SquadFull(squad.squad_id))
    }
    else
    {
        Ok(())
    }
}

fn find_leader(server: &dyn GameServer, squad: &Squad) -> Result<Player, InviteRejection>
{
    server.squad_leader(squad.squad_id, squad.team_id)
          .map_err(|_| InviteRejection::LeaderNotFound(squad.squad_id))
}

/// Run every check for a request from `requester` with chat text `message`.
pub fn validate_request(server: &dyn GameServer, requester: &Player, message: &str) -> Result<InviteTarget, InviteRejection>
{
    check_not_in_squad(requester)?;
    let number = check_squad_number(message)?;
    let squad = find_squad(server, number, requester.team_id)?;
    check_not_full(&squad)?;
    let leader = find_leader(server, &squad)?;

    Ok(InviteTarget { squad, leader })
}
