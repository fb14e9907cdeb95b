//! Player-facing message texts.

use playtime_client::PlaytimeResult;
use squad_host::prelude::*;
use std::fmt::Display;

pub const ALREADY_IN_SQUAD: &str = "Вы и так уже в отряде";
pub const ENTER_SQUAD_NUMBER: &str = "Введите номер сквада";

pub fn squad_not_found(squad_number: impl Display) -> String
{
    format!("Сквад с номером {} не найден", squad_number)
}

pub fn squad_full(squad_id: impl Display) -> String
{
    format!("Сквад с номером {} уже полный", squad_id)
}

pub fn leader_not_found(squad_id: impl Display) -> String
{
    format!("Не смогли найти сквадного отряда номер {}\nПовторите попытку позже", squad_id)
}

/// The notification sent to a squad leader on behalf of `requester`
pub fn invite_request(requester: &Player, playtime: PlaytimeResult) -> String
{
    match playtime.whole_hours()
    {
        Some(hours) => format!("В сквад просится {}\nВремя в игре {} часов", requester.name, hours),
        None => format!("В сквад просится {}", requester.name),
    }
}

/// The confirmation sent back to the requester
pub fn request_sent(leader: &Player) -> String
{
    format!("Ваша просьба отправлена сквадному {}", leader.name)
}
