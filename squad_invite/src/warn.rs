use squad_host::prelude::*;

use std::{sync::Arc, time::Duration};

/// Pause between repeats of the same warning
pub const DEFAULT_WARN_INTERVAL: Duration = Duration::from_secs(5);

const NO_BREAK_SPACE: &str = "\u{00A0}";

/// Sends private warnings through the host's RCON connection.
#[derive(Clone)]
pub struct Warner
{
    rcon: Arc<dyn Rcon>,
}

impl Warner
{
    pub fn new(rcon: Arc<dyn Rcon>) -> Self
    {
        Self { rcon }
    }

    /// Send a single warning.
    pub async fn warn(&self, steam_id: SteamId, message: &str) -> Result<(), RconError>
    {
        self.warn_repeated(steam_id, message, 1, DEFAULT_WARN_INTERVAL).await
    }

    /// Send the same warning `repeat` times, `interval` apart.
    ///
    /// The game drops a warning identical to the one on screen, so the n-th repeat
    /// (counting from zero) carries n trailing no-break spaces. There is no pause
    /// after the last send. Stops at the first delivery failure.
    pub async fn warn_repeated(&self, steam_id: SteamId, message: &str, repeat: usize, interval: Duration) -> Result<(), RconError>
    {
        for i in 0..repeat
        {
            let text = format!("{}{}", message, NO_BREAK_SPACE.repeat(i));
            self.rcon.warn(steam_id, &text).await?;

            if i + 1 != repeat
            {
                tokio::time::sleep(interval).await;
            }
        }
        Ok(())
    }
}
