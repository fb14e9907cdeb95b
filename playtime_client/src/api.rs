use super::*;

use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

/// Header carrying the shared secret on every request
pub const SECRET_KEY_HEADER: &str = "X-Secret-Key";

#[derive(Debug,Deserialize)]
struct PlaytimeResponse
{
    #[serde(default)]
    playtimes: Vec<PlaytimeEntry>,
}

#[derive(Debug,Deserialize)]
struct PlaytimeEntry
{
    #[allow(dead_code)]
    #[serde(default)]
    source: String,
    seconds: Option<f64>,
}

impl PlaytimeResponse
{
    fn max_seconds(&self) -> PlaytimeResult
    {
        self.playtimes
            .iter()
            .filter_map(|entry| entry.seconds)
            .filter(|seconds| seconds.is_finite() && *seconds >= 0.0)
            .fold(None, |max: Option<f64>, seconds| Some(max.map_or(seconds, |m| m.max(seconds))))
            .map_or(PlaytimeResult::Unknown, |seconds| PlaytimeResult::Known(seconds.floor() as u64))
    }
}

/// HTTP client for the playtime service.
///
/// Requests are `GET {base}/v1/games/{game}/players/{steam_id}/playtime`,
/// authenticated by the [`SECRET_KEY_HEADER`] header.
pub struct PlaytimeServiceApi
{
    client: reqwest::Client,
    base_url: Url,
    secret_key: String,
    game_id: u64,
}

impl PlaytimeServiceApi
{
    pub fn new(base_url: &str, secret_key: impl Into<String>, game_id: u64) -> Result<Self, PlaytimeError>
    {
        Self::with_client(reqwest::Client::new(), base_url, secret_key, game_id)
    }

    /// Construct using an existing `reqwest` client, e.g. one shared with other
    /// plugins or configured with a timeout.
    pub fn with_client(client: reqwest::Client, base_url: &str, secret_key: impl Into<String>, game_id: u64) -> Result<Self, PlaytimeError>
    {
        let base_url = Url::parse(base_url).map_err(|_| PlaytimeError::InvalidUrl(base_url.to_owned()))?;
        if base_url.cannot_be_a_base()
        {
            return Err(PlaytimeError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            client,
            base_url,
            secret_key: secret_key.into(),
            game_id,
        })
    }

    pub fn game_id(&self) -> u64
    {
        self.game_id
    }

    /// The URL queried for the given player
    pub fn playtime_url(&self, steam_id: SteamId) -> Result<Url, PlaytimeError>
    {
        let game_id = self.game_id.to_string();
        let steam_id = steam_id.to_string();

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PlaytimeError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["v1", "games", game_id.as_str(), "players", steam_id.as_str(), "playtime"]);
        Ok(url)
    }
}

impl std::fmt::Debug for PlaytimeServiceApi
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.debug_struct("PlaytimeServiceApi")
            .field("base_url", &self.base_url.as_str())
            .field("game_id", &self.game_id)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PlaytimeLookup for PlaytimeServiceApi
{
    async fn player_max_seconds_playtime(&self, steam_id: SteamId) -> Result<PlaytimeResult, PlaytimeError>
    {
        let url = self.playtime_url(steam_id)?;
        tracing::trace!(%url, "Requesting playtime");

        let response = self.client
                           .get(url)
                           .header(SECRET_KEY_HEADER, &self.secret_key)
                           .send()
                           .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND
        {
            return Ok(PlaytimeResult::Unknown);
        }
        if !status.is_success()
        {
            return Err(PlaytimeError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: PlaytimeResponse = serde_json::from_slice(&body)?;

        Ok(parsed.max_seconds())
    }
}
