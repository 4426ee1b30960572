use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client, StatusCode,
};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::RiotConfig;
use crate::error::{Result, RiftmapError};
use crate::riot::source::{MatchDataSource, MatchId, PlayerIdentity, PlayerKey};
use crate::riot::types::{Account, MatchSummary, MatchTimeline};

const RIOT_TOKEN_HEADER: &str = "X-Riot-Token";
const RANKED_QUEUE_TYPE: &str = "ranked";
const MAX_RETRY_AFTER_SECS: u64 = 5;

/// HTTP client for the regional match-data API.
///
/// The shared credential is installed as a default header, so every request
/// carries it. Cloning is cheap and shares the connection pool.
#[derive(Clone)]
pub struct RiotApiClient {
    client: Client,
    base_url: Url,
    max_retries: u32,
}

impl RiotApiClient {
    pub fn new(config: &RiotConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        match &config.api_key {
            Some(api_key) => {
                headers.insert(
                    RIOT_TOKEN_HEADER,
                    HeaderValue::from_str(api_key).map_err(|e| {
                        RiftmapError::Internal(format!("Invalid API key header: {e}"))
                    })?,
                );
            }
            None => {
                tracing::warn!("RIOT_API_KEY is not set; upstream requests will be unauthenticated");
            }
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| RiftmapError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: Url::parse(&config.base_url)?,
            max_retries: config.max_retries,
        })
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RiftmapError::Internal(format!("Invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let mut attempt = 0;
        loop {
            let response = self.client.get(url.clone()).send().await.map_err(|e| {
                RiftmapError::upstream(None, format!("Request to {} failed: {e}", url.path()))
            })?;
            let status = response.status();

            if status.is_success() {
                return response.json::<T>().await.map_err(|e| {
                    RiftmapError::upstream(
                        Some(status.as_u16()),
                        format!("Malformed payload from {}: {e}", url.path()),
                    )
                });
            }

            if status == StatusCode::TOO_MANY_REQUESTS && attempt < self.max_retries {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(1)
                    .min(MAX_RETRY_AFTER_SECS);
                attempt += 1;
                tracing::debug!(
                    path = url.path(),
                    attempt,
                    retry_after,
                    "Upstream rate limited, retrying"
                );
                tokio::time::sleep(Duration::from_secs(retry_after)).await;
                continue;
            }

            let body = response.text().await.unwrap_or_default();
            return Err(RiftmapError::upstream(
                Some(status.as_u16()),
                format!("{} returned {status}: {body}", url.path()),
            ));
        }
    }
}

#[async_trait]
impl MatchDataSource for RiotApiClient {
    async fn resolve_player(&self, identity: &PlayerIdentity) -> Result<PlayerKey> {
        let url = self.endpoint(&[
            "riot",
            "account",
            "v1",
            "accounts",
            "by-riot-id",
            identity.game_name(),
            identity.tag_line(),
        ])?;
        tracing::debug!(player = %identity, "Resolving player");

        let account: Account = match self.get_json(url).await {
            Ok(account) => account,
            Err(RiftmapError::Upstream {
                status: Some(404), ..
            }) => return Err(RiftmapError::PlayerNotFound(identity.to_string())),
            Err(e) => return Err(e),
        };

        if account.puuid.is_empty() {
            return Err(RiftmapError::PlayerNotFound(identity.to_string()));
        }
        Ok(PlayerKey(account.puuid))
    }

    async fn recent_ranked_match_ids(
        &self,
        player: &PlayerKey,
        count: usize,
    ) -> Result<Vec<MatchId>> {
        let mut url = self.endpoint(&["lol", "match", "v5", "matches", "by-puuid", player.as_str(), "ids"])?;
        url.query_pairs_mut()
            .append_pair("type", RANKED_QUEUE_TYPE)
            .append_pair("start", "0")
            .append_pair("count", &count.to_string());

        let mut ids: Vec<MatchId> = self.get_json(url).await?;
        ids.truncate(count);
        Ok(ids)
    }

    async fn match_summary(&self, match_id: &MatchId) -> Result<MatchSummary> {
        let url = self.endpoint(&["lol", "match", "v5", "matches", match_id.as_str()])?;
        self.get_json(url).await
    }

    async fn match_timeline(&self, match_id: &MatchId) -> Result<MatchTimeline> {
        let url = self.endpoint(&["lol", "match", "v5", "matches", match_id.as_str(), "timeline"])?;
        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> RiotApiClient {
        RiotApiClient::new(&RiotConfig {
            api_key: Some("RGAPI-test".to_string()),
            base_url: base_url.to_string(),
            ..RiotConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = client("https://europe.api.riotgames.com");
        let url = client
            .endpoint(&["riot", "account", "v1", "accounts", "by-riot-id", "Hide on bush", "KR 1"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://europe.api.riotgames.com/riot/account/v1/accounts/by-riot-id/Hide%20on%20bush/KR%201"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let client = client("http://127.0.0.1:9000/proxy/");
        let url = client.endpoint(&["lol", "match"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/proxy/lol/match");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = RiotApiClient::new(&RiotConfig {
            base_url: "not a url".to_string(),
            ..RiotConfig::default()
        });
        assert!(matches!(result, Err(RiftmapError::UrlParse(_))));
    }
}
