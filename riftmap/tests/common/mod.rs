#![allow(dead_code)]
// Common test utilities for integration tests
use std::path::Path;
use std::sync::Once;
use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use riftmap::config::{AssetsConfig, RiotConfig};
use riftmap::features::feature_names;
use riftmap::projection::{EmbeddingModel, StandardScaler};

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

pub const PUUID: &str = "puuid-abc123";

pub fn riot_config(base_url: &str) -> RiotConfig {
    RiotConfig {
        api_key: Some("RGAPI-test-key".to_string()),
        base_url: base_url.to_string(),
        timeout_secs: 5,
        max_retries: 2,
    }
}

pub fn account_json(puuid: &str, game_name: &str, tag_line: &str) -> Value {
    json!({ "puuid": puuid, "gameName": game_name, "tagLine": tag_line })
}

/// Summary where the player (slot 2) scored `kills`/3/7 in a 30 minute game.
/// Slot and stat conventions match the in-crate unit-test payloads.
pub fn summary_json(puuid: &str, kills: u32) -> Value {
    let participant = |id: &str, kills: u32| {
        json!({
            "puuid": id, "kills": kills, "deaths": 3, "assists": 7,
            "totalDamageTaken": 18000, "wardsPlaced": 12, "wardsKilled": 3,
            "visionScore": 30, "goldEarned": 12000,
            "totalMinionsKilled": 210, "neutralMinionsKilled": 30,
            "championName": "Ahri",
            "challenges": { "damagePerMinute": 650.0, "teamDamagePercentage": 0.25, "kda": 3.3 }
        })
    };
    let participants: Vec<Value> = (1..=10)
        .map(|slot| {
            if slot == 2 {
                participant(puuid, kills)
            } else {
                participant(&format!("p{slot}"), 1)
            }
        })
        .collect();

    json!({
        "metadata": { "dataVersion": "2", "matchId": "EUW1_1" },
        "info": {
            "gameCreation": 1_699_998_200_000i64,
            "gameDuration": 1800,
            "gameEndTimestamp": 1_700_000_000_000i64,
            "queueId": 420,
            "participants": participants
        }
    })
}

/// Timeline of `frames` minutes with the player in slot 2 and every
/// participant at gold `500 + 400 * minute`, xp `300 * minute` and
/// `7 * minute` minions. The player kills their lane opponent (slot 7) at
/// minute 7.
pub fn timeline_json(puuid: &str, frames: usize) -> Value {
    let participants: Vec<Value> = (1..=10)
        .map(|slot| {
            let id = if slot == 2 {
                puuid.to_string()
            } else {
                format!("p{slot}")
            };
            json!({ "participantId": slot, "puuid": id })
        })
        .collect();

    let frames: Vec<Value> = (0..frames)
        .map(|minute| {
            let snapshots: serde_json::Map<String, Value> = (1..=10)
                .map(|slot| {
                    (
                        slot.to_string(),
                        json!({
                            "participantId": slot,
                            "totalGold": 500 + 400 * minute,
                            "xp": 300 * minute,
                            "minionsKilled": 7 * minute,
                            "jungleMinionsKilled": 0,
                            "level": 1 + minute / 2
                        }),
                    )
                })
                .collect();
            let events = if minute == 7 {
                json!([
                    { "type": "CHAMPION_KILL", "timestamp": 420000,
                      "killerId": 2, "victimId": 7, "assistingParticipantIds": [1] }
                ])
            } else {
                json!([{ "type": "WARD_PLACED", "creatorId": 3 }])
            };
            json!({ "timestamp": minute * 60000, "participantFrames": snapshots, "events": events })
        })
        .collect();

    json!({
        "metadata": { "matchId": "EUW1_1" },
        "info": { "frameInterval": 60000, "frames": frames, "participants": participants }
    })
}

/// Mounts account lookup and match window for one player.
pub async fn mount_player(server: &MockServer, game_name: &str, tag_line: &str, match_ids: &[&str]) {
    let encoded_name = game_name.replace(' ', "%20");
    Mock::given(method("GET"))
        .and(path(format!(
            "/riot/account/v1/accounts/by-riot-id/{encoded_name}/{tag_line}"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_json(
            PUUID, game_name, tag_line,
        )))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/lol/match/v5/matches/by-puuid/{PUUID}/ids")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(match_ids)))
        .mount(server)
        .await;
}

/// Mounts summary and timeline for one match.
pub async fn mount_match(server: &MockServer, match_id: &str, kills: u32) {
    mount_slow_match(server, match_id, kills, Duration::ZERO).await;
}

/// Like [`mount_match`], but both documents are served after `delay`.
pub async fn mount_slow_match(server: &MockServer, match_id: &str, kills: u32, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(format!("/lol/match/v5/matches/{match_id}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(summary_json(PUUID, kills))
                .set_delay(delay),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/lol/match/v5/matches/{match_id}/timeline")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(timeline_json(PUUID, 31))
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

/// Writes an identity scaler and a linear model whose two axes are kills and
/// deaths, plus a small pro-coordinates file.
pub fn write_assets(dir: &Path) -> AssetsConfig {
    let names = feature_names();
    let n = names.len();
    let axis = |metric: &str| -> Vec<f64> {
        names
            .iter()
            .map(|name| if name == metric { 1.0 } else { 0.0 })
            .collect()
    };

    let scaler = StandardScaler {
        feature_names: names.clone(),
        mean: vec![0.0; n],
        scale: vec![1.0; n],
    };
    let model = EmbeddingModel::Linear {
        components: vec![axis("kills"), axis("deaths")],
        offset: vec![0.0, 0.0],
    };

    let config = AssetsConfig::default().with_dir(dir);
    std::fs::write(config.scaler_path(), serde_json::to_vec(&scaler).unwrap()).unwrap();
    std::fs::write(config.model_path(), serde_json::to_vec(&model).unwrap()).unwrap();
    std::fs::write(
        config.pro_coords_path(),
        json!({ "Faker": [4.0, 2.0], "Caps": [5.5, 3.5] }).to_string(),
    )
    .unwrap();
    config
}

// Re-export commonly used crates for convenience
pub use tempfile;
pub use wiremock;
