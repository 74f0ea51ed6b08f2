//! Live channel endpoint models
//!
//! A channel is represented to clients purely by the pair of WebRTC
//! endpoints used to publish to it (WHIP) and to watch it (WHEP).

use serde::{Deserialize, Serialize};
use whipcast_shared_config::StreamConfig;

/// Publish and playback endpoints returned when a channel is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelEndpoints {
    /// WHIP endpoint a broadcaster publishes to
    pub whip_url: String,
    /// WHEP endpoint a viewer plays from
    pub whep_url: String,
}

impl ChannelEndpoints {
    pub fn new(whip_url: impl Into<String>, whep_url: impl Into<String>) -> Self {
        Self {
            whip_url: whip_url.into(),
            whep_url: whep_url.into(),
        }
    }
}

impl From<&StreamConfig> for ChannelEndpoints {
    fn from(config: &StreamConfig) -> Self {
        Self::new(&config.whip_url, &config.whep_url)
    }
}
