//! Synchronization settings. Request limits and catch-up bounds.

use serde::Deserialize;

pub const DEFAULT_PTS_TOTAL_LIMIT: i32 = 100;
pub const DEFAULT_CHANNEL_DIFFERENCE_LIMIT: i32 = 100;
pub const DEFAULT_MAX_CATCH_UP_PASSES: u32 = 32;
pub const DEFAULT_RESYNC_DIALOGS_LIMIT: i32 = 100;
/// Capacity of the request queue between callers and the transport.
pub const DEFAULT_RPC_QUEUE_SIZE: usize = 64;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SyncConfig {
    /// Upper bound on events per `updates.getDifference` page. Read from TG_UPDATE_SYNC_PTS_TOTAL_LIMIT.
    #[serde(default)]
    pub pts_total_limit: Option<i32>,

    /// Messages per `updates.getChannelDifference` page.
    #[serde(default)]
    pub channel_difference_limit: Option<i32>,

    /// Passes before catch-up gives up on a server that keeps returning slices.
    #[serde(default)]
    pub max_catch_up_passes: Option<u32>,

    /// Dialogs fetched when a gap forces a full resync.
    #[serde(default)]
    pub resync_dialogs_limit: Option<i32>,

    #[serde(default)]
    pub rpc_queue_size: Option<usize>,
}

impl SyncConfig {
    /// Load from `.env`, environment (`TG_UPDATE_SYNC_*`) and an optional
    /// file named by `TG_UPDATE_SYNC_CONFIG`.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("TG_UPDATE_SYNC_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("TG_UPDATE_SYNC").try_parsing(true));
        c.build()?.try_deserialize()
    }

    pub fn pts_total_limit_or_default(&self) -> i32 {
        self.pts_total_limit.unwrap_or(DEFAULT_PTS_TOTAL_LIMIT)
    }

    pub fn channel_difference_limit_or_default(&self) -> i32 {
        self.channel_difference_limit
            .unwrap_or(DEFAULT_CHANNEL_DIFFERENCE_LIMIT)
    }

    /// Never below 1, so catch-up always performs at least one pass.
    pub fn max_catch_up_passes_or_default(&self) -> u32 {
        self.max_catch_up_passes
            .unwrap_or(DEFAULT_MAX_CATCH_UP_PASSES)
            .max(1)
    }

    pub fn resync_dialogs_limit_or_default(&self) -> i32 {
        self.resync_dialogs_limit
            .unwrap_or(DEFAULT_RESYNC_DIALOGS_LIMIT)
    }

    pub fn rpc_queue_size_or_default(&self) -> usize {
        self.rpc_queue_size.unwrap_or(DEFAULT_RPC_QUEUE_SIZE)
    }
}
