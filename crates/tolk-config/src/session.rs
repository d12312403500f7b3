use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_max_sessions() -> usize {
    256
}

fn default_channel_capacity() -> usize {
    16
}

fn default_idle_timeout_seconds() -> u64 {
    30 * 60
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SessionConfig {
    /// Open browser sessions allowed at once
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
    /// Queued events per session
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
    /// Sessions with no request for this long are closed
    #[serde(default = "default_idle_timeout_seconds")]
    pub idle_timeout_seconds: u64,
}

impl SessionConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_seconds)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            channel_capacity: default_channel_capacity(),
            idle_timeout_seconds: default_idle_timeout_seconds(),
        }
    }
}
