//! Game configuration

use std::time::Duration;

/// Pause between a finished game and the automatic restart
pub const DEFAULT_RESTART_DELAY_MS: u64 = 2000;

/// Session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// How long the result stays on screen before the board is cleared
    pub restart_delay: Duration,
}

impl GameConfig {
    #[must_use]
    pub fn with_restart_delay_ms(restart_delay_ms: u64) -> Self {
        Self {
            restart_delay: Duration::from_millis(restart_delay_ms),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_restart_delay_ms(DEFAULT_RESTART_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_restart_delay() {
        assert_eq!(GameConfig::default().restart_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_custom_restart_delay() {
        let config = GameConfig::with_restart_delay_ms(250);
        assert_eq!(config.restart_delay, Duration::from_millis(250));
    }
}
