//! Game configuration.

/// Tunables for one game instance.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// How many full rounds to play. A round is complete once every player
    /// has drawn exactly once.
    pub total_rounds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { total_rounds: 3 }
    }
}
