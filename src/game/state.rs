use strum_macros::AsRefStr;

/// The overall phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr)]
pub enum GamePhase {
    #[default]
    Playing,
    Paused,
    /// Every pellet is gone; waiting for the next level.
    LevelComplete,
    /// No lives remain.
    GameOver,
}

impl GamePhase {
    /// Whether ticks still advance the simulation in this phase.
    pub fn is_running(self) -> bool {
        self == GamePhase::Playing
    }

    /// Whether the current level is over, one way or the other.
    pub fn is_finished(self) -> bool {
        matches!(self, GamePhase::LevelComplete | GamePhase::GameOver)
    }
}
