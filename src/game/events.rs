use strum_macros::AsRefStr;

use crate::map::tile::TilePos;

/// Something observable that happened during a tick.
///
/// Events are returned from [`crate::game::Game::tick`] in the order they occurred, for
/// collaborators such as audio or a score display to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum GameEvent {
    PelletEaten { tile: TilePos },
    PowerPelletEaten { tile: TilePos },
    /// A frightened ghost was caught. `ghost` is its index in [`crate::game::Game::ghosts`].
    GhostEaten { ghost: usize },
    GhostRespawned { ghost: usize },
    /// Pac-Man was caught; `lives_left` already accounts for the lost life.
    PacmanDied { lives_left: u32 },
    AllPelletsCleared,
    GameOver { score: u32 },
}
