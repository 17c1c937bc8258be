use glam::Vec2;
use strum_macros::AsRefStr;

/// The four cardinal directions.
///
/// The discriminants only serve as array indices; nothing depends on their magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, AsRefStr)]
#[repr(usize)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// The four cardinal directions.
    /// This is just a convenience constant for iterating over the directions.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Order in which path search expands neighbours. Fixed so ties always break the same way.
    pub const SEARCH_ORDER: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// Returns the direction as a usize (0-3). Constant time.
    /// This is useful for indexing into arrays.
    pub const fn as_usize(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Returns the direction as a unit vector in screen space (y grows downwards).
    pub fn as_vec2(self) -> Vec2 {
        self.into()
    }
}

impl From<Direction> for Vec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -Vec2::Y,
            Direction::Down => Vec2::Y,
            Direction::Left => -Vec2::X,
            Direction::Right => Vec2::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_usize_is_unique() {
        let mut seen = [false; 4];
        for dir in Direction::DIRECTIONS {
            assert!(!seen[dir.as_usize()]);
            seen[dir.as_usize()] = true;
        }
    }

    #[test]
    fn test_search_order_covers_all_directions() {
        for dir in Direction::DIRECTIONS {
            assert!(Direction::SEARCH_ORDER.contains(&dir));
        }
        assert_eq!(Direction::SEARCH_ORDER[0], Direction::Left);
        assert_eq!(Direction::SEARCH_ORDER[3], Direction::Down);
    }
}
