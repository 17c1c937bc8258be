pub mod ghost;
pub mod movement;
pub mod pacman;
pub mod pathfinding;
pub mod targeting;
pub mod r#trait;
