//! Deterministic movement and pathfinding core for a tile-based maze chase.

pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod formatter;
pub mod game;
pub mod map;
