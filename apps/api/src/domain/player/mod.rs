// Player domain module
// Contains the player value object and its validated field types

#![allow(clippy::module_inception)]

pub mod player;
pub mod value_objects;

pub use player::Player;
pub use value_objects::{Age, PlayerName};
