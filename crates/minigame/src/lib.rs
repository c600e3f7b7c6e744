//! Airspace-defence minigame: falling targets spawned on a fixed cadence,
//! moved every frame and shot down by point-and-click.
//!
//! Targets live as entities in a `hecs::World` owned by [`AirplaneGame`].
//! The host calls [`AirplaneGame::advance`] once per display frame with the
//! frame timestamp in milliseconds and forwards clicks, already converted to
//! playfield units, to [`AirplaneGame::resolve_shot`].

pub mod components;
pub mod game;
pub mod score;
pub mod spawner;
pub mod tuning;

pub use components::*;
pub use game::*;
pub use score::*;
pub use spawner::*;
pub use tuning::*;
