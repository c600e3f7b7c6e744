//! Narrative flow for the slideshow: which stage is showing, the timed gate
//! between stages, the scenario's policy toggles and the payoff matrix.

pub mod controller;
pub mod decisions;
pub mod payoff;
pub mod stage;
pub mod transition;

pub use controller::*;
pub use decisions::*;
pub use payoff::*;
pub use stage::*;
pub use transition::*;
