//! Engine-independent gameplay logic.
//!
//! Everything here is plain data plus the rules that drive it; the Bevy crate
//! wraps these types in components and feeds them time, input and physics.

pub mod effects;
pub mod look;
pub mod movement;
pub mod weapon;
