//! Locomotion rules: movement states, jump gating and ground classification.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// What the character is doing with its legs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementState {
    #[default]
    Walking,
    Sprinting,
    Crouching,
    Jumping,
}

/// Input-driven transitions of [`MovementState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementInput {
    SprintStart,
    SprintEnd,
    CrouchStart,
    CrouchEnd,
    Jump,
    Land,
}

/// Target speed for each [`MovementState`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementSpeeds {
    pub walk: f32,
    pub sprint: f32,
    pub crouch: f32,
    pub air: f32,
}

impl MovementState {
    pub fn next(self, input: MovementInput) -> Self {
        use MovementInput::*;
        match (self, input) {
            (_, SprintStart) => Self::Sprinting,
            (_, CrouchStart) => Self::Crouching,
            (_, SprintEnd) | (_, CrouchEnd) => Self::Walking,
            (_, Jump) => Self::Jumping,
            (Self::Jumping, Land) => Self::Walking,
            (state, Land) => state,
        }
    }

    pub fn speed(self, speeds: &MovementSpeeds) -> f32 {
        match self {
            Self::Walking => speeds.walk,
            Self::Sprinting => speeds.sprint,
            Self::Crouching => speeds.crouch,
            Self::Jumping => speeds.air,
        }
    }

    pub fn is_crouching(self) -> bool {
        self == Self::Crouching
    }
}

// ============================================================================
// JUMP
// ============================================================================

/// Only lets a jump through when grounded and the cooldown has run out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JumpGate {
    pub cooldown: f32,
    remaining: f32,
}

impl JumpGate {
    pub fn new(cooldown: f32) -> Self {
        Self {
            cooldown,
            remaining: 0.0,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Consumes the jump and restarts the cooldown if one is allowed.
    pub fn try_jump(&mut self, grounded: bool) -> bool {
        if !grounded || !self.is_ready() {
            return false;
        }
        self.remaining = self.cooldown;
        true
    }

    pub fn tick(&mut self, delta: f32) {
        self.remaining = (self.remaining - delta).max(0.0);
    }
}

// ============================================================================
// GROUND PROBE
// ============================================================================

/// Below this a surface counts as level ground.
const FLAT_EPSILON_DEG: f32 = 0.01;

/// Result of the downward ground ray.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GroundProbe {
    #[default]
    Airborne,
    Flat,
    /// Walkable incline, angle in degrees.
    Slope { angle: f32 },
    /// Hit something steeper than the configured maximum.
    TooSteep { angle: f32 },
}

impl GroundProbe {
    /// Classify a hit normal. `None` means the ray hit nothing.
    pub fn classify(normal: Option<Vec3>, max_slope_angle: f32) -> Self {
        let Some(normal) = normal else {
            return Self::Airborne;
        };
        let angle = surface_angle(normal);
        if angle < FLAT_EPSILON_DEG {
            Self::Flat
        } else if angle < max_slope_angle {
            Self::Slope { angle }
        } else {
            Self::TooSteep { angle }
        }
    }

    pub fn is_grounded(&self) -> bool {
        !matches!(self, Self::Airborne)
    }

    pub fn on_slope(&self) -> bool {
        matches!(self, Self::Slope { .. })
    }
}

/// Angle in degrees between world up and a surface normal.
pub fn surface_angle(normal: Vec3) -> f32 {
    Vec3::Y.angle_between(normal).to_degrees()
}
