//! Status effects: timed or instantaneous changes to a target's attributes.
//!
//! An [`EffectDefinition`] is authored once (usually in `effects.ron`) and shared
//! behind an [`Arc`](std::sync::Arc). Every time something applies it, the target's
//! [`EffectHandler`] creates a fresh [`EffectInstance`] with its own countdown.

use serde::{Deserialize, Serialize};

mod handler;
mod instance;

pub use handler::*;
pub use instance::*;

// ============================================================================
// DEFINITION
// ============================================================================

/// Which attribute of the target an effect mutates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetArea {
    Health,
    /// Anything a target chooses to expose through [`EffectTarget`].
    Custom(String),
}

/// Whether an effect fires once or repeatedly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateType {
    #[default]
    OneShot,
    OverTime,
}

/// Immutable effect configuration.
///
/// Example RON:
/// ```ron
/// (
///     target_area: Health,
///     rate_type: OverTime,
///     amount: -5.0,
///     tick_rate: 1.0,
///     tick_amount: 3,
/// )
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectDefinition {
    target_area: TargetArea,
    #[serde(default)]
    rate_type: RateType,
    amount: f32,
    /// Seconds between applications.
    #[serde(default)]
    tick_rate: f32,
    /// Applications before an [`RateType::OverTime`] effect expires.
    #[serde(default)]
    tick_amount: u32,
}

impl EffectDefinition {
    pub fn new(
        target_area: TargetArea,
        rate_type: RateType,
        amount: f32,
        tick_rate: f32,
        tick_amount: u32,
    ) -> Self {
        Self {
            target_area,
            rate_type,
            amount,
            tick_rate,
            tick_amount,
        }
    }

    /// Applies `amount` once, as soon as the handler sees it.
    pub fn one_shot(target_area: TargetArea, amount: f32) -> Self {
        Self::new(target_area, RateType::OneShot, amount, 0.0, 0)
    }

    /// Applies `amount` every `tick_rate` seconds, `tick_amount` times.
    pub fn over_time(target_area: TargetArea, amount: f32, tick_rate: f32, tick_amount: u32) -> Self {
        Self::new(target_area, RateType::OverTime, amount, tick_rate, tick_amount)
    }

    pub fn target_area(&self) -> &TargetArea {
        &self.target_area
    }

    pub fn rate_type(&self) -> RateType {
        self.rate_type
    }

    /// Signed magnitude: negative damages, positive heals.
    pub fn amount(&self) -> f32 {
        self.amount
    }

    pub fn tick_rate(&self) -> f32 {
        self.tick_rate
    }

    pub fn tick_amount(&self) -> u32 {
        self.tick_amount
    }
}

// ============================================================================
// TARGET
// ============================================================================

/// A single attribute an effect can change.
pub trait Affectable {
    /// Apply a signed delta. Bounds, death and the like are the attribute's business.
    fn change(&mut self, amount: f32);
}

/// Maps a [`TargetArea`] to the attribute that handles it.
///
/// New areas are supported by answering them here; [`EffectHandler`] never
/// has to know about them.
pub trait EffectTarget {
    fn attribute_mut(&mut self, area: &TargetArea) -> Option<&mut dyn Affectable>;
}

impl Affectable for f32 {
    fn change(&mut self, amount: f32) {
        *self += amount;
    }
}
