use super::*;
use std::sync::Arc;

/// Live timing state of one application of an [`EffectDefinition`].
///
/// Plain record owned by an [`EffectHandler`], which updates the fields directly.
#[derive(Clone, Debug)]
pub struct EffectInstance {
    pub effect: Arc<EffectDefinition>,
    /// Seconds left until the next application.
    pub current_tick_rate: f32,
    /// Applications performed so far. Never decreases.
    pub current_tick_amount: u32,
}

impl EffectInstance {
    pub fn new(effect: Arc<EffectDefinition>) -> Self {
        Self {
            current_tick_rate: effect.tick_rate(),
            current_tick_amount: 0,
            effect,
        }
    }

    pub fn is_due(&self) -> bool {
        self.current_tick_rate <= 0.0
    }

    pub fn is_expired(&self) -> bool {
        match self.effect.rate_type() {
            RateType::OneShot => self.current_tick_amount >= 1,
            RateType::OverTime => self.current_tick_amount >= self.effect.tick_amount(),
        }
    }
}
