use super::*;
use std::sync::Arc;
use tracing::{trace, warn};

/// The set of effects currently running on one target.
///
/// Instances are kept in insertion order, so a frame always processes them
/// in the same sequence.
#[derive(Clone, Debug, Default)]
pub struct EffectHandler {
    active: Vec<EffectInstance>,
}

impl EffectHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new instance of `effect`. Repeated calls stack independent timers.
    pub fn add_effect(&mut self, effect: Arc<EffectDefinition>) {
        self.active.push(EffectInstance::new(effect));
    }

    /// Advance every instance by `delta_time` seconds, apply the ones that came
    /// due and drop the ones that are done.
    ///
    /// Returns how many applications happened.
    pub fn advance(&mut self, delta_time: f32, target: &mut impl EffectTarget) -> usize {
        if self.active.is_empty() {
            return 0;
        }

        let mut applied = 0;
        for instance in self.active.iter_mut() {
            if instance.current_tick_rate > 0.0 {
                instance.current_tick_rate -= delta_time;
            }
            if !instance.is_due() {
                continue;
            }

            let effect = &instance.effect;
            match target.attribute_mut(effect.target_area()) {
                Some(attribute) => attribute.change(effect.amount()),
                None => warn!(
                    "target has no {:?} attribute, skipping effect tick",
                    effect.target_area()
                ),
            }
            instance.current_tick_amount += 1;
            // keep the overshoot so ticks stay on the r, 2r, ... grid
            if effect.tick_rate() > 0.0 {
                instance.current_tick_rate += effect.tick_rate();
            } else {
                instance.current_tick_rate = effect.tick_rate();
            }
            applied += 1;

            trace!(
                area = ?effect.target_area(),
                amount = effect.amount(),
                tick = instance.current_tick_amount,
                "effect applied"
            );
        }

        self.active.retain(|instance| !instance.is_expired());
        applied
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EffectInstance> {
        self.active.iter()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Dummy {
        health: f32,
        stamina: Option<f32>,
    }

    impl EffectTarget for Dummy {
        fn attribute_mut(&mut self, area: &TargetArea) -> Option<&mut dyn Affectable> {
            match area {
                TargetArea::Health => Some(&mut self.health),
                TargetArea::Custom(name) if name == "stamina" => {
                    self.stamina.as_mut().map(|s| s as &mut dyn Affectable)
                }
                TargetArea::Custom(_) => None,
            }
        }
    }

    fn dummy(health: f32) -> Dummy {
        Dummy {
            health,
            ..Default::default()
        }
    }

    fn poison() -> Arc<EffectDefinition> {
        Arc::new(EffectDefinition::over_time(TargetArea::Health, -5.0, 1.0, 3))
    }

    #[test]
    fn over_time_applies_once_per_call_then_expires() {
        let mut handler = EffectHandler::new();
        let mut target = dummy(100.0);
        handler.add_effect(poison());

        for expected in [95.0, 90.0, 85.0] {
            assert_eq!(handler.advance(1.0, &mut target), 1);
            assert_eq!(target.health, expected);
        }
        assert!(handler.is_empty());

        handler.advance(1.0, &mut target);
        assert_eq!(target.health, 85.0);
    }

    #[test]
    fn over_time_applies_on_schedule_with_small_frames() {
        let rate = 0.5;
        let ticks = 4;
        let dt = 0.125;
        let mut handler = EffectHandler::new();
        let mut target = dummy(0.0);
        handler.add_effect(Arc::new(EffectDefinition::over_time(
            TargetArea::Health,
            1.0,
            rate,
            ticks,
        )));

        let mut applied_at = Vec::new();
        let mut time = 0.0;
        while !handler.is_empty() && time < 10.0 {
            time += dt;
            if handler.advance(dt, &mut target) > 0 {
                applied_at.push(time);
            }
        }

        assert_eq!(applied_at, vec![0.5, 1.0, 1.5, 2.0]);
        assert_eq!(target.health, ticks as f32);
        assert!(handler.is_empty());
    }

    #[test]
    fn uneven_frames_stay_within_one_frame_of_schedule() {
        let rate = 1.0;
        let ticks = 5;
        let dt = 0.3;
        let mut handler = EffectHandler::new();
        let mut target = dummy(0.0);
        handler.add_effect(Arc::new(EffectDefinition::over_time(
            TargetArea::Health,
            1.0,
            rate,
            ticks,
        )));

        let mut applied_at = Vec::new();
        let mut time = 0.0_f32;
        while !handler.is_empty() && time < 20.0 {
            time += dt;
            if handler.advance(dt, &mut target) > 0 {
                applied_at.push(time);
            }
        }

        assert_eq!(applied_at.len(), ticks as usize);
        for (i, at) in applied_at.iter().enumerate() {
            let ideal = (i + 1) as f32 * rate;
            assert!(
                *at >= ideal - 1e-3 && *at <= ideal + dt + 1e-3,
                "application {} at {at}, due at {ideal}",
                i + 1
            );
        }
        assert_eq!(target.health, ticks as f32);
    }

    #[test]
    fn one_shot_without_delay_applies_immediately() {
        let mut handler = EffectHandler::new();
        let mut target = dummy(50.0);
        handler.add_effect(Arc::new(EffectDefinition::one_shot(TargetArea::Health, 20.0)));

        assert_eq!(handler.advance(0.016, &mut target), 1);
        assert_eq!(target.health, 70.0);
        assert!(handler.is_empty());
    }

    #[test]
    fn one_shot_with_zero_delta_still_applies() {
        let mut handler = EffectHandler::new();
        let mut target = dummy(50.0);
        handler.add_effect(Arc::new(EffectDefinition::one_shot(TargetArea::Health, 20.0)));

        handler.advance(0.0, &mut target);
        assert_eq!(target.health, 70.0);
        assert!(handler.is_empty());
    }

    #[test]
    fn one_shot_waits_for_its_tick_rate() {
        let mut handler = EffectHandler::new();
        let mut target = dummy(10.0);
        let delayed = EffectDefinition::new(TargetArea::Health, RateType::OneShot, -4.0, 0.3, 0);
        handler.add_effect(Arc::new(delayed));

        assert_eq!(handler.advance(0.1, &mut target), 0);
        assert_eq!(handler.advance(0.1, &mut target), 0);
        assert_eq!(handler.len(), 1);
        assert_eq!(target.health, 10.0);

        assert_eq!(handler.advance(0.2, &mut target), 1);
        assert_eq!(target.health, 6.0);
        assert!(handler.is_empty());
    }

    #[test]
    fn add_effect_grows_by_one() {
        let mut handler = EffectHandler::new();
        for n in 1..=5 {
            handler.add_effect(poison());
            assert_eq!(handler.len(), n);
        }
    }

    #[test]
    fn zero_delta_keeps_pending_countdowns() {
        let mut handler = EffectHandler::new();
        let mut target = dummy(100.0);
        handler.add_effect(poison());

        for _ in 0..10 {
            assert_eq!(handler.advance(0.0, &mut target), 0);
        }
        assert_eq!(handler.len(), 1);
        assert_eq!(target.health, 100.0);
        assert_eq!(handler.iter().next().unwrap().current_tick_rate, 1.0);
    }

    #[test]
    fn stacked_instances_run_independently() {
        let mut handler = EffectHandler::new();
        let mut target = dummy(100.0);
        handler.add_effect(poison());
        handler.advance(1.0, &mut target);
        handler.add_effect(poison());

        let ticks: Vec<_> = handler.iter().map(|i| i.current_tick_amount).collect();
        assert_eq!(ticks, vec![1, 0]);

        handler.advance(1.0, &mut target);
        handler.advance(1.0, &mut target);
        assert_eq!(handler.len(), 1);
        assert_eq!(handler.iter().next().unwrap().current_tick_amount, 2);

        handler.advance(1.0, &mut target);
        assert!(handler.is_empty());
        assert_eq!(target.health, 70.0);
    }

    #[test]
    fn zero_tick_rate_over_time_fires_every_call() {
        let mut handler = EffectHandler::new();
        let mut target = dummy(0.0);
        handler.add_effect(Arc::new(EffectDefinition::over_time(
            TargetArea::Health,
            1.0,
            0.0,
            3,
        )));

        handler.advance(0.0, &mut target);
        handler.advance(0.0, &mut target);
        assert_eq!(handler.len(), 1);
        handler.advance(0.0, &mut target);
        assert!(handler.is_empty());
        assert_eq!(target.health, 3.0);
    }

    #[test]
    fn zero_tick_amount_over_time_applies_once() {
        let mut handler = EffectHandler::new();
        let mut target = dummy(0.0);
        handler.add_effect(Arc::new(EffectDefinition::over_time(
            TargetArea::Health,
            1.0,
            0.0,
            0,
        )));

        handler.advance(0.1, &mut target);
        assert_eq!(target.health, 1.0);
        assert!(handler.is_empty());
    }

    #[test]
    fn custom_areas_dispatch_through_target() {
        let mut handler = EffectHandler::new();
        let mut target = Dummy {
            health: 100.0,
            stamina: Some(30.0),
        };
        handler.add_effect(Arc::new(EffectDefinition::one_shot(
            TargetArea::Custom("stamina".into()),
            -10.0,
        )));

        handler.advance(0.1, &mut target);
        assert_eq!(target.stamina, Some(20.0));
        assert_eq!(target.health, 100.0);
    }

    #[test]
    fn missing_area_still_counts_as_tick() {
        let mut handler = EffectHandler::new();
        let mut target = dummy(100.0);
        handler.add_effect(Arc::new(EffectDefinition::over_time(
            TargetArea::Custom("mana".into()),
            -1.0,
            0.5,
            2,
        )));

        handler.advance(0.5, &mut target);
        handler.advance(0.5, &mut target);
        assert!(handler.is_empty());
        assert_eq!(target.health, 100.0);
    }

    #[test]
    fn shared_definition_outlives_handler() {
        let def = poison();
        {
            let mut handler = EffectHandler::new();
            handler.add_effect(def.clone());
            handler.add_effect(def.clone());
            assert_eq!(Arc::strong_count(&def), 3);
        }
        assert_eq!(Arc::strong_count(&def), 1);
    }
}
