//! Runs status effects on entities.
//!
//! Anything that wants to affect a target triggers [`ApplyEffects`]; the target's
//! [`ActiveEffects`] picks the definitions up and [`tick_effects`] advances them
//! once per frame against the target's [`Health`].

use crate::combat::{DeathEvent, Health};
use crate::*;
use std::sync::Arc;
use wyrmhollow_shared::effects::{
    Affectable, EffectDefinition, EffectHandler, EffectTarget, TargetArea,
};

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        tick_effects
            .in_set(PostPhysicsAppSystems::ApplyEffects)
            .run_if(in_state(Screen::Gameplay)),
    )
    .add_observer(apply_effects);
}

/// Effects currently running on an entity.
///
/// Requires [`Health`], a handler is never attached without something to act on.
#[derive(Component, Debug, Default, Clone, Deref, DerefMut)]
#[require(Health)]
pub struct ActiveEffects(pub EffectHandler);

/// Start every effect in `effects` on `target`.
#[derive(Event, Debug, Clone)]
pub struct ApplyEffects {
    pub target: Entity,
    pub effects: Vec<Arc<EffectDefinition>>,
}

fn apply_effects(on: On<ApplyEffects>, mut targets: Query<&mut ActiveEffects>) {
    let event = on.event();
    let Ok(mut active) = targets.get_mut(event.target) else {
        debug!("{} can not take effects", event.target);
        return;
    };

    for effect in &event.effects {
        active.add_effect(effect.clone());
    }
    debug!(
        "{}: +{} effects, {} running",
        event.target,
        event.effects.len(),
        active.len()
    );
}

/// The attributes of one entity that effects can reach.
struct Sinks<'a> {
    health: &'a mut Health,
}

impl EffectTarget for Sinks<'_> {
    fn attribute_mut(&mut self, area: &TargetArea) -> Option<&mut dyn Affectable> {
        match area {
            TargetArea::Health => Some(&mut *self.health),
            TargetArea::Custom(_) => None,
        }
    }
}

pub fn tick_effects(
    time: Res<Time>,
    mut targets: Query<(Entity, &mut ActiveEffects, &mut Health)>,
    mut commands: Commands,
) {
    let dt = time.delta_secs();

    for (entity, mut active, mut health) in targets.iter_mut() {
        if active.is_empty() {
            continue;
        }
        let was_alive = !health.is_dead();

        let applied = active.advance(dt, &mut Sinks {
            health: &mut *health,
        });
        if applied > 0 {
            debug!(
                "{entity}: {applied} effect ticks, health {:.1}/{:.1}",
                health.current, health.max
            );
        }

        if was_alive && health.is_dead() {
            active.clear();
            commands.trigger(DeathEvent { entity });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>()
            .add_systems(Update, tick_effects)
            .add_observer(apply_effects);
        app
    }

    fn step(app: &mut App, secs: f32) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(secs));
        app.update();
    }

    fn health(app: &App, entity: Entity) -> f32 {
        app.world().get::<Health>(entity).unwrap().current
    }

    #[test]
    fn poison_ticks_health_down() {
        let mut app = app();
        let target = app
            .world_mut()
            .spawn((ActiveEffects::default(), Health::new(100.0)))
            .id();
        let poison = Arc::new(EffectDefinition::over_time(TargetArea::Health, -5.0, 1.0, 3));
        app.world_mut().trigger(ApplyEffects {
            target,
            effects: vec![poison],
        });

        for expected in [95.0, 90.0, 85.0] {
            step(&mut app, 1.0);
            assert_eq!(health(&app, target), expected);
        }
        assert!(app.world().get::<ActiveEffects>(target).unwrap().is_empty());
    }

    #[test]
    fn heal_is_capped_by_health() {
        let mut app = app();
        let mut hurt = Health::new(100.0);
        hurt.current = 90.0;
        let target = app.world_mut().spawn((ActiveEffects::default(), hurt)).id();
        let mend = Arc::new(EffectDefinition::one_shot(TargetArea::Health, 20.0));
        app.world_mut().trigger(ApplyEffects {
            target,
            effects: vec![mend],
        });

        step(&mut app, 0.016);
        assert_eq!(health(&app, target), 100.0);
        assert!(app.world().get::<ActiveEffects>(target).unwrap().is_empty());
    }

    #[test]
    fn handler_brings_its_own_health() {
        let mut app = app();
        let target = app.world_mut().spawn(ActiveEffects::default()).id();
        assert!(app.world().get::<Health>(target).is_some());
    }

    #[test]
    fn lethal_tick_reports_death_once() {
        #[derive(Resource, Default)]
        struct Deaths(Vec<Entity>);

        let mut app = app();
        app.init_resource::<Deaths>()
            .add_observer(|on: On<DeathEvent>, mut deaths: ResMut<Deaths>| {
                deaths.0.push(on.event().entity);
            });
        let target = app
            .world_mut()
            .spawn((ActiveEffects::default(), Health::new(10.0)))
            .id();
        let burn = Arc::new(EffectDefinition::over_time(TargetArea::Health, -8.0, 0.0, 5));
        app.world_mut().trigger(ApplyEffects {
            target,
            effects: vec![burn],
        });

        step(&mut app, 0.1);
        step(&mut app, 0.1);
        step(&mut app, 0.1);

        assert_eq!(health(&app, target), 0.0);
        assert_eq!(app.world().resource::<Deaths>().0, vec![target]);
        assert!(app.world().get::<ActiveEffects>(target).unwrap().is_empty());
    }
}
