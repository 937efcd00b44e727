//! Melee weapon: swing on input, strike what the hitbox overlaps, hand the
//! weapon's effects to every target struck.

use super::*;
use crate::asset_loading::EffectLibrary;
use crate::effects::{ActiveEffects, ApplyEffects};
use avian3d::prelude::*;
use bevy_enhanced_input::prelude::Start;
use std::sync::Arc;
use wyrmhollow_shared::effects::{EffectDefinition, TargetArea};
use wyrmhollow_shared::weapon::Durability;

pub fn plugin(app: &mut App) {
    app.add_observer(handle_attack).add_systems(
        Update,
        (tick_attack_state, sweep_hitbox, strike_targets)
            .chain()
            .in_set(PostPhysicsAppSystems::TickTimers)
            .run_if(in_state(Screen::Gameplay)),
    );
}

#[derive(Component, Debug, Clone)]
#[require(HitboxOverlaps)]
pub struct Weapon {
    pub durability: Durability,
    /// Applied to every target struck, base damage first.
    pub effects: Vec<Arc<EffectDefinition>>,
    /// Distance of the hitbox centre in front of the wielder.
    pub reach: f32,
    pub radius: f32,
}

impl Weapon {
    pub fn new(preset: &WeaponPreset, library: &EffectLibrary) -> Self {
        let stats = preset.stats();
        let mut effects = Vec::with_capacity(preset.effects.len() + 1);
        if stats.base_damage > 0 {
            effects.push(Arc::new(EffectDefinition::one_shot(
                TargetArea::Health,
                -(stats.base_damage as f32),
            )));
        }
        effects.extend(library.resolve(&preset.effects));

        Self {
            durability: Durability::from(&stats),
            effects,
            reach: preset.reach,
            radius: preset.radius,
        }
    }
}

/// Entities inside the weapon hitbox this frame, empty between swings.
#[derive(Component, Debug, Default, Clone, Deref, DerefMut)]
pub struct HitboxOverlaps(pub Vec<Entity>);

/// Handle attack input - start a swing.
fn handle_attack(on: On<Start<Attack>>, mut query: Query<(&mut AttackState, &Weapon)>) {
    let Ok((mut attack_state, weapon)) = query.get_mut(on.context) else {
        return;
    };
    try_swing(&mut attack_state, weapon);
}

/// Start a swing unless the weapon is broken or still cooling down.
pub fn try_swing(attack_state: &mut AttackState, weapon: &Weapon) -> bool {
    if weapon.durability.is_broken() {
        info!("weapon is broken");
        return false;
    }
    if !attack_state.can_attack() {
        return false;
    }
    attack_state.start_attack();
    true
}

fn tick_attack_state(time: Res<Time>, mut query: Query<&mut AttackState>) {
    for mut state in query.iter_mut() {
        state.tick(time.delta());
    }
}

/// Collect what overlaps the sphere in front of each swinging attacker.
fn sweep_hitbox(
    spatial: SpatialQuery,
    mut attackers: Query<(Entity, &Transform, &AttackState, &Weapon, &mut HitboxOverlaps)>,
) {
    for (attacker, transform, attack_state, weapon, mut overlaps) in attackers.iter_mut() {
        overlaps.clear();
        if !attack_state.attacking {
            continue;
        }

        let center = transform.translation + transform.forward() * weapon.reach;
        let shape = Collider::sphere(weapon.radius);
        overlaps.0 = spatial.shape_intersections(
            &shape,
            center,
            Quat::IDENTITY,
            &SpatialQueryFilter::default().with_excluded_entities([attacker]),
        );
    }
}

/// Every enemy in the hitbox is struck once per swing, each strike costs a
/// point of durability and hands the weapon's effects to the target.
fn strike_targets(
    mut attackers: Query<(Entity, &HitboxOverlaps, &mut AttackState, &mut Weapon)>,
    targets: Query<(), (With<Enemy>, With<ActiveEffects>)>,
    mut commands: Commands,
) {
    for (attacker, overlaps, mut attack_state, mut weapon) in attackers.iter_mut() {
        if !attack_state.attacking {
            continue;
        }

        for &hit in overlaps.iter() {
            if !targets.contains(hit) || !attack_state.strike(hit) {
                continue;
            }
            if !weapon.durability.wear() {
                info!("weapon broke");
                attack_state.attacking = false;
                break;
            }

            debug!(
                "{attacker} struck {hit}, durability {}/{}",
                weapon.durability.current, weapon.durability.max
            );
            commands.trigger(ApplyEffects {
                target: hit,
                effects: weapon.effects.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;
    use wyrmhollow_shared::effects::RateType;

    #[derive(Resource, Default)]
    struct Struck(Vec<Entity>);

    fn app() -> App {
        let mut app = App::new();
        app.init_resource::<Struck>()
            .add_systems(Update, strike_targets)
            .add_observer(|on: On<ApplyEffects>, mut struck: ResMut<Struck>| {
                struck.0.push(on.event().target);
            });
        app
    }

    fn enemy(app: &mut App) -> Entity {
        app.world_mut().spawn((Enemy, ActiveEffects::default())).id()
    }

    fn attacker(app: &mut App, durability: u32, overlaps: Vec<Entity>) -> Entity {
        let preset = WeaponPreset {
            durability,
            base_damage: 5,
            ..default()
        };
        let weapon = Weapon::new(&preset, &EffectLibrary::default());
        let mut attack_state = AttackState::new(0.2, 0.5);
        // a broken weapon cannot swing, force the window open anyway
        attack_state.start_attack();
        app.world_mut()
            .spawn((attack_state, weapon, HitboxOverlaps(overlaps)))
            .id()
    }

    fn struck(app: &App) -> &[Entity] {
        &app.world().resource::<Struck>().0
    }

    #[test]
    fn last_durability_point_strikes_one_enemy() {
        let mut app = app();
        let (a, b) = (enemy(&mut app), enemy(&mut app));
        let attacker = attacker(&mut app, 1, vec![a, b]);

        app.update();

        assert_eq!(struck(&app), &[a]);
        let weapon = app.world().get::<Weapon>(attacker).unwrap();
        assert!(weapon.durability.is_broken());

        let mut attack_state = app.world().get::<AttackState>(attacker).unwrap().clone();
        assert!(!attack_state.attacking);
        attack_state.tick(Duration::from_secs(1));
        assert!(attack_state.can_attack());
        assert!(!try_swing(&mut attack_state, weapon));
    }

    #[test]
    fn each_enemy_is_struck_once_per_swing() {
        let mut app = app();
        let (a, b) = (enemy(&mut app), enemy(&mut app));
        let wall = app.world_mut().spawn_empty().id();
        let attacker = attacker(&mut app, 10, vec![a, wall, a, b]);

        app.update();
        app.update();

        assert_eq!(struck(&app), &[a, b]);
        let weapon = app.world().get::<Weapon>(attacker).unwrap();
        assert_eq!(weapon.durability.current, 8);
    }

    #[test]
    fn broken_weapon_applies_nothing() {
        let mut app = app();
        let a = enemy(&mut app);
        attacker(&mut app, 0, vec![a]);

        app.update();

        assert!(struck(&app).is_empty());
    }

    #[test]
    fn swing_waits_for_cooldown() {
        let weapon = Weapon::new(
            &WeaponPreset {
                durability: 3,
                ..default()
            },
            &EffectLibrary::default(),
        );
        let mut attack_state = AttackState::new(0.2, 0.5);

        assert!(try_swing(&mut attack_state, &weapon));
        assert!(!try_swing(&mut attack_state, &weapon));
        attack_state.tick(Duration::from_secs_f32(0.6));
        assert!(try_swing(&mut attack_state, &weapon));
    }

    #[test]
    fn weapon_prepends_base_damage() {
        let library = EffectLibrary(HashMap::from([(
            "poison".to_string(),
            Arc::new(EffectDefinition::over_time(TargetArea::Health, -2.0, 1.0, 5)),
        )]));
        let preset = WeaponPreset {
            durability: 3,
            base_damage: 12,
            effects: vec!["poison".into(), "nope".into()],
            ..default()
        };

        let weapon = Weapon::new(&preset, &library);
        assert_eq!(weapon.durability, Durability::new(3));
        assert_eq!(weapon.effects.len(), 2);
        assert_eq!(weapon.effects[0].rate_type(), RateType::OneShot);
        assert_eq!(weapon.effects[0].amount(), -12.0);
        assert_eq!(weapon.effects[1].rate_type(), RateType::OverTime);
    }

    #[test]
    fn no_base_damage_no_hit_effect() {
        let preset = WeaponPreset {
            durability: 1,
            ..default()
        };
        let weapon = Weapon::new(&preset, &EffectLibrary::default());
        assert!(weapon.effects.is_empty());
    }
}
