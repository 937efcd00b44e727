use crate::asset_loading::EffectLibrary;
use crate::combat::{AttackState, Health, Weapon};
use crate::effects::ActiveEffects;
use crate::*;
use avian3d::prelude::*;
use bevy_enhanced_input::prelude::*;
#[cfg(feature = "third_person")]
use bevy_third_person_camera::*;
use bevy_tnua::prelude::*;
use bevy_tnua_avian3d::*;
use wyrmhollow_shared::movement::{JumpGate, MovementInput, MovementState};

mod control;
mod ground;

/// This plugin handles player related stuff like movement, ground checks and respawning
/// Player logic is only active during the State `Screen::Gameplay`
pub fn plugin(app: &mut App) {
    app.add_plugins((
        TnuaControllerPlugin::new(FixedUpdate),
        TnuaAvian3dPlugin::new(FixedUpdate),
        control::plugin,
        ground::plugin,
    ));

    #[cfg(feature = "third_person")]
    app.add_plugins(ThirdPersonCameraPlugin).configure_sets(
        PostUpdate,
        bevy_third_person_camera::CameraSyncSet.before(TransformSystems::Propagate),
    );

    app.add_systems(OnEnter(Screen::Gameplay), spawn_player)
        .add_observer(respawn_player);
}

/// Put the player back at the spawn point with full health.
#[derive(Event)]
pub struct RespawnPlayer;

pub fn spawn_player(
    cfg: Res<Config>,
    library: Res<EffectLibrary>,
    mut commands: Commands,
    // DEBUG
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let pos = Transform::from_translation(Vec3::from(cfg.player.spawn_pos));
    let hitbox = &cfg.player.hitbox;
    let collider = Collider::capsule(hitbox.radius, hitbox.height);
    let weapon = Weapon::new(&cfg.weapon, &library);
    info!(
        "player weapon: durability {}, {} effects on hit",
        weapon.durability.max,
        weapon.effects.len()
    );

    commands
        .spawn((
            Name::new("Player"),
            DespawnOnExit(Screen::Gameplay),
            pos,
            Player,
            // camera target component
            #[cfg(feature = "third_person")]
            ThirdPersonCameraTarget,
            PlayerCtx,
            // tnua character control bundles
            (
                TnuaController::default(),
                // Tnua can fix the rotation, but the character will still get rotated before it can do so.
                // By locking the rotation we can prevent this.
                LockedAxes::ROTATION_LOCKED.unlock_rotation_y(),
                // A sensor shape is not strictly necessary, but without it we'll get weird results.
                TnuaAvian3dSensorShape(collider.clone()),
            ),
            // physics
            (
                collider,
                RigidBody::Dynamic,
                Friction::ZERO.with_combine_rule(CoefficientCombine::Multiply),
            ),
            // locomotion
            (
                Locomotion::default(),
                JumpCooldown(JumpGate::new(cfg.player.jump.cooldown)),
                Grounding::default(),
            ),
            // combat components
            (
                Health::new(cfg.player.health),
                ActiveEffects::default(),
                AttackState::new(cfg.weapon.swing_duration, cfg.weapon.cooldown),
                weapon,
            ),
        ))
        .with_children(|parent| {
            // DEBUG
            let collider_mesh = Mesh::from(Capsule3d::new(hitbox.radius, hitbox.height));
            let debug_collider_mesh = Mesh3d(meshes.add(collider_mesh));
            let debug_collider_color: MeshMaterial3d<StandardMaterial> =
                MeshMaterial3d(materials.add(Color::srgba(0.9, 0.9, 0.9, 0.1)));
            parent.spawn((debug_collider_mesh, debug_collider_color));
            // DEBUG
        });
}

fn respawn_player(
    _: On<RespawnPlayer>,
    cfg: Res<Config>,
    mut player: Query<
        (
            &mut Transform,
            &mut LinearVelocity,
            &mut Health,
            &mut ActiveEffects,
            &mut Locomotion,
        ),
        With<Player>,
    >,
) -> Result {
    let (mut transform, mut velocity, mut health, mut effects, mut locomotion) =
        player.single_mut()?;

    transform.translation = Vec3::from(cfg.player.spawn_pos);
    velocity.0 = Vec3::ZERO;
    health.restore();
    effects.clear();
    **locomotion = MovementState::Walking;

    info!("player respawned at {}", transform.translation);
    Ok(())
}
