use super::*;
use bevy_tnua::builtins::TnuaBuiltinCrouch;

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (tick_jump_cooldown, movement)
            .chain()
            .in_set(TnuaUserControlsSystems)
            .run_if(in_state(Screen::Gameplay)),
    )
    .add_observer(handle_jump)
    .add_observer(hold_jump)
    .add_observer(sprint_in)
    .add_observer(sprint_out)
    .add_observer(crouch_in)
    .add_observer(crouch_out);
}

/// Tnua configuration is tricky to grasp from the get go, this is the best demo:
/// <https://github.com/idanarye/bevy-tnua/blob/main/demos/src/character_control_systems/platformer_control_systems.rs>
fn movement(
    cfg: Res<Config>,
    navigate: Single<&Action<Navigate>>,
    camera: Single<&Transform, With<SceneCamera>>,
    mut player_query: Query<(&Locomotion, &mut TnuaController), With<Player>>,
) {
    let movement = &cfg.player.movement;
    let navigate = **navigate.into_inner();
    let direction = camera.movement_direction(navigate);

    // first person: the body turns with the camera, third person: with the movement
    #[cfg(not(feature = "third_person"))]
    let desired_forward = Dir3::new(camera.movement_direction(Vec2::Y)).ok();
    #[cfg(feature = "third_person")]
    let desired_forward = Dir3::new(direction).ok();

    for (locomotion, mut controller) in player_query.iter_mut() {
        let float_height = 0.15; // Lower to reduce hovering
        controller.basis(TnuaBuiltinWalk {
            float_height,
            cling_distance: float_height + 0.05,
            spring_strength: 500.0, // Stronger spring for a more grounded feel.
            spring_dampening: 1.0,
            acceleration: movement.acceleration,
            air_acceleration: movement.air_acceleration,
            free_fall_extra_gravity: 70.0,
            turning_angvel: 12.0,
            max_slope: movement.max_slope_angle.to_radians(),
            desired_velocity: direction * locomotion.speed(&movement.speeds()),
            desired_forward,
            ..Default::default()
        });

        if locomotion.is_crouching() {
            controller.action(TnuaBuiltinCrouch {
                float_offset: 0.0,
                height_change_impulse_for_duration: 0.1,
                height_change_impulse_limit: 80.0,
                uncancellable: false,
            });
        }
    }
}

fn tick_jump_cooldown(time: Res<Time>, mut query: Query<&mut JumpCooldown>) {
    for mut cooldown in query.iter_mut() {
        cooldown.tick(time.delta_secs());
    }
}

fn jump_action(preset: &JumpPreset) -> TnuaBuiltinJump {
    TnuaBuiltinJump {
        height: preset.height,
        takeoff_extra_gravity: 40.0,
        fall_extra_gravity: 35.0,
        shorten_extra_gravity: 80.0, // Keep short hops possible
        peak_prevention_at_upward_velocity: 0.5,
        peak_prevention_extra_gravity: 25.0,
        disable_force_forward_after_peak: true,
        ..Default::default()
    }
}

/// A jump only starts on the ground and once the cooldown has run out.
fn handle_jump(
    on: On<Start<Jump>>,
    cfg: Res<Config>,
    mut player_query: Query<
        (
            &mut TnuaController,
            &mut JumpCooldown,
            &mut Locomotion,
            &Grounding,
        ),
        With<Player>,
    >,
) -> Result {
    let (mut controller, mut cooldown, mut locomotion, grounding) =
        player_query.get_mut(on.context)?;

    if !cooldown.try_jump(grounding.is_grounded()) {
        debug!("jump refused: {:?}", **grounding);
        return Ok(());
    }

    locomotion.apply(MovementInput::Jump);
    controller.action(jump_action(&cfg.player.jump));
    Ok(())
}

/// Tnua shortens the jump as soon as the action stops being fed.
fn hold_jump(
    on: On<Fire<Jump>>,
    cfg: Res<Config>,
    mut player_query: Query<(&mut TnuaController, &Locomotion), With<Player>>,
) -> Result {
    let (mut controller, locomotion) = player_query.get_mut(on.context)?;
    if **locomotion == MovementState::Jumping {
        controller.action(jump_action(&cfg.player.jump));
    }
    Ok(())
}

fn sprint_in(on: On<Start<Sprint>>, mut player: Query<&mut Locomotion, With<Player>>) -> Result {
    player.get_mut(on.context)?.apply(MovementInput::SprintStart);
    Ok(())
}

fn sprint_out(
    on: On<Complete<Sprint>>,
    mut player: Query<&mut Locomotion, With<Player>>,
) -> Result {
    let mut locomotion = player.get_mut(on.context)?;
    // releasing sprint mid-crouch must not stand the player up
    if **locomotion == MovementState::Sprinting {
        locomotion.apply(MovementInput::SprintEnd);
    }
    Ok(())
}

fn crouch_in(
    on: On<Start<Crouch>>,
    cfg: Res<Config>,
    mut player: Query<
        (
            &mut Locomotion,
            &mut TnuaAvian3dSensorShape,
            &mut Collider,
        ),
        With<Player>,
    >,
) -> Result {
    let (mut locomotion, mut sensor, mut collider) = player.get_mut(on.context)?;

    let scale = Vec3::new(1.0, cfg.player.movement.crouched_y_scale, 1.0);
    collider.set_scale(scale, 4);
    sensor.0.set_scale(scale, 4);
    locomotion.apply(MovementInput::CrouchStart);

    Ok(())
}

fn crouch_out(
    on: On<Complete<Crouch>>,
    mut player: Query<
        (
            &mut Locomotion,
            &mut TnuaAvian3dSensorShape,
            &mut Collider,
        ),
        With<Player>,
    >,
) -> Result {
    let (mut locomotion, mut sensor, mut collider) = player.get_mut(on.context)?;

    collider.set_scale(Vec3::ONE, 4);
    sensor.0.set_scale(Vec3::ONE, 4);
    if locomotion.is_crouching() {
        locomotion.apply(MovementInput::CrouchEnd);
    }

    Ok(())
}
