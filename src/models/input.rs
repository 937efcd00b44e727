//! Input actions.
//!
//! Everything that reads input gets the actions injected as queries on the
//! entity that owns the [`PlayerCtx`] context, there is no global input manager.

use super::*;

pub fn plugin(app: &mut App) {
    app.add_plugins(EnhancedInputPlugin)
        .add_input_context::<PlayerCtx>()
        .add_observer(add_player_ctx);
}

markers!(PlayerCtx);

#[derive(InputAction)]
#[action_output(Vec2)]
pub struct Navigate;

/// Look around. Positive x turns right, positive y looks up.
#[derive(InputAction)]
#[action_output(Vec2)]
pub struct Pan;

#[derive(InputAction)]
#[action_output(bool)]
pub struct Attack;

#[derive(InputAction)]
#[action_output(bool)]
pub struct Jump;

#[derive(InputAction)]
#[action_output(bool)]
pub struct Sprint;

#[derive(InputAction)]
#[action_output(bool)]
pub struct Crouch;

#[derive(InputAction)]
#[action_output(bool)]
pub struct Pause;

#[derive(InputAction)]
#[action_output(bool)]
pub struct Escape;

#[derive(InputAction)]
#[action_output(bool)]
pub struct SpawnEnemy;

pub fn add_player_ctx(add: On<Add, PlayerCtx>, mut commands: Commands) {
    let mut e = commands.entity(add.entity);

    e.insert(actions!(PlayerCtx[
        (
            Action::<Pan>::new(),
            Bindings::spawn((
                Spawn((Binding::mouse_motion(), Negate::y())),
                Axial::right_stick().with(Scale::splat(20.0)),
            )),
        ),
        (
            Action::<Navigate>::new(),
            DeadZone::default(),
            Bindings::spawn(( Cardinal::wasd_keys(), Cardinal::arrows(), Axial::left_stick() )),
        ),
        (
            Action::<Crouch>::new(),
            bindings![KeyCode::ControlLeft, GamepadButton::East],
        ),
        (
            Action::<Jump>::new(),
            bindings![KeyCode::Space, GamepadButton::South],
        ),
        (
            Action::<Sprint>::new(),
            bindings![KeyCode::ShiftLeft, GamepadButton::LeftThumb],
        ),
        (
            Action::<Attack>::new(),
            bindings![MouseButton::Left, GamepadButton::RightTrigger2],
        ),
        (
            Action::<Pause>::new(),
            bindings![KeyCode::KeyP, GamepadButton::Start],
        ),
        (
            Action::<Escape>::new(),
            ActionSettings {
                require_reset: true,
                ..Default::default()
            },
            bindings![KeyCode::Escape, GamepadButton::Select],
        ),
        (
            Action::<SpawnEnemy>::new(),
            bindings![KeyCode::KeyE],
        ),
    ]));
}
