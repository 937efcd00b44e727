//! First person view: the camera sits at the player's eyes and turns with the mouse.

use super::*;
use bevy::window::{CursorGrabMode, CursorOptions};
use bevy_enhanced_input::prelude::*;
use bevy_tnua::prelude::TnuaUserControlsSystems;
use wyrmhollow_shared::look::LookAngles;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Gameplay), (add_fpv_cam, lock_cursor))
        .add_systems(OnExit(Screen::Gameplay), (rm_fpv_cam, unlock_cursor))
        .add_systems(
            Update,
            look_around
                .before(TnuaUserControlsSystems)
                .run_if(in_state(Screen::Gameplay)),
        )
        .add_systems(
            PostUpdate,
            follow_player
                .before(TransformSystems::Propagate)
                .run_if(in_state(Screen::Gameplay)),
        )
        .add_observer(toggle_cam_cursor);
}

/// Accumulated look rotation of the first person camera.
#[derive(Component, Debug, Default, Clone, Copy, Deref, DerefMut)]
pub struct Look(pub LookAngles);

fn add_fpv_cam(cfg: Res<Config>, mut commands: Commands, camera: Single<Entity, With<SceneCamera>>) {
    commands.entity(*camera).insert((
        Look::default(),
        Projection::from(PerspectiveProjection {
            fov: cfg.camera.fov.to_radians(),
            ..Default::default()
        }),
    ));
}

fn rm_fpv_cam(mut commands: Commands, camera: Single<Entity, With<Look>>) {
    commands.entity(*camera).remove::<Look>();
}

fn look_around(
    cfg: Res<Config>,
    time: Res<Time>,
    pan: Single<&Action<Pan>>,
    cursor: Single<&CursorOptions>,
    mut camera: Single<&mut Look, With<SceneCamera>>,
) {
    // a free cursor belongs to the UI
    if cursor.grab_mode == CursorGrabMode::None {
        return;
    }

    let sensitivity = Vec2::from(cfg.camera.sensitivity);
    camera.apply(**pan.into_inner(), sensitivity, time.delta_secs());
}

fn follow_player(
    cfg: Res<Config>,
    player: Single<&Transform, (With<Player>, Without<SceneCamera>)>,
    camera: Single<(&mut Transform, &Look), With<SceneCamera>>,
) {
    let (mut transform, look) = camera.into_inner();
    transform.translation = player.translation + Vec3::Y * cfg.camera.eye_height;
    transform.rotation = look.rotation();
}

fn lock_cursor(mut cursor: Single<&mut CursorOptions>) {
    cursor.grab_mode = CursorGrabMode::Locked;
    cursor.visible = false;
}

fn unlock_cursor(mut cursor: Single<&mut CursorOptions>) {
    cursor.grab_mode = CursorGrabMode::None;
    cursor.visible = true;
}

fn toggle_cam_cursor(_: On<CamCursorToggle>, mut cursor: Single<&mut CursorOptions>) {
    let locked = cursor.grab_mode != CursorGrabMode::None;
    cursor.grab_mode = if locked {
        CursorGrabMode::None
    } else {
        CursorGrabMode::Locked
    };
    cursor.visible = locked;
    debug!("cursor locked: {}", !locked);
}
