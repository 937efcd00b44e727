use super::*;
use bevy_third_person_camera::*;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Gameplay), add_tpv_cam)
        .add_systems(OnExit(Screen::Gameplay), rm_tpv_cam)
        .add_observer(toggle_cam_cursor);
}

fn add_tpv_cam(
    cfg: Res<Config>,
    mut commands: Commands,
    mut camera: Query<(Entity, &mut Transform), With<SceneCamera>>,
    mut tpv_cam: Query<Entity, With<ThirdPersonCamera>>,
) -> Result {
    let Ok((cam, mut transform)) = camera.single_mut() else {
        return Ok(());
    };
    if tpv_cam.single_mut().is_ok() {
        debug!("Tried to add ThirdPersonCamera to an entity that already has it");
        return Ok(());
    }

    // tilt down so the dummies in front of the spawn point are in view
    transform.rotation = Quat::from_rotation_x(-20_f32.to_radians());

    commands.entity(cam).insert((
        ThirdPersonCamera {
            zoom_enabled: true,
            zoom: Zoom::new(cfg.camera.zoom.0, cfg.camera.zoom.1),
            offset_enabled: true,
            offset_toggle_enabled: true,
            cursor_lock_key: KeyCode::KeyL,
            gamepad_settings: CustomGamepadSettings::default(),
            ..default()
        },
        Projection::from(PerspectiveProjection {
            fov: cfg.camera.fov.to_radians(),
            ..Default::default()
        }),
    ));

    Ok(())
}

fn rm_tpv_cam(mut commands: Commands, mut camera: Query<Entity, With<ThirdPersonCamera>>) {
    if let Ok(camera) = camera.single_mut() {
        commands.entity(camera).remove::<ThirdPersonCamera>();
    }
}

fn toggle_cam_cursor(_: On<CamCursorToggle>, mut cam: Single<&mut ThirdPersonCamera>) {
    cam.cursor_lock_active = !cam.cursor_lock_active;
}
