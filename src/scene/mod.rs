//! Test grounds: a floor, ramps of increasing steepness and a few training dummies.
//! Scene logic is only active during the State `Screen::Gameplay`
use crate::*;
use avian3d::prelude::*;

/// Ramp inclines in degrees, the steeper ones should stop the player.
const RAMPS: [f32; 4] = [15.0, 30.0, 45.0, 60.0];
const DUMMIES: [Vec3; 3] = [
    Vec3::new(-6.0, 1.5, -8.0),
    Vec3::new(0.0, 1.5, -10.0),
    Vec3::new(6.0, 1.5, -8.0),
];

pub fn plugin(app: &mut App) {
    app.add_plugins(PhysicsPlugins::default())
        .add_systems(OnEnter(Screen::Gameplay), setup);
}

pub fn setup(
    cfg: Res<Config>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // to see something in the shade
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 500.0,
        ..Default::default()
    });

    commands.spawn((
        Name::new("Sun"),
        Sun,
        DespawnOnExit(Screen::Gameplay),
        DirectionalLight {
            illuminance: 4000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let floor_size = 100.0;
    commands.spawn((
        Name::new("Ground"),
        Ground,
        DespawnOnExit(Screen::Gameplay),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(floor_size, floor_size))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.3))),
        RigidBody::Static,
        Collider::half_space(Vec3::Y),
    ));

    let ramp_material = materials.add(Color::srgb(0.6, 0.55, 0.5));
    let ramp_size = Vec3::new(4.0, 0.5, 10.0);
    for (i, angle) in RAMPS.into_iter().enumerate() {
        let x = 10.0 + i as f32 * 6.0;
        // rest the low edge on the floor
        let y = ramp_size.z * 0.5 * angle.to_radians().sin();
        commands.spawn((
            Name::new(format!("Ramp {angle}°")),
            Ground,
            DespawnOnExit(Screen::Gameplay),
            Mesh3d(meshes.add(Cuboid::from_size(ramp_size))),
            MeshMaterial3d(ramp_material.clone()),
            Transform::from_xyz(x, y, 0.0)
                .with_rotation(Quat::from_rotation_x(angle.to_radians())),
            RigidBody::Static,
            Collider::cuboid(ramp_size.x, ramp_size.y, ramp_size.z),
        ));
    }

    for position in DUMMIES {
        combat::spawn_enemy(
            &mut commands,
            &mut meshes,
            &mut materials,
            cfg.enemy.health,
            position,
        );
    }
}
