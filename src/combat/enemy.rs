use super::*;
use crate::effects::ActiveEffects;
use avian3d::prelude::{Collider, LockedAxes, Mass, RigidBody};
use bevy_enhanced_input::prelude::Start;

pub fn plugin(app: &mut App) {
    app.add_observer(spawn_enemy_in_front);
}

/// Spawn a training dummy that can be struck and take effects.
pub fn spawn_enemy(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    health: f32,
    position: Vec3,
) -> Entity {
    let enemy_mesh = meshes.add(Capsule3d::new(0.5, 1.0));
    let enemy_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.8, 0.2, 0.2),
        ..default()
    });

    commands
        .spawn((
            Name::new("Dummy"),
            DespawnOnExit(Screen::Gameplay),
            Transform::from_translation(position),
            Mesh3d(enemy_mesh),
            MeshMaterial3d(enemy_material),
            // combat
            Health::new(health),
            ActiveEffects::default(),
            Enemy,
            // heavy so the player can't push it around
            Collider::capsule(0.5, 1.0),
            RigidBody::Dynamic,
            LockedAxes::ROTATION_LOCKED,
            Mass(500.0),
        ))
        .id()
}

/// Spawn an enemy in front of the player when E is pressed.
fn spawn_enemy_in_front(
    _on: On<Start<SpawnEnemy>>,
    cfg: Res<Config>,
    player: Query<&Transform, With<Player>>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };

    let spawn_pos =
        player_transform.translation + player_transform.forward() * cfg.enemy.spawn_distance;
    spawn_enemy(
        &mut commands,
        &mut meshes,
        &mut materials,
        cfg.enemy.health,
        spawn_pos,
    );

    info!("spawned enemy at {:?}", spawn_pos);
}
