use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use wyrmhollow_shared::{movement::MovementSpeeds, weapon::WeaponStats};

/// Game tuning, loaded from `assets/config.ron`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Reflect, Asset, Resource)]
#[reflect(Resource)]
pub struct Config {
    pub camera: CameraPreset,
    pub player: PlayerPreset,
    pub weapon: WeaponPreset,
    pub enemy: EnemyPreset,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Reflect)]
pub struct CameraPreset {
    /// Look sensitivity per axis, degrees per input unit per second.
    pub sensitivity: (f32, f32),
    /// Eye point above the player origin in first person.
    pub eye_height: f32,
    pub fov: f32,
    /// Third person zoom range.
    pub zoom: (f32, f32),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Reflect)]
pub struct PlayerPreset {
    pub movement: MovementPreset,
    pub jump: JumpPreset,
    pub hitbox: HitboxPreset,
    pub ground: GroundPreset,
    pub health: f32,
    pub spawn_pos: (f32, f32, f32),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Reflect)]
pub struct MovementPreset {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub crouch_speed: f32,
    pub air_speed: f32,
    pub acceleration: f32,
    pub air_acceleration: f32,
    /// Collider height multiplier while crouched.
    pub crouched_y_scale: f32,
    /// Steepest walkable incline, degrees.
    pub max_slope_angle: f32,
}

impl MovementPreset {
    pub fn speeds(&self) -> MovementSpeeds {
        MovementSpeeds {
            walk: self.walk_speed,
            sprint: self.sprint_speed,
            crouch: self.crouch_speed,
            air: self.air_speed,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Reflect)]
pub struct JumpPreset {
    pub height: f32,
    pub cooldown: f32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Reflect)]
pub struct HitboxPreset {
    pub radius: f32,
    pub height: f32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Reflect)]
pub struct GroundPreset {
    /// Length of the downward ground ray from the player origin.
    pub raycast_length: f32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Reflect)]
pub struct WeaponPreset {
    pub durability: u32,
    pub base_damage: u32,
    /// Names of entries in `effects.ron` applied on every hit.
    pub effects: Vec<String>,
    pub swing_duration: f32,
    pub cooldown: f32,
    /// Distance of the hitbox centre in front of the player.
    pub reach: f32,
    pub radius: f32,
}

impl WeaponPreset {
    pub fn stats(&self) -> WeaponStats {
        WeaponStats {
            durability: self.durability,
            base_damage: self.base_damage,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, Reflect)]
pub struct EnemyPreset {
    pub health: f32,
    pub spawn_distance: f32,
}
