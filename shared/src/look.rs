//! First-person look angles.

use glam::{EulerRot, Quat, Vec2};

/// Camera pitch is held inside this range, in degrees.
pub const PITCH_LIMIT: f32 = 90.0;

/// Accumulated camera rotation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LookAngles {
    pub pitch: f32,
    pub yaw: f32,
}

impl LookAngles {
    /// Turn by a raw look input scaled by per-axis `sensitivity` and the frame time.
    /// Positive `delta.x` turns right, positive `delta.y` looks up.
    pub fn apply(&mut self, delta: Vec2, sensitivity: Vec2, dt: f32) {
        let scaled = delta * sensitivity * dt;
        self.yaw -= scaled.x;
        self.pitch = (self.pitch + scaled.y).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Full camera rotation.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw.to_radians(), self.pitch.to_radians(), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn pitch_is_clamped() {
        let mut look = LookAngles::default();
        look.apply(Vec2::new(0.0, 1000.0), Vec2::ONE, 1.0);
        assert_eq!(look.pitch, PITCH_LIMIT);
        look.apply(Vec2::new(0.0, -5000.0), Vec2::ONE, 1.0);
        assert_eq!(look.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn yaw_is_unbounded_and_scaled() {
        let mut look = LookAngles::default();
        look.apply(Vec2::new(-200.0, 0.0), Vec2::new(2.0, 1.0), 0.5);
        assert_eq!(look.yaw, 200.0);
        look.apply(Vec2::new(-400.0, 0.0), Vec2::new(2.0, 1.0), 0.5);
        assert_eq!(look.yaw, 600.0);
    }

    #[test]
    fn turning_right_faces_right() {
        let mut look = LookAngles::default();
        look.apply(Vec2::new(90.0, 0.0), Vec2::ONE, 1.0);
        let forward = look.rotation() * Vec3::NEG_Z;
        assert!(forward.abs_diff_eq(Vec3::X, 1e-5));

        let mut look = LookAngles::default();
        look.apply(Vec2::new(0.0, 90.0), Vec2::ONE, 1.0);
        let forward = look.rotation() * Vec3::NEG_Z;
        assert!(forward.abs_diff_eq(Vec3::Y, 1e-5));
    }
}
