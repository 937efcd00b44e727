use super::*;

/// Helper trait to get direction of movement based on camera transform
pub trait MovementDirection {
    fn movement_direction(&self, input: Vec2) -> Vec3;
}

impl MovementDirection for Transform {
    fn movement_direction(&self, input: Vec2) -> Vec3 {
        let forward = self.forward();
        // looking straight up or down leaves no horizontal forward, fall back to the up vector
        let forward_flat = Vec3::new(forward.x, 0.0, forward.z)
            .try_normalize()
            .unwrap_or_else(|| Vec3::new(self.up().x, 0.0, self.up().z).normalize_or_zero());
        let right = forward_flat.cross(Vec3::Y);
        let direction = (right * input.x) + (forward_flat * input.y);
        direction.normalize_or_zero()
    }
}
