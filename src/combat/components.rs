use bevy::prelude::*;
use wyrmhollow_shared::effects::Affectable;

pub fn plugin(app: &mut App) {
    app.register_type::<Health>()
        .register_type::<AttackState>();
}

/// Health component for any entity that can be hurt or healed.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        self.current / self.max
    }

    pub fn restore(&mut self) {
        self.current = self.max;
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl Affectable for Health {
    fn change(&mut self, amount: f32) {
        self.current = (self.current + amount).clamp(0.0, self.max);
        debug!("health {:+.1} -> {:.1}", amount, self.current);
    }
}

/// Tracks the swing of an entity's weapon.
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component)]
pub struct AttackState {
    /// Time before another swing can start.
    pub cooldown: Timer,
    /// Time left in the current swing; the hitbox is live while it runs.
    pub swing: Timer,
    pub attacking: bool,
    /// Entities already struck by the current swing.
    pub struck: Vec<Entity>,
}

impl AttackState {
    pub fn new(swing_secs: f32, cooldown_secs: f32) -> Self {
        let mut cooldown = Timer::from_seconds(cooldown_secs, TimerMode::Once);
        // the first swing is available right away
        cooldown.tick(cooldown.duration());
        Self {
            cooldown,
            swing: Timer::from_seconds(swing_secs, TimerMode::Once),
            attacking: false,
            struck: Vec::new(),
        }
    }

    pub fn can_attack(&self) -> bool {
        self.cooldown.is_finished() && !self.attacking
    }

    pub fn start_attack(&mut self) {
        self.attacking = true;
        self.struck.clear();
        self.swing.reset();
        self.cooldown.reset();
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        self.cooldown.tick(delta);
        if self.attacking && self.swing.tick(delta).is_finished() {
            self.attacking = false;
        }
    }

    /// Record a hit, false if the entity was already struck this swing.
    pub fn strike(&mut self, entity: Entity) -> bool {
        if self.struck.contains(&entity) {
            return false;
        }
        self.struck.push(entity);
        true
    }
}

/// Event fired when an entity's health runs out (use with commands.trigger()).
#[derive(Event, Debug, Clone)]
pub struct DeathEvent {
    pub entity: Entity,
}

/// Tag to identify enemies.
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component)]
pub struct Enemy;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn health_change_is_clamped() {
        let mut health = Health::new(50.0);
        health.change(-20.0);
        assert_eq!(health.current, 30.0);
        health.change(100.0);
        assert_eq!(health.current, 50.0);
        health.change(-80.0);
        assert!(health.is_dead());
        assert_eq!(health.fraction(), 0.0);
    }

    #[test]
    fn swing_window_and_cooldown() {
        let mut attack = AttackState::new(0.2, 0.5);
        assert!(attack.can_attack());

        attack.start_attack();
        assert!(!attack.can_attack());
        assert!(attack.strike(Entity::from_raw_u32(7).unwrap()));
        assert!(!attack.strike(Entity::from_raw_u32(7).unwrap()));

        attack.tick(Duration::from_secs_f32(0.25));
        assert!(!attack.attacking);
        assert!(!attack.can_attack());

        attack.tick(Duration::from_secs_f32(0.3));
        assert!(attack.can_attack());

        attack.start_attack();
        assert!(attack.struck.is_empty());
    }
}
