use super::*;
use wyrmhollow_shared::movement::{GroundProbe, JumpGate, MovementInput, MovementState};

/// The character driven by local input.
#[derive(Component, Reflect, Clone, Default)]
#[reflect(Component)]
pub struct Player;

/// Current [`MovementState`] of a character.
#[derive(Component, Debug, Default, Clone, Copy, Deref, DerefMut)]
pub struct Locomotion(pub MovementState);

impl Locomotion {
    /// Feed an input through the state machine, logging real changes.
    pub fn apply(&mut self, input: MovementInput) {
        let next = self.0.next(input);
        if next != self.0 {
            debug!("movement {:?} -> {:?} on {:?}", self.0, next, input);
            self.0 = next;
        }
    }
}

/// Jump cooldown of a character.
#[derive(Component, Debug, Default, Clone, Deref, DerefMut)]
pub struct JumpCooldown(pub JumpGate);

/// Latest ground ray result under a character.
#[derive(Component, Debug, Default, Clone, Copy, Deref, DerefMut)]
pub struct Grounding(pub GroundProbe);
