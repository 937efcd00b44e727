use super::*;

pub fn plugin(app: &mut App) {
    app.init_resource::<GameState>();
}

#[derive(Resource, Reflect, Debug, Clone, Default)]
#[reflect(Resource)]
pub struct GameState {
    pub paused: bool,
    pub debug_physics: bool,
}

impl GameState {
    pub fn reset(&mut self) {
        self.paused = false;
    }
}

/// The game's main screen states.
/// See <https://bevy-cheatbook.github.io/programming/states.html>
#[derive(States, Default, Clone, Eq, PartialEq, Debug, Hash, Reflect)]
pub enum Screen {
    // During the loading State the asset tracking loads config and effect library
    #[default]
    Loading,
    // During this State the actual game logic is executed
    Gameplay,
}
