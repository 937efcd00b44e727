use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

#[macro_use]
mod primitives;

mod event_dispatch;
mod ext_traits;
mod input;
mod player;
mod pre_load;
mod states;

pub use event_dispatch::*;
pub use ext_traits::*;
pub use input::*;
pub use player::*;
pub use pre_load::*;
pub use primitives::*;
pub use states::*;

pub fn plugin(app: &mut App) {
    app.configure_sets(
        Update,
        (
            PostPhysicsAppSystems::TickTimers,
            PostPhysicsAppSystems::ApplyEffects,
            PostPhysicsAppSystems::ChangeUi,
            PostPhysicsAppSystems::Update,
        )
            .chain(),
    );

    app.add_plugins((states::plugin, input::plugin, event_dispatch::plugin));
}

/// High-level groupings of systems for the app in the [`Update`] schedule.
/// When adding a new variant, make sure to order it in the `configure_sets`
/// call above.
#[derive(SystemSet, Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum PostPhysicsAppSystems {
    /// Tick timers.
    TickTimers,
    /// Advance status effects on every target.
    ApplyEffects,
    /// Change UI.
    ChangeUi,
    /// Do everything else (consider splitting this into further variants).
    Update,
}
