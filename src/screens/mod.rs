//! The game's main screen states and transitions between them.

use crate::*;
use bevy::ui::Val::*;

mod gameplay;
mod loading;

pub fn plugin(app: &mut App) {
    app.init_state::<Screen>();

    app.add_plugins((loading::plugin, gameplay::plugin));
}
