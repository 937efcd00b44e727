use crate::*;

mod hud;

pub fn plugin(app: &mut App) {
    app.add_plugins(hud::plugin);
}
