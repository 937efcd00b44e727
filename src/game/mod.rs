use crate::*;

#[cfg(feature = "dev_native")]
mod dev_tools;

pub fn plugin(app: &mut App) {
    app.add_plugins((
        models::plugin,
        scene::plugin,
        camera::plugin,
        player::plugin,
        combat::plugin,
        effects::plugin,
        #[cfg(feature = "dev_native")]
        dev_tools::plugin,
        screens::plugin,
    ));
}
