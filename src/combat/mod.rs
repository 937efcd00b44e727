use crate::*;

mod components;
mod death;
mod enemy;
mod weapon;

pub use components::*;
pub use enemy::spawn_enemy;
pub use weapon::*;

pub fn plugin(app: &mut App) {
    app.add_plugins((
        components::plugin,
        death::plugin,
        enemy::plugin,
        weapon::plugin,
    ));
}
