use super::*;
use crate::player::RespawnPlayer;

pub fn plugin(app: &mut App) {
    app.add_observer(on_death);
}

/// Observer: enemies are removed, the player respawns.
fn on_death(on: On<DeathEvent>, players: Query<(), With<Player>>, mut commands: Commands) {
    let entity = on.event().entity;

    if players.contains(entity) {
        info!("player died");
        commands.trigger(RespawnPlayer);
        return;
    }

    info!("{entity} died");
    commands.entity(entity).despawn();
}
