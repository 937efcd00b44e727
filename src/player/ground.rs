use super::*;
use wyrmhollow_shared::movement::GroundProbe;

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        probe_ground
            .before(TnuaUserControlsSystems)
            .run_if(in_state(Screen::Gameplay)),
    );
}

/// Cast a ray straight down from the player and classify what it hits.
/// Touching ground again after being airborne ends a jump.
fn probe_ground(
    cfg: Res<Config>,
    spatial: SpatialQuery,
    mut player: Query<(Entity, &Transform, &mut Grounding, &mut Locomotion), With<Player>>,
) {
    let max_slope = cfg.player.movement.max_slope_angle;
    let length = cfg.player.ground.raycast_length;

    for (entity, transform, mut grounding, mut locomotion) in player.iter_mut() {
        let hit = spatial.cast_ray(
            transform.translation,
            Dir3::NEG_Y,
            length,
            true,
            &SpatialQueryFilter::default().with_excluded_entities([entity]),
        );
        let probe = GroundProbe::classify(hit.map(|hit| hit.normal), max_slope);

        if probe == **grounding {
            continue;
        }
        if !grounding.is_grounded() && probe.is_grounded() {
            locomotion.apply(MovementInput::Land);
        }
        trace!("ground: {:?} -> {:?}", **grounding, probe);
        **grounding = probe;
    }
}
