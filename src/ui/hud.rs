use crate::combat::{Health, Weapon};
use crate::*;
use wyrmhollow_shared::movement::{GroundProbe, MovementState};

const PANEL_BG: Color = Color::srgba(0.05, 0.05, 0.06, 0.8);
const BAR_BORDER: Color = Color::srgba(0.3, 0.3, 0.32, 0.5);
const HEALTH_RED: Color = Color::srgb(0.8, 0.15, 0.15);
const DURABILITY_STEEL: Color = Color::srgb(0.6, 0.65, 0.7);
const LABEL_GREY: Color = Color::srgb(0.75, 0.75, 0.75);
const BAR_WIDTH: f32 = 220.0;
const BAR_HEIGHT: f32 = 14.0;

// ── Components ──────────────────────────────────────────────────────

#[derive(Component)]
struct HealthFill;

#[derive(Component)]
struct DurabilityFill;

// ── Plugin ──────────────────────────────────────────────────────────

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Gameplay), spawn_hud).add_systems(
        Update,
        (tick_health, tick_durability, tick_movement)
            .in_set(PostPhysicsAppSystems::ChangeUi)
            .run_if(in_state(Screen::Gameplay)),
    );
}

// ── Spawn ───────────────────────────────────────────────────────────

fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Name::new("Hud"),
            GameplayUi,
            DespawnOnExit(Screen::Gameplay),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(32.0),
                bottom: Val::Px(32.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
            GlobalZIndex(90),
        ))
        .with_children(|parent| {
            parent.spawn((
                MovementLabel,
                Text::new("WALKING"),
                TextFont::from_font_size(18.0),
                TextColor(Color::WHITE),
            ));
            bar(parent, "HP", HealthLabel, HealthFill, HEALTH_RED);
            bar(parent, "WEAPON", DurabilityLabel, DurabilityFill, DURABILITY_STEEL);
        });
}

/// A labelled fill bar: `fill` marks the inner node, `label` the value text.
fn bar(
    parent: &mut ChildSpawnerCommands,
    title: &str,
    label: impl Component,
    fill: impl Component,
    color: Color,
) {
    parent
        .spawn((
            Node {
                width: Val::Px(BAR_WIDTH),
                height: Val::Px(BAR_HEIGHT),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(PANEL_BG),
            BorderColor::all(BAR_BORDER),
        ))
        .with_children(|bar| {
            bar.spawn((
                fill,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(color),
            ));
        });

    parent
        .spawn(Node {
            width: Val::Px(BAR_WIDTH),
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            padding: UiRect::horizontal(Val::Px(2.0)),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new(title),
                TextFont::from_font_size(14.0),
                TextColor(LABEL_GREY),
            ));
            row.spawn((
                label,
                Text::default(),
                TextFont::from_font_size(14.0),
                TextColor(Color::WHITE),
            ));
        });
}

// ── Tick systems ────────────────────────────────────────────────────

fn tick_health(
    player: Query<&Health, (With<Player>, Changed<Health>)>,
    mut fills: Query<&mut Node, With<HealthFill>>,
    mut texts: Query<&mut Text, With<HealthLabel>>,
) {
    let Ok(health) = player.single() else { return };

    if let Ok(mut fill) = fills.single_mut() {
        fill.width = Val::Percent(health.fraction() * 100.0);
    }
    if let Ok(mut text) = texts.single_mut() {
        text.0 = format!("{:.0} / {:.0}", health.current, health.max);
    }
}

fn tick_durability(
    player: Query<&Weapon, (With<Player>, Changed<Weapon>)>,
    mut fills: Query<&mut Node, With<DurabilityFill>>,
    mut texts: Query<&mut Text, With<DurabilityLabel>>,
) {
    let Ok(weapon) = player.single() else { return };
    let durability = weapon.durability;

    if let Ok(mut fill) = fills.single_mut() {
        fill.width = Val::Percent(durability.fraction() * 100.0);
    }
    if let Ok(mut text) = texts.single_mut() {
        text.0 = if durability.is_broken() {
            "BROKEN".to_string()
        } else {
            format!("{} / {}", durability.current, durability.max)
        };
    }
}

fn tick_movement(
    player: Query<
        (&Locomotion, &Grounding),
        (With<Player>, Or<(Changed<Locomotion>, Changed<Grounding>)>),
    >,
    mut texts: Query<&mut Text, With<MovementLabel>>,
) {
    let Ok((locomotion, grounding)) = player.single() else { return };

    if let Ok(mut text) = texts.single_mut() {
        text.0 = movement_text(**locomotion, **grounding);
    }
}

fn movement_text(state: MovementState, ground: GroundProbe) -> String {
    let mut label = format!("{state:?}").to_uppercase();
    if ground.on_slope() {
        label.push_str(" / SLOPE");
    } else if let GroundProbe::TooSteep { .. } = ground {
        label.push_str(" / TOO STEEP");
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_label_shows_slopes() {
        assert_eq!(
            movement_text(MovementState::Walking, GroundProbe::Flat),
            "WALKING"
        );
        assert_eq!(
            movement_text(MovementState::Sprinting, GroundProbe::Slope { angle: 20.0 }),
            "SPRINTING / SLOPE"
        );
        assert_eq!(
            movement_text(MovementState::Jumping, GroundProbe::TooSteep { angle: 70.0 }),
            "JUMPING / TOO STEEP"
        );
        assert_eq!(
            movement_text(MovementState::Jumping, GroundProbe::Airborne),
            "JUMPING"
        );
    }
}
