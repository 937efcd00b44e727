//! The screen state for the main gameplay.
use super::*;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Gameplay), spawn_pause_label)
        .add_systems(OnExit(Screen::Gameplay), unpause)
        .add_observer(toggle_pause);
}

fn spawn_pause_label(mut commands: Commands) {
    commands.spawn((
        Name::new("Pause Label"),
        DespawnOnExit(Screen::Gameplay),
        GameplayUi,
        PauseIcon,
        Node {
            position_type: PositionType::Absolute,
            top: Px(16.0),
            left: Vw(45.0),
            display: Display::None,
            ..default()
        },
        Text::new("PAUSED"),
        TextFont::from_font_size(28.0),
        TextColor(Color::WHITE),
    ));
}

fn toggle_pause(
    _: On<TogglePause>,
    mut time: ResMut<Time<Virtual>>,
    mut state: ResMut<GameState>,
    mut pause_label: Query<&mut Node, With<PauseIcon>>,
) {
    if time.is_paused() || state.paused {
        time.unpause();
        state.paused = false;
    } else {
        time.pause();
        state.paused = true;
    }

    if let Ok(mut label) = pause_label.single_mut() {
        label.display = if state.paused {
            Display::Flex
        } else {
            Display::None
        };
    }
    info!("paused: {}", state.paused);
}

fn unpause(mut time: ResMut<Time<Virtual>>, mut state: ResMut<GameState>) {
    time.unpause();
    state.reset();
}
