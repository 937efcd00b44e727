use super::*;

pub fn plugin(app: &mut App) {
    app.add_observer(pause).add_observer(release_cursor);
}

#[derive(Event)]
pub struct TogglePause;
#[derive(Event)]
pub struct CamCursorToggle;
#[derive(Event)]
pub struct ToggleDebugUi;

// ================== trigger events on input ========================
fn pause(_: On<Start<Pause>>, mut commands: Commands) {
    commands.trigger(TogglePause);
}
fn release_cursor(_: On<Start<Escape>>, mut commands: Commands) {
    commands.trigger(CamCursorToggle);
}
