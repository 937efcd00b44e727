//! Development tools for the game. This plugin is only enabled in dev builds.
use super::*;
use avian3d::prelude::{PhysicsDebugPlugin, PhysicsGizmos};
use bevy::{
    dev_tools::{fps_overlay::FpsOverlayPlugin, states::log_transitions},
    input::common_conditions::{input_just_pressed, input_toggle_active},
};
use bevy_inspector_egui::{bevy_egui::EguiPlugin, quick::WorldInspectorPlugin};

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        EguiPlugin::default(),
        WorldInspectorPlugin::new().run_if(input_toggle_active(false, KeyCode::Backquote)),
        FpsOverlayPlugin::default(),
        PhysicsDebugPlugin,
    ))
    .add_systems(Startup, hide_physics_gizmos)
    .add_systems(
        Update,
        (
            log_transitions::<Screen>,
            tab_trigger_system.run_if(input_just_pressed(KeyCode::Tab)),
            toggle_physics_debug.run_if(input_just_pressed(KeyCode::F3)),
        ),
    )
    .add_observer(toggle_debug_ui);
}

fn tab_trigger_system(mut commands: Commands) {
    commands.trigger(ToggleDebugUi);
}

fn toggle_debug_ui(_: On<ToggleDebugUi>, mut options: ResMut<UiDebugOptions>) {
    options.toggle();
}

fn hide_physics_gizmos(mut store: ResMut<GizmoConfigStore>) {
    store.config_mut::<PhysicsGizmos>().0.enabled = false;
}

fn toggle_physics_debug(mut state: ResMut<GameState>, mut store: ResMut<GizmoConfigStore>) {
    state.debug_physics = !state.debug_physics;
    store.config_mut::<PhysicsGizmos>().0.enabled = state.debug_physics;
    info!("physics debug: {}", state.debug_physics);
}
