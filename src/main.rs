// Disable console on Windows for non-dev builds.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::{app::App, asset::AssetMetaCheck, log, prelude::*};
use bevy_fix_cursor_unlock_web::prelude::*;

pub mod asset_loading;
pub mod camera;
pub mod combat;
pub mod effects;
pub mod game;
pub mod models;
pub mod player;
pub mod scene;
pub mod screens;
pub mod ui;

use asset_loading::ResourceHandles;
use models::*;

fn main() {
    let mut app = App::new();

    let window = WindowPlugin {
        primary_window: Some(Window {
            title: "Wyrmhollow Estate".to_string(),
            fit_canvas_to_parent: true,
            // Tells wasm not to override default event handling, like F5 and Ctrl+R
            prevent_default_event_handling: false,
            ..default()
        }),
        ..default()
    };
    let assets = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };
    // DEBUG
    // let filter = "debug,wyrmhollow_shared=trace,naga=off,wgpu=warn,bevy_enhanced_input=debug".to_string();
    let filter = "info,wyrmhollow=debug,calloop=off,naga=off,wgpu=warn,wgpu_core=error,bevy_core_pipeline=error,bevy_pbr=error".to_string();
    let log_level = log::LogPlugin {
        level: log::Level::TRACE,
        filter,
        ..Default::default()
    };

    app.add_plugins(DefaultPlugins.set(window).set(assets).set(log_level));

    // custom plugins. the order is important
    // be sure you use resources/types AFTER you add plugins that insert them
    app.add_plugins((
        FixPointerUnlockPlugin,
        asset_loading::plugin,
        ui::plugin,
        game::plugin,
    ));

    app.run();
}
