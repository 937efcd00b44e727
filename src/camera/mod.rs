use crate::*;
use bevy::{
    anti_alias::{fxaa::Fxaa, taa::TemporalAntiAliasing},
    core_pipeline::prepass::DeferredPrepass,
    pbr::DefaultOpaqueRendererMethod,
    render::view::Hdr,
};

#[cfg(not(feature = "third_person"))]
mod first_person;
#[cfg(feature = "third_person")]
mod third_person;

pub fn plugin(app: &mut App) {
    app.insert_resource(DefaultOpaqueRendererMethod::deferred())
        .add_systems(Startup, spawn_camera);

    #[cfg(not(feature = "third_person"))]
    app.add_plugins(first_person::plugin);
    #[cfg(feature = "third_person")]
    app.add_plugins(third_person::plugin);
}

/// One camera for the whole app, gameplay plugins attach their view to it.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("Scene Camera"),
        SceneCamera,
        IsDefaultUiCamera,
        Camera3d::default(),
        Camera::default(),
        Transform::from_xyz(20., 10., 20.).looking_at(Vec3::ZERO, Vec3::Y),
        Hdr,
        DeferredPrepass,
        TemporalAntiAliasing::default(),
        Fxaa::default(),
    ));
}
