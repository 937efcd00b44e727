//! Loads RON assets and turns them into resources once they are ready.

use super::*;
use std::collections::VecDeque;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<ResourceHandles>();
    app.add_systems(PreUpdate, load_resource_assets);
}

pub trait LoadResource {
    /// Load the [`Resource`] from `path` as an [`Asset`]. It is inserted as a resource
    /// once loaded, so systems can rely on it existing from [`Screen::Gameplay`] on.
    fn load_resource_from_path<T: Resource + Asset + Clone>(
        &mut self,
        path: impl Into<String>,
    ) -> &mut Self;
}

impl LoadResource for App {
    fn load_resource_from_path<T: Resource + Asset + Clone>(
        &mut self,
        path: impl Into<String>,
    ) -> &mut Self {
        self.init_asset::<T>();
        let _handle = {
            let world = self.world_mut();
            let assets = world.resource::<AssetServer>();
            let handle: Handle<T> = assets.load::<T>(path.into());
            let src_handle = handle.clone();
            let mut handles = world.resource_mut::<ResourceHandles>();
            handles.push_handle(handle);
            src_handle
        };

        // Desktop dev builds hot-reload assets: keep the resource in sync with the file.
        #[cfg(feature = "dev")]
        self.add_systems(
            Update,
            move |mut commands: Commands,
                  mut events: MessageReader<AssetEvent<T>>,
                  assets: Res<Assets<T>>| {
                for event in events.read() {
                    if let AssetEvent::Modified { id } = event {
                        if *id == _handle.id() {
                            if let Some(asset) = assets.get(&_handle) {
                                info!("reloaded {}", T::short_type_path());
                                commands.insert_resource(asset.clone());
                            }
                        }
                    }
                }
            },
        );

        self
    }
}

/// A function that inserts a loaded resource.
type InsertLoadedResource = fn(&mut World, &UntypedHandle);

#[derive(Resource, Default)]
pub struct ResourceHandles {
    // Waiting assets are cycled through the queue and moved to `finished` one at a time.
    waiting: VecDeque<(UntypedHandle, InsertLoadedResource)>,
    finished: Vec<UntypedHandle>,
}

impl ResourceHandles {
    /// Returns true once every tracked [`Asset`] is available as a [`Resource`].
    pub fn is_all_done(&self) -> bool {
        self.waiting.is_empty()
    }

    pub fn push_handle<T: Asset + Resource + Clone>(&mut self, handle: Handle<T>) {
        self.waiting.push_back((handle.untyped(), |world, handle| {
            let assets = world.resource::<Assets<T>>();
            if let Some(value) = assets.get(handle.id().typed::<T>()) {
                world.insert_resource(value.clone());
                debug!("{} ready", T::short_type_path());
            }
        }));
    }
}

fn load_resource_assets(world: &mut World) {
    world.resource_scope(|world, mut resource_handles: Mut<ResourceHandles>| {
        world.resource_scope(|world, assets: Mut<AssetServer>| {
            for _ in 0..resource_handles.waiting.len() {
                let Some((handle, insert_fn)) = resource_handles.waiting.pop_front() else {
                    break;
                };
                if assets.is_loaded_with_dependencies(&handle) {
                    insert_fn(world, &handle);
                    resource_handles.finished.push(handle);
                } else {
                    resource_handles.waiting.push_back((handle, insert_fn));
                }
            }
        });
    });
}
