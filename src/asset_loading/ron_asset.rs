//! Loads any `Deserialize` asset from a RON file.

use bevy::asset::{AssetLoader, LoadContext, io::Reader};
use bevy::prelude::*;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use thiserror::Error;

/// Registers a [`RonLoader`] for `T`.
///
/// Several plugins may share the `ron` extension, the asset server picks the
/// loader by the requested asset type.
pub struct RonAssetPlugin<T> {
    extensions: Vec<&'static str>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> RonAssetPlugin<T> {
    pub fn new(extensions: &[&'static str]) -> Self {
        Self {
            extensions: extensions.to_vec(),
            _marker: PhantomData,
        }
    }
}

impl<T> Default for RonAssetPlugin<T> {
    fn default() -> Self {
        Self::new(&["ron"])
    }
}

impl<T> Plugin for RonAssetPlugin<T>
where
    T: Asset + DeserializeOwned,
{
    fn build(&self, app: &mut App) {
        app.init_asset::<T>()
            .register_asset_loader(RonLoader::<T> {
                extensions: self.extensions.clone(),
                _marker: PhantomData,
            });
    }
}

#[derive(TypePath)]
pub struct RonLoader<T> {
    extensions: Vec<&'static str>,
    _marker: PhantomData<fn() -> T>,
}

#[derive(Debug, Error)]
pub enum RonLoaderError {
    #[error("could not read asset: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse RON: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

impl<T> AssetLoader for RonLoader<T>
where
    T: Asset + DeserializeOwned,
{
    type Asset = T;
    type Settings = ();
    type Error = RonLoaderError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &(),
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        let asset = ron::de::from_bytes::<T>(&bytes)?;
        Ok(asset)
    }

    fn extensions(&self) -> &[&str] {
        &self.extensions
    }
}
