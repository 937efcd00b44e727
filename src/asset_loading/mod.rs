use crate::*;
use serde::Deserialize;
use std::{collections::HashMap, sync::Arc};
use wyrmhollow_shared::effects::EffectDefinition;

mod ron_asset;
mod tracking;

pub use ron_asset::*;
pub use tracking::*;

pub fn plugin(app: &mut App) {
    // start asset loading
    app.add_plugins(tracking::plugin)
        .add_plugins(RonAssetPlugin::<Config>::default())
        .load_resource_from_path::<Config>("config.ron")
        .add_plugins(RonAssetPlugin::<EffectLibrary>::default())
        .load_resource_from_path::<EffectLibrary>("effects.ron");
}

/// Every authored effect by name, loaded from `assets/effects.ron`.
///
/// Definitions are shared: handing one to a weapon only bumps a refcount.
#[derive(Asset, TypePath, Resource, Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct EffectLibrary(pub HashMap<String, Arc<EffectDefinition>>);

impl EffectLibrary {
    pub fn get(&self, name: &str) -> Option<Arc<EffectDefinition>> {
        self.0.get(name).cloned()
    }

    /// Look up a list of names, skipping the ones that are not in the library.
    pub fn resolve(&self, names: &[String]) -> Vec<Arc<EffectDefinition>> {
        names
            .iter()
            .filter_map(|name| {
                let effect = self.get(name);
                if effect.is_none() {
                    warn!("unknown effect '{name}', check effects.ron");
                }
                effect
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wyrmhollow_shared::effects::{RateType, TargetArea};

    const LIBRARY: &str = r#"{
        "poison": (target_area: Health, rate_type: OverTime, amount: -5.0, tick_rate: 1.0, tick_amount: 3),
        "mend": (target_area: Health, amount: 20.0),
    }"#;

    #[test]
    fn library_parses_and_resolves() {
        let library: EffectLibrary = ron::from_str(LIBRARY).unwrap();
        let resolved = library.resolve(&["poison".into(), "missing".into(), "mend".into()]);

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].rate_type(), RateType::OverTime);
        assert_eq!(resolved[1].target_area(), &TargetArea::Health);
        assert_eq!(resolved[1].amount(), 20.0);
        assert!(Arc::ptr_eq(&resolved[0], &library.get("poison").unwrap()));
    }

    #[test]
    fn shipped_assets_parse() {
        let cfg: Config = ron::from_str(include_str!("../../assets/config.ron")).unwrap();
        let library: EffectLibrary =
            ron::from_str(include_str!("../../assets/effects.ron")).unwrap();

        assert!(cfg.player.movement.max_slope_angle > 0.0);
        assert!(cfg.player.movement.crouched_y_scale < 1.0);
        assert_eq!(
            library.resolve(&cfg.weapon.effects).len(),
            cfg.weapon.effects.len(),
            "every weapon effect must exist in effects.ron"
        );
    }
}
