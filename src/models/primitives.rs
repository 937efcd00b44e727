use super::*;

/// Macro to hide the derive trait boilerplate
macro_rules! markers {
  ( $( $name:ident ),* ) => {
        $(
            #[derive(Component, Reflect, Clone, Default)]
            #[reflect(Component)]
            pub struct $name;
        )*
    };
}

markers!(
    SceneCamera,
    // scene
    Sun,
    Ground,
    // UI: nodes or labels that have to change visibility or content at some point
    GameplayUi,
    PauseIcon,
    HealthLabel,
    DurabilityLabel,
    MovementLabel
);
