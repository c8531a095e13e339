//! Blocken Championship entry point.

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Blocken Championship".to_string(),
            resolution: (1920, 1080).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(blocken_championship::plugin);

    #[cfg(feature = "dev")]
    app.add_plugins(blocken_championship::dev_tools::plugin);

    app.run();
}
