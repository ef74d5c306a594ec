mod arena;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod score;
mod ui;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Skyhop".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    // Content first: later plugins read the loaded config while building
    .add_plugins(content::ContentPlugin::default())
    .add_plugins((
        core::CorePlugin,
        movement::MovementPlugin,
        score::ScorePlugin,
        arena::ArenaPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
