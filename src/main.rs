mod content;
mod core;
mod level;
mod movement;
mod sprites;

use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Tilehop".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            content::ContentPlugin::default(),
            core::CorePlugin,
            level::LevelPlugin,
            sprites::SpritesPlugin,
            movement::MovementPlugin,
        ))
        .run();
}
