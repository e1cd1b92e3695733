use asteroids::config::GameConfig;
use asteroids::constants::{CONFIG_PATH, TICK_RATE_HZ};
use asteroids::error::GameError;
use asteroids::game::GamePlugin;
use asteroids::graphics;
use asteroids::menu::{HighScoreScreen, MainMenu, MenuPlugin, SettingsScreen};
use asteroids::session::Session;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use std::path::Path;

fn main() -> Result<(), GameError> {
    // Both files are read before the app is built so the first OnEnter(Menu)
    // already sees the final values.
    let config = GameConfig::load_or_default(Path::new(CONFIG_PATH));
    let high_scores = HighScoreScreen::load(&config)?;

    println!("Starting Asteroids!");
    println!("Screen width: {}", config.screen_width);
    println!("Screen height: {}", config.screen_height);

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Asteroids".into(),
            resolution: WindowResolution::new(
                config.screen_width as u32,
                config.screen_height as u32,
            ),
            resizable: false,
            ..Default::default()
        }),
        ..Default::default()
    }))
    .insert_resource(ClearColor(Color::BLACK))
    .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
    .insert_resource(Session::new(&config))
    .insert_resource(MainMenu::new(&config, &mut rand::thread_rng()))
    .insert_resource(SettingsScreen::new(&config))
    .insert_resource(high_scores)
    .insert_resource(config)
    .add_plugins((MenuPlugin, GamePlugin))
    .add_systems(Startup, graphics::setup_camera);

    app.run();
    Ok(())
}
