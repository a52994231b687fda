//! Spritelab main entry point.
//!
//! A launcher for small 2D demos written in Rust using:
//! - **raylib** for windowing, textures and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (sprites, animation, walking, parallax layers)
//! - [`demos`] – scene setup for each demo
//! - [`resources`] – ECS resources (atlases, maps, input, config, viewport)
//! - [`systems`] – ECS systems (input, walking, animation, rendering)
//!
//! # Main Loop
//!
//! 1. Parse the command line and load `config.ini`
//! 2. Open the raylib window and load the demo's textures
//! 3. Populate the world and build the schedule
//! 4. Run until the window closes or ESC is pressed:
//!    - Snapshot input
//!    - Walk, animate, move, scroll, play
//!    - Render
//!    - Refresh the window title with the frame rate once a second
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- tilemap
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod demos;
mod resources;
mod systems;

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;

use crate::demos::{Demo, SimulationSet};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::sceneinfo::SceneInfo;
use crate::resources::texturestore::TextureStore;
use crate::resources::viewport::Viewport;
use crate::systems::input::update_input_state;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;

/// Seconds between window title refreshes.
const TITLE_REFRESH_SECONDS: f32 = 1.0;

/// Spritelab 2D demos
#[derive(Parser)]
#[command(version, about = "Sprite atlas, isometric and parallax demos on raylib")]
struct Cli {
    /// Demo to run.
    #[arg(value_enum)]
    demo: Demo,

    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Assets directory, overriding the configuration file.
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(dir) = cli.assets {
        config.assets_dir = dir;
    }

    // --------------- Raylib window & assets ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title(&format!("Spritelab - {}", cli.demo.title()));
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // ESC is handled through InputState
    rl.set_exit_key(None);

    let mut textures = TextureStore::new();
    for (key, file) in cli.demo.textures() {
        textures.load(&mut rl, &thread, *key, config.asset_path(file));
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(textures);
    if let Err(e) = cli.demo.populate(&mut world, &config) {
        log::error!("Failed to set up the {:?} demo: {}", cli.demo, e);
        std::process::exit(1);
    }
    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.configure_sets(SimulationSet.after(update_input_state));
    cli.demo.add_systems(&mut update);
    update.add_systems(render_system.after(SimulationSet));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    let mut since_title = 0.0;
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<InputState>().action_back.just_pressed
    {
        let (dt, w, h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_frame_time(), rl.get_screen_width(), rl.get_screen_height())
        };
        update_world_time(&mut world, dt);
        world.resource_mut::<Viewport>().resize(w, h);

        update.run(&mut world);

        since_title += dt;
        if since_title >= TITLE_REFRESH_SECONDS {
            since_title = 0.0;
            refresh_window_title(&world);
        }

        world.clear_trackers();
    }
    log::info!("Bye");
}

fn refresh_window_title(world: &World) {
    let Some(info) = world.get_resource::<SceneInfo>() else {
        return;
    };
    let rl = world.non_send_resource::<raylib::RaylibHandle>();
    let thread = world.non_send_resource::<raylib::RaylibThread>();
    rl.set_window_title(thread, &info.window_title(rl.get_fps()));
}
