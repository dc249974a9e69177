use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use doom_raycaster::config::{GameConfig, load_config};
use doom_raycaster::core::game_loop;
use doom_raycaster::core::grid::Grid;
use doom_raycaster::core::state::GameState;
use doom_raycaster::platform::raylib_host::RaylibHost;
use doom_raycaster::render::framebuffer::Framebuffer;

/// DOOM-style raycaster.
/// WASD / arrows move and turn, Space or Ctrl fires, E uses, P pauses,
/// M toggles the map view.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// RON settings file (defaults are used for anything it omits)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Text map, `#` for walls and `.` for floor; must be walled in
    #[arg(long)]
    map: Option<PathBuf>,
    /// Window width in pixels (overrides the config)
    #[arg(long)]
    width: Option<u32>,
    /// Window height in pixels (overrides the config)
    #[arg(long)]
    height: Option<u32>,
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path).with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(w) = args.width {
        config.screen_width = w;
    }
    if let Some(h) = args.height {
        config.screen_height = h;
    }
    config.validate().context("command-line overrides")?;

    let grid = match &args.map {
        Some(path) => Grid::load(path).with_context(|| format!("loading map {}", path.display()))?,
        None => Grid::sample(),
    };
    info!("map {}x{}", grid.width(), grid.height());

    let (w, h) = (config.screen_width, config.screen_height);
    let mut host = RaylibHost::open(&config, "DOOM Raycaster")?;
    let mut state = GameState::new(grid, config).context("placing the player")?;
    let mut frame = Framebuffer::new(w, h);

    game_loop::run(&mut state, &mut host, &mut frame);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn every_flag_has_help_text() {
        let cmd = Args::command();
        for arg in cmd.get_arguments().filter(|a| !a.is_positional()) {
            let id = arg.get_id().as_str();
            if id == "help" || id == "version" {
                continue;
            }
            assert!(arg.get_help().is_some(), "--{id} has no help text");
        }
    }

    #[test]
    fn size_flags_override_the_window() {
        let args = Args::try_parse_from(["doom", "--width", "640", "--height", "480"]).unwrap();
        assert_eq!((args.width, args.height), (Some(640), Some(480)));
    }
}
