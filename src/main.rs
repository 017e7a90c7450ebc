use clap::Parser;
use relm4::prelude::*;
use rondel::config::{self, Mode};
use rondel::gui::app::{AppInit, AppModel};
use rondel::gui::menu::{Point, RingParams, State};
use rondel::gui::theme::Theme;
use rondel::sys::{launch, runtime};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Pin the menu at a fixed position instead of floating on right-click
    #[arg(long)]
    fixed: bool,

    /// Anchor x position (overrides the config)
    #[arg(long)]
    x: Option<f64>,

    /// Anchor y position (overrides the config)
    #[arg(long)]
    y: Option<f64>,

    /// Write the default config file and exit
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if args.write_config {
        match config::write_default_config() {
            Ok(path) => println!("{}", path.display()),
            Err(e) => log::error!("Failed to write config: {}", e),
        }
        return;
    }

    let mut cfg = config::load_or_default();
    if args.fixed {
        cfg.mode = Mode::Fixed;
    }
    if let Some(x) = args.x {
        cfg.pos_x = x;
    }
    if let Some(y) = args.y {
        cfg.pos_y = y;
    }

    let buttons = launch::button_specs(&cfg.buttons);
    let anchor = Point::new(cfg.pos_x, cfg.pos_y);
    // fixed mode comes up visible right away; floating waits for a trigger
    let state = State::new(
        buttons,
        RingParams::from(&cfg),
        anchor,
        cfg.mode == Mode::Fixed,
    );
    let theme = Theme::from_config(&cfg);

    let (tx, rx) = async_channel::bounded(32);
    runtime::start_background_services(tx.clone());

    let app = RelmApp::new("org.rondel.rondel");
    app.run::<AppModel>(AppInit {
        state,
        theme,
        mode: cfg.mode,
        events: rx,
    });
}
