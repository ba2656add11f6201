use gallery_player::app;
use gallery_player::config::Config;

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("gallery_player", LevelFilter::Debug)
        .filter_module("gallery_core", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}; falling back to default configuration");
            Config::default()
        }
    };

    app::application(config).run()
}
