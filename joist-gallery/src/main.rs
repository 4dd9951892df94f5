mod data;
mod error;
mod render;
mod screens;
mod stories;
mod term;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

fn main() {
    let log_file = File::create("joist-gallery.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    log::info!("starting gallery");

    // Optional `Component/Name` story key jumps straight to that story
    let initial_story = std::env::args().nth(1);
    if let Err(e) = screens::run(initial_story) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
