mod app;
mod cli;
mod color;
mod config;
mod data;
mod error;
mod pipeline;
mod sheet;

use clap::Parser;
use log::error;

use cli::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = app::run(Cli::parse()) {
        error!("{err:#}");
        std::process::exit(1);
    }
}
