use std::process::ExitCode;

use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;
use warden_console::cli::{self, Cli};

fn init_logger() {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("warden_console", LevelFilter::Info)
        .filter_module("warden_core", LevelFilter::Info)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();

    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    cli::run(Cli::parse()).await
}
