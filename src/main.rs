mod app;
mod data;
mod state;
mod stats;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use app::{BikeshareApp, FAREWELL};
use ui::console::Console;

#[derive(Parser, Debug)]
#[command(name = "bikeshare-explorer", version, about = "Explore US bikeshare trip data")]
struct Cli {
    #[arg(
        long,
        default_value = ".",
        help = "Directory containing chicago.csv, new_york_city.csv and washington.csv"
    )]
    data_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    ctrlc::set_handler(|| {
        println!("{FAREWELL}");
        std::process::exit(0);
    })
    .context("installing Ctrl-C handler")?;

    log::debug!("reading city files from {}", cli.data_dir.display());
    let console = Console::new(io::stdin().lock(), io::stdout());
    BikeshareApp::new(console, cli.data_dir).run()
}
