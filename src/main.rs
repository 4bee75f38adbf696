mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod util;
use crate::app::App;
use crate::cli::{Cli, RunArgs, USAGE};
use crate::config::Config;
use crate::game::Game;
use anyhow::Context;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("torsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<()> {
    match Cli::from_parser(lexopt::Parser::from_env())? {
        Cli::Help => print!("{USAGE}"),
        Cli::Version => println!("torsnake {}", env!("CARGO_PKG_VERSION")),
        Cli::Run(args) => {
            let score = play(&args)?;
            println!("Game over! Score: {score}");
        }
    }
    Ok(())
}

fn play(args: &RunArgs) -> anyhow::Result<u32> {
    let config = args.config().context("failed to load configuration")?;
    logging::init(config.log_file.as_deref()).context("failed to set up logging")?;
    let score = match args.seed {
        Some(seed) => {
            tracing::debug!(seed, "Using seeded RNG");
            play_with_rng(&config, ChaCha12Rng::seed_from_u64(seed))
        }
        None => play_with_rng(&config, rand::rng()),
    }?;
    Ok(score)
}

fn play_with_rng<R: Rng>(config: &Config, rng: R) -> io::Result<u32> {
    let app = App::new(Game::new(config, rng), config.tick_period);
    let terminal = ratatui::init();
    let r = app.run(terminal);
    ratatui::restore();
    r
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
}
