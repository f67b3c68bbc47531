mod broadcaster;
mod config;
mod input;

use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use broadcaster::{LogBroadcaster, SharedStatus};
use config::RunnerConfig;
use input::InputCommand;
use snake_common::games::SessionRng;
use snake_common::games::snake::{SessionError, SessionHandle, spawn_session};
use snake_common::logger::{self, LogLevel};
use snake_common::log;

#[derive(Parser)]
#[command(name = "snake_runner")]
struct Args {
    /// Path to the YAML config. Defaults to snake_config.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed seed for food placement. Overrides the config value.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,

    /// Write the default config to the config path and exit.
    #[arg(long)]
    write_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    let level = if args.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    logger::init_logger_with_level(prefix, level);

    let config_manager = config::get_config_manager(args.config);
    if args.write_default_config {
        config_manager.set_config(&RunnerConfig::default())?;
        log!("Default config written");
        return Ok(());
    }
    let config = config_manager.get_config()?;

    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let status = SharedStatus::new();
    let (handle, session) = spawn_session(config.snake, rng, LogBroadcaster::new(status.clone()));

    log!("Commands: start, reset, quit; turn with w/a/s/d or up/down/left/right");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match input::parse_command(&line) {
                    Some(InputCommand::Quit) => break,
                    Some(command) => dispatch(&handle, command)?,
                    None if line.trim().is_empty() => {}
                    None => log!("Unknown command: {}", line.trim()),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                log!("Shutdown signal received");
                break;
            }
        }
    }

    if handle.shutdown().is_err() {
        log!("Session already closed");
    }
    let summary = session.await?;
    log!("Final score: {}", summary.final_score);

    Ok(())
}

/// Turns are always forwarded; the session drops them unless its game is running.
fn dispatch(handle: &SessionHandle, command: InputCommand) -> Result<(), SessionError> {
    match command {
        InputCommand::Start => handle.start(),
        InputCommand::Reset => handle.reset(),
        InputCommand::Turn(direction) => handle.request_direction(direction),
        InputCommand::Quit => handle.shutdown(),
    }
}
