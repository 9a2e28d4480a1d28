//! Whirligig binary: spin a figure, or run the debate.
//!
//! With no arguments this runs the alternating chip-versus-cockroach
//! debate until Ctrl+C. With `--figure` it spins a single figure
//! indefinitely instead.

use std::io;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use whirligig::terminal::RawModeGuard;
use whirligig::{
    AnimationLoop, CancelToken, DebateOrchestrator, Error, Figure, InterruptWatcher,
};

/// How long the interrupt watcher waits for events before re-checking
/// its shutdown flag.
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

#[derive(Debug, Parser)]
#[command(name = "whirligig", version, about = "Looping ASCII-art spinner and scripted debate")]
struct Cli {
    /// Spin a single figure instead of running the debate.
    /// Accepts chip/c or cockroach/roach/r, case-insensitive.
    #[arg(long, value_parser = parse_figure)]
    figure: Option<Figure>,
}

fn parse_figure(value: &str) -> Result<Figure, Error> {
    value.parse()
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let cancel = CancelToken::new();
    // Raw mode before the watcher spawns, so Ctrl+C is a key event from
    // the very first poll. The guard restores cooked mode on drop.
    let _raw = RawModeGuard::enter()?;
    let watcher = InterruptWatcher::spawn(cancel.clone(), EVENT_POLL_TIMEOUT);

    let result = run(&cli, &watcher, &cancel);
    watcher.join();
    result
}

fn run(cli: &Cli, watcher: &InterruptWatcher, cancel: &CancelToken) -> Result<(), Error> {
    match cli.figure {
        Some(figure) => {
            info!(figure = figure.canonical_name(), "spinning a single figure");
            let spinner = figure.spinner()?;
            let mut animation =
                AnimationLoop::new(io::stdout(), watcher.sleeper(), cancel.clone());
            animation.run(&spinner, None)?;
            Ok(())
        }
        None => {
            info!("starting the debate");
            let mut debate =
                DebateOrchestrator::new(io::stdout(), watcher.sleeper(), cancel.clone())?;
            debate.run()
        }
    }
}
