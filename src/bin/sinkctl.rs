//! sinkctl binary entry point
//!
//! Dispatches subcommands for inspecting and cycling sinks from a terminal.

use clap::Parser;
use color_eyre::eyre::Result;
use sinkbar::{
    Config, Direction, Pactl,
    cli::{Args, Command},
    commands, logging,
};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init_logging(args.verbose);

    let config = Config::load(args.pactl.as_deref())?;
    let pactl = Pactl::new(config.pactl.as_str());

    match args.command {
        Command::Status { json } => commands::status(&pactl, &config, json),

        Command::ListSinks { json } => commands::list_sinks(&pactl, json),

        Command::ListStreams { json } => commands::list_streams(&pactl, json),

        Command::Cycle { reverse, notify } => {
            let direction = if reverse {
                Direction::Prev
            } else {
                Direction::Next
            };
            commands::cycle(&pactl, direction, notify)
        }

        Command::Clean { name } => {
            commands::clean(&name);
            Ok(())
        }

        Command::Check => commands::check(&pactl),
    }
}
