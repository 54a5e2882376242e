//! sinkbar binary entry point
//!
//! Invoked periodically by the status-bar host, and with extra arguments on
//! click. Always prints exactly one JSON object.

use color_eyre::eyre::Result;
use sinkbar::{
    BarOutput, Config, Pactl, SinkCycler, SinkRepository, StatusReporter, StreamRepository,
    cli, logging,
};
use tracing::debug;

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init_logging(0);

    let config = Config::default();
    let pactl = Pactl::new(config.pactl.as_str());
    let sinks = SinkRepository::new(&pactl);
    let streams = StreamRepository::new(&pactl);

    if cli::is_click_from(std::env::args_os()) {
        let outcome = SinkCycler::new(&sinks, &streams).cycle_all_streams_to_next_sink();
        debug!("Click cycle: {:?}", outcome);
    }

    let snapshot = StatusReporter::new(&sinks, &streams, &config).current_status();
    println!("{}", BarOutput::render(&snapshot, &config).to_json_line()?);

    Ok(())
}
