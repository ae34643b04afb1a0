#![deny(clippy::all)]
#![deny(rust_2018_idioms)]

use clap::{crate_version, Arg, Command};

use exchange::{application::Config, clock::VirtualClock, db::Store, Application};
use primitives::Day;
use slog::{info, o, Drain, Logger};
use slog_async::Async;
use slog_term::{CompactFormat, TermDecorator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Command::new("Exchange")
        .version(crate_version!())
        .arg(
            Arg::new("startingDay")
                .long("starting-day")
                .help("the virtual day the exchange clock starts on")
                .takes_value(true)
                .default_value("0"),
        )
        .get_matches();

    let starting_day = cli
        .value_of("startingDay")
        .expect("startingDay has a default value")
        .parse::<u32>()
        .map(Day::new)?;

    let config = Config::from_env()?;
    let logger = logger();

    info!(&logger, "Starting in {:?} mode", config.env; "starting_day" => %starting_day);

    let app = Application::new(
        config,
        logger,
        Store::default(),
        VirtualClock::new(starting_day),
    );

    app.run().await;

    Ok(())
}

fn logger() -> Logger {
    let decorator = TermDecorator::new().build();
    let drain = CompactFormat::new(decorator).build().fuse();
    let drain = Async::new(drain).build().fuse();

    Logger::root(drain, o!("program" => "exchange"))
}
