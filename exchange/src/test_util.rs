use slog::{o, Discard, Logger};

use crate::{application::Config, clock::VirtualClock, db::Store, Application};

pub fn discard_logger() -> Logger {
    Logger::root(Discard, o!())
}

/// An [`Application`] with an empty store and a clock at day 0.
pub fn setup_test_app() -> Application {
    Application::new(
        Config::default(),
        discard_logger(),
        Store::default(),
        VirtualClock::default(),
    )
}
