use env_logger::{Builder, Env};

pub struct Logger;

impl Logger {
    pub fn init(verbosity: u8) {
        let log_filter = match verbosity {
            0 => "booktriage=info",
            1 => "booktriage=debug,info",
            _ => "booktriage=trace,info",
        };

        // Default to INFO level logs if RUST_LOG is not set.
        Builder::from_env(Env::default().default_filter_or(log_filter))
            .format_timestamp(None)
            .init();
    }
}
