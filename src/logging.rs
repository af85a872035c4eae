use std::fs::File;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::config::Config;

/// Set up `env_logger`, filtered by `RUST_LOG` (default `info`).
///
/// The TUI owns the terminal, so interactive runs log to `--log-file` or not
/// at all. Other commands log to stderr.
pub fn init(config: &Config) -> std::io::Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    if config.is_interactive() {
        match &config.log_file {
            Some(path) => {
                let file = File::create(path)?;
                builder.target(Target::Pipe(Box::new(file)));
            }
            None => {
                builder.filter_level(LevelFilter::Off);
            }
        }
    }

    // A logger may already be installed (e.g. by a test harness).
    let _ = builder.try_init();
    Ok(())
}
