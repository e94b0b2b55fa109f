//! File logging; the terminal itself belongs to the animation.

use std::fs::File;

use env_logger::{Env, Target};

/// Log file name, created in the system temporary directory.
const LOG_FILE: &str = "digital-rain.log";

/// Route `log` records to the log file, filtered by `RUST_LOG` (default `warn`).
pub fn init() -> color_eyre::Result<()> {
    let path = std::env::temp_dir().join(LOG_FILE);
    let file = File::create(&path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;
    Ok(())
}
