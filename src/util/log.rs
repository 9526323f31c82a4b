use anyhow::Result;
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};
use std::time::Instant;
use tracing_subscriber::fmt::time::OffsetTime;

pub static LAST_LOG: LazyLock<Mutex<HashMap<String, Instant>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

#[macro_export]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
#[allow(unused_imports)]
pub use current_location;

/// Returns true (and records the time) if the call site at `loc` has not logged within `elapsed`.
/// A poisoned table never suppresses a message.
pub fn should_log(loc: &str, elapsed: impl Fn(&Instant) -> bool) -> bool {
    let Ok(mut last_log) = LAST_LOG.lock() else {
        return true;
    };
    if last_log.get(loc).map_or(true, elapsed) {
        last_log.insert(loc.to_string(), Instant::now());
        true
    } else {
        false
    }
}

#[macro_export]
macro_rules! info_every_seconds {
    ($seconds:expr, $($args:expr),+) => {
        let loc = $crate::util::log::current_location!();
        if $crate::util::log::should_log(&loc, |then| then.elapsed().as_secs() >= $seconds) {
            $crate::core::prelude::info!($($args),+);
        }
    }
}
#[macro_export]
macro_rules! info_every_millis {
    ($millis:expr, $($args:expr),+) => {
        let loc = $crate::util::log::current_location!();
        if $crate::util::log::should_log(&loc, |then| then.elapsed().as_millis() >= $millis) {
            $crate::core::prelude::info!($($args),+);
        }
    }
}
#[macro_export]
macro_rules! warn_every_seconds {
    ($seconds:expr, $($args:expr),+) => {
        let loc = $crate::util::log::current_location!();
        if $crate::util::log::should_log(&loc, |then| then.elapsed().as_secs() >= $seconds) {
            $crate::core::prelude::warn!($($args),+);
        }
    }
}
#[macro_export]
macro_rules! warn_every_millis {
    ($millis:expr, $($args:expr),+) => {
        let loc = $crate::util::log::current_location!();
        if $crate::util::log::should_log(&loc, |then| then.elapsed().as_millis() >= $millis) {
            $crate::core::prelude::warn!($($args),+);
        }
    }
}

/// Installs a global `tracing` subscriber writing to stderr with a UTC wall-clock timer.
///
/// Fails if a global subscriber has already been installed.
pub fn setup_log() -> Result<()> {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;
    Ok(())
}
