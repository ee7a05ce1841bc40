//! Browser console logging through the `log` facade

use log::LevelFilter;

/// Install the console logger at `level`
pub fn init(level: LevelFilter) {
    let Some(level) = level.to_level() else {
        log::set_max_level(LevelFilter::Off);
        return;
    };
    if let Err(err) = console_log::init_with_level(level) {
        // Already installed by an earlier init; only the level changes
        log::debug!("console logger already set: {}", err);
    }
    log::set_max_level(level.to_level_filter());
}

/// Parse a level name from the host ("warn", "debug", ...)
pub fn parse_level(name: &str) -> LevelFilter {
    name.parse().unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }
}
