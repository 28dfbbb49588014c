// TerraQuest – An environmental word search
// Copyright (C) 2026  The TerraQuest developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use log::{LevelFilter, Metadata, Record};

pub const LOG_ENV_VAR: &str = "TERRAQUEST_LOG";

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        #[cfg(target_arch = "wasm32")]
        {
            let message = format!("{} - {}", record.level(), record.args());
            web_sys::console::log_1(&message.into());
        }

        // Standard output is reserved for the puzzles themselves
        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("{} - {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

pub fn parse_level(level: Option<&str>) -> LevelFilter {
    level.and_then(|level| level.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Installs the logger. The level comes from the `TERRAQUEST_LOG`
/// environment variable and defaults to `info`. Calling this more than
/// once only changes the level.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let level = std::env::var(LOG_ENV_VAR).ok();

    init_logging_with_level(parse_level(level.as_deref()));
}

pub fn init_logging_with_level(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn levels() {
        assert_eq!(parse_level(None), LevelFilter::Info);
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("off")), LevelFilter::Off);
        assert_eq!(parse_level(Some("chatty")), LevelFilter::Info);
    }
}
