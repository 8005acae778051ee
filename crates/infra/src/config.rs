//! Configuration loading and representation.
//!
//! - `LICENSEDESK_TODAY`: pin the reference date (`YYYY-MM-DD`); unset means
//!   the system clock

use chrono::NaiveDate;

use licensedesk_core::{Clock, FixedClock, SystemClock};

const TODAY_VAR: &str = "LICENSEDESK_TODAY";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeskConfig {
    pub today: Option<NaiveDate>,
}

impl DeskConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map lookup).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let today = lookup(TODAY_VAR).and_then(|raw| {
            match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(e) => {
                    tracing::warn!(
                        value = %raw,
                        error = %e,
                        "{} is not a YYYY-MM-DD date; using system clock",
                        TODAY_VAR
                    );
                    None
                }
            }
        });

        Self { today }
    }

    /// Clock honoring the pinned date, if any.
    pub fn clock(&self) -> DeskClock {
        match self.today {
            Some(date) => DeskClock::Fixed(FixedClock::new(date)),
            None => DeskClock::System(SystemClock),
        }
    }
}

/// Clock selected by configuration.
#[derive(Debug, Copy, Clone)]
pub enum DeskClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for DeskClock {
    fn today(&self) -> NaiveDate {
        match self {
            DeskClock::System(c) => c.today(),
            DeskClock::Fixed(c) => c.today(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = DeskConfig::from_lookup(lookup(&[]));
        assert_eq!(config, DeskConfig::default());
        assert!(matches!(config.clock(), DeskClock::System(_)));
    }

    #[test]
    fn pinned_today_yields_fixed_clock() {
        let config = DeskConfig::from_lookup(lookup(&[("LICENSEDESK_TODAY", " 2026-02-28 ")]));
        let expected = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        assert_eq!(config.today, Some(expected));
        assert_eq!(config.clock().today(), expected);
    }

    #[test]
    fn invalid_today_falls_back_to_system_clock() {
        let config = DeskConfig::from_lookup(lookup(&[("LICENSEDESK_TODAY", "tomorrow")]));
        assert_eq!(config.today, None);
        assert!(matches!(config.clock(), DeskClock::System(_)));
    }
}
