use std::fmt::Debug;

use tracing::{debug, warn};

/// Identifier Open-Meteo understands as "derive the zone from the coordinates".
pub const AUTO_TIMEZONE: &str = "auto";

/// Where the default timezone comes from when the user does not pass one.
pub trait TimezoneSource: Send + Sync + Debug {
    fn detect(&self) -> Option<String>;
}

/// Asks the operating system for its configured IANA zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostTimezone;

impl TimezoneSource for HostTimezone {
    fn detect(&self) -> Option<String> {
        match iana_time_zone::get_timezone() {
            Ok(tz) => Some(tz),
            Err(e) => {
                warn!(error = %e, "unable to detect host timezone");
                None
            }
        }
    }
}

/// Always reports the same zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTimezone(pub String);

impl TimezoneSource for FixedTimezone {
    fn detect(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Explicit zone wins, then whatever `source` detects, then [`AUTO_TIMEZONE`].
pub fn resolve_timezone(explicit: Option<String>, source: &dyn TimezoneSource) -> String {
    if let Some(tz) = explicit.filter(|tz| !tz.trim().is_empty()) {
        return tz;
    }

    match source.detect() {
        Some(tz) if !tz.trim().is_empty() => {
            debug!(timezone = %tz, "using detected timezone");
            tz
        }
        _ => {
            warn!("falling back to provider-side timezone resolution");
            AUTO_TIMEZONE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Undetectable;

    impl TimezoneSource for Undetectable {
        fn detect(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn explicit_zone_wins() {
        let source = FixedTimezone("Europe/Berlin".into());
        let tz = resolve_timezone(Some("America/Chicago".into()), &source);
        assert_eq!(tz, "America/Chicago");
    }

    #[test]
    fn detected_zone_is_default() {
        let source = FixedTimezone("Europe/Berlin".into());
        assert_eq!(resolve_timezone(None, &source), "Europe/Berlin");
    }

    #[test]
    fn blank_explicit_zone_is_ignored() {
        let source = FixedTimezone("Asia/Tokyo".into());
        assert_eq!(resolve_timezone(Some("  ".into()), &source), "Asia/Tokyo");
    }

    #[test]
    fn undetectable_zone_falls_back_to_auto() {
        assert_eq!(resolve_timezone(None, &Undetectable), AUTO_TIMEZONE);
    }
}
