use std::fmt::{Display, Formatter};
use time::{Duration, OffsetDateTime};

/// Coarse, human-readable age of a timestamp ("3 minutes ago"). Only the largest applicable unit is
/// used and every unit is floored, so 119 seconds is still "1 minute ago".
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimeAgo(Duration);

impl TimeAgo {
    /// Measures the time elapsed between `timestamp` and `now`, timestamps in the future are
    /// treated as if they happened right now.
    pub fn between(timestamp: OffsetDateTime, now: OffsetDateTime) -> Self {
        Self((now - timestamp).max(Duration::ZERO))
    }
}

impl Display for TimeAgo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let seconds = self.0.whole_seconds();
        let minutes = seconds / 60;
        let hours = minutes / 60;
        let days = hours / 24;

        // Hours intentionally have no singular form.
        match (days, hours, minutes) {
            (1, _, _) => write!(f, "1 day ago"),
            (days, _, _) if days > 1 => write!(f, "{days} days ago"),
            (_, hours, _) if hours > 0 => write!(f, "{hours} hours ago"),
            (_, _, 1) => write!(f, "1 minute ago"),
            (_, _, minutes) if minutes > 1 => write!(f, "{minutes} minutes ago"),
            _ => write!(f, "{seconds} seconds ago"),
        }
    }
}
