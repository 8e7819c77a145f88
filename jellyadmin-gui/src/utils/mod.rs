use chrono::{DateTime, Utc};

#[cfg(test)]
pub mod mock;

/// Human readable time elapsed between `date` and `now`, e.g. "5 minutes ago".
pub fn format_last_seen(date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(date) = date else {
        return "Never".to_string();
    };
    let elapsed = now.signed_duration_since(date);
    // Clocks of the server and of the client are not always in sync.
    if elapsed.num_seconds() < 60 {
        return "Just now".to_string();
    }
    let (count, unit) = if elapsed.num_minutes() < 60 {
        (elapsed.num_minutes(), "minute")
    } else if elapsed.num_hours() < 24 {
        (elapsed.num_hours(), "hour")
    } else if elapsed.num_days() < 30 {
        (elapsed.num_days(), "day")
    } else if elapsed.num_days() < 365 {
        (elapsed.num_days() / 30, "month")
    } else {
        (elapsed.num_days() / 365, "year")
    };
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn last_seen() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap();
        assert_eq!(format_last_seen(None, now), "Never");
        assert_eq!(format_last_seen(Some(now), now), "Just now");
        assert_eq!(
            format_last_seen(Some(now + Duration::minutes(3)), now),
            "Just now"
        );
        assert_eq!(
            format_last_seen(Some(now - Duration::seconds(90)), now),
            "1 minute ago"
        );
        assert_eq!(
            format_last_seen(Some(now - Duration::minutes(59)), now),
            "59 minutes ago"
        );
        assert_eq!(
            format_last_seen(Some(now - Duration::hours(5)), now),
            "5 hours ago"
        );
        assert_eq!(
            format_last_seen(Some(now - Duration::days(1)), now),
            "1 day ago"
        );
        assert_eq!(
            format_last_seen(Some(now - Duration::days(65)), now),
            "2 months ago"
        );
        assert_eq!(
            format_last_seen(Some(now - Duration::days(800)), now),
            "2 years ago"
        );
    }
}
