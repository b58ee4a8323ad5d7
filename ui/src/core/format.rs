//! Formatting helpers for presenting wear and schedule values.

pub fn format_minutes(total: u32) -> String {
    let hours = total / 60;
    let minutes = total % 60;
    if hours == 0 {
        format!("{minutes} m")
    } else {
        format!("{hours} h {minutes:02} m")
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.0}%")
}

pub fn format_days(days: u32) -> String {
    match days {
        0 => "today".to_string(),
        1 => "1 day".to_string(),
        n => format!("{n} days"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_render_with_hour_split() {
        assert_eq!(format_minutes(45), "45 m");
        assert_eq!(format_minutes(485), "8 h 05 m");
        assert_eq!(format_minutes(1320), "22 h 00 m");
    }

    #[test]
    fn days_have_singular_and_today_forms() {
        assert_eq!(format_days(0), "today");
        assert_eq!(format_days(1), "1 day");
        assert_eq!(format_days(14), "14 days");
    }
}
