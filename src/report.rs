//! Human-readable elapsed time for run summaries.

/// `"{label} computation time: ..."` in the largest sensible units.
///
/// Under a minute the seconds keep four decimals; above that they keep one.
pub fn format_elapsed(seconds: f64, label: &str) -> String {
    let seconds = seconds.max(0.0);
    let body = if seconds < 60.0 {
        format!("{} sec", seconds_text(round_to(seconds, 4)))
    } else if seconds < 3_600.0 {
        let mins = (seconds / 60.0).floor();
        let secs = round_to(seconds - mins * 60.0, 1);
        format!("{mins} min, {} sec", seconds_text(secs))
    } else if seconds < 86_400.0 {
        let hrs = (seconds / 3_600.0).floor();
        let mins = ((seconds - hrs * 3_600.0) / 60.0).floor();
        let secs = round_to(seconds - hrs * 3_600.0 - mins * 60.0, 1);
        format!("{hrs} hrs, {mins} min, {} sec", seconds_text(secs))
    } else {
        let days = (seconds / 86_400.0).floor();
        let rest = seconds - days * 86_400.0;
        let hrs = (rest / 3_600.0).floor();
        let mins = ((rest - hrs * 3_600.0) / 60.0).floor();
        let secs = round_to(rest - hrs * 3_600.0 - mins * 60.0, 1);
        format!("{days} days, {hrs} hrs, {mins} min, {} sec", seconds_text(secs))
    };
    format!("{label} computation time: {body}")
}

/// Seconds always carry a decimal point: `7.0`, `3.25`.
fn seconds_text(secs: f64) -> String {
    if secs.fract() == 0.0 { format!("{secs:.1}") } else { format!("{secs}") }
}

#[inline]
fn round_to(v: f64, digits: i32) -> f64 {
    let k = 10_f64.powi(digits);
    (v * k).round() / k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_only() {
        assert_eq!(format_elapsed(1.23456, "VFI"), "VFI computation time: 1.2346 sec");
    }

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(format_elapsed(63.25, "VFI"), "VFI computation time: 1 min, 3.3 sec");
    }

    #[test]
    fn hours_minutes_seconds() {
        assert_eq!(
            format_elapsed(3_600.0 * 2.0 + 60.0 * 5.0 + 7.0, "VFI"),
            "VFI computation time: 2 hrs, 5 min, 7.0 sec"
        );
    }

    #[test]
    fn whole_seconds_keep_one_decimal() {
        assert_eq!(format_elapsed(7.0, "VFI"), "VFI computation time: 7.0 sec");
        assert_eq!(format_elapsed(61.0, "VFI"), "VFI computation time: 1 min, 1.0 sec");
        assert_eq!(format_elapsed(120.0, "VFI"), "VFI computation time: 2 min, 0.0 sec");
    }

    #[test]
    fn days() {
        assert_eq!(
            format_elapsed(86_400.0 + 3_600.0 + 60.0 + 1.5, "VFI"),
            "VFI computation time: 1 days, 1 hrs, 1 min, 1.5 sec"
        );
    }
}
