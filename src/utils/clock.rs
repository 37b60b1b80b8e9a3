use chrono::Local;

/// Human-readable wall-clock timestamp recorded on block records,
/// in the classic `ctime` layout (e.g. `Mon Jan 10 14:03:21 2022`).
pub fn current_timestamp() -> String {
    Local::now().format("%a %b %e %H:%M:%S %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_has_ctime_shape() {
        let ts = current_timestamp();
        // Five whitespace-separated fields: weekday, month, day, time, year
        let fields: Vec<&str> = ts.split_whitespace().collect();
        assert_eq!(fields.len(), 5);
        assert!(fields[3].contains(':'));
        assert!(fields[4].parse::<i32>().is_ok());
    }
}
