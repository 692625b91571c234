#[cfg(test)]
mod tests {
    use playtrack::libs::formatter::format_playtime;

    #[test]
    fn test_format_playtime_zero() {
        assert_eq!(format_playtime(0.0), "0m");
    }

    #[test]
    fn test_format_playtime_sub_minute_truncates() {
        assert_eq!(format_playtime(59.9), "0m");
        assert_eq!(format_playtime(60.0), "1m");
        assert_eq!(format_playtime(119.4), "1m");
    }

    #[test]
    fn test_format_playtime_minutes_only() {
        assert_eq!(format_playtime(45.0 * 60.0), "45m");
        assert_eq!(format_playtime(59.0 * 60.0), "59m");
    }

    #[test]
    fn test_format_playtime_with_hours() {
        assert_eq!(format_playtime(3600.0), "1h 00m");
        assert_eq!(format_playtime(3900.0), "1h 05m");
        assert_eq!(format_playtime(2.0 * 3600.0 + 5.0 * 60.0), "2h 05m");
        assert_eq!(format_playtime(12.0 * 3600.0 + 34.0 * 60.0), "12h 34m");
    }

    #[test]
    fn test_format_playtime_negative_is_zero() {
        assert_eq!(format_playtime(-10.0), "0m");
    }
}
