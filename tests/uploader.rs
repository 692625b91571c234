#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use playtrack::libs::config::ServerConfig;
    use playtrack::libs::counters::DailyCounters;
    use playtrack::libs::uploader::{UploadError, UploadTrigger, Uploader};

    const ALL_TRIGGERS: [UploadTrigger; 4] = [
        UploadTrigger::Periodic,
        UploadTrigger::Rollover,
        UploadTrigger::Shutdown,
        UploadTrigger::Manual,
    ];

    fn server_config() -> ServerConfig {
        ServerConfig {
            enabled: true,
            url: "https://stats.example.org".to_string(),
            player_name: Some("Tester".to_string()),
            upload_interval: 300,
            min_upload_seconds: 60,
        }
    }

    fn counters(active_seconds: f64) -> DailyCounters {
        DailyCounters {
            date: NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            active_seconds,
            session_count: 2,
        }
    }

    #[test]
    fn test_disabled_blocks_every_trigger() {
        let config = ServerConfig {
            enabled: false,
            ..server_config()
        };
        let uploader = Uploader::new(&config).unwrap();

        for trigger in ALL_TRIGGERS {
            let result = uploader.check_gate(&counters(3600.0), trigger);
            assert!(matches!(result, Err(UploadError::Disabled)), "trigger {:?}", trigger);
        }
    }

    #[test]
    fn test_minimum_gates_periodic_only() {
        let uploader = Uploader::new(&server_config()).unwrap();
        let short_day = counters(59.9);

        assert!(matches!(
            uploader.check_gate(&short_day, UploadTrigger::Periodic),
            Err(UploadError::BelowMinimum)
        ));
        // Rollover, shutdown and manual uploads bypass the minimum.
        for trigger in [UploadTrigger::Rollover, UploadTrigger::Shutdown, UploadTrigger::Manual] {
            assert!(uploader.check_gate(&short_day, trigger).is_ok(), "trigger {:?}", trigger);
        }
    }

    #[test]
    fn test_periodic_passes_at_the_minimum() {
        let uploader = Uploader::new(&server_config()).unwrap();
        assert!(uploader.check_gate(&counters(60.0), UploadTrigger::Periodic).is_ok());
    }

    #[test]
    fn test_missing_identity_skips_even_forced_uploads() {
        let config = ServerConfig {
            player_name: None,
            ..server_config()
        };
        let uploader = Uploader::new(&config).unwrap();

        for trigger in ALL_TRIGGERS {
            let result = uploader.check_gate(&counters(3600.0), trigger);
            assert!(matches!(result, Err(UploadError::MissingIdentity)), "trigger {:?}", trigger);
        }
    }

    #[test]
    fn test_empty_identity_counts_as_missing() {
        let config = ServerConfig {
            player_name: Some(String::new()),
            ..server_config()
        };
        let uploader = Uploader::new(&config).unwrap();

        assert!(matches!(
            uploader.check_gate(&counters(3600.0), UploadTrigger::Shutdown),
            Err(UploadError::MissingIdentity)
        ));
    }

    #[test]
    fn test_report_payload_shape() {
        let uploader = Uploader::new(&server_config()).unwrap();
        let report = uploader.check_gate(&counters(125.9), UploadTrigger::Manual).unwrap();

        // Minutes are floored, never rounded up.
        assert_eq!(report.minutes_played, 2);
        assert_eq!(report.sessions, 2);
        assert_eq!(report.date, "2025-06-05");
        assert_eq!(report.player_name, "Tester");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "player_name": "Tester",
                "date": "2025-06-05",
                "minutes_played": 2,
                "sessions": 2
            })
        );
    }
}
