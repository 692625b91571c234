#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use playtrack::db::settings::SettingsDb;
    use playtrack::libs::counters::{DailyCounters, DayStore, KeyValueStore, STORE_NAMESPACE};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SettingsTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for SettingsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            SettingsTestContext { _temp_dir: temp_dir }
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 5).unwrap()
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_set_get_roundtrip(_ctx: &mut SettingsTestContext) {
        let mut db = SettingsDb::new().unwrap();
        db.set("testns", "key", "value").unwrap();

        assert_eq!(db.get("testns", "key").unwrap(), Some("value".to_string()));
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_get_missing_key_returns_none(_ctx: &mut SettingsTestContext) {
        let db = SettingsDb::new().unwrap();
        assert_eq!(db.get("testns", "missing").unwrap(), None);
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_set_overwrites_previous_value(_ctx: &mut SettingsTestContext) {
        let mut db = SettingsDb::new().unwrap();
        db.set("testns", "key", "first").unwrap();
        db.set("testns", "key", "second").unwrap();

        assert_eq!(db.get("testns", "key").unwrap(), Some("second".to_string()));
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_namespaces_are_isolated(_ctx: &mut SettingsTestContext) {
        let mut db = SettingsDb::new().unwrap();
        db.set("ns_one", "key", "one").unwrap();
        db.set("ns_two", "key", "two").unwrap();

        assert_eq!(db.get("ns_one", "key").unwrap(), Some("one".to_string()));
        assert_eq!(db.get("ns_two", "key").unwrap(), Some("two".to_string()));
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_day_store_roundtrip(_ctx: &mut SettingsTestContext) {
        let mut store = DayStore::new(SettingsDb::new().unwrap());
        let counters = DailyCounters {
            date: date(),
            active_seconds: 5403.6,
            session_count: 3,
        };
        store.save(&counters).unwrap();

        let loaded = store.load(date()).unwrap();
        assert_eq!(loaded, counters);
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_load_never_saved_date_yields_zeroes(_ctx: &mut SettingsTestContext) {
        let store = DayStore::new(SettingsDb::new().unwrap());
        let loaded = store.load(date()).unwrap();

        assert_eq!(loaded.active_seconds, 0.0);
        assert_eq!(loaded.session_count, 0);
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_corrupted_values_degrade_to_zero(_ctx: &mut SettingsTestContext) {
        let mut db = SettingsDb::new().unwrap();
        db.set(STORE_NAMESPACE, "2025-06-05_seconds", "garbage").unwrap();
        db.set(STORE_NAMESPACE, "2025-06-05_sessions", "12.5").unwrap();

        let store = DayStore::new(SettingsDb::new().unwrap());
        let loaded = store.load(date()).unwrap();

        // Corruption means the day starts over, never an error.
        assert_eq!(loaded.active_seconds, 0.0);
        assert_eq!(loaded.session_count, 0);
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_one_corrupted_field_leaves_the_other_intact(_ctx: &mut SettingsTestContext) {
        let mut db = SettingsDb::new().unwrap();
        db.set(STORE_NAMESPACE, "2025-06-05_seconds", "123.4").unwrap();
        db.set(STORE_NAMESPACE, "2025-06-05_sessions", "not a number").unwrap();

        let store = DayStore::new(SettingsDb::new().unwrap());
        let loaded = store.load(date()).unwrap();

        assert_eq!(loaded.active_seconds, 123.4);
        assert_eq!(loaded.session_count, 0);
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_days_are_stored_independently(_ctx: &mut SettingsTestContext) {
        let mut store = DayStore::new(SettingsDb::new().unwrap());
        let first = DailyCounters {
            date: date(),
            active_seconds: 100.2,
            session_count: 1,
        };
        let second = DailyCounters {
            date: NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(),
            active_seconds: 42.0,
            session_count: 2,
        };
        store.save(&first).unwrap();
        store.save(&second).unwrap();

        assert_eq!(store.load(first.date).unwrap(), first);
        assert_eq!(store.load(second.date).unwrap(), second);
    }
}
