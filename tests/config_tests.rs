use budget_tracker::{
    config::{ConfigManager, TrackerConfig},
    Currency, Record, TrackerError,
};
use chrono::NaiveDate;
use tempfile::tempdir;

#[test]
fn default_config_has_positive_limits() {
    let cfg = TrackerConfig::default();

    assert!(cfg.cash_limit > 0.0);
    assert!(cfg.calories_limit > 0.0);
    assert_eq!(cfg.default_currency, Currency::Rub);
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let cfg = TrackerConfig {
        cash_limit: 1500.0,
        calories_limit: 2200.0,
        default_currency: Currency::Usd,
    };

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn loaded_preferences_drive_a_cash_report() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("nested")).expect("manager");
    manager
        .save(&TrackerConfig {
            cash_limit: 1000.0,
            calories_limit: 2000.0,
            default_currency: Currency::Usd,
        })
        .expect("save config");

    let cfg = manager.load().expect("load config");
    let today = NaiveDate::from_ymd_opt(2025, 9, 23).unwrap();
    let mut cash = cfg.cash_calculator();
    cash.add_record(Record::on(1200.0, "tickets", today));

    assert_eq!(
        cash.remained_in(cfg.default_currency, today).unwrap(),
        "No money left, hang in there! Your debt is 2.34 dollars."
    );
}

#[test]
fn corrupt_file_converts_into_tracker_error() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));
    std::fs::write(manager.config_path(), "not json").unwrap();

    let err: TrackerError = manager.load().expect_err("corrupt config").into();
    assert!(err.to_string().starts_with("Configuration error:"));
}
