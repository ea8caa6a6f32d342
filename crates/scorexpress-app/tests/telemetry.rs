use scorexpress_app::config::AppConfig;
use scorexpress_app::telemetry::env_filter;

#[test]
fn configured_directives_build_a_filter() {
    let mut config = AppConfig::new();
    config.log_filter = "scorexpress_instruments=debug,warn".to_string();
    assert!(env_filter(&config).is_ok());
}
