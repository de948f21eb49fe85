//! # Configuration Tests
//!
//! Tests for defaults, JSON deserialization, and validation.

use std::time::Duration;

use pipesim_core::clock::ProviderKind;
use pipesim_core::common::ConfigError;
use pipesim_core::config::*;
use pipesim_core::core::pipeline::signals::HazardMode;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.general.hazard_mode, HazardMode::StallAndForward);
    assert!(!config.general.trace_pipeline);
    assert_eq!(config.general.event_capacity, 4096);
    assert_eq!(config.general.max_cycles, 100_000);
    assert_eq!(config.clock.provider, ProviderKind::Manual);
    assert_eq!(config.clock.period, 10);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = Config::from_json("{}").expect("empty object is valid");
    assert_eq!(config.general.hazard_mode, HazardMode::StallAndForward);
    assert_eq!(config.clock.period, 10);
}

#[test]
fn test_full_json() {
    let config = Config::from_json(
        r#"{
            "general": {
                "hazard_mode": "stall",
                "trace_pipeline": true,
                "event_capacity": 16,
                "max_cycles": 500
            },
            "clock": { "provider": "timed", "period": 3 }
        }"#,
    )
    .expect("valid configuration");
    assert_eq!(config.general.hazard_mode, HazardMode::Stall);
    assert!(config.general.trace_pipeline);
    assert_eq!(config.general.event_capacity, 16);
    assert_eq!(config.general.max_cycles, 500);
    assert_eq!(config.clock.provider, ProviderKind::Timed);
    assert_eq!(config.clock.half_period(), Duration::from_millis(150));
}

#[test]
fn test_hazard_mode_spellings() {
    for (text, mode) in [
        ("fail", HazardMode::Fail),
        ("stall", HazardMode::Stall),
        ("stall_and_forward", HazardMode::StallAndForward),
    ] {
        let json = format!(r#"{{ "general": {{ "hazard_mode": "{text}" }} }}"#);
        let config = Config::from_json(&json).expect("known mode");
        assert_eq!(config.general.hazard_mode, mode, "{text}");
    }
}

#[test]
fn test_period_out_of_range() {
    for period in [0, 1000] {
        let json = format!(r#"{{ "clock": {{ "period": {period} }} }}"#);
        match Config::from_json(&json) {
            Err(ConfigError::OutOfRange { field, value, .. }) => {
                assert_eq!(field, "clock.period");
                assert_eq!(value, period);
            }
            other => panic!("expected a range error, got {other:?}"),
        }
    }
}

#[test]
fn test_zero_cycle_limit_rejected() {
    let result = Config::from_json(r#"{ "general": { "max_cycles": 0 } }"#);
    assert!(matches!(
        result,
        Err(ConfigError::OutOfRange {
            field: "general.max_cycles",
            ..
        })
    ));
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        Config::from_json(r#"{ "general": { "hazard_mode": "sometimes" } }"#),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(Config::from_json("{"), Err(ConfigError::Json(_))));
}
