#![cfg(feature = "serde")]

//! Serialized forms of tracker configuration and animation parameters.

use std::time::Duration;

use hdy_motion::{Easing, Orientation, SwipeConfig, TimedMotion};

#[test]
fn partial_config_fills_defaults() {
    let config: SwipeConfig = serde_json::from_str(r#"{ "drag_threshold": 24.0 }"#).unwrap();
    assert_eq!(config.drag_threshold, 24.0);
    assert_eq!(config.history_window, SwipeConfig::default().history_window);
    assert_eq!(config.touch_velocity_threshold, 300.0);
}

#[test]
fn config_round_trips() {
    let config = SwipeConfig {
        history_window: Duration::from_millis(100),
        touchpad_deceleration: 0.995,
        ..SwipeConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: SwipeConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn easing_serializes_as_kebab_name() {
    let json = serde_json::to_string(&Easing::EaseOutBounce).unwrap();
    assert_eq!(json, r#""ease-out-bounce""#);
    assert_eq!(json.trim_matches('"'), Easing::EaseOutBounce.name());
    let parsed: Easing = serde_json::from_str(r#""ease-in-out-elastic""#).unwrap();
    assert_eq!(parsed, Easing::EaseInOutElastic);
}

#[test]
fn orientation_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&Orientation::Vertical).unwrap(),
        r#""vertical""#
    );
}

#[test]
fn timed_motion_round_trips() {
    let motion = TimedMotion::new(0.0, 1.0, Duration::from_millis(250))
        .easing(Easing::EaseInOutCubic)
        .repeat_count(3)
        .alternate(true);
    let json = serde_json::to_string(&motion).unwrap();
    let back: TimedMotion = serde_json::from_str(&json).unwrap();
    assert_eq!(back, motion);
}
