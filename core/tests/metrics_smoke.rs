use serde_json::json;
use trackgraph_core::*;

#[test]
fn smoke_json_track() {
    // 60 samples, 10 m mellom hvert, jevn stigning 5 %
    let samples: Vec<_> = (0..60)
        .map(|i| json!({
            "index": i,
            "time": i * 1000,
            "lat": 61.0 + i as f64 * 0.0001,
            "lon": 9.0,
            "dist": i as f64 * 10.0,
            "alt": 500.0 + i as f64 * 0.5,
            "speed": 5.0,
            "hr": 140.0
        }))
        .collect();

    let cfg = json!({ "max_hr": 200.0 });

    let out = analyze_track_json(
        &serde_json::to_string(&samples).unwrap(),
        Some(&serde_json::to_string(&cfg).unwrap()),
    )
    .unwrap();

    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["summary"]["sample_count"], 60);
    assert!((v["summary"]["gain_loss"]["gain"].as_f64().unwrap() - 29.5).abs() < 1e-9);
    assert_eq!(v["speed_segments"].as_array().unwrap().len(), 1);
    assert_eq!(v["speed_segments"][0]["category"]["speed"], "medium");
    assert_eq!(v["slope_segments"][0]["category"]["slope"], "incline");
    // makspuls 200 => 140 bpm er nedre grense for sone 3
    assert_eq!(v["heart_rate_zones"]["counts"][2], 60);
}

#[test]
fn json_parse_error_reports_path() {
    let bad = r#"[{"timestamp_ms": 0, "elevation_m": 100.0}, {"timestamp_ms": "x"}]"#;
    match analyze_track_json(bad, None) {
        Err(AnalyticsError::Parse { path, .. }) => assert!(path.starts_with("[1]"), "path = {path}"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = r#"{"speed_breakpoints_kmh": [6.0, 4.0, 2.0]}"#;
    let err = analyze_track_json("[]", Some(cfg)).unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidConfig(_)));
}

#[test]
fn segment_and_period_json() {
    let samples = json!([
        { "time": 0, "speed": 1.0 },
        { "time": 1000, "speed": 1.0 },
        { "time": 2000, "speed": 7.0 }
    ]);
    let out = segment_json(&samples.to_string(), "speed", None).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 2);
    assert_eq!(v[1]["category"]["speed"], "fast");
    assert!(segment_json(&samples.to_string(), "cadence", None).is_err());

    let records = json!([
        { "date": "2024-02-10", "distance": 4200.0, "heart_rate": { "min": 90.0, "avg": 120.0, "max": 150.0 } }
    ]);
    let out = period_stats_json(&records.to_string(), 2024, "month").unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 12);
    assert_eq!(v[1]["activity_count"], 1);
    assert_eq!(v[1]["hr_avg"], 120.0);
    assert_eq!(v[0]["activity_count"], 0);
}

#[test]
fn telemetry_counts_analyses() {
    let _ = analyze_track(&[], &AnalyticsConfig::default());
    let text = telemetry::gather_text();
    assert!(text.contains("trackgraph_analyses_total"));
}
