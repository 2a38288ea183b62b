use super::*;
use chrono::{Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn test_camera_snapshot_preserves_order_and_ids() {
    let cameras = default_cameras();
    let mut rng = rng(1);

    for _ in 0..50 {
        let snapshot = generate_camera_snapshot(&cameras, &mut rng).unwrap();
        assert_eq!(snapshot.len(), 9);

        let ids: Vec<&str> = snapshot.iter().map(|c| c.id.as_str()).collect();
        let expected: Vec<&str> = cameras.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, expected);
    }
}

#[test]
fn test_inactive_cameras_report_zeros() {
    let cameras = default_cameras();
    let mut rng = rng(2);

    for _ in 0..50 {
        let snapshot = generate_camera_snapshot(&cameras, &mut rng).unwrap();
        for camera in snapshot.iter().filter(|c| !c.active) {
            assert_eq!(camera.fps, 0);
            assert_eq!(camera.motion_intensity, 0);
            assert_eq!(camera.detections, 0);
        }

        let cafeteria = snapshot.iter().find(|c| c.id == "CAM-04").unwrap();
        assert!(!cafeteria.active);
    }
}

#[test]
fn test_active_camera_ranges() {
    let cameras = default_cameras();
    let mut rng = rng(3);

    for _ in 0..200 {
        for camera in generate_camera_snapshot(&cameras, &mut rng)
            .unwrap()
            .iter()
            .filter(|c| c.active)
        {
            assert!((25..=29).contains(&camera.fps));
            assert!(camera.motion_intensity <= 99);
            assert!(camera.detections <= 19);
        }
    }
}

#[test]
fn test_camera_snapshot_rejects_malformed_config() {
    let mut rng = rng(4);

    assert_eq!(
        generate_camera_snapshot(&[], &mut rng),
        Err(ConfigurationError::EmptyCameraList)
    );

    let blank_id = vec![
        CameraConfig::new("CAM-01", "Main Gate", true),
        CameraConfig::new("  ", "Lobby", true),
    ];
    assert_eq!(
        generate_camera_snapshot(&blank_id, &mut rng),
        Err(ConfigurationError::EmptyCameraId(1))
    );

    let duplicate = vec![
        CameraConfig::new("CAM-01", "Main Gate", true),
        CameraConfig::new("CAM-01", "Side Gate", false),
    ];
    assert_eq!(
        generate_camera_snapshot(&duplicate, &mut rng),
        Err(ConfigurationError::DuplicateCameraId("CAM-01".to_string()))
    );

    let no_location = vec![CameraConfig::new("CAM-01", "", true)];
    assert_eq!(
        generate_camera_snapshot(&no_location, &mut rng),
        Err(ConfigurationError::EmptyLocation("CAM-01".to_string()))
    );
}

#[test]
fn test_validate_bands() {
    let cameras = default_cameras();
    assert_eq!(validate_bands(&default_series_bands(), &cameras), Ok(()));

    assert_eq!(
        validate_bands(&[SeriesBand::new(" ", 25)], &cameras),
        Err(ConfigurationError::EmptySeriesCamera(0))
    );
    assert_eq!(
        validate_bands(&[SeriesBand::new("CAM-42", 25)], &cameras),
        Err(ConfigurationError::UnknownSeriesCamera("CAM-42".to_string()))
    );
    assert_eq!(
        validate_bands(
            &[SeriesBand::new("CAM-02", 24), SeriesBand::new("CAM-02", 26)],
            &cameras
        ),
        Err(ConfigurationError::DuplicateSeriesBand("CAM-02".to_string()))
    );
    assert_eq!(
        validate_bands(&[SeriesBand::new("CAM-01", u32::MAX)], &cameras),
        Err(ConfigurationError::SeriesBaseOutOfRange {
            camera: "CAM-01".to_string(),
            base: u32::MAX,
        })
    );
    assert_eq!(
        validate_bands(&[SeriesBand::new("CAM-01", MAX_SERIES_BASE)], &cameras),
        Ok(())
    );
}

#[test]
fn test_performance_series_top_of_range_band() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
    let bands = vec![
        SeriesBand::new("CAM-01", MAX_SERIES_BASE),
        SeriesBand::new("CAM-02", u32::MAX),
    ];

    let series = generate_performance_series(&bands, now, &mut rng(12));
    for sample in &series {
        assert!(sample.fps_for("CAM-01").unwrap() >= MAX_SERIES_BASE);
        assert_eq!(sample.fps_for("CAM-02"), Some(u32::MAX));
    }
}

#[test]
fn test_system_metrics_ranges() {
    let mut rng = rng(5);

    for _ in 0..200 {
        let metrics = generate_system_metrics(&mut rng);
        assert!((60..=89).contains(&metrics.cpu));
        assert!((50..=89).contains(&metrics.gpu));
        assert!((65..=89).contains(&metrics.memory));
        assert_eq!(metrics.active_streams, 8);
        assert_eq!(metrics.max_streams, 12);
        assert!(metrics.active_streams <= metrics.max_streams);
        assert!(Bottleneck::ALL.contains(&metrics.bottleneck));
    }
}

#[test]
fn test_bottleneck_covers_all_labels() {
    let mut rng = rng(6);
    let seen: std::collections::HashSet<&str> = (0..200)
        .map(|_| generate_system_metrics(&mut rng).bottleneck.as_str())
        .collect();

    assert_eq!(seen.len(), 3);
}

#[test]
fn test_detection_stats_ranges() {
    let mut rng = rng(7);

    for _ in 0..200 {
        let stats = generate_detection_stats(&mut rng);
        assert!((50..=69).contains(&stats.person));
        assert!((25..=39).contains(&stats.vehicle));
        assert!((5..=14).contains(&stats.bicycle));
        assert!((5..=14).contains(&stats.other));
        assert!((15_000..=15_999).contains(&stats.total_detections));
    }
}

#[test]
fn test_performance_series_shape() {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 14, 5, 30).unwrap();
    let bands = default_series_bands();
    let series = generate_performance_series(&bands, now, &mut rng(8));

    assert_eq!(series.len(), SERIES_LEN);
    assert_eq!(series.last().unwrap().timestamp, now);
    assert_eq!(series.last().unwrap().time, "14:05");
    assert_eq!(series.first().unwrap().time, "13:36");

    for pair in series.windows(2) {
        assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::minutes(1));
    }

    for sample in &series {
        assert_eq!(sample.readings.len(), bands.len());
        for band in &bands {
            let fps = sample.fps_for(&band.camera).unwrap();
            assert!(fps >= band.base && fps <= band.base + 4);
        }
    }
}

#[test]
fn test_performance_series_crosses_midnight() {
    let now = Utc.with_ymd_and_hms(2024, 3, 2, 0, 10, 0).unwrap();
    let series = generate_performance_series(&default_series_bands(), now, &mut rng(9));

    assert_eq!(series[0].time, "23:41");
    assert_eq!(series[29].time, "00:10");
}

#[test]
fn test_seeded_generators_are_reproducible() {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let cameras = default_cameras();
    let bands = default_series_bands();

    let mut a = rng(42);
    let mut b = rng(42);

    assert_eq!(
        generate_camera_snapshot(&cameras, &mut a).unwrap(),
        generate_camera_snapshot(&cameras, &mut b).unwrap()
    );
    assert_eq!(generate_system_metrics(&mut a), generate_system_metrics(&mut b));
    assert_eq!(generate_detection_stats(&mut a), generate_detection_stats(&mut b));
    assert_eq!(
        generate_performance_series(&bands, now, &mut a),
        generate_performance_series(&bands, now, &mut b)
    );
}

#[test]
fn test_alerts_are_fixed() {
    let alerts = generate_alerts();

    assert_eq!(alerts.len(), 5);
    assert_eq!(alerts, generate_alerts());

    let ids: Vec<u32> = alerts.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(alerts[2].severity, Severity::Error);
    assert_eq!(alerts[2].message, "Stream disconnected: CAM-04");
    assert_eq!(alerts[4].relative_time, "15 min ago");
}

#[test]
fn test_confidence_histogram_is_fixed() {
    let histogram = confidence_histogram();

    let bars: Vec<(&str, u32)> = histogram.iter().map(|b| (b.range.as_str(), b.count)).collect();
    assert_eq!(
        bars,
        vec![
            ("90-100%", 45),
            ("80-89%", 32),
            ("70-79%", 28),
            ("60-69%", 15),
            ("50-59%", 8),
        ]
    );
    assert_eq!(histogram, confidence_histogram());
}

#[test]
fn test_snapshot_serializes_with_dashboard_keys() {
    let cameras = vec![CameraConfig::new("CAM-04", "Cafeteria", false)];
    let snapshot = generate_camera_snapshot(&cameras, &mut rng(10)).unwrap();
    let json = serde_json::to_value(&snapshot[0]).unwrap();

    assert_eq!(json["motionIntensity"], 0);
    assert_eq!(json["location"], "Cafeteria");

    let metrics = serde_json::to_value(generate_system_metrics(&mut rng(11))).unwrap();
    assert_eq!(metrics["maxStreams"], 12);
    assert!(["CPU", "GPU", "Memory"].contains(&metrics["bottleneck"].as_str().unwrap()));

    let alert = serde_json::to_value(&generate_alerts()[0]).unwrap();
    assert_eq!(alert["severity"], "warning");
    assert_eq!(alert["relativeTime"], "2 min ago");
}
