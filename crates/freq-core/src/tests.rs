//! Unit tests for freq-core primitives.

#[cfg(test)]
mod phase {
    use crate::{DraftReadings, Phase};

    #[test]
    fn sequence_is_linear_and_ends_in_none() {
        let mut p = Phase::InitialSurvey;
        let mut seen = vec![p];
        while p.next() != Phase::None {
            p = p.next();
            seen.push(p);
        }
        assert_eq!(seen, Phase::SEQUENCE);
        assert_eq!(Phase::FinalSurvey.next(), Phase::None);
        assert_eq!(Phase::None.next(), Phase::None);
    }

    #[test]
    fn default_is_none() {
        assert_eq!(Phase::default(), Phase::None);
        assert!(!Phase::None.is_running());
        assert!(Phase::CargoLoad.is_running());
    }

    #[test]
    fn ordinals() {
        let ords: Vec<u8> = Phase::SEQUENCE.iter().map(|p| p.ordinal()).collect();
        assert_eq!(ords, [1, 2, 3, 4, 5, 6]);
        assert_eq!(Phase::None.ordinal(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Phase::InitialSurvey.to_string(), "INITIAL-SURV");
        assert_eq!(Phase::CargoLoad.to_string(), "CARGO-LOAD");
        assert_eq!(Phase::None.to_string(), "NONE");
    }

    #[test]
    fn draft_mean() {
        let d = DraftReadings { fore: 1.0, aft: 3.0, port: 2.0, starboard: 2.0 };
        assert!((d.mean() - 2.0).abs() < 1e-6);
    }
}

#[cfg(test)]
mod math {
    use crate::math::{clamp01, lerp, smoothing_factor};

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(1.5, 9.0, 0.0), 1.5);
        assert_eq!(lerp(1.5, 9.0, 1.0), 9.0);
        assert!((lerp(3.5, 1.8, 0.5) - 2.65).abs() < 1e-6);
    }

    #[test]
    fn clamp01_bounds() {
        assert_eq!(clamp01(-0.3), 0.0);
        assert_eq!(clamp01(1.7), 1.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(f32::NAN), 0.0);
    }

    #[test]
    fn smoothing_factor_range() {
        assert_eq!(smoothing_factor(30.0, 0.0), 0.0);
        assert_eq!(smoothing_factor(0.0, 1.0), 0.0);
        assert_eq!(smoothing_factor(-5.0, 1.0), 0.0);
        for &dt in &[0.001f32, 0.016, 0.1, 1.0, 100.0] {
            let f = smoothing_factor(30.0, dt);
            assert!((0.0..=1.0).contains(&f), "dt={dt} factor={f}");
        }
    }

    #[test]
    fn smoothing_factor_is_frame_rate_independent() {
        // Two half-steps close the same distance as one full step.
        let whole = smoothing_factor(2.0, 0.5);
        let half  = smoothing_factor(2.0, 0.25);
        let two_halves = 1.0 - (1.0 - half) * (1.0 - half);
        assert!((whole - two_halves).abs() < 1e-5);
    }
}

#[cfg(test)]
mod clock {
    use crate::SimClock;

    #[test]
    fn advance_accumulates_both() {
        let mut c = SimClock::new();
        c.advance(1.5);
        c.advance(0.5);
        assert_eq!(c.simulation_elapsed_secs, 2.0);
        assert_eq!(c.phase_elapsed_secs, 2.0);
        c.restart_phase();
        assert_eq!(c.phase_elapsed_secs, 0.0);
        assert_eq!(c.simulation_elapsed_secs, 2.0);
    }

    #[test]
    fn negative_and_nan_deltas_ignored() {
        let mut c = SimClock::new();
        c.advance(-3.0);
        c.advance(f32::NAN);
        assert_eq!(c, SimClock::default());
    }

    #[test]
    fn phase_alpha_clamped() {
        let mut c = SimClock::new();
        c.advance(10.0);
        assert!((c.phase_alpha(40.0) - 0.25).abs() < 1e-6);
        assert_eq!(c.phase_alpha(5.0), 1.0);
    }

    #[test]
    fn zero_duration_counts_as_complete() {
        let c = SimClock::new();
        assert_eq!(c.phase_alpha(0.0), 1.0);
        assert_eq!(c.phase_alpha(-2.0), 1.0);
    }

    #[test]
    fn mmss_display() {
        let mut c = SimClock::new();
        c.advance(125.7);
        assert_eq!(c.elapsed_mmss(), (2, 5));
        assert_eq!(c.to_string(), "02:05");
    }
}

#[cfg(test)]
mod point {
    use crate::Point3;

    #[test]
    fn offset_and_distance() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = a.offset(Point3::new(3.0, 4.0, 0.0));
        assert_eq!(b, Point3::new(4.0, 6.0, 3.0));
        assert!((a.distance_cm(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn display() {
        assert_eq!(Point3::new(1.4, -2.6, 1500.0).to_string(), "X1 Y-3 Z1500");
    }
}

#[cfg(test)]
mod config {
    use crate::{FreqError, Phase, SimConfig};

    #[test]
    fn default_durations() {
        let cfg = SimConfig::default();
        let d: Vec<f32> = Phase::SEQUENCE.iter().map(|&p| cfg.phases.of(p)).collect();
        assert_eq!(d, [20.0, 15.0, 45.0, 45.0, 15.0, 20.0]);
        assert_eq!(cfg.phases.total(), 160.0);
        assert_eq!(cfg.phases.of(Phase::None), 1.0);
    }

    #[test]
    fn default_barge_dimensions_in_feet() {
        let b = SimConfig::default().barge;
        assert!((b.length_ft() - 195.0).abs() < 1e-3);
        assert!((b.beam_ft() - 35.0).abs() < 1e-3);
        assert!((b.depth_ft() - 12.0).abs() < 1e-3);
    }

    #[test]
    fn default_validates() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_duration_is_legal() {
        let mut cfg = SimConfig::default();
        cfg.phases.pre_load = 0.0;
        cfg.validate().unwrap();
    }

    #[test]
    fn nan_duration_rejected() {
        let mut cfg = SimConfig::default();
        cfg.phases.cargo_load = f32::NAN;
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, FreqError::Config { field: "phases.cargo_load", .. }));
    }

    #[test]
    fn inverted_draft_range_rejected() {
        let mut cfg = SimConfig::default();
        cfg.barge.light_draft_ft = 10.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_speed_rejected() {
        let mut cfg = SimConfig::default();
        cfg.crane.rotation_speed = -1.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_max_rotation_rejected() {
        let mut cfg = SimConfig::default();
        cfg.crane.max_boom_rotation_deg = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_defaults() {
        let cfg = SimConfig::from_json_str(r#"{ "phases": { "active_load": 30.0 }, "mob": { "duration_secs": 5.0 } }"#)
            .unwrap();
        assert_eq!(cfg.phases.active_load, 30.0);
        assert_eq!(cfg.phases.cargo_load, 45.0);
        assert_eq!(cfg.mob.duration_secs, 5.0);
        assert_eq!(cfg.barge, SimConfig::default().barge);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn malformed_json_is_parse_error() {
        let err = SimConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, FreqError::Parse(_)));
    }
}
