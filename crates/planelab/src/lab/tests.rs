use super::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn formulations_agree_on_easy_points() {
    let cfg = LabCfg::default();
    let c = point(0.0, 1.0);
    for det in Determinant::ALL {
        let d = det.eval(cfg.a, cfg.b, c);
        assert!((d - 1.9).abs() < 1e-12, "{det:?}: {d}");
        assert_eq!(classify(d, 1e-10), Side::Left);
    }
    let below = point(0.0, -1.0);
    for det in Determinant::ALL {
        assert_eq!(classify(det.eval(cfg.a, cfg.b, below), 1e-10), Side::Right);
    }
}

#[test]
fn formulations_agree_randomized_seeded() {
    let cfg = LabCfg::default();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let c = point(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        let reference = Determinant::Det2x2.eval(cfg.a, cfg.b, c);
        for det in Determinant::ALL {
            assert!((det.eval(cfg.a, cfg.b, c) - reference).abs() < 1e-9);
        }
    }
}

#[test]
fn classify_tolerance_boundaries() {
    assert_eq!(classify(1e-9, 1e-8), Side::Collinear);
    assert_eq!(classify(-1e-9, 1e-8), Side::Collinear);
    assert_eq!(classify(1e-9, 1e-10), Side::Left);
    assert_eq!(classify(-1e-9, 1e-10), Side::Right);
    // Exactly eps is not collinear.
    assert_eq!(classify(1e-8, 1e-8), Side::Left);
}

#[test]
fn sweep_counts_partition_every_point() {
    let cfg = LabCfg::default();
    let pts = vec![point(0.0, 1.0), point(0.0, -1.0), point(0.0, 0.05), point(3.0, 0.2)];
    let sweep = Sweep::run(pts.clone(), &cfg);
    assert_eq!(sweep.epsilons().len(), 5);
    for det in Determinant::ALL {
        for i in 0..sweep.epsilons().len() {
            assert_eq!(sweep.counts(det, i).total(), pts.len());
            assert_eq!(sweep.labels(det, i).len(), pts.len());
        }
        // Midpoint of a-b and the point on the extension are collinear at 1e-5.
        let c = sweep.counts(det, 0);
        assert_eq!(c, Counts { left: 1, right: 1, collinear: 2 });
        let [left, right, collinear] = sweep.sides(det, 0);
        assert_eq!(left, vec![point(0.0, 1.0)]);
        assert_eq!(right, vec![point(0.0, -1.0)]);
        assert_eq!(collinear.len(), 2);
    }
}

#[test]
fn discrepancies_compare_per_point() {
    let cfg = LabCfg::default();
    let pts = sample_points(SampleKind::Line, SampleKind::Line.default_params(), 7).unwrap();
    let sweep = Sweep::run(pts, &cfg);
    for i in 0..sweep.epsilons().len() {
        assert!(sweep
            .discrepancies(Determinant::Det3x3, Determinant::Det3x3, i)
            .is_empty());
        let d = sweep.discrepancies(Determinant::Det2x2, Determinant::LibDet2x2, i);
        let (l1, l2) = (
            sweep.labels(Determinant::Det2x2, i),
            sweep.labels(Determinant::LibDet2x2, i),
        );
        let expected = l1.iter().zip(l2).filter(|(a, b)| a != b).count();
        assert_eq!(d.len(), expected);
    }
}

#[test]
fn samples_are_reproducible_and_in_range() {
    let params = SampleParams {
        count: 500,
        extent: 1000.0,
    };
    let a = sample_points(SampleKind::Square, params, 3).unwrap();
    let b = sample_points(SampleKind::Square, params, 3).unwrap();
    assert_eq!(a, b);
    assert!(a.iter().all(|p| p.x.abs() <= 1000.0 && p.y.abs() <= 1000.0));

    let circle = sample_points(SampleKind::Circle, SampleKind::Circle.default_params(), 1).unwrap();
    assert_eq!(circle.len(), 1000);
    assert!(circle.iter().all(|p| (p.norm() - 100.0).abs() < 1e-9));

    let line = sample_points(SampleKind::Line, params, 1).unwrap();
    assert!(line.iter().all(|p| (p.y - (0.05 * p.x + 0.05)).abs() < 1e-12));
}

#[test]
fn invalid_sample_params_are_rejected() {
    let zero = SampleParams {
        count: 0,
        extent: 1.0,
    };
    assert!(matches!(
        sample_points(SampleKind::Square, zero, 0),
        Err(LabError::InvalidParams { .. })
    ));
    let bad = SampleParams {
        count: 1,
        extent: f64::INFINITY,
    };
    assert!(sample_points(SampleKind::Wide, bad, 0).is_err());
}

#[test]
fn table_lists_every_tolerance() {
    let cfg = LabCfg::default();
    let sweep = Sweep::run(vec![point(0.0, 1.0), point(0.0, 0.05)], &cfg);
    let table = format_table(&sweep, Determinant::LibDet3x3);
    assert!(table.starts_with("LIB_DET3X3\n"));
    assert!(table.contains("Collinear"));
    assert!(table.contains("1e-18"));
    // name + 3 rules + header + 5 rows
    assert_eq!(table.lines().count(), 10);
}

#[test]
fn scenes_carry_colored_partitions() {
    let cfg = LabCfg::default();
    let sweep = Sweep::run(vec![point(0.0, 1.0), point(0.0, -1.0), point(0.0, 0.05)], &cfg);
    let scene = classification_scene(&sweep, Determinant::Det2x2, 0);
    assert_eq!(scene.points.len(), 3);
    let colors: Vec<_> = scene
        .points
        .iter()
        .map(|s| s.style().get("color").and_then(|v| v.as_str()).unwrap().to_string())
        .collect();
    assert_eq!(colors, vec!["red", "green", "blue"]);
    assert!(scene.points.iter().all(|s| s.len() == 1));

    let diff = discrepancy_scene(vec![point(1.0, 2.0)]);
    assert_eq!(diff.points[0].points(), &[point(1.0, 2.0)]);
}
