#![allow(clippy::unwrap_used)]

use dyntopo::error::TransectError;
use dyntopo::geo::LocalFrame;
use dyntopo::geometry::Segment;
use dyntopo::math::Point2;
use dyntopo::records::{read_cuts, read_observations, write_results};
use dyntopo::transect::{Integrate, SampleTransect};
use dyntopo::{Cut, DtError, DynamicTopography, EarthModel, Observation, SolverConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn frame() -> LocalFrame {
    LocalFrame::new(Point2::new(148.6, 42.9), EarthModel::default())
}

/// Observation at local `x` crossing the x axis toward -y.
fn crossing(frame: &LocalFrame, x: f64, speed: f64) -> Observation {
    let local = Segment::new(Point2::new(x, 1.5), Point2::new(x + 0.3, 0.2));
    Observation::new(frame.segment_to_geo(&local), speed, 0.02)
}

fn geo_cut(frame: &LocalFrame, x0: f64, y0: f64, x1: f64, y1: f64) -> Cut {
    let geo = frame.segment_to_geo(&Segment::new(Point2::new(x0, y0), Point2::new(x1, y1)));
    Cut::new(geo.start, geo.end)
}

#[test]
fn negative_speed_observation_is_excluded() {
    init_tracing();
    let frame = frame();
    let observations = [crossing(&frame, 5.0, 1.0), crossing(&frame, 12.0, -1.0)];
    let local: Vec<_> = observations
        .iter()
        .map(|o| frame.observation_to_local(o))
        .collect();
    let cut = frame.cut_to_local(&geo_cut(&frame, -20.0, 0.0, 20.0, 0.0));

    let sampled = SampleTransect::new(cut.segment, 10.0).execute(&local).unwrap();
    assert_eq!(sampled.len(), 1);
    assert!((sampled.samples[0].observation.speed - 1.0).abs() < f64::EPSILON);

    // A single sample is far below the integration minimum.
    let dt = DynamicTopography::new(frame, SolverConfig::default(), &observations);
    let err = dt.compute(&geo_cut(&frame, -20.0, 0.0, 20.0, 0.0)).unwrap_err();
    assert!(matches!(
        err,
        DtError::Transect(TransectError::InsufficientSamples { found: 1, required: 10 })
    ));
}

#[test]
fn no_qualifying_observation_is_empty_neighborhood_not_zero() {
    init_tracing();
    let frame = frame();
    let observations = [crossing(&frame, 5.0, -0.5), crossing(&frame, 8.0, 0.0)];
    let dt = DynamicTopography::new(frame, SolverConfig::default(), &observations);
    let err = dt.compute(&geo_cut(&frame, -20.0, 0.0, 20.0, 0.0)).unwrap_err();
    assert!(matches!(
        err,
        DtError::Transect(TransectError::EmptyNeighborhood)
    ));
}

#[test]
fn doubling_partitions_does_not_grow_the_error() {
    init_tracing();
    let frame = frame();
    let config = SolverConfig::default();
    // Tilted transect so the Coriolis parameter varies along it.
    let direction = nalgebra::Vector2::new(0.8, 0.6);
    let local: Vec<_> = (0..40)
        .map(|i| {
            let s = 0.625 + 1.25 * f64::from(i);
            let on_line = Point2::new(0.0, 0.0) + direction * s;
            let normal = nalgebra::Vector2::new(-0.6, 0.8);
            let start = on_line + normal * 0.5;
            let end = on_line - normal * 0.7;
            let speed = 0.25 + 0.1 * (s / 8.0).sin();
            Observation::new(Segment::new(start, end), speed, 0.01)
        })
        .collect();
    let end = Point2::new(0.0, 0.0) + direction * 50.0;
    // Kernel wider than the transect keeps the interpolant smooth.
    let cut = Cut::new(Point2::new(0.0, 0.0), end).with_kernel_diameter(200.0);
    let sampled = SampleTransect::new(cut.segment, 5.0).execute(&local).unwrap();
    assert_eq!(sampled.len(), 40);

    let lin = |n: usize| {
        Integrate::new(&cut, &sampled, n)
            .execute(&frame, &config)
            .unwrap()
            .lin_value
    };
    let n = sampled.len() * config.coarse_factor;
    let (i1, i2, i4) = (lin(n), lin(2 * n), lin(4 * n));
    let e1 = (i1 - i2).abs();
    let e2 = (i2 - i4).abs();
    assert!(e2 <= e1 + 1e-15, "e1={e1} e2={e2}");
}

#[test]
fn records_in_results_out() {
    init_tracing();
    let config = SolverConfig::default();
    let frame = frame();

    let geo_start = frame.to_geo(&Point2::new(-25.0, 0.0));
    let geo_end = frame.to_geo(&Point2::new(25.0, 0.0));
    let far_start = frame.to_geo(&Point2::new(-25.0, 300.0));
    let far_end = frame.to_geo(&Point2::new(25.0, 300.0));
    let cut_text = format!(
        "{} {} {} {} -1 -1 -1\n{} {} {} {} 4 -1 10\n",
        geo_start.x, geo_start.y, geo_end.x, geo_end.y, far_start.x, far_start.y, far_end.x,
        far_end.y,
    );
    let cuts = read_cuts(cut_text.as_bytes(), &config).unwrap();
    assert_eq!(cuts.len(), 2);

    let mut obs_text = String::new();
    for i in 0..15 {
        let o = crossing(&frame, -21.0 + 3.0 * f64::from(i), 0.4);
        let s = o.displacement.start;
        let e = o.displacement.end;
        obs_text.push_str(&format!(
            "{} {} {} {} 0 0 0 0 0.9 {} {}\n",
            s.x, s.y, e.x, e.y, o.speed, o.error
        ));
    }
    let observations = read_observations(obs_text.as_bytes()).unwrap();
    assert_eq!(observations.len(), 15);

    let batch_frame = LocalFrame::for_cuts(&cuts, EarthModel::default()).unwrap();
    let dt = DynamicTopography::new(batch_frame, config, &observations);
    let results = dt.compute_all(&cuts);
    assert!(results[0].is_ok());
    assert!(matches!(
        results[1],
        Err(DtError::Transect(TransectError::EmptyNeighborhood))
    ));

    let ok: Vec<_> = results.into_iter().filter_map(Result::ok).collect();
    let result = &ok[0];
    assert_eq!(result.sample_count, 15);
    assert!(result.dt > 0.0);
    assert!((result.a_priori_error - 0.02).abs() < 1e-12);

    let mut out = Vec::new();
    write_results(&mut out, &ok, &config).unwrap();
    let text = String::from_utf8(out).unwrap();
    let fields: Vec<&str> = text.trim_end().split(' ').collect();
    assert_eq!(fields.len(), 18);
    assert_eq!(fields[5], "10");
    assert_eq!(fields[17], "15");
}
