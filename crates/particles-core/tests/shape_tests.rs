use particles_core::shapes::{count_from_i32, generate, generate_with};
use particles_core::{CubeEdge, Error, GeneratorConfig, ShapeKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn test_count_matches_request() {
    for shape in ShapeKind::ALL {
        for count in [0usize, 1, 7, 1000] {
            let cloud = generate(shape, count, 5.0, &mut rng(count as u64)).unwrap();
            assert_eq!(cloud.len(), count, "{shape} with count {count}");
            assert_eq!(cloud.as_flat().len(), count * 3);
            assert_eq!(cloud.shape(), shape);
        }
    }
}

#[test]
fn test_zero_count_is_empty_not_error() {
    let cloud = generate(ShapeKind::Torus, 0, 5.0, &mut rng(0)).unwrap();
    assert!(cloud.is_empty());
}

#[test]
fn test_sphere_points_on_surface() {
    let radius = 5.0;
    let cloud = generate(ShapeKind::Sphere, 5000, radius, &mut rng(1)).unwrap();
    for p in &cloud {
        let r = p.length();
        assert!((r - radius).abs() < 1e-4 * radius, "sphere point {p:?} has radius {r}");
    }
}

#[test]
fn test_sphere_z_uniform() {
    // Uniform area density means z is uniform on [-r, r].
    let radius = 5.0_f32;
    let n = 100_000;
    let cloud = generate(ShapeKind::Sphere, n, radius, &mut rng(42)).unwrap();

    let bins = 10;
    let mut hist = vec![0usize; bins];
    let mut sum = 0.0_f64;
    let mut sum_sq = 0.0_f64;
    for p in &cloud {
        let unit = ((p.z + radius) / (2.0 * radius)).clamp(0.0, 0.999_999);
        hist[(unit * bins as f32) as usize] += 1;
        sum += p.z as f64;
        sum_sq += (p.z as f64) * (p.z as f64);
    }

    let expected = n / bins;
    for (i, &count) in hist.iter().enumerate() {
        let dev = (count as f64 - expected as f64).abs() / expected as f64;
        assert!(dev < 0.05, "z bin {i} has {count} points, expected about {expected}");
    }

    let mean = sum / n as f64;
    let var = sum_sq / n as f64 - mean * mean;
    let uniform_var = (radius as f64).powi(2) / 3.0;
    assert!(mean.abs() < 0.05, "z mean {mean} should be near 0");
    assert!(
        (var - uniform_var).abs() / uniform_var < 0.02,
        "z variance {var} should be near {uniform_var}"
    );
}

#[test]
fn test_cube_points_within_edge() {
    let radius = 3.0;
    let edge = 2.0 * radius;
    let cloud = generate(ShapeKind::Cube, 5000, radius, &mut rng(2)).unwrap();
    for p in &cloud {
        for c in p.to_array() {
            assert!(c >= -edge / 2.0 && c <= edge / 2.0, "cube point {p:?} outside edge {edge}");
        }
    }
}

#[test]
fn test_cube_fixed_edge_ignores_radius() {
    let config = GeneratorConfig {
        cube_edge: CubeEdge::Fixed(1.0),
        ..GeneratorConfig::default()
    };
    let cloud = generate_with(&config, ShapeKind::Cube, 2000, 50.0, &mut rng(3)).unwrap();
    let max = cloud
        .iter()
        .flat_map(|p| p.to_array())
        .fold(0.0_f32, |m, c| m.max(c.abs()));
    assert!(max <= 0.5, "fixed-edge cube reached {max}");
    assert!(max > 0.4, "fixed-edge cube never came near its faces: {max}");
}

#[test]
fn test_torus_points_on_surface() {
    let ring = 5.0_f32;
    let config = GeneratorConfig::default();
    let tube = config.torus_tube_radius;
    let cloud = generate_with(&config, ShapeKind::Torus, 5000, ring, &mut rng(4)).unwrap();
    for p in &cloud {
        let rho = (p.x * p.x + p.y * p.y).sqrt();
        let lhs = (rho - ring).powi(2) + p.z * p.z;
        assert!((lhs - tube * tube).abs() < 1e-3, "torus point {p:?} off surface: {lhs}");
    }
}

#[test]
fn test_torus_tube_independent_of_radius() {
    let config = GeneratorConfig {
        torus_tube_radius: 0.25,
        ..GeneratorConfig::default()
    };
    let cloud = generate_with(&config, ShapeKind::Torus, 1000, 2.0, &mut rng(5)).unwrap();
    for p in &cloud {
        assert!(p.z.abs() <= 0.25 + 1e-5, "tube too thick at {p:?}");
    }
}

#[test]
fn test_torus_ring_thinner_than_tube_rejected() {
    // Default tube is 1.5; a ring of 1.0 would fold points through the axis.
    let mut r = rng(4);
    let result = generate(ShapeKind::Torus, 2000, 1.0, &mut r);
    assert!(
        matches!(result, Err(Error::InvalidParameter(_))),
        "torus with ring 1.0 and tube 1.5 should be rejected, got {result:?}"
    );

    // Only the torus is constrained: the same radius is fine for other shapes.
    assert_eq!(generate(ShapeKind::Sphere, 10, 1.0, &mut r).unwrap().len(), 10);
    assert_eq!(generate(ShapeKind::Cube, 10, 1.0, &mut r).unwrap().len(), 10);
}

#[test]
fn test_horn_torus_stays_on_surface() {
    // Ring equal to tube is the thinnest accepted torus.
    let config = GeneratorConfig {
        torus_tube_radius: 1.0,
        ..GeneratorConfig::default()
    };
    let cloud = generate_with(&config, ShapeKind::Torus, 2000, 1.0, &mut rng(4)).unwrap();
    for p in &cloud {
        let rho = (p.x * p.x + p.y * p.y).sqrt();
        let lhs = (rho - 1.0).powi(2) + p.z * p.z;
        assert!((lhs - 1.0).abs() < 1e-3, "torus point {p:?} off surface: {lhs}");
    }
}

#[test]
fn test_negative_count_rejected() {
    for count in [-1, i32::MIN] {
        assert!(
            matches!(count_from_i32(count), Err(Error::InvalidParameter(_))),
            "count {count} should be rejected"
        );
    }
    assert_eq!(count_from_i32(0), Ok(0));
    assert_eq!(count_from_i32(i32::MAX), Ok(i32::MAX as usize));
}

#[test]
fn test_invalid_radius_rejected() {
    for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        for shape in ShapeKind::ALL {
            let result = generate(shape, 10, radius, &mut rng(6));
            assert!(
                matches!(result, Err(Error::InvalidParameter(_))),
                "{shape} with radius {radius} should be rejected"
            );
        }
    }
}

#[test]
fn test_unknown_shape_rejected() {
    assert!(matches!(ShapeKind::try_from(3u32), Err(Error::InvalidParameter(_))));
    assert!(matches!("pyramid".parse::<ShapeKind>(), Err(Error::InvalidParameter(_))));
    assert_eq!(" Torus ".parse::<ShapeKind>(), Ok(ShapeKind::Torus));
}

#[test]
fn test_invalid_fixed_cube_edge_rejected() {
    let config = GeneratorConfig {
        cube_edge: CubeEdge::Fixed(0.0),
        ..GeneratorConfig::default()
    };
    let result = generate_with(&config, ShapeKind::Cube, 10, 1.0, &mut rng(7));
    assert!(matches!(result, Err(Error::InvalidParameter(_))));
}

#[test]
fn test_no_nan_in_any_shape() {
    for shape in ShapeKind::ALL {
        let cloud = generate(shape, 2000, 2.0, &mut rng(8)).unwrap();
        assert!(
            cloud.as_flat().iter().all(|c| c.is_finite()),
            "{shape} produced a non-finite coordinate"
        );
    }
}

#[cfg(feature = "parallel")]
mod parallel {
    use super::*;
    use particles_core::shapes::generate_par;

    #[test]
    fn test_parallel_deterministic_for_seed() {
        let config = GeneratorConfig::default();
        let a = generate_par(&config, ShapeKind::Sphere, 10_000, 2.0, &mut rng(11)).unwrap();
        let b = generate_par(&config, ShapeKind::Sphere, 10_000, 2.0, &mut rng(11)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 10_000);
    }

    #[test]
    fn test_parallel_torus_on_surface() {
        let config = GeneratorConfig::default();
        let cloud = generate_par(&config, ShapeKind::Torus, 9000, 4.0, &mut rng(12)).unwrap();
        for p in &cloud {
            let rho = (p.x * p.x + p.y * p.y).sqrt();
            let lhs = (rho - 4.0).powi(2) + p.z * p.z;
            assert!((lhs - 2.25).abs() < 1e-3, "torus point {p:?} off surface");
        }
    }

    #[test]
    fn test_parallel_rejects_bad_radius() {
        let config = GeneratorConfig::default();
        assert!(generate_par(&config, ShapeKind::Cube, 10, -2.0, &mut rng(13)).is_err());
    }
}
