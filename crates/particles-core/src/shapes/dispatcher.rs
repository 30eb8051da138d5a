//! Shape selection and cloud generation.
//!
//! Hosts identify shapes by a numeric id (`0 = sphere, 1 = cube,
//! 2 = torus`) or by name. Both conversions reject unknown values instead of
//! falling back to a default shape.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use rand::Rng;
use tracing::{debug, instrument};

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::point_cloud::PointCloud;
use crate::shapes::primitives::{shape_cube, shape_sphere, shape_torus};

#[cfg(feature = "parallel")]
use rand::{rngs::StdRng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Points per parallel work item. Each chunk gets its own seeded rng.
#[cfg(feature = "parallel")]
pub const PAR_CHUNK: usize = 4096;

#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere = 0,
    Cube = 1,
    Torus = 2,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Sphere, ShapeKind::Cube, ShapeKind::Torus];

    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cube => "cube",
            ShapeKind::Torus => "torus",
        }
    }
}

impl TryFrom<u32> for ShapeKind {
    type Error = Error;

    fn try_from(id: u32) -> Result<Self> {
        match id {
            0 => Ok(ShapeKind::Sphere),
            1 => Ok(ShapeKind::Cube),
            2 => Ok(ShapeKind::Torus),
            _ => Err(Error::invalid(format!("unknown shape id {id}"))),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::invalid(format!("unknown shape '{s}'")))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert a host-side signed particle count, rejecting negatives.
pub fn count_from_i32(count: i32) -> Result<usize> {
    usize::try_from(count).map_err(|_| Error::invalid(format!("negative count {count}")))
}

/// A validated request: shape plus the resolved size of every dimension.
#[derive(Clone, Copy, Debug)]
struct Sampler {
    shape: ShapeKind,
    radius: f32,
    cube_edge: f32,
    tube_radius: f32,
}

impl Sampler {
    fn new(config: &GeneratorConfig, shape: ShapeKind, radius: f32) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::invalid(format!(
                "radius must be positive and finite, got {radius}"
            )));
        }
        config.validate()?;
        // A ring thinner than its tube folds the surface through the axis.
        if shape == ShapeKind::Torus && radius < config.torus_tube_radius {
            return Err(Error::invalid(format!(
                "torus ring radius {radius} is smaller than tube radius {}",
                config.torus_tube_radius
            )));
        }
        Ok(Self {
            shape,
            radius,
            cube_edge: config.cube_edge.length(radius),
            tube_radius: config.torus_tube_radius,
        })
    }

    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        match self.shape {
            ShapeKind::Sphere => {
                let u: f32 = rng.gen();
                let t: f32 = rng.gen();
                shape_sphere(u, t, self.radius)
            }
            ShapeKind::Cube => {
                let a: f32 = rng.gen();
                let b: f32 = rng.gen();
                let c: f32 = rng.gen();
                shape_cube(a, b, c, self.cube_edge)
            }
            ShapeKind::Torus => {
                let u: f32 = rng.gen();
                let v: f32 = rng.gen();
                shape_torus(u, v, self.radius, self.tube_radius)
            }
        }
    }
}

/// Generate `count` points for `shape` with the default size constants.
///
/// `radius` is the sphere radius, the torus ring radius and (by default)
/// half the cube edge. Fails with [`Error::InvalidParameter`] before drawing
/// anything if `radius` is not a positive finite number, or if a torus ring
/// would be thinner than its tube.
pub fn generate<R: Rng + ?Sized>(
    shape: ShapeKind,
    count: usize,
    radius: f32,
    rng: &mut R,
) -> Result<PointCloud> {
    generate_with(&GeneratorConfig::default(), shape, count, radius, rng)
}

/// Same as [`generate`] with explicit size constants.
#[instrument(level = "debug", skip(config, rng))]
pub fn generate_with<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    shape: ShapeKind,
    count: usize,
    radius: f32,
    rng: &mut R,
) -> Result<PointCloud> {
    let sampler = Sampler::new(config, shape, radius)?;

    let points: Vec<Vec3> = (0..count).map(|_| sampler.sample(&mut *rng)).collect();

    debug!(points = points.len(), "generated point cloud");
    Ok(PointCloud::from_points(shape, points))
}

/// Parallel variant of [`generate_with`].
///
/// `rng` is only drawn from on the calling thread, once per chunk of
/// [`PAR_CHUNK`] points; every chunk then samples from its own `StdRng`.
/// The result depends on the caller's rng state, not on the thread count.
#[cfg(feature = "parallel")]
#[instrument(level = "debug", skip(config, rng))]
pub fn generate_par<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    shape: ShapeKind,
    count: usize,
    radius: f32,
    rng: &mut R,
) -> Result<PointCloud> {
    let sampler = Sampler::new(config, shape, radius)?;

    let seeds: Vec<u64> = (0..count.div_ceil(PAR_CHUNK)).map(|_| rng.gen()).collect();
    let mut points = vec![Vec3::ZERO; count];
    points
        .par_chunks_mut(PAR_CHUNK)
        .zip(seeds.par_iter())
        .for_each(|(chunk, &seed)| {
            let mut local = StdRng::seed_from_u64(seed);
            for p in chunk.iter_mut() {
                *p = sampler.sample(&mut local);
            }
        });

    debug!(points = points.len(), chunks = seeds.len(), "generated point cloud in parallel");
    Ok(PointCloud::from_points(shape, points))
}
