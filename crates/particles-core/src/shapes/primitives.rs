//! Shape primitives driven by unit samples.
//!
//! Each generator takes independent samples in `[0, 1)` plus its size
//! parameters and returns one point. Randomness lives in the dispatcher, so
//! these stay pure and can be checked on fixed grids.

use std::f32::consts::TAU;

use glam::Vec3;

/// Point on the surface of a sphere of radius `radius`.
///
/// `u` picks the polar angle through `acos(2u - 1)`, which gives uniform
/// area density instead of bunching points at the poles. `t` is the
/// azimuth as a fraction of a full turn.
pub fn shape_sphere(u: f32, t: f32, radius: f32) -> Vec3 {
    // Rounding can push 2u - 1 a hair outside [-1, 1]; acos would then be NaN.
    let phi = (2.0 * u - 1.0).clamp(-1.0, 1.0).acos();
    let theta = t * TAU;
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Point inside an axis-aligned cube of edge `edge` centred on the origin.
pub fn shape_cube(a: f32, b: f32, c: f32, edge: f32) -> Vec3 {
    (Vec3::new(a, b, c) - Vec3::splat(0.5)) * edge
}

/// Point on a torus lying in the XY plane.
///
/// `u` walks around the ring of radius `ring_radius`, `v` around the tube of
/// radius `tube_radius`. Uniform in both angles, so the inner side of the
/// ring is denser than the outer side.
pub fn shape_torus(u: f32, v: f32, ring_radius: f32, tube_radius: f32) -> Vec3 {
    let u = u * TAU;
    let v = v * TAU;
    let ring = ring_radius + tube_radius * v.cos();
    Vec3::new(ring * u.cos(), ring * u.sin(), tube_radius * v.sin())
}
