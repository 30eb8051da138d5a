/// Procedural point-cloud generation.
///
/// `primitives` maps unit-square samples onto the sphere, cube and torus;
/// `dispatcher` validates a request, draws the samples and fills the cloud.
pub mod primitives;
pub mod dispatcher;

pub use dispatcher::{count_from_i32, generate, generate_with, ShapeKind};

#[cfg(feature = "parallel")]
pub use dispatcher::generate_par;
