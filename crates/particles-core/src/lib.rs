//! Procedural particle point clouds and per-frame motion for a rendering host.
//!
//! The crate never touches a scene graph or a GPU. A host calls
//! [`shapes::generate`] whenever the shape, count or radius changes and
//! uploads the returned [`PointCloud`]; once per frame it builds an
//! [`InputSample`] (usually through a [`PointerAccumulator`]) and applies the
//! [`MotionDelta`] returned by [`motion::step`] to its own objects.

pub mod config;
pub mod error;
pub mod input;
pub mod motion;
pub mod point_cloud;
pub mod shapes;

pub use config::{CubeEdge, GeneratorConfig, MotionConfig};
pub use error::{Error, Result};
pub use input::PointerAccumulator;
pub use motion::{InputSample, MotionDelta, MotionState};
pub use point_cloud::{Point3, PointCloud};
pub use shapes::ShapeKind;
