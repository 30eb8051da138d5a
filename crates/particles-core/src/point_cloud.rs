//! Point cloud container handed to the rendering host.

use glam::Vec3;

use crate::shapes::ShapeKind;

/// A single particle position.
pub type Point3 = Vec3;

/// Positions produced by one call to the generator.
///
/// The host owns the cloud and replaces it wholesale whenever the shape,
/// count or radius changes.
#[derive(Clone, Debug, PartialEq)]
pub struct PointCloud {
    shape: ShapeKind,
    points: Vec<Point3>,
}

impl PointCloud {
    pub(crate) fn from_points(shape: ShapeKind, points: Vec<Point3>) -> Self {
        Self { shape, points }
    }

    /// Shape the points were sampled from.
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point3> {
        self.points.iter()
    }

    /// Interleaved `x0 y0 z0 x1 y1 z1 ...` view, ready for a position buffer.
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(self.points.as_slice())
    }

    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Point3;
    type IntoIter = std::slice::Iter<'a, Point3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
