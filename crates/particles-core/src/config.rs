//! Size and motion tuning constants, with validation.

use crate::error::{Error, Result};

/// How the cube's edge length relates to the requested radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CubeEdge {
    /// Edge is `2 * radius`, so the cube's half-extent matches the sphere.
    FromRadius,
    /// Edge is a fixed length regardless of `radius`.
    Fixed(f32),
}

impl CubeEdge {
    pub fn length(self, radius: f32) -> f32 {
        match self {
            CubeEdge::FromRadius => 2.0 * radius,
            CubeEdge::Fixed(edge) => edge,
        }
    }
}

/// Per-shape size constants for the point-cloud generator.
///
/// `radius` passed to the generator is the sphere radius and the torus ring
/// radius. The cube edge and the torus tube are configured here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub cube_edge: CubeEdge,
    pub torus_tube_radius: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cube_edge: CubeEdge::FromRadius,
            torus_tube_radius: 1.5,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if let CubeEdge::Fixed(edge) = self.cube_edge {
            if !(edge.is_finite() && edge > 0.0) {
                return Err(Error::invalid(format!(
                    "cube edge must be positive and finite, got {edge}"
                )));
            }
        }
        let tube = self.torus_tube_radius;
        if !(tube.is_finite() && tube > 0.0) {
            return Err(Error::invalid(format!(
                "torus tube radius must be positive and finite, got {tube}"
            )));
        }
        Ok(())
    }
}

/// Tuning constants for the per-frame motion policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    /// Degrees of rotation per pixel of pointer drag.
    pub drag_sensitivity_deg: f32,
    pub pulse_amplitude: f32,
    pub pulse_floor: f32,
    /// Point size before the first pulse.
    pub initial_size: f32,
    /// Radians per frame of autonomous spin when nothing is dragging.
    pub idle_rotation_speed: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity_deg: 0.25,
            pulse_amplitude: 0.2,
            pulse_floor: 0.05,
            initial_size: 0.1,
            idle_rotation_speed: 0.002,
        }
    }
}

impl MotionConfig {
    /// Drag sensitivity in radians per pixel. Rotation deltas are always
    /// radians; callers must not use `drag_sensitivity_deg` directly.
    #[inline]
    pub fn drag_sensitivity_radians(&self) -> f32 {
        self.drag_sensitivity_deg.to_radians()
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("drag_sensitivity_deg", self.drag_sensitivity_deg),
            ("pulse_amplitude", self.pulse_amplitude),
            ("pulse_floor", self.pulse_floor),
            ("initial_size", self.initial_size),
            ("idle_rotation_speed", self.idle_rotation_speed),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::invalid(format!("{name} must be finite, got {value}")));
            }
        }
        if self.pulse_amplitude < 0.0 || self.pulse_floor < 0.0 {
            return Err(Error::invalid("pulse amplitude and floor must not be negative"));
        }
        Ok(())
    }
}
