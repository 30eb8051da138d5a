//! Per-frame rotation and pulse policy.
//!
//! [`step`] is a pure function of the previous [`MotionState`] and this
//! frame's [`InputSample`]. The host keeps the returned state for the next
//! frame and applies the [`MotionDelta`] to whatever object it renders.

use glam::Vec2;
use tracing::trace;

use crate::config::MotionConfig;

/// Motion carried between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    /// Accumulated rotation about X, radians.
    pub rotation_x: f32,
    /// Accumulated rotation about Y, radians.
    pub rotation_y: f32,
    /// Current point size.
    pub size: f32,
    pub drag_active: bool,
    pub last_pointer: Option<Vec2>,
}

impl MotionState {
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            size: config.initial_size,
            drag_active: false,
            last_pointer: None,
        }
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::new(&MotionConfig::default())
    }
}

/// One frame's worth of host input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputSample {
    /// Seconds since the animation started.
    pub elapsed: f32,
    /// Pointer movement in pixels since the previous sample.
    pub pointer_delta: Option<Vec2>,
    /// Latest absolute pointer position, if the host tracks one.
    pub pointer_position: Option<Vec2>,
    pub drag_active: bool,
    /// Idle spin about Y, radians per frame.
    pub base_rotation_speed: f32,
    pub pulse_enabled: bool,
}

impl InputSample {
    /// Sample with no pointer input: idle spin at `base_rotation_speed`.
    pub fn idle(elapsed: f32, base_rotation_speed: f32, pulse_enabled: bool) -> Self {
        Self {
            elapsed,
            pointer_delta: None,
            pointer_position: None,
            drag_active: false,
            base_rotation_speed,
            pulse_enabled,
        }
    }
}

/// What the host applies to its rendered object this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionDelta {
    pub rotation_delta_x: f32,
    pub rotation_delta_y: f32,
    pub new_size: f32,
}

/// Advance one frame with the default [`MotionConfig`].
pub fn step(state: &MotionState, sample: &InputSample) -> (MotionDelta, MotionState) {
    step_with(&MotionConfig::default(), state, sample)
}

/// Advance one frame.
///
/// A drag overrides the idle spin: horizontal pointer movement turns the
/// object about Y and vertical movement about X. The pulse is independent
/// of rotation; with the pulse off the size is held where it was.
pub fn step_with(
    config: &MotionConfig,
    state: &MotionState,
    sample: &InputSample,
) -> (MotionDelta, MotionState) {
    let (rotation_delta_x, rotation_delta_y) = if sample.drag_active {
        let delta = sample.pointer_delta.unwrap_or(Vec2::ZERO);
        let sensitivity = config.drag_sensitivity_radians();
        (delta.y * sensitivity, delta.x * sensitivity)
    } else {
        (0.0, sample.base_rotation_speed)
    };

    let new_size = if sample.pulse_enabled {
        pulse_size(config, sample.elapsed)
    } else {
        state.size
    };

    let delta = MotionDelta {
        rotation_delta_x,
        rotation_delta_y,
        new_size,
    };
    let next = MotionState {
        rotation_x: state.rotation_x + rotation_delta_x,
        rotation_y: state.rotation_y + rotation_delta_y,
        size: new_size,
        drag_active: sample.drag_active,
        last_pointer: sample.pointer_position.or(state.last_pointer),
    };

    trace!(?delta, drag = sample.drag_active, "motion step");
    (delta, next)
}

/// Size of a pulsing point at `elapsed` seconds.
#[inline]
pub fn pulse_size(config: &MotionConfig, elapsed: f32) -> f32 {
    elapsed.sin().abs() * config.pulse_amplitude + config.pulse_floor
}
