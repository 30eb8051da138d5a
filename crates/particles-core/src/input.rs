//! Pointer event folding for hosts that receive press / move / release.

use glam::Vec2;

use crate::motion::InputSample;

/// Folds pointer events between two frames into one [`InputSample`].
///
/// The host forwards press / move / release events as they arrive and calls
/// [`PointerAccumulator::sample`] once per frame. Positions are in pixels.
#[derive(Clone, Debug, Default)]
pub struct PointerAccumulator {
    pressing: bool,
    position: Option<Vec2>,
    pending: Vec2,
    moved: bool,
}

impl PointerAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, position: Vec2) {
        self.pressing = true;
        self.position = Some(position);
    }

    /// Movement only counts towards the delta while pressed; the position is
    /// tracked either way so the next press starts from the right place.
    pub fn moved(&mut self, position: Vec2) {
        if self.pressing {
            if let Some(last) = self.position {
                self.pending += position - last;
                self.moved = true;
            }
        }
        self.position = Some(position);
    }

    /// Ends the drag. Movement already accumulated is still reported by the
    /// next sample, with `drag_active` false.
    pub fn release(&mut self) {
        self.pressing = false;
    }

    pub fn is_pressing(&self) -> bool {
        self.pressing
    }

    /// Build this frame's sample and clear the accumulated delta.
    pub fn sample(
        &mut self,
        elapsed: f32,
        base_rotation_speed: f32,
        pulse_enabled: bool,
    ) -> InputSample {
        let pointer_delta = self.moved.then_some(self.pending);
        self.pending = Vec2::ZERO;
        self.moved = false;

        InputSample {
            elapsed,
            pointer_delta,
            pointer_position: self.position,
            drag_active: self.pressing,
            base_rotation_speed,
            pulse_enabled,
        }
    }
}
