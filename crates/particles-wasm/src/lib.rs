use glam::Vec2;
use particles_core::motion::step_with;
use particles_core::shapes::{count_from_i32, generate_with};
use particles_core::{
    GeneratorConfig, MotionConfig, MotionDelta, MotionState, PointCloud, PointerAccumulator,
    ShapeKind,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

fn to_js(err: particles_core::Error) -> JsValue {
    let msg = err.to_string();
    web_sys::console::warn_1(&msg.as_str().into());
    JsValue::from_str(&msg)
}

/// Browser-side owner of one particle system: its point cloud, motion
/// state and pointer bookkeeping. The page renders; this only computes.
#[wasm_bindgen]
pub struct ParticleField {
    cloud: PointCloud,
    state: MotionState,
    delta: MotionDelta,
    pointer: PointerAccumulator,
    generator: GeneratorConfig,
    motion: MotionConfig,
    pulse: bool,
    rng: StdRng,
}

#[wasm_bindgen]
impl ParticleField {
    /// Starts with a sphere of `count` points on radius `radius`.
    #[wasm_bindgen(constructor)]
    pub fn new(count: i32, radius: f32) -> Result<ParticleField, JsValue> {
        let generator = GeneratorConfig::default();
        let motion = MotionConfig::default();
        let mut rng = StdRng::from_entropy();
        let count = count_from_i32(count).map_err(to_js)?;
        let cloud = generate_with(&generator, ShapeKind::Sphere, count, radius, &mut rng)
            .map_err(to_js)?;

        web_sys::console::log_1(
            &format!("ParticleField created: {} points on {}", cloud.len(), cloud.shape()).into(),
        );

        let state = MotionState::new(&motion);
        Ok(ParticleField {
            cloud,
            delta: MotionDelta {
                new_size: state.size,
                ..MotionDelta::default()
            },
            state,
            pointer: PointerAccumulator::new(),
            generator,
            motion,
            pulse: false,
            rng,
        })
    }

    /// Regenerate the cloud. On error the previous cloud is kept.
    #[wasm_bindgen]
    pub fn generate(&mut self, shape_id: u32, count: i32, radius: f32) -> Result<(), JsValue> {
        let shape = ShapeKind::try_from(shape_id).map_err(to_js)?;
        self.regenerate(shape, count, radius)
    }

    #[wasm_bindgen]
    pub fn generate_named(&mut self, shape: &str, count: i32, radius: f32) -> Result<(), JsValue> {
        let shape: ShapeKind = shape.parse().map_err(to_js)?;
        self.regenerate(shape, count, radius)
    }

    /// Replace the entropy-seeded rng so the next clouds are reproducible.
    #[wasm_bindgen]
    pub fn reseed(&mut self, seed: u32) {
        self.rng = StdRng::seed_from_u64(seed as u64);
    }

    #[wasm_bindgen]
    pub fn set_shape_sizes(
        &mut self,
        cube_edge: f32,
        torus_tube_radius: f32,
    ) -> Result<(), JsValue> {
        let generator = GeneratorConfig {
            // Non-positive edge means "follow the radius".
            cube_edge: if cube_edge > 0.0 {
                particles_core::CubeEdge::Fixed(cube_edge)
            } else {
                particles_core::CubeEdge::FromRadius
            },
            torus_tube_radius,
        };
        generator.validate().map_err(to_js)?;
        self.generator = generator;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_motion_config(
        &mut self,
        drag_sensitivity_deg: f32,
        pulse_amplitude: f32,
        pulse_floor: f32,
    ) -> Result<(), JsValue> {
        let motion = MotionConfig {
            drag_sensitivity_deg,
            pulse_amplitude,
            pulse_floor,
            ..self.motion
        };
        motion.validate().map_err(to_js)?;
        self.motion = motion;
        Ok(())
    }

    /// Idle spin in radians per frame. Non-finite speeds are rejected and
    /// the previous speed is kept.
    #[wasm_bindgen]
    pub fn set_rotation_speed(&mut self, speed: f32) -> Result<(), JsValue> {
        let motion = MotionConfig {
            idle_rotation_speed: speed,
            ..self.motion
        };
        motion.validate().map_err(to_js)?;
        self.motion = motion;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_pulse(&mut self, enabled: bool) {
        self.pulse = enabled;
    }

    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pointer.press(Vec2::new(x, y));
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.moved(Vec2::new(x, y));
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self) {
        self.pointer.release();
    }

    /// Advance one frame at `time` seconds. Read the result through the
    /// `rotation_delta_*` / `size` getters.
    #[wasm_bindgen]
    pub fn step(&mut self, time: f32) {
        let sample = self.pointer.sample(time, self.motion.idle_rotation_speed, self.pulse);
        let (delta, next) = step_with(&self.motion, &self.state, &sample);
        self.delta = delta;
        self.state = next;
    }

    #[wasm_bindgen(getter)]
    pub fn rotation_delta_x(&self) -> f32 {
        self.delta.rotation_delta_x
    }

    #[wasm_bindgen(getter)]
    pub fn rotation_delta_y(&self) -> f32 {
        self.delta.rotation_delta_y
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> f32 {
        self.delta.new_size
    }

    #[wasm_bindgen(getter)]
    pub fn rotation_x(&self) -> f32 {
        self.state.rotation_x
    }

    #[wasm_bindgen(getter)]
    pub fn rotation_y(&self) -> f32 {
        self.state.rotation_y
    }

    #[wasm_bindgen(getter)]
    pub fn dragging(&self) -> bool {
        self.state.drag_active
    }

    #[wasm_bindgen]
    pub fn point_count(&self) -> usize {
        self.cloud.len()
    }

    #[wasm_bindgen]
    pub fn shape_id(&self) -> u32 {
        self.cloud.shape().id()
    }

    /// Pointer into wasm memory for a zero-copy `Float32Array` view.
    #[wasm_bindgen]
    pub fn positions_ptr(&self) -> *const f32 {
        self.cloud.as_flat().as_ptr()
    }

    /// Number of `f32` values behind [`ParticleField::positions_ptr`].
    #[wasm_bindgen]
    pub fn positions_len(&self) -> usize {
        self.cloud.as_flat().len()
    }

    /// Copy of the positions, for hosts that do not read wasm memory.
    #[wasm_bindgen]
    pub fn positions(&self) -> Vec<f32> {
        self.cloud.as_flat().to_vec()
    }
}

impl ParticleField {
    fn regenerate(&mut self, shape: ShapeKind, count: i32, radius: f32) -> Result<(), JsValue> {
        let count = count_from_i32(count).map_err(to_js)?;
        let start = js_sys::Date::now();
        self.cloud = generate_with(&self.generator, shape, count, radius, &mut self.rng)
            .map_err(to_js)?;
        let elapsed = js_sys::Date::now() - start;
        web_sys::console::log_1(
            &format!("generated {} {} points in {:.1} ms", count, shape, elapsed).into(),
        );
        Ok(())
    }
}
