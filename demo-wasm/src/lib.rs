use motes::scene::{
    ClickTween, ClickTweenConfig, Clouds, CloudsConfig, Drift, DriftConfig, Effect, GravityWell, GravityWellConfig,
    Starfield, StarfieldConfig, Tether, TetherConfig,
};
use motes::{NoOpStepObserver, PhysicsError, RenderBody, Vector2};
use wasm_bindgen::prelude::*;

/// Flat [x0, y0, r0, x1, y1, r1, ...]
fn flatten(bodies: &[RenderBody<f32>]) -> Vec<f32> {
    let mut out = Vec::with_capacity(bodies.len() * 3);
    for b in bodies {
        out.push(b.position.x);
        out.push(b.position.y);
        out.push(b.radius);
    }
    out
}

fn to_js(err: PhysicsError) -> JsError {
    JsError::new(&err.to_string())
}

fn pointer(x: f32, y: f32) -> Option<Vector2<f32>> {
    if x.is_finite() && y.is_finite() {
        Some(Vector2::new(x, y))
    } else {
        None
    }
}

// ---- Drift Demo ----

#[wasm_bindgen]
pub struct DriftDemo {
    drift: Drift,
}

#[wasm_bindgen]
impl DriftDemo {
    /// `network` selects the dense linked background over the bubble field.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, network: bool, seed: u32) -> Self {
        let config = if network {
            DriftConfig::background(width, height)
        } else {
            DriftConfig::ambient(width, height)
        };
        DriftDemo { drift: Drift::new(config, seed as u64) }
    }

    pub fn update(&mut self, dt: f32) -> Result<(), JsError> {
        self.drift.advance(dt, &mut NoOpStepObserver).map_err(to_js)
    }

    /// Pass NaN for either coordinate when the pointer leaves the canvas.
    pub fn move_pointer(&mut self, x: f32, y: f32) {
        self.drift.pointer_moved(pointer(x, y));
    }

    pub fn bodies(&self) -> Vec<f32> {
        flatten(&self.drift.bodies())
    }

    /// Returns flat [a0, b0, a1, b1, ...] particle indices of linked pairs
    pub fn links(&self) -> Vec<u32> {
        let mut out = Vec::new();
        for (a, b) in self.drift.links() {
            out.push(a.index() as u32);
            out.push(b.index() as u32);
        }
        out
    }
}

// ---- Clouds Demo ----

#[wasm_bindgen]
pub struct CloudsDemo {
    clouds: Clouds,
}

#[wasm_bindgen]
impl CloudsDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, seed: u32) -> Self {
        CloudsDemo { clouds: Clouds::new(CloudsConfig::new(width, height), seed as u64) }
    }

    pub fn update(&mut self, dt: f32) -> Result<(), JsError> {
        self.clouds.advance(dt, &mut NoOpStepObserver).map_err(to_js)
    }

    pub fn bodies(&self) -> Vec<f32> {
        flatten(&self.clouds.bodies())
    }
}

// ---- Gravity Well Demo ----

#[wasm_bindgen]
pub struct GravityWellDemo {
    well: GravityWell,
}

#[wasm_bindgen]
impl GravityWellDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, seed: u32) -> Result<GravityWellDemo, JsError> {
        let well = GravityWell::new(GravityWellConfig::new(width, height), seed as u64).map_err(to_js)?;
        Ok(GravityWellDemo { well })
    }

    pub fn update(&mut self, dt: f32) -> Result<(), JsError> {
        self.well.advance(dt, &mut NoOpStepObserver).map_err(to_js)
    }

    pub fn move_sun(&mut self, x: f32, y: f32) {
        self.well.pointer_moved(pointer(x, y));
    }

    /// Sun first, then planets.
    pub fn bodies(&self) -> Vec<f32> {
        flatten(&self.well.bodies())
    }
}

// ---- Tether Demo ----

#[wasm_bindgen]
pub struct TetherDemo {
    tether: Tether,
}

#[wasm_bindgen]
impl TetherDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, seed: u32) -> Result<TetherDemo, JsError> {
        let tether = Tether::new(TetherConfig::new(width, height), seed as u64).map_err(to_js)?;
        Ok(TetherDemo { tether })
    }

    pub fn update(&mut self, dt: f32) -> Result<(), JsError> {
        self.tether.advance(dt, &mut NoOpStepObserver).map_err(to_js)
    }

    pub fn move_anchor(&mut self, x: f32, y: f32) {
        self.tether.pointer_moved(pointer(x, y));
    }

    /// Returns [anchor_x, anchor_y, weight_x, weight_y, weight_radius]
    pub fn state(&self) -> Result<Vec<f32>, JsError> {
        let anchor = self.tether.anchor().map_err(to_js)?;
        let weight = self.tether.weight().map_err(to_js)?;
        Ok(vec![anchor.x, anchor.y, weight.pos.x, weight.pos.y, weight.radius])
    }
}

// ---- Starfield Demo ----

#[wasm_bindgen]
pub struct StarfieldDemo {
    field: Starfield,
}

#[wasm_bindgen]
impl StarfieldDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, seed: u32) -> Self {
        StarfieldDemo { field: Starfield::new(StarfieldConfig::new(width, height), seed as u64) }
    }

    pub fn update(&mut self, dt: f32) -> Result<(), JsError> {
        self.field.advance(dt, &mut NoOpStepObserver).map_err(to_js)
    }

    pub fn bodies(&self) -> Vec<f32> {
        flatten(&self.field.bodies())
    }
}

// ---- Click Tween Demo ----

#[wasm_bindgen]
pub struct ClickTweenDemo {
    scene: ClickTween,
}

#[wasm_bindgen]
impl ClickTweenDemo {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ClickTweenDemo, JsError> {
        let scene = ClickTween::new(ClickTweenConfig::default()).map_err(to_js)?;
        Ok(ClickTweenDemo { scene })
    }

    /// `dt` in milliseconds.
    pub fn update(&mut self, dt: f32) -> Result<(), JsError> {
        self.scene.advance(dt, &mut NoOpStepObserver).map_err(to_js)
    }

    pub fn click(&mut self, x: f32, y: f32) {
        self.scene.pointer_pressed(Vector2::new(x, y));
    }

    pub fn is_animating(&self) -> bool {
        self.scene.is_animating()
    }

    /// Returns [marker_x, marker_y, marker_r, particle_x, particle_y, particle_r]
    pub fn bodies(&self) -> Vec<f32> {
        flatten(&self.scene.bodies())
    }
}
