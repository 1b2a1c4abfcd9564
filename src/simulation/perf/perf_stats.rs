use wasm_bindgen::prelude::*;

/// Snapshot of the last step. All zeros while step stats are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) collide_ms: f64,
    pub(super) bounds_ms: f64,
    pub(super) bodies: u32,
    pub(super) colliders: u32,
    pub(super) pairs_overlapping: u32,
    pub(super) pairs_separated: u32,
    pub(super) callbacks_fired: u32,
    pub(super) bounds_clamps: u32,
}

impl StepStats {
    pub(crate) fn reset(&mut self) {
        *self = StepStats::default();
    }
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collide_ms(&self) -> f64 { self.collide_ms }
    #[wasm_bindgen(getter)]
    pub fn bounds_ms(&self) -> f64 { self.bounds_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies(&self) -> u32 { self.bodies }
    #[wasm_bindgen(getter)]
    pub fn colliders(&self) -> u32 { self.colliders }
    #[wasm_bindgen(getter)]
    pub fn pairs_overlapping(&self) -> u32 { self.pairs_overlapping }
    #[wasm_bindgen(getter)]
    pub fn pairs_separated(&self) -> u32 { self.pairs_separated }
    #[wasm_bindgen(getter)]
    pub fn callbacks_fired(&self) -> u32 { self.callbacks_fired }
    #[wasm_bindgen(getter)]
    pub fn bounds_clamps(&self) -> u32 { self.bounds_clamps }
}
