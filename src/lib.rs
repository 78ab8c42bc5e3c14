mod effects;
mod renderer;
mod screen;
mod stats;
mod timer;
mod types;

pub use renderer::ExerciseScreenRenderer;
pub use types::{
    ExerciseParams, ExerciseRecord, SetEntry, SetLabel, SetState, SetTechniques, StatsSummary,
};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
}

/// JS-facing wrapper around the renderer. The record comes in as a plain
/// object and is deserialized at this boundary; a malformed record is the
/// one place that fails loudly instead of degrading.
#[wasm_bindgen]
pub struct ExerciseScreenHandle {
    inner: ExerciseScreenRenderer,
}

#[wasm_bindgen]
impl ExerciseScreenHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str) -> Result<ExerciseScreenHandle, JsValue> {
        let inner = ExerciseScreenRenderer::new(container_id).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { inner })
    }

    pub fn render(&mut self, data: JsValue) -> Result<(), JsValue> {
        let record: ExerciseRecord = serde_wasm_bindgen::from_value(data)?;
        self.inner.render(record);
        Ok(())
    }

    pub fn destroy(&mut self) {
        self.inner.destroy();
    }
}
