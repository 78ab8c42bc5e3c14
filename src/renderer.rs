use leptos::*;
use wasm_bindgen::JsCast;

use crate::screen::ExerciseScreen;
use crate::timer::ScreenTimer;
use crate::types::ExerciseRecord;

/// Imperative surface for the host page: point it at a container element,
/// feed it records, tear it down before discarding it.
pub struct ExerciseScreenRenderer {
    container: web_sys::HtmlElement,
    record: RwSignal<Option<ExerciseRecord>>,
    timer: ScreenTimer,
    mounted: bool,
}

impl ExerciseScreenRenderer {
    pub fn new(container_id: &str) -> Result<Self, String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("No document")?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| format!("No element with id '{}'", container_id))?
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| format!("Element '{}' is not an HTML element", container_id))?;

        Ok(Self {
            container,
            record: create_rw_signal(None),
            timer: ScreenTimer::new(),
            mounted: false,
        })
    }

    /// Shows a new or updated record. The first call mounts the view into
    /// the container; later calls swap the record in place, which rebuilds
    /// the screen subtree. The chronometer is unaffected either way.
    pub fn render(&mut self, data: ExerciseRecord) {
        if self.mounted {
            self.record.set(Some(data));
            return;
        }

        // fresh signal per mount so a view discarded by destroy() never
        // sees another write
        self.record = create_rw_signal(Some(data));
        let record = self.record;
        let timer = self.timer.clone();
        mount_to(self.container.clone(), move || {
            view! { <ExerciseScreen record=record timer=timer/> }
        });
        self.mounted = true;
    }

    /// Releases the tick source and empties the container. The host must
    /// call this before dropping the renderer, otherwise the interval keeps
    /// firing against a dead screen.
    pub fn destroy(&mut self) {
        self.timer.stop();
        self.record.set(None);
        self.container.set_inner_html("");
        self.mounted = false;
    }
}
