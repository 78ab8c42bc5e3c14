use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;

const AMBIENT_COUNT: u32 = 8;
const BURST_COUNT: u32 = 6;
const BURST_LIFETIME_MS: u32 = 2_000;

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Ambient decoration for the rings container. The particles have no timer
/// of their own; the theme animates them and the next rebuild of the rings
/// section clears them along with the rest of the subtree.
pub fn spawn_ambient(container: &web_sys::HtmlElement) {
    let document = match document() {
        Some(d) => d,
        None => return,
    };
    for _ in 0..AMBIENT_COUNT {
        if let Ok(particle) = document.create_element("div") {
            particle.set_class_name("particle");
            let _ = container.append_child(&particle);
        }
    }
}

/// Short burst on a clicked row. Each particle lands at a random point
/// within the row's bounds and removes itself after two seconds; if the row
/// was rebuilt in the meantime the removal hits a detached node, which is
/// harmless.
pub fn spawn_burst(target: &web_sys::HtmlElement) {
    let document = match document() {
        Some(d) => d,
        None => return,
    };
    for _ in 0..BURST_COUNT {
        let particle = match document.create_element("div") {
            Ok(p) => p,
            Err(_) => continue,
        };
        particle.set_class_name("particle");
        if let Some(el) = particle.dyn_ref::<web_sys::HtmlElement>() {
            let style = el.style();
            let _ = style.set_property("left", &format!("{}%", js_sys::Math::random() * 100.0));
            let _ = style.set_property("top", &format!("{}%", js_sys::Math::random() * 100.0));
        }
        let _ = target.append_child(&particle);

        Timeout::new(BURST_LIFETIME_MS, move || particle.remove()).forget();
    }
}
