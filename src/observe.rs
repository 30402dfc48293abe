use folio_core::ObserverSupport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type EntryCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Whether the browser exposes `IntersectionObserver`.
pub fn observer_support() -> ObserverSupport {
    let has = web::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false);
    if has {
        ObserverSupport::Available
    } else {
        ObserverSupport::Unavailable
    }
}

/// An `IntersectionObserver` over a fixed list of targets.
///
/// Entries are reported as `(target index, intersection ratio, is intersecting)`.
/// Dropping the observer disconnects it.
pub struct Observer {
    inner: web::IntersectionObserver,
    _callback: EntryCallback,
}

impl Observer {
    pub fn new(
        targets: &[web::HtmlElement],
        threshold: f64,
        root_margin: &str,
        mut on_entry: impl FnMut(usize, f32, bool) + 'static,
    ) -> anyhow::Result<Self> {
        let elements: Vec<web::Element> = targets
            .iter()
            .map(|t| AsRef::<web::Element>::as_ref(t).clone())
            .collect();
        let lookup = elements.clone();
        let callback: EntryCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                for value in entries.iter() {
                    let entry: web::IntersectionObserverEntry = value.unchecked_into();
                    let target = entry.target();
                    if let Some(index) = lookup.iter().position(|el| *el == target) {
                        on_entry(index, entry.intersection_ratio() as f32, entry.is_intersecting());
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);
        let inner =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
        for el in &elements {
            inner.observe(el);
        }
        Ok(Self {
            inner,
            _callback: callback,
        })
    }

    pub fn disconnect(&self) {
        self.inner.disconnect();
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.inner.disconnect();
    }
}
