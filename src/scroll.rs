use crate::dom::{self, Listener};
use folio_core::ScrollRegion;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keeps a region's progress in sync with window scroll and resize.
///
/// After every change in progress `render` runs with the region borrowed
/// immutably, so it can sample bound channels. Dropping the binding removes
/// both listeners.
pub struct ScrollBinding {
    _scroll: Listener,
    _resize: Listener,
}

pub fn bind_region(
    element: web::HtmlElement,
    region: Rc<RefCell<ScrollRegion>>,
    render: impl FnMut(&ScrollRegion) + 'static,
) -> anyhow::Result<ScrollBinding> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let render = Rc::new(RefCell::new(render));

    // first paint uses whatever progress the page loaded at
    region.borrow_mut().update(dom::region_geometry(&element));
    (render.borrow_mut())(&region.borrow());

    let sync = {
        let region = region.clone();
        let render = render.clone();
        move || {
            let changed = {
                let mut r = region.borrow_mut();
                let before = r.progress();
                match r.update(dom::region_geometry(&element)) {
                    Some(after) => after != before,
                    None => false,
                }
            };
            if changed {
                (render.borrow_mut())(&region.borrow());
            }
        }
    };

    let on_resize = sync.clone();
    Ok(ScrollBinding {
        _scroll: Listener::new(&window, "scroll", sync)?,
        _resize: Listener::new(&window, "resize", on_resize)?,
    })
}
