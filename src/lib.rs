#![cfg(target_arch = "wasm32")]
//! Browser front-end: finds the portfolio sections in the page and drives
//! their scroll choreography from `folio-core`.
use crate::lifecycle::PageAction;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod hero;
mod lifecycle;
mod observe;
mod orbit;
mod projects;
mod scroll;
mod style;
mod timeline;

/// Every mounted section. Sections missing from the page are `None`.
struct Page {
    hero: Option<hero::HeroSection>,
    timeline: Option<timeline::TimelineSection>,
    orbit: Option<orbit::OrbitSection>,
    projects: Option<projects::ProjectsSection>,
}

impl Page {
    fn mount(document: &web::Document) -> Self {
        Self {
            hero: mount_logged("hero", hero::mount(document)),
            timeline: mount_logged("timeline", timeline::mount(document)),
            orbit: mount_logged("orbit", orbit::mount(document)),
            projects: mount_logged("projects", projects::mount(document)),
        }
    }

    fn teardown(&mut self) {
        if let Some(s) = self.hero.as_mut() {
            s.teardown();
        }
        if let Some(s) = self.timeline.as_mut() {
            s.teardown();
        }
        if let Some(s) = self.orbit.as_mut() {
            s.teardown();
        }
        if let Some(s) = self.projects.as_mut() {
            s.teardown();
        }
    }
}

// one broken section must not take the others down
fn mount_logged<T>(name: &str, mounted: anyhow::Result<Option<T>>) -> Option<T> {
    match mounted {
        Ok(section) => section,
        Err(e) => {
            log::error!("[{name}] mount failed: {e:#}");
            None
        }
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn mount_page(document: &web::Document) {
    let page = Page::mount(document);
    PAGE.with(|slot| {
        if let Some(mut old) = slot.borrow_mut().replace(page) {
            old.teardown();
        }
    });
}

fn is_mounted() -> bool {
    PAGE.with(|slot| slot.borrow().is_some())
}

fn teardown_page() {
    PAGE.with(|slot| {
        if let Some(mut page) = slot.borrow_mut().take() {
            page.teardown();
        }
    });
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    mount_page(&document);

    let on_hide = Closure::wrap(Box::new(move |_: web::PageTransitionEvent| {
        if lifecycle::on_page_hide(is_mounted()) == PageAction::Teardown {
            log::info!("folio-web tearing down");
            teardown_page();
        }
    }) as Box<dyn FnMut(web::PageTransitionEvent)>);
    window
        .add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("add pagehide listener: {:?}", e))?;
    on_hide.forget();

    let on_show = Closure::wrap(Box::new(move |event: web::PageTransitionEvent| {
        if lifecycle::on_page_show(event.persisted(), is_mounted()) == PageAction::Mount {
            log::info!("folio-web restored from cache, remounting");
            mount_page(&document);
        }
    }) as Box<dyn FnMut(web::PageTransitionEvent)>);
    window
        .add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("add pageshow listener: {:?}", e))?;
    on_show.forget();
    Ok(())
}
