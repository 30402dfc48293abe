use crate::constants::{
    CARD_FADE_MS, PROJECTS_HEADER_ID, PROJECTS_LIST_ID, PROJECTS_SECTION_ID, PROJECT_CARD_SELECTOR,
    PROJECT_COUNTER_ID, PROJECT_COUNTER_TITLE_ID, PROJECT_TITLE_ATTR, STICKY_CLASS,
};
use crate::dom;
use crate::frame::{self, FrameLoop};
use crate::observe::{self, Observer};
use crate::style;
use folio_core::{
    HeaderOffset, IntersectionEntry, ObserverSupport, ProjectCounter, VisibilityTracker,
    ACTIVE_THRESHOLD, COUNTER_IN_VIEW_MARGIN_PX, SECTION_IN_VIEW_AMOUNT,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct ProjectsState {
    tracker: VisibilityTracker<usize>,
    counter: ProjectCounter,
}

struct ProjectElements {
    section: web::HtmlElement,
    cards: Vec<web::HtmlElement>,
    header: Option<web::HtmlElement>,
    list: Option<web::HtmlElement>,
    counter: Option<web::HtmlElement>,
    title: Option<web::HtmlElement>,
}

impl ProjectElements {
    fn show_active(&self, index: usize) {
        let Some(title) = &self.title else { return };
        let text = self
            .cards
            .get(index)
            .and_then(|card| card.get_attribute(PROJECT_TITLE_ATTR));
        title.set_text_content(text.as_deref());
    }

    fn show_card(&self, index: usize, visible: bool) {
        if let Some(card) = self.cards.get(index) {
            dom::set_style(card, "opacity", if visible { "1" } else { "0" });
        }
    }

    /// Measure the header and push the list below it.
    fn measure_header(&self) -> HeaderOffset {
        let Some(header) = &self.header else {
            return HeaderOffset::default();
        };
        let offset = HeaderOffset::from_computed(
            &dom::computed_top(header),
            header.offset_height() as f32,
        );
        if let Some(list) = &self.list {
            dom::set_style(list, "padding-top", &style::px(offset.padding_px()));
        }
        offset
    }
}

type SharedObserver = Rc<RefCell<Option<Observer>>>;

pub struct ProjectsSection {
    state: Rc<RefCell<ProjectsState>>,
    active: Option<Observer>,
    section: Option<Observer>,
    seen: Option<Observer>,
    visibility: SharedObserver,
    frames: Option<FrameLoop>,
}

/// Observer fading cards in and out as they pass under the header.
fn watch_visibility(
    els: &Rc<ProjectElements>,
    state: &Rc<RefCell<ProjectsState>>,
) -> anyhow::Result<Observer> {
    let margin = state.borrow().tracker.header_offset().margin_px;
    let els_cb = els.clone();
    let state = state.clone();
    Observer::new(&els.cards, 0.0, &style::top_inset_margin(margin), move |key, ratio, is_intersecting| {
        let entry = IntersectionEntry { key, ratio, is_intersecting };
        let changed = state.borrow_mut().tracker.on_visibility_entry(&entry);
        if changed {
            els_cb.show_card(key, is_intersecting);
        }
    })
}

pub fn mount(document: &web::Document) -> anyhow::Result<Option<ProjectsSection>> {
    let Some(section) = dom::element_by_id(document, PROJECTS_SECTION_ID) else {
        log::warn!("[projects] missing #{PROJECTS_SECTION_ID}");
        return Ok(None);
    };
    let els = Rc::new(ProjectElements {
        cards: dom::query_all(document, PROJECT_CARD_SELECTOR),
        header: dom::element_by_id(document, PROJECTS_HEADER_ID),
        list: dom::element_by_id(document, PROJECTS_LIST_ID),
        counter: dom::element_by_id(document, PROJECT_COUNTER_ID),
        title: dom::element_by_id(document, PROJECT_COUNTER_TITLE_ID),
        section,
    });
    for card in &els.cards {
        dom::set_style(card, "transition", &style::opacity_transition(CARD_FADE_MS));
    }

    let support = observe::observer_support();
    let keys: Vec<usize> = (0..els.cards.len()).collect();
    let state = Rc::new(RefCell::new(ProjectsState {
        tracker: VisibilityTracker::new(keys, support),
        counter: ProjectCounter::default(),
    }));
    {
        let mut s = state.borrow_mut();
        if let Some(index) = s.tracker.active_index() {
            s.counter.set_target(index as u32 + 1);
            els.show_active(index);
        }
        let offset = els.measure_header();
        s.tracker.set_header_offset(offset);
    }

    let visibility: SharedObserver = Rc::new(RefCell::new(None));
    let (active, section_obs, seen) = match support {
        ObserverSupport::Available => {
            let active = {
                let els_cb = els.clone();
                let state = state.clone();
                Observer::new(&els.cards, ACTIVE_THRESHOLD as f64, "0px", move |key, ratio, is_intersecting| {
                    let entry = IntersectionEntry { key, ratio, is_intersecting };
                    let mut s = state.borrow_mut();
                    if s.tracker.on_active_entry(&entry) {
                        s.counter.set_target(key as u32 + 1);
                        els_cb.show_active(key);
                    }
                })?
            };

            let section_obs = {
                let els_cb = els.clone();
                let state = state.clone();
                let visibility = visibility.clone();
                Observer::new(
                    std::slice::from_ref(&els.section),
                    SECTION_IN_VIEW_AMOUNT as f64,
                    "0px",
                    move |_, _, intersecting| {
                        if !state.borrow_mut().tracker.set_section_in_view(intersecting) {
                            return;
                        }
                        if let Some(header) = &els_cb.header {
                            dom::set_class(header, STICKY_CLASS, intersecting);
                        }
                        let offset = els_cb.measure_header();
                        state.borrow_mut().tracker.set_header_offset(offset);
                        let rebuilt = watch_visibility(&els_cb, &state)
                            .map_err(|e| log::error!("[projects] visibility observer: {e:#}"))
                            .ok();
                        *visibility.borrow_mut() = rebuilt;
                    },
                )?
            };

            let seen = {
                let state = state.clone();
                let target = els.counter.clone().unwrap_or_else(|| els.section.clone());
                Observer::new(
                    std::slice::from_ref(&target),
                    0.0,
                    &style::uniform_inset_margin(COUNTER_IN_VIEW_MARGIN_PX),
                    move |_, _, intersecting| {
                        if intersecting && state.borrow_mut().counter.enter_view() {
                            log::debug!("[projects] counter in view");
                        }
                    },
                )?
            };

            *visibility.borrow_mut() = Some(watch_visibility(&els, &state)?);
            (Some(active), Some(section_obs), Some(seen))
        }
        ObserverSupport::Unavailable => {
            state.borrow_mut().counter.enter_view();
            (None, None, None)
        }
    };

    let frames = {
        let els = els.clone();
        let state = state.clone();
        let mut shown: Option<i32> = None;
        frame::start_loop(move |dt| {
            let display = {
                let mut s = state.borrow_mut();
                if !s.counter.in_view() || (s.counter.is_settled() && shown.is_some()) {
                    return;
                }
                s.counter.step(dt);
                s.counter.display()
            };
            if shown != Some(display) {
                shown = Some(display);
                if let Some(counter) = &els.counter {
                    counter.set_text_content(Some(&display.to_string()));
                }
            }
        })
    };

    log::info!("[projects] mounted (cards={}, {:?})", els.cards.len(), support);
    Ok(Some(ProjectsSection {
        state,
        active,
        section: section_obs,
        seen,
        visibility,
        frames: Some(frames),
    }))
}

impl ProjectsSection {
    pub fn teardown(&mut self) {
        if let Some(frames) = self.frames.take() {
            frames.cancel();
        }
        for observer in [self.active.take(), self.section.take(), self.seen.take()]
            .into_iter()
            .flatten()
        {
            observer.disconnect();
        }
        self.visibility.borrow_mut().take();
        self.state.borrow_mut().tracker.disconnect();
    }
}
