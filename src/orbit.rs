use crate::constants::{
    BADGE_FADE_MS, ORBIT_CENTER_ID, ORBIT_RING_SELECTOR, ORBIT_SKILL_SELECTOR, PULSING_CLASS,
    RING_ATTR, RING_FADE_MS, SETTLED_CLASS, SKILLS_SECTION_ID, SKILL_ATTR,
};
use crate::dom;
use crate::frame::{self, FrameLoop};
use crate::observe::{self, Observer};
use crate::scroll::{self, ScrollBinding};
use crate::style;
use folio_core::{
    CenterBadge, ObserverSupport, Orbit, OrbitPhase, RegionOffsets, ScrollRegion,
    ORBIT_IN_VIEW_AMOUNT,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct OrbitSection {
    orbit: Rc<RefCell<Orbit>>,
    region: Rc<RefCell<ScrollRegion>>,
    scroll: Option<ScrollBinding>,
    seen: Option<Observer>,
    frames: Option<FrameLoop>,
}

struct OrbitElements {
    rings: Vec<(usize, web::HtmlElement)>,
    // index into `Orbit::skills`
    badges: Vec<(usize, web::HtmlElement)>,
    center: Option<web::HtmlElement>,
}

impl OrbitElements {
    fn collect(document: &web::Document, orbit: &Orbit) -> Self {
        let rings = dom::query_all(document, ORBIT_RING_SELECTOR)
            .into_iter()
            .filter_map(|el| {
                let ring = el.get_attribute(RING_ATTR)?.trim().parse::<usize>().ok()?;
                Some((ring, el))
            })
            .collect::<Vec<_>>();
        let badges = dom::query_all(document, ORBIT_SKILL_SELECTOR)
            .into_iter()
            .filter_map(|el| {
                let name = el.get_attribute(SKILL_ATTR)?;
                let index = orbit.skills().iter().position(|s| s.name == name);
                if index.is_none() {
                    log::warn!("[orbit] no skill named {name}");
                }
                Some((index?, el))
            })
            .collect::<Vec<_>>();
        for (_, el) in &rings {
            dom::set_style(el, "transition", &style::opacity_transition(RING_FADE_MS));
        }
        for (_, el) in &badges {
            dom::set_style(el, "transition", &style::opacity_transition(BADGE_FADE_MS));
        }
        Self {
            rings,
            badges,
            center: dom::element_by_id(document, ORBIT_CENTER_ID),
        }
    }

    fn render_reveal(&self, orbit: &Orbit) {
        for (ring, el) in &self.rings {
            dom::set_style(el, "opacity", &style::opacity(orbit.ring_opacity(*ring)));
        }
        if let Some(center) = &self.center {
            let settled = orbit.center_badge() == CenterBadge::Settled;
            dom::set_class(center, SETTLED_CLASS, settled);
            dom::set_class(center, PULSING_CLASS, !settled);
        }
    }

    fn render_badges(&self, orbit: &Orbit) {
        let seen = orbit.phase() != OrbitPhase::Idle;
        for (index, el) in &self.badges {
            let skill = &orbit.skills()[*index];
            let shown = seen && orbit.is_ring_revealed(skill.ring);
            dom::set_style(el, "opacity", if shown { "1" } else { "0" });
            dom::set_style(el, "pointer-events", if shown { "auto" } else { "none" });
            let pos = orbit.badge_position(skill);
            let (left, top) = style::centered_offset(pos.x, pos.y);
            dom::set_style(el, "left", &left);
            dom::set_style(el, "top", &top);
        }
    }
}

pub fn mount(document: &web::Document) -> anyhow::Result<Option<OrbitSection>> {
    let Some(section) = dom::element_by_id(document, SKILLS_SECTION_ID) else {
        log::warn!("[orbit] missing #{SKILLS_SECTION_ID}");
        return Ok(None);
    };
    let orbit = Rc::new(RefCell::new(Orbit::default()));
    let elements = Rc::new(OrbitElements::collect(document, &orbit.borrow()));
    let region = Rc::new(RefCell::new(ScrollRegion::new(RegionOffsets::THROUGH)));

    let scroll = {
        let orbit = orbit.clone();
        let elements = elements.clone();
        scroll::bind_region(section.clone(), region.clone(), move |r| {
            let mut o = orbit.borrow_mut();
            o.set_progress(r.progress());
            elements.render_reveal(&o);
        })?
    };

    let seen = match observe::observer_support() {
        ObserverSupport::Available => {
            let orbit = orbit.clone();
            let elements = elements.clone();
            Some(Observer::new(
                std::slice::from_ref(&section),
                ORBIT_IN_VIEW_AMOUNT as f64,
                "0px",
                move |_, _, intersecting| {
                    if intersecting && orbit.borrow_mut().start() {
                        elements.render_reveal(&orbit.borrow());
                    }
                },
            )?)
        }
        ObserverSupport::Unavailable => {
            log::warn!("[orbit] no intersection observer; starting immediately");
            orbit.borrow_mut().start();
            elements.render_reveal(&orbit.borrow());
            None
        }
    };

    let frames = {
        let orbit = orbit.clone();
        let elements = elements.clone();
        frame::start_loop(move |_dt| {
            let mut o = orbit.borrow_mut();
            if o.tick() {
                elements.render_badges(&o);
            }
        })
    };
    elements.render_badges(&orbit.borrow());

    log::info!(
        "[orbit] mounted (rings={}, badges={})",
        elements.rings.len(),
        elements.badges.len()
    );
    Ok(Some(OrbitSection {
        orbit,
        region,
        scroll: Some(scroll),
        seen,
        frames: Some(frames),
    }))
}

impl OrbitSection {
    pub fn teardown(&mut self) {
        if let Some(frames) = self.frames.take() {
            frames.cancel();
        }
        self.seen.take();
        self.scroll.take();
        self.region.borrow_mut().unmount();
        self.orbit.borrow_mut().stop();
    }
}
