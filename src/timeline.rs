use crate::constants::{
    ABOUT_SECTION_ID, ALIGN_BOTTOM_CLASS, ALIGN_TOP_CLASS, TIMELINE_CARD_SELECTOR,
    TIMELINE_GLOW_SELECTOR, TIMELINE_PROGRESS_ID,
};
use crate::dom;
use crate::scroll::{self, ScrollBinding};
use crate::style;
use folio_core::{CardAlign, RegionOffsets, ScrollRegion, Timeline};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct TimelineSection {
    region: Rc<RefCell<ScrollRegion>>,
    scroll: Option<ScrollBinding>,
}

struct CardElements {
    card: web::HtmlElement,
    glow: Option<web::HtmlElement>,
}

pub fn mount(document: &web::Document) -> anyhow::Result<Option<TimelineSection>> {
    let Some(section) = dom::element_by_id(document, ABOUT_SECTION_ID) else {
        log::warn!("[timeline] missing #{ABOUT_SECTION_ID}");
        return Ok(None);
    };
    let cards: Vec<CardElements> = dom::query_all(document, TIMELINE_CARD_SELECTOR)
        .into_iter()
        .map(|card| CardElements {
            glow: dom::query_in(&card, TIMELINE_GLOW_SELECTOR),
            card,
        })
        .collect();
    let line = dom::element_by_id(document, TIMELINE_PROGRESS_ID);
    let timeline = Timeline::new(cards.len());

    for (els, curves) in cards.iter().zip(timeline.cards()) {
        let top = curves.align == CardAlign::Top;
        dom::set_class(&els.card, ALIGN_TOP_CLASS, top);
        dom::set_class(&els.card, ALIGN_BOTTOM_CLASS, !top);
    }

    let region = Rc::new(RefCell::new(ScrollRegion::new(RegionOffsets::THROUGH)));
    let binding = scroll::bind_region(section, region.clone(), move |r| {
        let progress = r.progress();
        if let Some(line) = &line {
            dom::set_style(line, "width", &style::percent(timeline.line_width_percent(progress)));
        }
        for (els, frame) in cards.iter().zip(timeline.frames(progress)) {
            dom::set_style(&els.card, "opacity", &style::opacity(frame.opacity));
            dom::set_style(
                &els.card,
                "transform",
                &style::card_transform(frame.scale, frame.offset_y),
            );
            if let Some(glow) = &els.glow {
                dom::set_style(
                    glow,
                    "box-shadow",
                    &style::glow_shadow(frame.glow_radius, frame.glow_alpha),
                );
            }
        }
    })?;
    log::info!("[timeline] mounted");
    Ok(Some(TimelineSection {
        region,
        scroll: Some(binding),
    }))
}

impl TimelineSection {
    pub fn teardown(&mut self) {
        self.scroll.take();
        self.region.borrow_mut().unmount();
    }
}
