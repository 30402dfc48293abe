use crate::constants::{HERO_FADE_SELECTOR, HERO_SECTION_ID};
use crate::dom;
use crate::scroll::{self, ScrollBinding};
use crate::style;
use folio_core::{HeroFade, RegionOffsets, ScrollRegion};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct HeroSection {
    region: Rc<RefCell<ScrollRegion>>,
    scroll: Option<ScrollBinding>,
}

pub fn mount(document: &web::Document) -> anyhow::Result<Option<HeroSection>> {
    let Some(section) = dom::element_by_id(document, HERO_SECTION_ID) else {
        log::warn!("[hero] missing #{HERO_SECTION_ID}");
        return Ok(None);
    };
    let targets = dom::query_all(document, HERO_FADE_SELECTOR);
    let region = Rc::new(RefCell::new(ScrollRegion::new(RegionOffsets::EXIT)));
    let channels = HeroFade::new().bind_to(&mut region.borrow_mut());

    let binding = scroll::bind_region(section, region.clone(), move |r| {
        let f = channels.frame(r);
        let opacity = style::opacity(f.opacity);
        let transform = style::translate_y(f.offset_y);
        for el in &targets {
            dom::set_style(el, "opacity", &opacity);
            dom::set_style(el, "transform", &transform);
        }
    })?;
    log::info!("[hero] mounted");
    Ok(Some(HeroSection {
        region,
        scroll: Some(binding),
    }))
}

impl HeroSection {
    pub fn teardown(&mut self) {
        self.scroll.take();
        self.region.borrow_mut().unmount();
    }
}
