//! Scroll-driven "about" timeline: a progress line plus one card per event.

use crate::breakpoints::BreakpointSet;
use crate::constants::{CARD_OFFSET_Y_PX, CARD_OPACITY, CARD_SCALE, GLOW_ALPHA, GLOW_RADIUS_PX};
use crate::window::{ItemWindow, WindowPadding};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAlign {
    Top,
    Bottom,
}

impl CardAlign {
    #[inline]
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            CardAlign::Top
        } else {
            CardAlign::Bottom
        }
    }
}

/// Curves for a single timeline card.
#[derive(Clone, Debug)]
pub struct CardCurves {
    pub window: ItemWindow,
    pub align: CardAlign,
    pub opacity: BreakpointSet,
    pub scale: BreakpointSet,
    pub offset_y: BreakpointSet,
    pub glow_radius: BreakpointSet,
    pub glow_alpha: BreakpointSet,
}

impl CardCurves {
    pub fn new(window: ItemWindow, pad: WindowPadding) -> Self {
        Self {
            window,
            align: CardAlign::for_index(window.index),
            opacity: window.reveal_curve(pad, CARD_OPACITY.0, CARD_OPACITY.1),
            scale: window.fade_curve(pad, CARD_SCALE.0, CARD_SCALE.1),
            offset_y: window.fade_curve(pad, CARD_OFFSET_Y_PX.0, CARD_OFFSET_Y_PX.1),
            glow_radius: window.span_curve(GLOW_RADIUS_PX.0, GLOW_RADIUS_PX.1),
            glow_alpha: window.span_curve(GLOW_ALPHA.0, GLOW_ALPHA.1),
        }
    }

    pub fn frame(&self, progress: f32) -> CardFrame {
        CardFrame {
            opacity: self.opacity.sample(progress),
            scale: self.scale.sample(progress),
            offset_y: self.offset_y.sample(progress),
            glow_radius: self.glow_radius.sample(progress),
            glow_alpha: self.glow_alpha.sample(progress),
        }
    }
}

/// Visual parameters of one card at a given progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardFrame {
    pub opacity: f32,
    pub scale: f32,
    pub offset_y: f32,
    pub glow_radius: f32,
    pub glow_alpha: f32,
}

pub struct Timeline {
    cards: Vec<CardCurves>,
    line: BreakpointSet,
}

impl Timeline {
    pub fn new(count: usize) -> Self {
        Self::with_padding(count, WindowPadding::default())
    }

    pub fn with_padding(count: usize, pad: WindowPadding) -> Self {
        let cards = ItemWindow::all(count)
            .map(|w| CardCurves::new(w, pad))
            .collect::<Vec<_>>();
        Self {
            cards,
            line: BreakpointSet::ramp(0.0, 1.0, 0.0, 100.0)
                .unwrap_or_else(|_| BreakpointSet::constant(0.0)),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[CardCurves] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&CardCurves> {
        self.cards.get(index)
    }

    /// Width of the progress line in percent.
    pub fn line_width_percent(&self, progress: f32) -> f32 {
        self.line.sample(progress)
    }

    /// Frames for every card at `progress`; empty for an empty timeline.
    pub fn frames(&self, progress: f32) -> Vec<CardFrame> {
        self.cards.iter().map(|c| c.frame(progress)).collect()
    }
}
