//! Per-item progress windows for sibling sequences (timeline cards).
//!
//! Item `k` of `n` owns `[k/n, (k+1)/n]` of the region's progress. Its curves
//! fade in before the window, hold while inside and fade out after it. Reveal
//! curves keep the first item settled at progress 0 and the last one settled
//! at progress 1, since nothing precedes/follows them.

use crate::breakpoints::BreakpointSet;
use crate::constants::{PAD_IN, PAD_SETTLE};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowPadding {
    /// How far outside the window the fade starts/ends.
    pub fade: f32,
    /// How far inside the window the value is fully settled.
    pub settle: f32,
}

impl Default for WindowPadding {
    fn default() -> Self {
        Self {
            fade: PAD_IN,
            settle: PAD_SETTLE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemWindow {
    pub index: usize,
    pub count: usize,
    pub start: f32,
    pub end: f32,
}

impl ItemWindow {
    /// Window of item `index` among `count` siblings; `None` when there is nothing to animate.
    pub fn for_index(index: usize, count: usize) -> Option<Self> {
        if count == 0 || index >= count {
            return None;
        }
        let n = count as f32;
        Some(Self {
            index,
            count,
            start: index as f32 / n,
            end: (index + 1) as f32 / n,
        })
    }

    /// Every window of a `count`-item sequence, in order.
    pub fn all(count: usize) -> impl Iterator<Item = ItemWindow> {
        (0..count).filter_map(move |i| Self::for_index(i, count))
    }

    #[inline]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    #[inline]
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.count
    }

    /// `[fade-in start, settled from, settled until, fade-out end]`.
    ///
    /// Settle points collapse onto the window midpoint when the window is
    /// narrower than twice the settle inset, keeping the sequence sorted.
    pub fn stops(&self, pad: WindowPadding) -> [f32; 4] {
        let mid = 0.5 * (self.start + self.end);
        let settle_in = (self.start + pad.settle).min(mid);
        let settle_out = (self.end - pad.settle).max(mid);
        let fade_in = (self.start - pad.fade).max(0.0).min(settle_in);
        let fade_out = (self.end + pad.fade).min(1.0).max(settle_out);
        [fade_in, settle_in, settle_out, fade_out]
    }

    /// Fade-in, hold, fade-out curve between `out` and `settled`.
    pub fn fade_curve(&self, pad: WindowPadding, out: f32, settled: f32) -> BreakpointSet {
        self.curve(pad, [out, settled, settled, out], settled)
    }

    /// Like [`fade_curve`](Self::fade_curve), but the first item is already
    /// settled at progress 0 and the last one stays settled at progress 1.
    pub fn reveal_curve(&self, pad: WindowPadding, out: f32, settled: f32) -> BreakpointSet {
        let head = if self.is_first() { settled } else { out };
        let tail = if self.is_last() { settled } else { out };
        self.curve(pad, [head, settled, settled, tail], settled)
    }

    fn curve(&self, pad: WindowPadding, values: [f32; 4], settled: f32) -> BreakpointSet {
        let stops = self.stops(pad);
        BreakpointSet::new(&stops, &values).unwrap_or_else(|e| {
            log::warn!("[window] item {} curve rejected: {e}", self.index);
            BreakpointSet::constant(settled)
        })
    }

    /// Linear ramp across the raw window, `from` at start to `to` at end.
    pub fn span_curve(&self, from: f32, to: f32) -> BreakpointSet {
        BreakpointSet::ramp(self.start, self.end, from, to)
            .unwrap_or_else(|_| BreakpointSet::constant(to))
    }
}
