//! Visibility and active-item tracking for the project list.
//!
//! The tracker does not observe anything itself: the host feeds it
//! intersection entries (from `IntersectionObserver` in the browser, or from
//! [`visible_below_header`] when simulating) and reads back which item is
//! active and which items are visible below the sticky header.
//!
//! Two policies are tracked independently:
//! - **active**: the last item reported intersecting with at least
//!   [`ACTIVE_THRESHOLD`] of its area. Entries delivered in the same batch
//!   apply in delivery order, so the winner among simultaneous crossings is
//!   whatever the platform delivers last.
//! - **visible**: per item, whether any part of it is below the header.
//!
//! Without an observation capability every item stays visible.

use crate::constants::{ACTIVE_THRESHOLD, HEADER_BUFFER_PX};
use fnv::FnvHashMap;
use std::hash::Hash;

/// Integer pixel value at the start of a CSS length, like `parseInt("64px")`.
///
/// Returns `None` for values without leading digits such as `"auto"`.
pub fn parse_css_px(value: &str) -> Option<f32> {
    let s = value.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    rest[..digits].parse::<f32>().ok().map(|v| sign * v)
}

/// Space taken by the sticky header at the top of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeaderOffset {
    /// Distance from the viewport top to the header's bottom edge.
    pub margin_px: f32,
}

impl HeaderOffset {
    pub fn measure(top_px: f32, height_px: f32) -> Self {
        let top = if top_px.is_finite() { top_px } else { 0.0 };
        let height = if height_px.is_finite() {
            height_px.max(0.0)
        } else {
            0.0
        };
        Self {
            margin_px: (top + height).max(0.0),
        }
    }

    /// Measure from the computed CSS `top` (unparsable counts as 0) and the rendered height.
    pub fn from_computed(top_css: &str, height_px: f32) -> Self {
        Self::measure(parse_css_px(top_css).unwrap_or(0.0), height_px)
    }

    /// Top padding for the list so the first card clears the header.
    pub fn padding_px(&self) -> f32 {
        self.margin_px + HEADER_BUFFER_PX
    }
}

/// Whether an item spanning `[top, bottom)` (viewport coordinates) shows
/// anywhere between the header and the bottom of the viewport.
pub fn visible_below_header(top: f32, bottom: f32, viewport_height: f32, header: HeaderOffset) -> bool {
    bottom > header.margin_px && top < viewport_height && bottom > top
}

/// Fraction of `[top, bottom)` inside `[root_top, root_bottom)`.
pub fn intersection_ratio(top: f32, bottom: f32, root_top: f32, root_bottom: f32) -> f32 {
    let height = bottom - top;
    if height <= 0.0 {
        return 0.0;
    }
    let overlap = bottom.min(root_bottom) - top.max(root_top);
    (overlap / height).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserverSupport {
    Available,
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry<K> {
    pub key: K,
    pub ratio: f32,
    pub is_intersecting: bool,
}

pub struct VisibilityTracker<K> {
    keys: Vec<K>,
    visible: FnvHashMap<K, bool>,
    active: Option<K>,
    support: ObserverSupport,
    header: HeaderOffset,
    section_in_view: bool,
    connected: bool,
}

impl<K> VisibilityTracker<K>
where
    K: Copy + Eq + Hash + std::fmt::Debug,
{
    /// Track `keys` in order. The first key starts active and every key starts visible.
    pub fn new(keys: Vec<K>, support: ObserverSupport) -> Self {
        let visible = keys.iter().map(|&k| (k, true)).collect();
        if support == ObserverSupport::Unavailable {
            log::warn!("[tracker] no intersection observer; all items stay visible");
        }
        Self {
            active: keys.first().copied(),
            keys,
            visible,
            support,
            header: HeaderOffset::default(),
            section_in_view: false,
            connected: true,
        }
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn support(&self) -> ObserverSupport {
        self.support
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    fn accepts(&self, key: &K) -> bool {
        if !self.connected {
            log::debug!("[tracker] entry for {:?} after disconnect ignored", key);
            return false;
        }
        self.support == ObserverSupport::Available && self.visible.contains_key(key)
    }

    /// Apply an entry from the 50%-threshold observer. Returns whether the active item changed.
    pub fn on_active_entry(&mut self, entry: &IntersectionEntry<K>) -> bool {
        if !self.accepts(&entry.key) {
            return false;
        }
        // an item leaving the viewport reports just under the threshold while still intersecting
        let crossed = entry.is_intersecting && entry.ratio >= ACTIVE_THRESHOLD;
        if crossed && self.active != Some(entry.key) {
            log::debug!("[tracker] active -> {:?}", entry.key);
            self.active = Some(entry.key);
            return true;
        }
        false
    }

    /// Apply an entry from the header-offset observer. Returns whether visibility changed.
    pub fn on_visibility_entry(&mut self, entry: &IntersectionEntry<K>) -> bool {
        if !self.accepts(&entry.key) {
            return false;
        }
        match self.visible.get_mut(&entry.key) {
            Some(flag) if *flag != entry.is_intersecting => {
                *flag = entry.is_intersecting;
                true
            }
            _ => false,
        }
    }

    /// Record whether the section itself is in view.
    ///
    /// Returns `true` when the status flipped: the header may have changed
    /// between its sticky and static layouts, so the caller must remeasure the
    /// header and rebuild the visibility observer with the new offset.
    pub fn set_section_in_view(&mut self, in_view: bool) -> bool {
        if !self.connected || self.section_in_view == in_view {
            return false;
        }
        self.section_in_view = in_view;
        true
    }

    pub fn section_in_view(&self) -> bool {
        self.section_in_view
    }

    pub fn set_header_offset(&mut self, header: HeaderOffset) {
        if !self.connected {
            return;
        }
        if header != self.header {
            log::info!(
                "[tracker] header offset {:.0}px -> {:.0}px",
                self.header.margin_px,
                header.margin_px
            );
        }
        self.header = header;
    }

    pub fn header_offset(&self) -> HeaderOffset {
        self.header
    }

    pub fn active(&self) -> Option<K> {
        self.active
    }

    pub fn active_index(&self) -> Option<usize> {
        let active = self.active?;
        self.keys.iter().position(|k| *k == active)
    }

    /// Visible below the header; always `true` without an observation capability.
    pub fn is_visible(&self, key: &K) -> bool {
        if self.support == ObserverSupport::Unavailable {
            return true;
        }
        self.visible.get(key).copied().unwrap_or(true)
    }

    /// Visibility flags in key order.
    pub fn visibility(&self) -> Vec<bool> {
        self.keys.iter().map(|k| self.is_visible(k)).collect()
    }

    /// Stop accepting entries. State is frozen from here on.
    pub fn disconnect(&mut self) {
        if self.connected {
            log::debug!("[tracker] disconnect ({} items)", self.keys.len());
        }
        self.connected = false;
    }
}
