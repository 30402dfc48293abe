//! Scroll regions: normalized progress of the viewport through a tracked element.
//!
//! Progress is derived from plain geometry (element top relative to the
//! viewport, element height, viewport height) so it can be computed without a
//! rendering surface. A region owns the curves bound to it and the listeners
//! interested in its progress; both are dropped when the region unmounts.

use crate::breakpoints::BreakpointSet;

/// Edge of an element or of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Start,
    Center,
    End,
}

impl Edge {
    #[inline]
    pub fn fraction(self) -> f32 {
        match self {
            Edge::Start => 0.0,
            Edge::Center => 0.5,
            Edge::End => 1.0,
        }
    }
}

/// "`target` edge of the element meets `viewport` edge of the viewport".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollOffset {
    pub target: Edge,
    pub viewport: Edge,
}

impl ScrollOffset {
    pub const fn new(target: Edge, viewport: Edge) -> Self {
        Self { target, viewport }
    }

    /// Scrolled distance (negated element top) at which this offset is reached.
    #[inline]
    pub fn scroll_at(self, height: f32, viewport_height: f32) -> f32 {
        self.target.fraction() * height - self.viewport.fraction() * viewport_height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionOffsets {
    pub start: ScrollOffset,
    pub end: ScrollOffset,
}

impl RegionOffsets {
    /// `["start start", "end end"]`: pinned sections that scroll through a tall container.
    pub const THROUGH: Self = Self {
        start: ScrollOffset::new(Edge::Start, Edge::Start),
        end: ScrollOffset::new(Edge::End, Edge::End),
    };
    /// `["start start", "end start"]`: a section scrolling off the top of the viewport.
    pub const EXIT: Self = Self {
        start: ScrollOffset::new(Edge::Start, Edge::Start),
        end: ScrollOffset::new(Edge::End, Edge::Start),
    };
}

impl Default for RegionOffsets {
    fn default() -> Self {
        Self::THROUGH
    }
}

/// Element box relative to the viewport, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RegionGeometry {
    pub top: f32,
    pub height: f32,
    pub viewport_height: f32,
}

/// Progress in `[0, 1]` for `geometry` under `offsets`.
///
/// A zero-length span (for example a zero-height element tracked
/// `start start`/`end start`) snaps to 0 before the offset and 1 at or past it.
pub fn region_progress(offsets: RegionOffsets, geometry: RegionGeometry) -> f32 {
    let scrolled = -geometry.top;
    let s0 = offsets
        .start
        .scroll_at(geometry.height, geometry.viewport_height);
    let s1 = offsets
        .end
        .scroll_at(geometry.height, geometry.viewport_height);
    let span = s1 - s0;
    if !scrolled.is_finite() || !span.is_finite() {
        return 0.0;
    }
    if span.abs() <= f32::EPSILON {
        return if scrolled >= s1 { 1.0 } else { 0.0 };
    }
    ((scrolled - s0) / span).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type Listener = Box<dyn FnMut(f32)>;

/// A mounted scroll region with its bound curves and progress listeners.
pub struct ScrollRegion {
    offsets: RegionOffsets,
    progress: f32,
    mounted: bool,
    channels: Vec<BreakpointSet>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u32,
}

impl ScrollRegion {
    pub fn new(offsets: RegionOffsets) -> Self {
        Self {
            offsets,
            progress: 0.0,
            mounted: true,
            channels: Vec::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn offsets(&self) -> RegionOffsets {
        self.offsets
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Recompute progress from fresh geometry. Returns `None` once unmounted.
    pub fn update(&mut self, geometry: RegionGeometry) -> Option<f32> {
        let progress = region_progress(self.offsets, geometry);
        self.set_progress(progress)
    }

    /// Set progress directly (clamped). Listeners run only when the value changes.
    pub fn set_progress(&mut self, progress: f32) -> Option<f32> {
        if !self.mounted {
            log::debug!("[region] update after unmount ignored");
            return None;
        }
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if progress != self.progress {
            self.progress = progress;
            for (_, listener) in self.listeners.iter_mut() {
                listener(progress);
            }
        }
        Some(self.progress)
    }

    /// Attach a curve driven by this region's progress.
    pub fn bind(&mut self, curve: BreakpointSet) -> ChannelId {
        self.channels.push(curve);
        ChannelId(self.channels.len() - 1)
    }

    /// Current value of a bound curve, computed from the current progress.
    pub fn sample(&self, channel: ChannelId) -> Option<f32> {
        self.channels
            .get(channel.0)
            .map(|curve| curve.sample(self.progress))
    }

    /// Register a progress listener. Call order across listeners is unspecified.
    pub fn subscribe(&mut self, listener: impl FnMut(f32) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription = self.next_subscription.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Detach all listeners; later updates are ignored.
    pub fn unmount(&mut self) {
        if self.mounted {
            log::debug!(
                "[region] unmount (listeners={}, channels={})",
                self.listeners.len(),
                self.channels.len()
            );
        }
        self.mounted = false;
        self.listeners.clear();
    }
}

impl Default for ScrollRegion {
    fn default() -> Self {
        Self::new(RegionOffsets::default())
    }
}
