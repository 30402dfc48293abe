use crate::breakpoints::BreakpointSet;
use crate::constants::{HERO_FADE_END, HERO_LIFT_PX};
use crate::region::{ChannelId, ScrollRegion};

/// Hero text and model fade out and lift while the hero scrolls off the top.
pub struct HeroFade {
    opacity: BreakpointSet,
    lift: BreakpointSet,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeroFrame {
    pub opacity: f32,
    pub offset_y: f32,
}

impl HeroFade {
    pub fn new() -> Self {
        Self::ending_at(HERO_FADE_END, HERO_LIFT_PX)
    }

    /// Fade finishing at `end` progress with a total vertical shift of `lift_px`.
    pub fn ending_at(end: f32, lift_px: f32) -> Self {
        let end = end.clamp(0.0, 1.0);
        Self {
            opacity: BreakpointSet::ramp(0.0, end, 1.0, 0.0)
                .unwrap_or_else(|_| BreakpointSet::constant(1.0)),
            lift: BreakpointSet::ramp(0.0, end, 0.0, lift_px)
                .unwrap_or_else(|_| BreakpointSet::constant(0.0)),
        }
    }

    pub fn frame(&self, progress: f32) -> HeroFrame {
        HeroFrame {
            opacity: self.opacity.sample(progress),
            offset_y: self.lift.sample(progress),
        }
    }

    /// Move both curves onto `region` so they are sampled from its progress.
    pub fn bind_to(self, region: &mut ScrollRegion) -> HeroChannels {
        HeroChannels {
            opacity: region.bind(self.opacity),
            offset_y: region.bind(self.lift),
        }
    }
}

/// Hero curves living on a scroll region.
#[derive(Clone, Copy, Debug)]
pub struct HeroChannels {
    pub opacity: ChannelId,
    pub offset_y: ChannelId,
}

impl HeroChannels {
    pub fn frame(&self, region: &ScrollRegion) -> HeroFrame {
        HeroFrame {
            opacity: region.sample(self.opacity).unwrap_or(1.0),
            offset_y: region.sample(self.offset_y).unwrap_or(0.0),
        }
    }
}

impl Default for HeroFade {
    fn default() -> Self {
        Self::new()
    }
}
