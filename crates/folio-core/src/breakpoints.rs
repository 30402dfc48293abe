//! Piecewise-linear curves over scroll progress.
//!
//! A [`BreakpointSet`] maps a progress value to a visual parameter (opacity,
//! scale, offset in pixels, ...). Queries outside the covered range clamp to
//! the first/last value, so a curve never extrapolates.

use crate::error::{ChoreoError, Result};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    pub progress: f32,
    pub value: f32,
}

/// Ordered control points; progress is non-decreasing.
///
/// Most curves in this crate have four points (fade in, settle, settle, fade
/// out) so they stay inline.
#[derive(Clone, Debug, PartialEq)]
pub struct BreakpointSet {
    points: SmallVec<[Breakpoint; 4]>,
}

impl BreakpointSet {
    /// Build a curve from parallel progress/value slices.
    pub fn new(progress: &[f32], values: &[f32]) -> Result<Self> {
        if progress.len() != values.len() {
            return Err(ChoreoError::LengthMismatch {
                progress: progress.len(),
                values: values.len(),
            });
        }
        if progress.is_empty() {
            return Err(ChoreoError::EmptyBreakpoints);
        }
        let mut points = SmallVec::with_capacity(progress.len());
        for (index, (&p, &v)) in progress.iter().zip(values).enumerate() {
            if !p.is_finite() || !v.is_finite() {
                return Err(ChoreoError::NonFinite { index });
            }
            if let Some(prev) = points.last().map(|b: &Breakpoint| b.progress) {
                if p < prev {
                    return Err(ChoreoError::Unsorted {
                        index,
                        prev,
                        next: p,
                    });
                }
            }
            points.push(Breakpoint {
                progress: p,
                value: v,
            });
        }
        Ok(Self { points })
    }

    /// Two-point ramp from `(p0, v0)` to `(p1, v1)`.
    pub fn ramp(p0: f32, p1: f32, v0: f32, v1: f32) -> Result<Self> {
        Self::new(&[p0, p1], &[v0, v1])
    }

    /// A curve that ignores progress.
    pub fn constant(value: f32) -> Self {
        let mut points = SmallVec::new();
        points.push(Breakpoint {
            progress: 0.0,
            value,
        });
        Self { points }
    }

    pub fn points(&self) -> &[Breakpoint] {
        &self.points
    }

    pub fn first_value(&self) -> f32 {
        self.points[0].value
    }

    pub fn last_value(&self) -> f32 {
        self.points[self.points.len() - 1].value
    }

    #[inline]
    pub fn sample(&self, progress: f32) -> f32 {
        interpolate(&self.points, progress)
    }
}

/// Evaluate sorted breakpoints at `progress`.
///
/// Runs of equal progress resolve to the last point of the run, so a
/// zero-width interval yields the later value instead of dividing by zero.
/// NaN queries return the first value. An empty slice yields 0.
pub fn interpolate(points: &[Breakpoint], progress: f32) -> f32 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    // number of points at or before `progress`
    let idx = points.partition_point(|b| b.progress <= progress);
    if idx == 0 {
        return first.value;
    }
    if idx == points.len() {
        return points[idx - 1].value;
    }
    let a = points[idx - 1];
    let b = points[idx];
    // a.progress <= progress < b.progress, so the span is strictly positive
    let t = (progress - a.progress) / (b.progress - a.progress);
    a.value + (b.value - a.value) * t
}
