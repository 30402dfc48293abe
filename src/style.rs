// CSS value formatting for the values computed by `folio-core`.
//
// Kept free of web-sys so the formatting can be tested on the host.

#[inline]
pub fn opacity(value: f32) -> String {
    let v = if value.is_finite() { value.clamp(0.0, 1.0) } else { 1.0 };
    format!("{:.3}", v)
}

#[inline]
pub fn px(value: f32) -> String {
    format!("{:.0}px", value)
}

#[inline]
pub fn percent(value: f32) -> String {
    format!("{:.2}%", value.clamp(0.0, 100.0))
}

pub fn translate_y(offset_px: f32) -> String {
    format!("translateY({:.2}px)", offset_px)
}

pub fn card_transform(scale: f32, offset_y_px: f32) -> String {
    format!("translateY({:.2}px) scale({:.3})", offset_y_px, scale)
}

/// White glow around the timeline dot.
pub fn glow_shadow(radius_px: f32, alpha: f32) -> String {
    format!(
        "0 0 {:.1}px rgba(255,255,255,{:.3})",
        radius_px.max(0.0),
        alpha.clamp(0.0, 1.0)
    )
}

/// `left`/`top` for an element placed relative to the center of its container.
pub fn centered_offset(x_px: f32, y_px: f32) -> (String, String) {
    (
        format!("calc(50% + {:.2}px)", x_px),
        format!("calc(50% + {:.2}px)", y_px),
    )
}

/// Observer root margin that trims `top_px` off the top of the viewport.
pub fn top_inset_margin(top_px: f32) -> String {
    format!("-{:.0}px 0px 0px 0px", top_px.max(0.0))
}

/// Observer root margin shrinking every side by `px`.
pub fn uniform_inset_margin(inset_px: f32) -> String {
    format!("-{:.0}px", inset_px.max(0.0))
}

pub fn opacity_transition(duration_ms: u32) -> String {
    format!("opacity {}ms ease", duration_ms)
}
