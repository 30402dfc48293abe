// Shared choreography tuning constants used by the web front-end and the preview.

// Item windows (timeline cards)
pub const PAD_IN: f32 = 0.1; // how far before/after its window a card starts fading
pub const PAD_SETTLE: f32 = 0.05; // inset from the window edges where a card is fully settled

// Timeline card channels: (faded-out, settled)
pub const CARD_OPACITY: (f32, f32) = (0.0, 1.0);
pub const CARD_SCALE: (f32, f32) = (0.85, 1.0);
pub const CARD_OFFSET_Y_PX: (f32, f32) = (30.0, 0.0);

// Glow dot over the raw item window: (at start, at end)
pub const GLOW_RADIUS_PX: (f32, f32) = (15.0, 35.0);
pub const GLOW_ALPHA: (f32, f32) = (0.6, 0.8);

// Hero fade: both channels finish halfway through the hero region
pub const HERO_FADE_END: f32 = 0.5;
pub const HERO_LIFT_PX: f32 = -150.0;

// Orbit
pub const ORBIT_RADII: [(f32, f32); 4] = [(120.0, 80.0), (220.0, 150.0), (320.0, 220.0), (420.0, 290.0)];
pub const ORBIT_SPEEDS_DEG_PER_FRAME: [f32; 4] = [0.09, -0.07, 0.05, -0.04]; // alternating directions
pub const ORBIT_REVEAL_START: f32 = 0.0; // first ring shows as soon as the section enters
pub const ORBIT_IN_VIEW_AMOUNT: f32 = 0.01;

// Projects
pub const ACTIVE_THRESHOLD: f32 = 0.5; // share of a card that must be visible to become active
pub const HEADER_BUFFER_PX: f32 = 12.0; // gap kept between the sticky header and the first card
pub const SECTION_IN_VIEW_AMOUNT: f32 = 0.25;
pub const COUNTER_IN_VIEW_MARGIN_PX: f32 = 100.0;

// Counter spring
pub const SPRING_MASS: f32 = 0.8;
pub const SPRING_STIFFNESS: f32 = 100.0;
pub const SPRING_DAMPING: f32 = 15.0;
pub const SPRING_MAX_DT_SEC: f32 = 1.0 / 30.0; // larger frame gaps are split into steps of this size
pub const SPRING_REST_EPSILON: f32 = 1e-3;
