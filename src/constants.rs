// DOM contract and presentation tuning for the web front-end.
//
// Sections are found by id; repeated items by selector. Missing elements are
// skipped with a warning so partial pages still animate what they have.

// Hero
pub const HERO_SECTION_ID: &str = "home";
pub const HERO_FADE_SELECTOR: &str = "#home .hero-fade";

// About timeline
pub const ABOUT_SECTION_ID: &str = "about";
pub const TIMELINE_CARD_SELECTOR: &str = "#about .timeline-card";
pub const TIMELINE_GLOW_SELECTOR: &str = ".timeline-glow"; // relative to a card
pub const TIMELINE_PROGRESS_ID: &str = "about-progress";
pub const ALIGN_TOP_CLASS: &str = "align-top";
pub const ALIGN_BOTTOM_CLASS: &str = "align-bottom";

// Skills orbit
pub const SKILLS_SECTION_ID: &str = "skills";
pub const ORBIT_RING_SELECTOR: &str = "#skills [data-ring]";
pub const ORBIT_SKILL_SELECTOR: &str = "#skills [data-skill]";
pub const ORBIT_CENTER_ID: &str = "skills-center";
pub const RING_ATTR: &str = "data-ring";
pub const SKILL_ATTR: &str = "data-skill";
pub const PULSING_CLASS: &str = "pulsing";
pub const SETTLED_CLASS: &str = "settled";

// Projects
pub const PROJECTS_SECTION_ID: &str = "projects";
pub const PROJECT_CARD_SELECTOR: &str = "#projects .project-card";
pub const PROJECTS_HEADER_ID: &str = "projects-header";
pub const PROJECTS_LIST_ID: &str = "projects-list";
pub const PROJECT_COUNTER_ID: &str = "project-counter";
pub const PROJECT_COUNTER_TITLE_ID: &str = "project-counter-title";
pub const PROJECT_TITLE_ATTR: &str = "data-title";
pub const STICKY_CLASS: &str = "sticky-header";

// CSS opacity transitions (milliseconds)
pub const RING_FADE_MS: u32 = 600;
pub const BADGE_FADE_MS: u32 = 250;
pub const CARD_FADE_MS: u32 = 800;
