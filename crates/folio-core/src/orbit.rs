//! Skills orbit: elliptical rings that counter-rotate every frame and are
//! revealed one by one as the section scrolls.
//!
//! Rotation and reveal are independent. Rotation starts the first time the
//! section is seen and then runs every frame until the orbit is stopped;
//! reveal is a pure function of scroll progress. State is per instance, so
//! several diagrams can coexist without sharing angles.

use crate::constants::{ORBIT_RADII, ORBIT_REVEAL_START, ORBIT_SPEEDS_DEG_PER_FRAME};
use crate::error::{ChoreoError, Result};
use glam::Vec2;
use smallvec::SmallVec;

/// Default badges as `(name, ring, base angle in degrees)`.
pub const DEFAULT_SKILLS: [(&str, usize, f32); 13] = [
    ("HTML", 0, 0.0),
    ("CSS", 0, 120.0),
    ("JavaScript", 0, 240.0),
    ("React", 1, 20.0),
    ("Tailwind", 1, 140.0),
    ("Bootstrap", 1, 260.0),
    ("Python", 2, 10.0),
    ("Flask", 2, 100.0),
    ("C", 2, 190.0),
    ("Git", 2, 280.0),
    ("MySQL", 3, 30.0),
    ("MongoDB", 3, 150.0),
    ("SQLite", 3, 270.0),
];

/// Number of rings shown at `progress`.
///
/// Rings split `[start_offset, 1]` into equal steps; ring `i` shows once
/// `progress >= start_offset + i * step`.
pub fn reveal_count(progress: f32, ring_count: usize, start_offset: f32) -> usize {
    if ring_count == 0 || !progress.is_finite() {
        return 0;
    }
    let progress = progress.clamp(0.0, 1.0);
    let start = start_offset.clamp(0.0, 1.0);
    let step = (1.0 - start) / ring_count as f32;
    (0..ring_count)
        .filter(|&i| progress >= start + i as f32 * step)
        .count()
        .min(ring_count)
}

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSpec {
    pub radius: Vec2,
    pub speed_deg_per_frame: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitConfig {
    pub rings: SmallVec<[RingSpec; 4]>,
    pub reveal_start: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        let rings = ORBIT_RADII
            .iter()
            .zip(ORBIT_SPEEDS_DEG_PER_FRAME.iter())
            .map(|(&(rx, ry), &speed)| RingSpec {
                radius: Vec2::new(rx, ry),
                speed_deg_per_frame: speed,
            })
            .collect();
        Self {
            rings,
            reveal_start: ORBIT_REVEAL_START,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitRing {
    pub radius: Vec2,
    pub speed_deg_per_frame: f32,
    pub angle_deg: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Skill {
    pub name: String,
    pub ring: usize,
    pub angle_deg: f32,
}

impl Skill {
    pub fn new(name: impl Into<String>, ring: usize, angle_deg: f32) -> Self {
        Self {
            name: name.into(),
            ring,
            angle_deg,
        }
    }

    pub fn defaults() -> Vec<Skill> {
        DEFAULT_SKILLS
            .iter()
            .map(|&(name, ring, angle)| Skill::new(name, ring, angle))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitPhase {
    /// Not yet seen; angles are frozen at their initial values.
    Idle,
    Running,
    /// Torn down; nothing moves any more.
    Stopped,
}

/// The center badge breathes until the first ring appears, then settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CenterBadge {
    Pulsing,
    Settled,
}

pub struct Orbit {
    rings: SmallVec<[OrbitRing; 4]>,
    skills: Vec<Skill>,
    reveal_start: f32,
    revealed: usize,
    phase: OrbitPhase,
}

impl Orbit {
    pub fn new(config: OrbitConfig, skills: Vec<Skill>) -> Result<Self> {
        let ring_count = config.rings.len();
        if let Some(bad) = skills.iter().find(|s| s.ring >= ring_count) {
            return Err(ChoreoError::MissingRing {
                name: bad.name.clone(),
                ring: bad.ring,
                ring_count,
            });
        }
        Ok(Self::build(&config, skills))
    }

    fn build(config: &OrbitConfig, skills: Vec<Skill>) -> Self {
        let rings = config
            .rings
            .iter()
            .map(|spec| OrbitRing {
                radius: spec.radius,
                speed_deg_per_frame: spec.speed_deg_per_frame,
                angle_deg: 0.0,
            })
            .collect();
        Self {
            rings,
            skills,
            reveal_start: config.reveal_start,
            revealed: 0,
            phase: OrbitPhase::Idle,
        }
    }

    pub fn phase(&self) -> OrbitPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == OrbitPhase::Running
    }

    /// Begin rotating. Only the first call from `Idle` has any effect.
    pub fn start(&mut self) -> bool {
        if self.phase != OrbitPhase::Idle {
            return false;
        }
        log::info!("[orbit] start (rings={})", self.rings.len());
        self.phase = OrbitPhase::Running;
        true
    }

    pub fn stop(&mut self) {
        if self.phase != OrbitPhase::Stopped {
            log::info!("[orbit] stop");
        }
        self.phase = OrbitPhase::Stopped;
    }

    /// Advance every ring by one frame. Returns whether anything moved.
    pub fn tick(&mut self) -> bool {
        if self.phase != OrbitPhase::Running {
            return false;
        }
        for ring in self.rings.iter_mut() {
            ring.angle_deg = wrap_degrees(ring.angle_deg + ring.speed_deg_per_frame);
        }
        true
    }

    /// Update the revealed ring count from scroll progress.
    pub fn set_progress(&mut self, progress: f32) -> usize {
        if self.phase == OrbitPhase::Stopped {
            log::debug!("[orbit] progress after stop ignored");
            return self.revealed;
        }
        self.revealed = reveal_count(progress, self.rings.len(), self.reveal_start);
        self.revealed
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn is_ring_revealed(&self, ring: usize) -> bool {
        ring < self.revealed
    }

    /// Target opacity of a ring: shown only once the section has been seen.
    pub fn ring_opacity(&self, ring: usize) -> f32 {
        if self.phase != OrbitPhase::Idle && self.is_ring_revealed(ring) {
            1.0
        } else {
            0.0
        }
    }

    pub fn rings(&self) -> &[OrbitRing] {
        &self.rings
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn ring_angle(&self, ring: usize) -> Option<f32> {
        self.rings.get(ring).map(|r| r.angle_deg)
    }

    /// Offset of a badge from the orbit center, in pixels.
    pub fn badge_position(&self, skill: &Skill) -> Vec2 {
        let Some(ring) = self.rings.get(skill.ring) else {
            return Vec2::ZERO;
        };
        let radians = (skill.angle_deg + ring.angle_deg).to_radians();
        Vec2::new(radians.cos() * ring.radius.x, radians.sin() * ring.radius.y)
    }

    /// Badges on revealed rings with their current positions.
    pub fn visible_badges(&self) -> impl Iterator<Item = (&Skill, Vec2)> + '_ {
        self.skills
            .iter()
            .filter(|s| self.is_ring_revealed(s.ring))
            .map(|s| (s, self.badge_position(s)))
    }

    pub fn center_badge(&self) -> CenterBadge {
        if self.revealed >= 1 {
            CenterBadge::Settled
        } else {
            CenterBadge::Pulsing
        }
    }
}

impl Default for Orbit {
    fn default() -> Self {
        Self::build(&OrbitConfig::default(), Skill::defaults())
    }
}
