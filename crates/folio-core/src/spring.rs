use crate::constants::{
    SPRING_DAMPING, SPRING_MASS, SPRING_MAX_DT_SEC, SPRING_REST_EPSILON, SPRING_STIFFNESS,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub mass: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            mass: SPRING_MASS,
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
        }
    }
}

/// Damped spring chasing a target value, stepped once per animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub params: SpringParams,
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
}

impl Spring {
    pub fn new(params: SpringParams, initial: f32) -> Self {
        Self {
            params,
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.position - self.target).abs() < SPRING_REST_EPSILON
            && self.velocity.abs() < SPRING_REST_EPSILON
    }

    /// Advance by `dt_sec`, split into substeps no longer than `SPRING_MAX_DT_SEC`.
    pub fn step(&mut self, dt_sec: f32) {
        if dt_sec <= 0.0 || !dt_sec.is_finite() {
            return;
        }
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            return;
        }
        let mass = self.params.mass.max(1e-3);
        let mut remaining = dt_sec;
        while remaining > 0.0 {
            let h = remaining.min(SPRING_MAX_DT_SEC);
            remaining -= h;
            // semi-implicit Euler
            let force = -self.params.stiffness * (self.position - self.target)
                - self.params.damping * self.velocity;
            self.velocity += force / mass * h;
            self.position += self.velocity * h;
        }
    }
}

/// The big project number: springs toward `active + 1` once it has been seen.
#[derive(Clone, Copy, Debug)]
pub struct ProjectCounter {
    spring: Spring,
    target: f32,
    in_view: bool,
}

impl ProjectCounter {
    pub fn new(params: SpringParams) -> Self {
        Self {
            spring: Spring::new(params, 0.0),
            target: 0.0,
            in_view: false,
        }
    }

    /// Set the number to count to (1-based project number).
    pub fn set_target(&mut self, number: u32) {
        self.target = number as f32;
        if self.in_view {
            self.spring.set_target(self.target);
        }
    }

    /// Mark the counter as seen; only the first call matters.
    pub fn enter_view(&mut self) -> bool {
        if self.in_view {
            return false;
        }
        self.in_view = true;
        self.spring.set_target(self.target);
        true
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    pub fn step(&mut self, dt_sec: f32) {
        self.spring.step(dt_sec);
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_at_rest()
    }

    pub fn value(&self) -> f32 {
        self.spring.position
    }

    /// Rounded number to display.
    pub fn display(&self) -> i32 {
        self.spring.position.round() as i32
    }
}

impl Default for ProjectCounter {
    fn default() -> Self {
        Self::new(SpringParams::default())
    }
}
