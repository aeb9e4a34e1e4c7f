//! Damped-follower math and shared animation timing.
//!
//! Everything here is pure so the convergence and overshoot behavior of the
//! cursor followers can be checked without a browser.

use std::ops::{Add, AddAssign, Mul, Sub};

/// Longest frame gap the integrator will honor. Anything beyond this (a
/// backgrounded tab, a debugger pause) is treated as a single slow frame
/// instead of a catch-up burst.
pub const MAX_FRAME_DT: f64 = 0.1;

/// Inner integration substep. Keeps semi-implicit Euler stable for the
/// stiffest shipped preset.
const MAX_SUBSTEP: f64 = 1.0 / 240.0;

/// The ease-out curve every transition on the page shares.
pub const EASE_OUT: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SpringConfig {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
}

/// Inner trailing ring: tight follow, barely underdamped.
pub const TRAIL_SPRING: SpringConfig = SpringConfig {
    mass: 0.5,
    stiffness: 400.0,
    damping: 25.0,
};

/// Outer ring: softer follow with visible lag.
pub const RING_SPRING: SpringConfig = SpringConfig {
    mass: 0.8,
    stiffness: 200.0,
    damping: 20.0,
};

/// A 2-D point approaching a moving target with second-order damped motion.
#[derive(Clone, Copy, Debug)]
pub struct Spring2 {
    pub position: Vec2,
    pub velocity: Vec2,
    config: SpringConfig,
}

impl Spring2 {
    pub fn new(config: SpringConfig, position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            config,
        }
    }

    /// Advance toward `target` by `dt` seconds. Safe for any `dt >= 0`:
    /// the step is clamped and subdivided, so event bursts and dropped
    /// frames both keep easing toward the last known target.
    pub fn step(&mut self, target: Vec2, dt: f64) {
        let mut remaining = dt.clamp(0.0, MAX_FRAME_DT);
        let inv_mass = 1.0 / self.config.mass;

        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let accel = (target - self.position) * (self.config.stiffness * inv_mass)
                + self.velocity * (-self.config.damping * inv_mass);
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
    }

    /// Drop the follower directly on `target`, killing residual velocity.
    pub fn snap_to(&mut self, target: Vec2) {
        self.position = target;
        self.velocity = Vec2::ZERO;
    }
}

/// Entrance choreography: child `i` of a revealed section starts its
/// transition after `delay_ms + i * step_ms`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Stagger {
    pub delay_ms: u32,
    pub step_ms: u32,
}

/// Hero content plays later and slower than scrolled-to sections.
pub const HERO_STAGGER: Stagger = Stagger {
    delay_ms: 300,
    step_ms: 150,
};

pub const SECTION_STAGGER: Stagger = Stagger {
    delay_ms: 100,
    step_ms: 150,
};

impl Stagger {
    pub fn delay_for(self, index: u32) -> u32 {
        self.delay_ms + index * self.step_ms
    }

    /// Inline style fragment for the `index`-th child of a reveal group.
    pub fn style_for(self, index: u32) -> String {
        format!("transition-delay: {}ms;", self.delay_for(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(config: SpringConfig, from: Vec2, target: Vec2, seconds: f64) -> Spring2 {
        let mut spring = Spring2::new(config, from);
        let frames = (seconds * 60.0) as usize;
        for _ in 0..frames {
            spring.step(target, 1.0 / 60.0);
        }
        spring
    }

    #[test]
    fn follower_converges_to_held_target() {
        for config in [TRAIL_SPRING, RING_SPRING] {
            let target = Vec2::new(640.0, 360.0);
            let spring = settle(config, Vec2::ZERO, target, 3.0);
            assert!(
                spring.position.distance(target) < 0.5,
                "follower stuck at {:?}",
                spring.position
            );
        }
    }

    #[test]
    fn overshoot_stays_within_damping_bound() {
        // Both presets are underdamped but close to critical; the first
        // crossing past the target must stay a small fraction of the step.
        for config in [TRAIL_SPRING, RING_SPRING] {
            let target = Vec2::new(100.0, 0.0);
            let mut spring = Spring2::new(config, Vec2::ZERO);
            let mut max_x: f64 = 0.0;
            for _ in 0..600 {
                spring.step(target, 1.0 / 60.0);
                max_x = max_x.max(spring.position.x);
            }
            assert!(max_x < 105.0, "overshoot {max_x} exceeds 5% of travel");
        }
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut spring = Spring2::new(TRAIL_SPRING, Vec2::new(10.0, 10.0));
        spring.step(Vec2::new(500.0, 500.0), 0.0);
        assert_eq!(spring.position, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn pathological_frame_gap_does_not_diverge() {
        let target = Vec2::new(300.0, 200.0);
        let mut spring = Spring2::new(RING_SPRING, Vec2::ZERO);
        spring.step(target, 45.0);
        assert!(spring.position.x.is_finite() && spring.position.y.is_finite());
        assert!(spring.position.distance(target) <= Vec2::ZERO.distance(target));
    }

    #[test]
    fn bursty_small_steps_match_one_frame_closely() {
        // Events arriving faster than frames must not change where the
        // follower ends up, only how often it is stepped.
        let target = Vec2::new(50.0, -20.0);
        let mut coarse = Spring2::new(TRAIL_SPRING, Vec2::ZERO);
        let mut fine = Spring2::new(TRAIL_SPRING, Vec2::ZERO);
        coarse.step(target, 1.0 / 60.0);
        for _ in 0..8 {
            fine.step(target, 1.0 / 480.0);
        }
        assert!(coarse.position.distance(fine.position) < 2.0);
    }

    #[test]
    fn stagger_delays_are_sequential() {
        assert_eq!(HERO_STAGGER.delay_for(0), 300);
        assert_eq!(HERO_STAGGER.delay_for(3), 750);
        assert_eq!(SECTION_STAGGER.style_for(2), "transition-delay: 400ms;");
    }
}
