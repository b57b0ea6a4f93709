//! Timing and motion arithmetic shared by the animated components.
//!
//! Nothing here touches the DOM: entrance staggering, the damped springs that
//! drive the pointer follower, and the follower's per-state targets are all
//! plain functions so the browser glue stays thin.

/// Delay between consecutive children in most section reveals.
pub const STAGGER_STEP_MS: u32 = 100;
/// Slower stagger used by the about section.
pub const ABOUT_STAGGER_STEP_MS: u32 = 200;
/// Largest frame delta fed into the spring integrator.
const MAX_FRAME_SECONDS: f64 = 1.0 / 20.0;
/// Fixed integration substep; keeps stiff springs stable.
const SUBSTEP_SECONDS: f64 = 1.0 / 240.0;
const REST_DISTANCE: f64 = 0.01;
const REST_VELOCITY: f64 = 0.01;

/// Fixed staggering for a group of children that animate in together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub base_ms: u32,
    pub step_ms: u32,
}

impl Stagger {
    pub const fn new(base_ms: u32, step_ms: u32) -> Self {
        Self { base_ms, step_ms }
    }

    pub fn delay_ms(self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_ms
            .saturating_add(self.step_ms.saturating_mul(index))
    }

    /// Delay for a reveal driven by a class change.
    pub fn style(self, index: usize) -> String {
        format!("transition-delay: {}ms;", self.delay_ms(index))
    }

    /// Delay for a keyframe animation that runs on mount.
    pub fn animation_style(self, index: usize) -> String {
        format!("animation-delay: {}ms;", self.delay_ms(index))
    }
}

impl Default for Stagger {
    fn default() -> Self {
        Self::new(0, STAGGER_STEP_MS)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub damping: f64,
    pub stiffness: f64,
    pub mass: f64,
}

/// One animated scalar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringValue {
    pub value: f64,
    pub velocity: f64,
}

impl SpringValue {
    pub fn at(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
        }
    }

    pub fn is_settled(&self, target: f64) -> bool {
        (self.value - target).abs() < REST_DISTANCE && self.velocity.abs() < REST_VELOCITY
    }

    /// Advances toward `target` by `dt` seconds.
    pub fn step(&mut self, config: SpringConfig, target: f64, dt: f64) {
        if self.is_settled(target) {
            self.value = target;
            self.velocity = 0.0;
            return;
        }

        let mut remaining = dt.clamp(0.0, MAX_FRAME_SECONDS);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_SECONDS);
            let spring_force = -config.stiffness * (self.value - target);
            let damping_force = -config.damping * self.velocity;
            let acceleration = (spring_force + damping_force) / config.mass;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
    }
}

/// Where a follower ring wants to be for the current pointer state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingTarget {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

/// Spring-driven position and scale of one ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingMotion {
    pub x: SpringValue,
    pub y: SpringValue,
    pub scale: SpringValue,
}

impl RingMotion {
    pub fn at(target: RingTarget) -> Self {
        Self {
            x: SpringValue::at(target.x),
            y: SpringValue::at(target.y),
            scale: SpringValue::at(target.scale),
        }
    }

    pub fn step(&mut self, config: SpringConfig, target: RingTarget, dt: f64) {
        self.x.step(config, target.x, dt);
        self.y.step(config, target.y, dt);
        self.scale.step(config, target.scale, dt);
    }

    pub fn is_settled(&self, target: RingTarget) -> bool {
        self.x.is_settled(target.x)
            && self.y.is_settled(target.y)
            && self.scale.is_settled(target.scale)
    }

    pub fn transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) scale({:.3})",
            self.x.value, self.y.value, self.scale.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STIFF: SpringConfig = SpringConfig {
        damping: 20.0,
        stiffness: 400.0,
        mass: 0.2,
    };

    fn run(spring: &mut SpringValue, target: f64, frames: usize) {
        for _ in 0..frames {
            spring.step(STIFF, target, 1.0 / 60.0);
        }
    }

    #[test]
    fn stagger_is_linear_in_index() {
        let stagger = Stagger::new(200, 100);
        let delays: Vec<u32> = (0..4).map(|index| stagger.delay_ms(index)).collect();
        assert_eq!(delays, vec![200, 300, 400, 500]);
        assert_eq!(stagger.style(2), "transition-delay: 400ms;");
        assert_eq!(stagger.animation_style(0), "animation-delay: 200ms;");
    }

    #[test]
    fn stagger_saturates_instead_of_overflowing() {
        let stagger = Stagger::new(u32::MAX - 1, 10);
        assert_eq!(stagger.delay_ms(5), u32::MAX);
    }

    #[test]
    fn spring_converges_to_target() {
        let mut spring = SpringValue::at(0.0);
        run(&mut spring, 300.0, 120);
        assert!(spring.is_settled(300.0), "ended at {spring:?}");
    }

    #[test]
    fn huge_frame_gap_does_not_explode() {
        let mut spring = SpringValue::at(0.0);
        spring.step(STIFF, 1_000.0, 5.0);
        assert!(spring.value.is_finite());
        assert!(spring.value.abs() < 2_000.0);
    }

    #[test]
    fn settled_spring_snaps_and_stops() {
        let mut spring = SpringValue {
            value: 9.995,
            velocity: 0.0,
        };
        spring.step(STIFF, 10.0, 1.0 / 60.0);
        assert_eq!(spring, SpringValue::at(10.0));
    }

    #[test]
    fn ring_transform_uses_all_axes() {
        let ring = RingMotion::at(RingTarget {
            x: 12.0,
            y: -4.5,
            scale: 1.5,
        });
        assert_eq!(ring.transform(), "translate3d(12.00px, -4.50px, 0) scale(1.500)");
    }
}
