use crate::motion::{RingTarget, SpringConfig};

/// Selector for elements that put the follower into its hover pose.
pub const INTERACTIVE_SELECTOR: &str = "a, button, .cursor-pointer";

pub const OUTLINE_SIZE_PX: f64 = 32.0;
pub const DOT_SIZE_PX: f64 = 8.0;

pub const OUTLINE_SPRING: SpringConfig = SpringConfig {
    damping: 30.0,
    stiffness: 300.0,
    mass: 0.5,
};

pub const DOT_SPRING: SpringConfig = SpringConfig {
    damping: 20.0,
    stiffness: 400.0,
    mass: 0.2,
};

/// Latest pointer facts reported by document events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub hidden: bool,
    pub pressed: bool,
    pub hovering: bool,
}

impl PointerState {
    pub fn outline_target(&self) -> RingTarget {
        let scale = if self.pressed {
            0.8
        } else if self.hovering {
            1.5
        } else {
            1.0
        };

        RingTarget {
            x: self.x - OUTLINE_SIZE_PX / 2.0,
            y: self.y - OUTLINE_SIZE_PX / 2.0,
            scale,
        }
    }

    pub fn dot_target(&self) -> RingTarget {
        let scale = if self.pressed {
            1.2
        } else if self.hovering {
            0.5
        } else {
            1.0
        };

        RingTarget {
            x: self.x - DOT_SIZE_PX / 2.0,
            y: self.y - DOT_SIZE_PX / 2.0,
            scale,
        }
    }

    pub fn opacity(&self) -> f64 {
        if self.hidden {
            0.0
        } else {
            1.0
        }
    }

    pub fn outline_border(&self) -> &'static str {
        if self.hovering {
            "rgba(255, 255, 255, 0.5)"
        } else {
            "rgba(255, 255, 255, 0.2)"
        }
    }

    pub fn dot_fill(&self) -> &'static str {
        if self.hovering {
            "rgba(255, 255, 255, 1)"
        } else {
            "rgba(255, 255, 255, 0.7)"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointer(pressed: bool, hovering: bool) -> PointerState {
        PointerState {
            x: 100.0,
            y: 60.0,
            hidden: false,
            pressed,
            hovering,
        }
    }

    #[test]
    fn rings_center_on_the_pointer() {
        let state = pointer(false, false);
        let outline = state.outline_target();
        let dot = state.dot_target();

        assert_eq!((outline.x, outline.y), (84.0, 44.0));
        assert_eq!((dot.x, dot.y), (96.0, 56.0));
        assert_eq!(outline.scale, 1.0);
        assert_eq!(dot.scale, 1.0);
    }

    #[test]
    fn press_scales_rings_in_opposite_directions() {
        let state = pointer(true, false);
        assert!(state.outline_target().scale < 1.0);
        assert!(state.dot_target().scale > 1.0);
    }

    #[test]
    fn press_wins_over_hover() {
        let state = pointer(true, true);
        assert_eq!(state.outline_target().scale, 0.8);
        assert_eq!(state.dot_target().scale, 1.2);
    }

    #[test]
    fn hover_grows_outline_and_shrinks_dot() {
        let state = pointer(false, true);
        assert_eq!(state.outline_target().scale, 1.5);
        assert_eq!(state.dot_target().scale, 0.5);
        assert_eq!(state.outline_border(), "rgba(255, 255, 255, 0.5)");
        assert_eq!(state.dot_fill(), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn leaving_the_window_fades_out() {
        let mut state = pointer(false, false);
        assert_eq!(state.opacity(), 1.0);
        state.hidden = true;
        assert_eq!(state.opacity(), 0.0);
    }
}
