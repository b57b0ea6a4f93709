pub const ABOUT_THRESHOLD: f64 = 0.2;
pub const SKILLS_THRESHOLD: f64 = 0.1;
pub const SKILL_BAR_THRESHOLD: f64 = 0.2;
pub const PROJECTS_THRESHOLD: f64 = 0.1;
pub const CONTACT_THRESHOLD: f64 = 0.1;

/// Decides visibility from one intersection report.
pub fn is_in_view(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

/// Class list suffix for a revealable element.
pub fn reveal_state(visible: bool) -> Option<&'static str> {
    visible.then_some("is-visible")
}

/// Tracks how many times a region has entered the viewport. Holds no memory
/// that would stop a later entrance from replaying.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealTracker {
    pub visible: bool,
    pub entrances: u32,
}

impl RevealTracker {
    /// Records a new signal; returns true when an entrance starts.
    pub fn observe(&mut self, visible: bool) -> bool {
        let entered = visible && !self.visible;
        if entered {
            self.entrances = self.entrances.saturating_add(1);
        }
        self.visible = visible;
        entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_both_intersection_and_ratio() {
        assert!(is_in_view(true, 0.25, ABOUT_THRESHOLD));
        assert!(is_in_view(true, 0.1, SKILLS_THRESHOLD));
        assert!(!is_in_view(true, 0.05, SKILLS_THRESHOLD));
        assert!(!is_in_view(false, 1.0, SKILLS_THRESHOLD));
    }

    #[test]
    fn entrance_replays_on_every_return() {
        let mut tracker = RevealTracker::default();
        let started: Vec<bool> = [false, true, false, true]
            .into_iter()
            .map(|visible| tracker.observe(visible))
            .collect();

        assert_eq!(started, vec![false, true, false, true]);
        assert_eq!(tracker.entrances, 2);
    }

    #[test]
    fn repeated_visible_signal_is_one_entrance() {
        let mut tracker = RevealTracker::default();
        tracker.observe(true);
        assert!(!tracker.observe(true));
        assert_eq!(tracker.entrances, 1);
    }

    #[test]
    fn reveal_class_follows_signal() {
        assert_eq!(reveal_state(true), Some("is-visible"));
        assert_eq!(reveal_state(false), None);
    }
}
