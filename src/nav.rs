pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

/// Absolute document offset of an element whose bounding rect starts at
/// `rect_top` while the page is scrolled by `scroll_y`.
pub fn scroll_target_top(rect_top: f64, scroll_y: f64) -> f64 {
    rect_top + scroll_y
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
}

/// Two independent flags: the scroll threshold and the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub mobile_menu_open: bool,
}

impl NavState {
    pub fn with_scroll(self, scroll_y: f64) -> Self {
        Self {
            scrolled: is_scrolled(scroll_y),
            ..self
        }
    }

    pub fn with_menu_toggled(self) -> Self {
        Self {
            mobile_menu_open: !self.mobile_menu_open,
            ..self
        }
    }

    pub fn with_menu_closed(self) -> Self {
        Self {
            mobile_menu_open: false,
            ..self
        }
    }

    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Scrolled(scroll_y) => self.with_scroll(scroll_y),
            NavAction::ToggleMenu => self.with_menu_toggled(),
            NavAction::CloseMenu => self.with_menu_closed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(SCROLL_THRESHOLD_PX));
        assert!(is_scrolled(SCROLL_THRESHOLD_PX + 0.5));
    }

    #[test]
    fn scrolled_flag_ignores_direction() {
        let offsets = [0.0, 20.0, 80.0, 400.0, 51.0, 50.0, 10.0, 300.0, 0.0];
        let mut state = NavState::default();

        for offset in offsets {
            state = state.with_scroll(offset);
            assert_eq!(state.scrolled, offset > SCROLL_THRESHOLD_PX);
        }
    }

    #[test]
    fn scroll_does_not_touch_menu() {
        let state = NavState::default().with_menu_toggled().with_scroll(500.0);
        assert!(state.mobile_menu_open);
        assert!(state.scrolled);

        let state = state.with_scroll(0.0).with_menu_closed();
        assert_eq!(state, NavState::default());
    }

    #[test]
    fn menu_toggle_flips() {
        let open = NavState::default().with_menu_toggled();
        assert!(open.mobile_menu_open);
        assert!(!open.with_menu_toggled().mobile_menu_open);
    }

    #[test]
    fn actions_compose_in_order() {
        let state = [
            NavAction::ToggleMenu,
            NavAction::Scrolled(120.0),
            NavAction::CloseMenu,
            NavAction::ToggleMenu,
            NavAction::Scrolled(10.0),
        ]
        .into_iter()
        .fold(NavState::default(), NavState::apply);

        assert_eq!(
            state,
            NavState {
                scrolled: false,
                mobile_menu_open: true,
            }
        );
    }

    #[test]
    fn scroll_target_adds_current_offset() {
        assert_eq!(scroll_target_top(120.0, 300.0), 420.0);
        assert_eq!(scroll_target_top(-200.0, 900.0), 700.0);
    }
}
