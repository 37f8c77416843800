//! Interaction logic kept out of the DOM layer.
//!
//! Keeping these decisions in plain functions lets us unit-test them on the
//! host target; the components only wire events to what lives here.

use crate::config;

/// Embed URL for a video id, with autoplay on and related content suppressed.
/// The id is passed through verbatim; a malformed id just produces an embed
/// that fails to load in the player.
pub fn embed_url(video_id: &str) -> String {
    format!(
        "{}/{}?autoplay=1&rel=0&modestbranding=1",
        config::VIDEO_EMBED_BASE,
        video_id
    )
}

/// Single reducer behind the navbar's scroll, mouseenter and mouseleave
/// handlers. Every handler recomputes the scrolled flag from the live inputs,
/// so the last event to fire always leaves the navbar consistent with the
/// current scroll offset and pointer position.
pub fn navbar_scrolled(scroll_y: f64, hovering: bool, is_desktop: bool) -> bool {
    if !is_desktop || hovering {
        return false;
    }
    scroll_y > config::NAVBAR_SCROLL_THRESHOLD
}

/// The avatar dropdown's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Trigger clicked.
    pub fn toggled(self) -> MenuState {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Click landed outside both the trigger and the menu.
    pub fn closed_by_outside_click(self) -> MenuState {
        MenuState::Closed
    }

    /// Escape pressed. The second value is whether keyboard focus should be
    /// returned to the trigger, which only happens when the menu was open.
    pub fn closed_by_escape(self) -> (MenuState, bool) {
        match self {
            MenuState::Open => (MenuState::Closed, true),
            MenuState::Closed => (MenuState::Closed, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_carries_the_id_verbatim() {
        assert_eq!(
            embed_url("abc123"),
            "https://www.youtube-nocookie.com/embed/abc123?autoplay=1&rel=0&modestbranding=1"
        );
    }

    #[test]
    fn embed_url_does_not_validate_the_id() {
        // Garbage in, garbage out: the player is the one that fails.
        let url = embed_url("not a real id");
        assert!(url.contains("/embed/not a real id?"));
    }

    #[test]
    fn navbar_is_never_scrolled_below_the_breakpoint() {
        for hovering in [false, true] {
            assert!(!navbar_scrolled(0.0, hovering, false));
            assert!(!navbar_scrolled(500.0, hovering, false));
        }
    }

    #[test]
    fn navbar_scrolled_follows_the_threshold_on_desktop() {
        assert!(!navbar_scrolled(0.0, false, true));
        assert!(!navbar_scrolled(80.0, false, true));
        assert!(navbar_scrolled(80.1, false, true));
        assert!(navbar_scrolled(2000.0, false, true));
    }

    #[test]
    fn hover_always_wins_over_scroll_offset() {
        assert!(!navbar_scrolled(2000.0, true, true));
        // Pointer leaves with the page still scrolled: flag comes back.
        assert!(navbar_scrolled(2000.0, false, true));
    }

    #[test]
    fn menu_starts_closed_and_toggles() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        let menu = menu.toggled();
        assert!(menu.is_open());
        assert!(!menu.toggled().is_open());
    }

    #[test]
    fn outside_click_forces_closed_from_either_state() {
        assert_eq!(MenuState::Open.closed_by_outside_click(), MenuState::Closed);
        assert_eq!(MenuState::Closed.closed_by_outside_click(), MenuState::Closed);
    }

    #[test]
    fn escape_closes_and_restores_focus_only_while_open() {
        assert_eq!(MenuState::Open.closed_by_escape(), (MenuState::Closed, true));
        assert_eq!(MenuState::Closed.closed_by_escape(), (MenuState::Closed, false));
    }
}
