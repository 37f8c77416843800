//! Page-wide constants.

/// Privacy-enhanced embed host; the video id is appended verbatim.
pub const VIDEO_EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed";

/// Viewport width at which the navbar gets its desktop scroll/hover behavior.
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 1024px)";

/// Scroll offset (px) past which the navbar loses its transparency.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 80.0;

/// Fraction of a feature card that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Pulls the reveal trigger 50px above the bottom edge of the viewport.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
