//! Home screen animation clock and scroll target.

use std::time::Instant;

/// Sections of the home screen reachable from the header links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeSection {
    /// What the portal does.
    Overview,
    /// The feature card grid.
    Features,
    /// Links into registration and login.
    GetStarted,
}

/// Per-visit state of the home screen.
#[derive(Debug, Default)]
pub struct HomeScreenState {
    /// When this visit started; drives the staggered card entrance.
    pub entered_at: Option<Instant>,
    /// Section the next frame should scroll to.
    pub scroll_target: Option<HomeSection>,
}
