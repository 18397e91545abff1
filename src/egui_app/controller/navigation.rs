//! Delayed navigation following success notifications.

use std::time::{Duration, Instant};

use crate::egui_app::state::Screen;

use super::PortalController;

/// Delay between a success notification and its screen change.
pub(crate) const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

impl PortalController {
    /// Schedule a screen change [`REDIRECT_DELAY`] from now.
    pub(super) fn schedule_redirect(&mut self, target: Screen) {
        self.ui
            .route
            .schedule(target, Instant::now() + REDIRECT_DELAY);
    }
}
