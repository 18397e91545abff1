//! Screen routing with deadline-based delayed navigation.

use std::time::Instant;

/// Screens of the portal client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Landing screen with the feature cards.
    #[default]
    Home,
    /// Combined doctor/patient registration.
    Register,
    /// Doctor and patient login forms.
    Login,
    /// Doctor dashboard with the MRI analysis panel.
    DoctorDashboard,
    /// Patient dashboard with the scan history.
    PatientDashboard,
}

/// A navigation scheduled to happen once its deadline passes.
#[derive(Clone, Copy, Debug)]
pub struct PendingRedirect {
    /// Destination screen.
    pub target: Screen,
    /// When the switch should happen.
    pub at: Instant,
}

/// Current screen plus any pending delayed navigation.
#[derive(Debug, Default)]
pub struct RouteState {
    /// Screen currently rendered.
    pub current: Screen,
    /// Delayed navigation, typically following a success notification.
    pub pending: Option<PendingRedirect>,
}

impl RouteState {
    /// Schedule a screen change, replacing any pending one.
    pub fn schedule(&mut self, target: Screen, at: Instant) {
        self.pending = Some(PendingRedirect { target, at });
    }

    /// Take the pending target if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<Screen> {
        if self.pending.is_some_and(|pending| now >= pending.at) {
            return self.pending.take().map(|pending| pending.target);
        }
        None
    }
}
