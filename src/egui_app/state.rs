//! UI state shared between the controller and the renderer.

mod dashboard;
mod forms;
mod home;
mod notice;
mod route;

pub use dashboard::{DoctorDashboardState, PatientDashboardState, UploadFormState};
pub use forms::{LoginScreenState, RegisterScreenState};
pub use home::{HomeScreenState, HomeSection};
pub use notice::{NOTICE_TTL, Notice, NoticeState, Severity};
pub use route::{PendingRedirect, RouteState, Screen};

/// Aggregate state for every screen plus the shared notice slot.
#[derive(Debug, Default)]
pub struct UiState {
    /// Current screen and any pending delayed navigation.
    pub route: RouteState,
    /// The single transient notification slot.
    pub notice: NoticeState,
    /// Home screen animation and scroll state.
    pub home: HomeScreenState,
    /// Registration screen inputs.
    pub register: RegisterScreenState,
    /// Login screen inputs.
    pub login: LoginScreenState,
    /// Doctor dashboard data, upload form, and analysis panel.
    pub doctor_dashboard: DoctorDashboardState,
    /// Patient dashboard data.
    pub patient_dashboard: PatientDashboardState,
}
