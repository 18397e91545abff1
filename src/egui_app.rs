//! egui application shell: state, controller, and renderer.

/// Controller bridging portal calls to the UI state.
pub mod controller;
/// UI state shared between controller and renderer.
pub mod state;
/// egui renderer for the portal screens.
pub mod ui;
/// Read-only projections of API payloads for rendering.
pub mod view_model;
