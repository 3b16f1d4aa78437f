//! Shared egui UI modules.

/// Controller bridging store state to background jobs and the renderer.
pub mod controller;
/// Background job channel and worker-thread spawns.
pub mod jobs;
/// Store state and its pure mutations.
pub mod state;
/// egui renderer for the application UI.
pub mod ui;
/// Helpers converting store data into render-friendly rows.
pub mod view_model;
