// Application layer - Screen coordinator and wiring

pub mod container;
pub mod permission_gate;
pub mod screen;

// Re-export the coordinator
pub use container::{AppContainer, DefaultAppContainer};
pub use permission_gate::PermissionGate;
pub use screen::{MountedScreen, ScreenSettings, TrimScreen};
