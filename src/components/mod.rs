//! The components module contains all shared components for our app.

mod app;
mod icons;
mod media_manager;
mod player;
mod search;
mod sidebar;
pub mod views;

pub use app::*;
pub use icons::*;
pub use media_manager::*;
pub use player::*;
pub use search::*;
pub use sidebar::*;
