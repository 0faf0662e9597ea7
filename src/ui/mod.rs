pub mod app;
pub mod buttons;
pub mod chat;
pub mod widgets;

pub use app::{BackgroundUpdate, BrofessorApp};
