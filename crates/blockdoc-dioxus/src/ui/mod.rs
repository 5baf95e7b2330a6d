pub mod app;
pub mod components;
pub mod tracking;

pub use app::App;
