pub mod app;
pub mod components;
pub mod layout;
pub mod sample;

pub use app::App;
