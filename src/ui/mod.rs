pub mod app;
pub mod dashboard;
mod floor;

pub use app::App;
