pub mod api;
pub mod card;
pub mod catalog;
pub mod session;
pub mod state;
pub mod surface;
pub mod view;
pub mod workflow;

pub use view::ExportReportsPage;
