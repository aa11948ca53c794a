pub mod lenient;
pub mod state;

pub use lenient::{lenient_section, lenient_string};
pub use state::{AppState, SharedDashboard};
