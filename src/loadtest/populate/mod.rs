//! Populate command handler.

mod logging;
mod run;

pub use logging::mask_connection_password;
pub use run::{run_populate, write_summary};
