mod dialog;
mod fetch_status;
mod header;

pub use dialog::*;
pub use fetch_status::*;
pub use header::*;
