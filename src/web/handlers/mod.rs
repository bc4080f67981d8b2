pub mod intake_handlers;
pub mod system_handlers;

pub use intake_handlers::*;
pub use system_handlers::*;
