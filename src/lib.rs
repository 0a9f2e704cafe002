pub mod config;
pub mod dispatcher;
pub mod input;
pub mod prober;
pub mod report;
pub mod util;

pub use config::ProbeOptions;
pub use dispatcher::run_probe;
pub use prober::{ErrorClass, ProbeResult};
