mod logging;

pub use logging::init_logging;

#[cfg(test)]
pub(crate) use logging::capture_logs;
