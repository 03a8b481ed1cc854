//! Application-wide constants.

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "kmlrestyle";
