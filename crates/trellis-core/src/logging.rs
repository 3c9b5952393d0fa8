//! Logging facilities for Trellis.
//!
//! Trellis uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Structural mutations are logged at `trace`, recoverable user-input
//! errors at `warn`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=trellis::page=trace`.
pub mod targets {
    /// Signal emission.
    pub const SIGNAL: &str = "trellis_core::signal";
    /// Sequence editor operations.
    pub const EDITOR: &str = "trellis::editor";
    /// Page window remapping and re-clamping.
    pub const PAGE: &str = "trellis::page";
    /// Keyed editor operations.
    pub const KEYED: &str = "trellis::keyed";
}
