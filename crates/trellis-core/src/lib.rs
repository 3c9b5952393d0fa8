//! Core systems for Trellis.
//!
//! This crate provides the foundational components of the Trellis
//! collection-editing layer:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Logging**: `tracing` target names for filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use trellis_core::Signal;
//!
//! // Create a signal that notifies when rows are removed
//! let rows_removed = Signal::<(usize, usize)>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = rows_removed.connect(|&(first, last)| {
//!     println!("rows {first}..={last} removed");
//! });
//!
//! // Emit the signal
//! rows_removed.emit((1, 1));
//!
//! // Disconnect when done
//! rows_removed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
