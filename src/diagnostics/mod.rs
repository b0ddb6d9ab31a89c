// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording what happened during a session.
//!
//! Events (gestures, permission decisions, library failures) are captured
//! in a memory-bounded circular buffer and can be dumped as a JSON report
//! when something needs investigating.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A timestamped [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`]: Owns the buffer, drained once per UI tick
//! - [`DiagnosticsHandle`]: Cheap, cloneable sender for background tasks
//!
//! # Privacy
//!
//! Events never carry photo paths. Library failures are recorded by
//! category and error text only.

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{buffer_capacity_bounds, BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    AppStateEvent, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction,
    WarningEvent, WarningType,
};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent};
