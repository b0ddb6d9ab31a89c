// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The collector owns the circular buffer. Background tasks and UI
//! components log through a [`DiagnosticsHandle`], and the collector drains
//! the channel on each notification tick.

use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    AppStateEvent, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    DiagnosticReport, ErrorEvent, ReportMetadata, SerializableEvent, UserAction, WarningEvent,
};

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and safe to share across threads. Sends never block;
/// when the channel is full the event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction { action });
        let _ = self.event_tx.try_send(event);
    }

    pub fn log_state(&self, state: AppStateEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::AppState { state });
        let _ = self.event_tx.try_send(event);
    }

    /// Records a warning and echoes it to stderr.
    pub fn log_warning(&self, event: WarningEvent) {
        eprintln!("[WARN] {:?}: {}", event.warning_type, event.message);
        let _ = self
            .event_tx
            .try_send(DiagnosticEvent::new(DiagnosticEventKind::Warning { event }));
    }

    /// Records an error and echoes it to stderr.
    pub fn log_error(&self, event: ErrorEvent) {
        eprintln!("[ERROR] {:?}: {}", event.error_type, event.message);
        let _ = self
            .event_tx
            .try_send(DiagnosticEvent::new(DiagnosticEventKind::Error { event }));
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<DiagnosticEvent>,
    /// When collection started (monotonic clock for duration calculations).
    collection_started_at: Instant,
    /// When collection started (wall clock for report metadata).
    collection_started_at_utc: DateTime<Utc>,
}

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every event waiting in the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Logs an action directly to the buffer, bypassing the channel.
    pub fn log_action(&mut self, action: UserAction) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction { action });
        self.buffer.push(event);
    }

    /// Logs a state change directly to the buffer, bypassing the channel.
    pub fn log_state(&mut self, state: AppStateEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::AppState { state });
        self.buffer.push(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Exports all collected events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;

        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();

        let metadata = ReportMetadata::new(
            self.collection_started_at_utc,
            collection_duration_ms,
            events.len(),
        );

        DiagnosticReport::new(metadata, events)
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("events", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorType, WarningType};

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let handle = collector.handle();

        handle.log_action(UserAction::SwipeDelete);
        handle.log_state(AppStateEvent::DeletionRequested);
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn handle_is_usable_from_other_threads() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let handle = collector.handle();

        std::thread::spawn(move || {
            handle.log_error(ErrorEvent::new(ErrorType::DeleteError, "read-only"));
        })
        .join()
        .expect("thread should finish");

        collector.process_pending();
        assert!(matches!(
            collector.iter().next().map(|event| &event.kind),
            Some(DiagnosticEventKind::Error { .. })
        ));
    }

    #[test]
    fn full_channel_drops_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let handle = collector.handle();

        for _ in 0..DEFAULT_CHANNEL_CAPACITY + 5 {
            handle.log_action(UserAction::SwipeSkip);
        }

        collector.process_pending();
        assert_eq!(collector.len(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn buffer_keeps_only_most_recent_events() {
        let capacity = BufferCapacity::new(0);
        let mut collector = DiagnosticsCollector::new(capacity);
        let capacity = capacity.value();

        for count in 0..capacity + 5 {
            collector.log_state(AppStateEvent::PhotosFetched { count });
        }

        assert_eq!(collector.len(), capacity);
        let first = collector.iter().next().map(|event| event.kind.clone());
        assert_eq!(
            first,
            Some(DiagnosticEventKind::AppState {
                state: AppStateEvent::PhotosFetched { count: 5 }
            })
        );
    }

    #[test]
    fn export_json_includes_metadata_and_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        collector.log_action(UserAction::SwipeCancel);
        collector.handle().log_warning(WarningEvent::new(
            WarningType::ConfigurationIssue,
            "notification-config-load-error",
        ));
        collector.process_pending();

        let json = collector.export_json().expect("export should succeed");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(parsed["metadata"]["event_count"], 2);
        assert_eq!(parsed["events"][0]["type"], "user_action");
        assert_eq!(parsed["events"][0]["action"]["action"], "swipe_cancel");
        assert_eq!(parsed["events"][1]["type"], "warning");
    }
}
