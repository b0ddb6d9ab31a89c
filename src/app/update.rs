// SPDX-License-Identifier: MPL-2.0
//! Message handlers and effect execution.
//!
//! Every handler follows the same shape: feed the event to the controller,
//! turn the returned [`Effect`] into a task, then bring the card (motion and
//! renderer) in line with the controller's new state.

use super::{App, Message};
use crate::application::{Deferred, Effect};
use crate::diagnostics::{
    AppStateEvent, ErrorEvent, ErrorType, UserAction, WarningEvent, WarningType,
};
use crate::domain::{Authorization, PhotoHandle, SwipeDecision};
use crate::error::LibraryError;
use crate::ui::notifications::Notification;
use crate::ui::swipe::{self, CardBitmaps};
use iced::{event, keyboard, mouse, Task};
use std::sync::Arc;
use std::time::Duration;

/// Release distance simulated by the keyboard shortcuts.
pub(super) const KEYBOARD_SWIPE_DELTA: f32 = 150.0;

/// Hands `action` back once `after` has elapsed.
pub(super) async fn deferral(action: Deferred, after: Duration) -> Deferred {
    tokio::time::sleep(after).await;
    action
}

impl App {
    pub(super) fn handle_swipe_message(&mut self, message: swipe::Message) -> Task<Message> {
        match message {
            swipe::Message::CardPressed => {
                if self.controller.accepts_gestures() {
                    self.drag.start();
                }
                Task::none()
            }
            swipe::Message::DismissAlert => {
                self.diagnostics.log_action(UserAction::DismissAlert);
                self.controller.dismiss_alert();
                Task::none()
            }
            swipe::Message::RetryLoad => {
                self.diagnostics.log_action(UserAction::RetryLoad);
                let status = self.library.authorization_status();
                let effect = self.controller.load_photos(status);
                self.after_controller(effect)
            }
        }
    }

    pub(super) fn handle_raw_event(&mut self, event: event::Event) -> Task<Message> {
        match event {
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if let Some(delta_x) = self.drag.track(position) {
                    self.controller.on_gesture_changed(delta_x);
                    self.motion.retarget(self.controller.gesture(), self.now);
                }
                Task::none()
            }
            event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                match self.drag.finish() {
                    Some(delta_x) => self.end_gesture(delta_x),
                    None => Task::none(),
                }
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                self.handle_key(&key)
            }
            _ => Task::none(),
        }
    }

    /// Keyboard equivalents of a released drag.
    pub(super) fn handle_key(&mut self, key: &keyboard::Key) -> Task<Message> {
        use keyboard::key::Named;

        if self.drag.is_dragging() {
            return Task::none();
        }

        match key {
            keyboard::Key::Named(Named::ArrowRight | Named::Delete) => {
                self.end_gesture(KEYBOARD_SWIPE_DELTA)
            }
            keyboard::Key::Named(Named::ArrowLeft | Named::Space) => {
                self.end_gesture(-KEYBOARD_SWIPE_DELTA)
            }
            keyboard::Key::Named(Named::F12) => {
                self.dump_diagnostics();
                Task::none()
            }
            _ => Task::none(),
        }
    }

    fn end_gesture(&mut self, delta_x: f32) -> Task<Message> {
        if !self.controller.accepts_gestures() {
            return Task::none();
        }

        self.diagnostics.log_action(match SwipeDecision::classify(delta_x) {
            SwipeDecision::Delete => UserAction::SwipeDelete,
            SwipeDecision::Skip => UserAction::SwipeSkip,
            SwipeDecision::Cancel => UserAction::SwipeCancel,
        });

        let effect = self.controller.on_gesture_ended(delta_x);
        self.after_controller(effect)
    }

    pub(super) fn handle_authorization(&mut self, status: Authorization) -> Task<Message> {
        self.diagnostics
            .log_state(AppStateEvent::AuthorizationDecided { status });
        let effect = self.controller.authorization_resolved(status);
        if !status.is_granted() {
            self.record_denial();
        }
        self.after_controller(effect)
    }

    pub(super) fn handle_photos_fetched(
        &mut self,
        result: Result<Vec<PhotoHandle>, LibraryError>,
    ) -> Task<Message> {
        let outcome = result.as_ref().map(Vec::len).map_err(LibraryError::clone);
        if !self.controller.photos_fetched(result) {
            return Task::none();
        }

        match outcome {
            Ok(count) => {
                self.diagnostics
                    .log_state(AppStateEvent::PhotosFetched { count });
                self.notifications.clear_library_errors();
            }
            Err(LibraryError::PermissionDenied) => self.record_denial(),
            Err(error) => {
                self.notifications.push(
                    Notification::error(error.i18n_key())
                        .with_error_type(ErrorType::for_library_error(&error, ErrorType::FetchError)),
                );
            }
        }

        self.after_controller(Effect::None)
    }

    pub(super) fn handle_image_resolved(
        &mut self,
        generation: u64,
        result: Result<CardBitmaps, LibraryError>,
    ) {
        let failure = result.as_ref().err().cloned();
        if !self.renderer.complete(generation, result) {
            return;
        }

        if let Some(error) = failure {
            self.diagnostics.handle().log_error(ErrorEvent::new(
                ErrorType::for_library_error(&error, ErrorType::Other),
                error.i18n_key(),
            ));
        }
    }

    pub(super) fn handle_deletion_completed(
        &mut self,
        handle: PhotoHandle,
        result: Result<(), LibraryError>,
    ) -> Task<Message> {
        if let Err(error) = &result {
            // Deletion failures stay out of the UI.
            self.diagnostics.handle().log_error(ErrorEvent::new(
                ErrorType::for_library_error(error, ErrorType::DeleteError),
                error.i18n_key(),
            ));
        }

        let succeeded = result.is_ok();
        self.controller.deletion_completed(&handle, result);
        if succeeded {
            self.diagnostics.log_state(AppStateEvent::DeletionSucceeded {
                remaining: self.controller.photos().len(),
            });
        }
        self.after_controller(Effect::None)
    }

    fn record_denial(&self) {
        self.diagnostics.handle().log_warning(WarningEvent::new(
            WarningType::PermissionDenied,
            "error-library-permission-denied",
        ));
    }

    fn dump_diagnostics(&mut self) {
        self.diagnostics.process_pending();
        match self.diagnostics.export_json() {
            Ok(json) => eprintln!("{json}"),
            Err(err) => eprintln!("[ERROR] diagnostics export failed: {err}"),
        }
    }

    // =========================================================================
    // Effects
    // =========================================================================

    /// Runs `effect` and syncs the card with the controller.
    pub(super) fn after_controller(&mut self, effect: Effect) -> Task<Message> {
        let effect_task = self.run_effect(effect);
        let card_task = self.sync_card();
        Task::batch([effect_task, card_task])
    }

    fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::RequestAuthorization => Task::perform(
                self.library.request_authorization(),
                Message::AuthorizationResolved,
            ),
            Effect::FetchPhotos => {
                let library = Arc::clone(&self.library);
                Task::perform(
                    async move {
                        tokio::task::spawn_blocking(move || library.fetch_image_assets())
                            .await
                            .unwrap_or_else(|_| Err(LibraryError::Cancelled))
                    },
                    Message::PhotosFetched,
                )
            }
            Effect::Schedule { action, after } => {
                Task::perform(deferral(action, after), Message::DeferralElapsed)
            }
            Effect::DeletePhoto(handle) => {
                self.diagnostics.log_state(AppStateEvent::DeletionRequested);
                let request = self.library.delete_assets(vec![handle.clone()]);
                Task::perform(request, move |result| Message::DeletionCompleted {
                    handle,
                    result,
                })
            }
        }
    }

    /// Retargets the card motion and requests a bitmap if the photo changed.
    fn sync_card(&mut self) -> Task<Message> {
        self.motion.retarget(self.controller.gesture(), self.now);

        let Some(request) = self.renderer.show(self.controller.current_photo()) else {
            return Task::none();
        };

        let generation = request.generation;
        let resolution = self.library.resolve_image(request.handle, request.size);
        Task::perform(
            async move { resolution.await.map(CardBitmaps::from) },
            move |result| Message::ImageResolved { generation, result },
        )
    }
}
