// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the swipe controller,
//! the photo library and the views.
//!
//! The `App` owns every piece of mutable state and is the only place where
//! controller [`Effect`](crate::application::Effect)s become Iced tasks.
//! Results of background work come back as [`Message`]s, so all mutation is
//! serialized through `App::update`.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{ConsentStore, PhotoLibrary};
use crate::application::{ImageRenderer, SwipeController};
use crate::diagnostics::{AppStateEvent, BufferCapacity, DiagnosticsCollector, WarningType};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{native_consent_prompt, FsPhotoLibrary};
use crate::ui::notifications;
use crate::ui::state::{CardMotion, DragState};
use crate::ui::swipe::CardBitmaps;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use persisted_state::{AppState, PersistedConsent};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    colors: ColorScheme,
    library: Arc<dyn PhotoLibrary>,
    controller: SwipeController,
    renderer: ImageRenderer<CardBitmaps>,
    /// Where the card is drawn, trailing the controller's gesture state.
    motion: CardMotion,
    drag: DragState,
    backdrop_opacity: f32,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    /// Reference point for the spinner rotation.
    started_at: Instant,
    /// Time of the last processed message; views sample motion at this instant.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.controller.phase())
            .field("photos", &self.controller.photos().len())
            .field("current_index", &self.controller.current_index())
            .finish_non_exhaustive()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(
            config::WINDOW_DEFAULT_WIDTH as f32,
            config::WINDOW_DEFAULT_HEIGHT as f32,
        ),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let (app_state, state_warning) = AppState::load();
        let consent: Arc<dyn ConsentStore> = Arc::new(PersistedConsent::new(app_state));

        let diagnostics = DiagnosticsCollector::new(BufferCapacity::default());
        let root = paths::resolve_library_root(flags.library, config.library.root.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        let prompt = native_consent_prompt(i18n.tr("consent-title"), i18n.tr("consent-body"));
        let library = FsPhotoLibrary::new(root, consent, prompt)
            .with_recursive(config.recursive())
            .with_backdrop_blur(config.backdrop_blur())
            .with_diagnostics(diagnostics.handle());

        let mut app = Self::with_library(Arc::new(library), i18n, &config, diagnostics);

        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications.push(
                notifications::Notification::warning(key)
                    .with_warning_type(WarningType::ConfigurationIssue),
            );
        }

        let task = app.start();
        (app, task)
    }

    /// Builds the application around an already constructed library.
    fn with_library(
        library: Arc<dyn PhotoLibrary>,
        i18n: I18n,
        config: &config::Config,
        diagnostics: DiagnosticsCollector,
    ) -> Self {
        let now = Instant::now();
        let theme_mode = config.general.theme_mode;
        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.handle());

        Self {
            i18n,
            theme_mode,
            colors: ColorScheme::for_mode(theme_mode),
            library,
            controller: SwipeController::new(),
            renderer: ImageRenderer::new(config.card_size()),
            motion: CardMotion::new(now),
            drag: DragState::default(),
            backdrop_opacity: config::BACKDROP_OPACITY,
            notifications,
            diagnostics,
            started_at: now,
            now,
        }
    }

    /// Checks permission and kicks off the first load.
    fn start(&mut self) -> Task<Message> {
        let status = self.library.authorization_status();
        self.diagnostics
            .log_state(AppStateEvent::AuthorizationDecided { status });
        let effect = self.controller.load_photos(status);
        self.after_controller(effect)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.controller.current_photo().and_then(|photo| photo.file_name()) {
            Some(file_name) => format!("{file_name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let now = Instant::now();
        let animating = self.motion.is_animating(now)
            || self.renderer.is_loading()
            || self.controller.is_loading();

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_animation_subscription(animating),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = Instant::now();

        match message {
            Message::Swipe(swipe_message) => self.handle_swipe_message(swipe_message),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
            Message::AuthorizationResolved(status) => self.handle_authorization(status),
            Message::PhotosFetched(result) => self.handle_photos_fetched(result),
            Message::ImageResolved { generation, result } => {
                self.handle_image_resolved(generation, result);
                Task::none()
            }
            Message::DeferralElapsed(action) => {
                let effect = self.controller.deferral_elapsed(action);
                self.after_controller(effect)
            }
            Message::DeletionCompleted { handle, result } => {
                self.handle_deletion_completed(handle, result)
            }
            // Redraw only; the view samples motion at `self.now`.
            Message::AnimationTick(_instant) => Task::none(),
            Message::Tick(_instant) => {
                self.notifications.tick();
                self.diagnostics.process_pending();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.colors,
            controller: &self.controller,
            renderer: &self.renderer,
            frame: self.motion.sample(self.now),
            backdrop_opacity: self.backdrop_opacity,
            spinner_elapsed: self.now.saturating_duration_since(self.started_at),
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::LibraryResult;
    use crate::application::{Deferred, Effect, LoadPhase, RenderState};
    use crate::diagnostics::DiagnosticEventKind;
    use crate::domain::{Authorization, PhotoHandle, RawImage, ResolvedImage, TargetSize};
    use crate::error::LibraryError;
    use crate::ui::swipe;
    use futures_util::future::{self, BoxFuture, FutureExt};
    use iced::{event, keyboard, mouse, Point};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Library double answering from fixed values.
    struct FakeLibrary {
        status: Authorization,
        photos: Vec<PhotoHandle>,
        deleted: Mutex<Vec<PhotoHandle>>,
    }

    impl FakeLibrary {
        fn new(status: Authorization, names: &[&str]) -> Self {
            Self {
                status,
                photos: names.iter().map(|name| PhotoHandle::new(*name)).collect(),
                deleted: Mutex::new(Vec::new()),
            }
        }
    }

    impl PhotoLibrary for FakeLibrary {
        fn authorization_status(&self) -> Authorization {
            self.status
        }

        fn request_authorization(&self) -> BoxFuture<'static, Authorization> {
            future::ready(Authorization::Authorized).boxed()
        }

        fn fetch_image_assets(&self) -> LibraryResult<Vec<PhotoHandle>> {
            Ok(self.photos.clone())
        }

        fn resolve_image(
            &self,
            _handle: PhotoHandle,
            _size: TargetSize,
        ) -> BoxFuture<'static, LibraryResult<ResolvedImage>> {
            future::ready(Ok(resolved())).boxed()
        }

        fn delete_assets(&self, handles: Vec<PhotoHandle>) -> BoxFuture<'static, LibraryResult<()>> {
            self.deleted
                .lock()
                .expect("lock")
                .extend(handles);
            future::ready(Ok(())).boxed()
        }
    }

    fn resolved() -> ResolvedImage {
        ResolvedImage {
            card: RawImage::from_rgba(1, 1, vec![0; 4]),
            backdrop: RawImage::from_rgba(1, 1, vec![0; 4]),
        }
    }

    fn app_with(status: Authorization, names: &[&str]) -> App {
        let library = Arc::new(FakeLibrary::new(status, names));
        App::with_library(
            library,
            I18n::default(),
            &config::Config::default(),
            DiagnosticsCollector::new(BufferCapacity::default()),
        )
    }

    fn loaded_app(names: &[&str]) -> App {
        let mut app = app_with(Authorization::Authorized, names);
        let _ = app.start();
        let photos = names.iter().map(|name| PhotoHandle::new(*name)).collect();
        let _ = app.update(Message::PhotosFetched(Ok(photos)));
        app
    }

    fn raw(event: event::Event) -> Message {
        Message::RawEvent {
            window: window::Id::unique(),
            event,
        }
    }

    fn cursor_at(x: f32) -> Message {
        raw(event::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, 300.0),
        }))
    }

    fn release() -> Message {
        raw(event::Event::Mouse(mouse::Event::ButtonReleased(
            mouse::Button::Left,
        )))
    }

    fn current(app: &App) -> Option<&str> {
        app.controller.current_photo().map(|photo| {
            photo
                .location()
                .to_str()
                .expect("utf-8 test path")
        })
    }

    #[test]
    fn start_with_authorized_library_fetches() {
        let mut app = app_with(Authorization::Authorized, &["a.jpg"]);
        let _ = app.start();
        assert_eq!(app.controller.phase(), LoadPhase::Fetching);
        assert!(app.controller.is_loading());
    }

    #[test]
    fn start_with_undetermined_library_asks_first() {
        let mut app = app_with(Authorization::NotDetermined, &["a.jpg"]);
        let _ = app.start();
        assert_eq!(app.controller.phase(), LoadPhase::AwaitingAuthorization);

        let _ = app.update(Message::AuthorizationResolved(Authorization::Authorized));
        assert_eq!(app.controller.phase(), LoadPhase::Fetching);
    }

    #[test]
    fn denied_library_raises_alert_until_dismissed() {
        let mut app = app_with(Authorization::Denied, &["a.jpg"]);
        let _ = app.start();
        assert!(app.controller.is_alert_visible());

        let _ = app.update(Message::Swipe(swipe::Message::DismissAlert));
        assert!(!app.controller.is_alert_visible());
        assert_eq!(app.controller.phase(), LoadPhase::Denied);
    }

    #[test]
    fn fetched_photos_start_resolving_first_card() {
        let app = loaded_app(&["a.jpg", "b.jpg"]);
        assert_eq!(current(&app), Some("a.jpg"));
        assert!(app.renderer.is_loading());
    }

    #[test]
    fn resolved_image_is_shown() {
        let mut app = loaded_app(&["a.jpg"]);
        let _ = app.update(Message::ImageResolved {
            generation: 1,
            result: Ok(CardBitmaps::from(resolved())),
        });
        assert!(matches!(app.renderer.state(), RenderState::Ready { .. }));
    }

    #[test]
    fn failed_fetch_shows_error_toast_and_empty_state() {
        let mut app = app_with(Authorization::Authorized, &[]);
        let _ = app.start();
        let _ = app.update(Message::PhotosFetched(Err(LibraryError::Io("boom".into()))));

        assert_eq!(app.controller.phase(), LoadPhase::Loaded);
        assert!(app.controller.is_empty());
        assert_eq!(
            app.notifications.visible().next().map(|n| n.message_key()),
            Some("error-library-io")
        );
    }

    #[test]
    fn late_fetch_result_is_ignored() {
        let mut app = loaded_app(&["a.jpg", "b.jpg"]);
        let _ = app.update(Message::PhotosFetched(Err(LibraryError::Io("late".into()))));

        assert_eq!(app.controller.photos().len(), 2);
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn drag_past_threshold_schedules_delete_of_current_photo() {
        let mut app = loaded_app(&["a.jpg", "b.jpg"]);

        let _ = app.update(cursor_at(100.0));
        let _ = app.update(Message::Swipe(swipe::Message::CardPressed));
        let _ = app.update(cursor_at(160.0));
        assert_eq!(app.controller.gesture().offset, 60.0);

        let _ = app.update(cursor_at(260.0));
        let _ = app.update(release());
        assert!(app.controller.has_pending_work());

        let a = PhotoHandle::new("a.jpg");
        let _ = app.update(Message::DeferralElapsed(Deferred::DeletePhoto(a.clone())));
        let _ = app.update(Message::DeletionCompleted {
            handle: a,
            result: Ok(()),
        });

        assert_eq!(current(&app), Some("b.jpg"));
        assert_eq!(app.controller.photos().len(), 1);
    }

    #[test]
    fn short_drag_springs_back() {
        let mut app = loaded_app(&["a.jpg"]);

        let _ = app.update(cursor_at(100.0));
        let _ = app.update(Message::Swipe(swipe::Message::CardPressed));
        let _ = app.update(cursor_at(150.0));
        let _ = app.update(release());

        assert!(app.controller.gesture().is_neutral());
        assert!(!app.controller.has_pending_work());
    }

    #[test]
    fn cursor_moves_without_press_do_not_drag() {
        let mut app = loaded_app(&["a.jpg"]);
        let _ = app.update(cursor_at(10.0));
        let _ = app.update(cursor_at(400.0));
        let _ = app.update(release());

        assert!(app.controller.gesture().is_neutral());
    }

    #[test]
    fn arrow_left_skips_after_deferral() {
        let mut app = loaded_app(&["a.jpg", "b.jpg"]);
        let _ = app.handle_key(&keyboard::Key::Named(keyboard::key::Named::ArrowLeft));
        assert_eq!(current(&app), Some("a.jpg"));

        let _ = app.update(Message::DeferralElapsed(Deferred::NextPhoto));
        assert_eq!(current(&app), Some("b.jpg"));
    }

    #[test]
    fn failed_deletion_keeps_list() {
        let mut app = loaded_app(&["a.jpg", "b.jpg"]);
        let _ = app.handle_key(&keyboard::Key::Named(keyboard::key::Named::Delete));

        let a = PhotoHandle::new("a.jpg");
        let _ = app.update(Message::DeferralElapsed(Deferred::DeletePhoto(a.clone())));
        let _ = app.update(Message::DeletionCompleted {
            handle: a,
            result: Err(LibraryError::PermissionDenied),
        });

        assert_eq!(app.controller.photos().len(), 2);
        assert_eq!(current(&app), Some("a.jpg"));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn swipe_actions_are_recorded_in_diagnostics() {
        let mut app = loaded_app(&["a.jpg"]);
        let _ = app.handle_key(&keyboard::Key::Named(keyboard::key::Named::ArrowRight));

        let recorded = app
            .diagnostics
            .iter()
            .any(|event| matches!(event.kind, DiagnosticEventKind::UserAction { .. }));
        assert!(recorded);
    }

    #[test]
    fn title_includes_current_file_name() {
        let app = loaded_app(&["photos/beach.png"]);
        assert!(app.title().starts_with("beach.png - "));
    }

    #[tokio::test(start_paused = true)]
    async fn scheduled_delete_fires_once_for_captured_photo() {
        let library = Arc::new(FakeLibrary::new(
            Authorization::Authorized,
            &["a.jpg", "b.jpg", "c.jpg"],
        ));
        let mut app = App::with_library(
            Arc::clone(&library) as Arc<dyn PhotoLibrary>,
            I18n::default(),
            &config::Config::default(),
            DiagnosticsCollector::new(BufferCapacity::default()),
        );
        let _ = app.start();
        let _ = app.update(Message::PhotosFetched(Ok(library.photos.clone())));

        let Effect::Schedule { action, after } =
            app.controller.on_gesture_ended(update::KEYBOARD_SWIPE_DELTA)
        else {
            panic!("right swipe should schedule a deferral");
        };
        assert_eq!(after, Duration::from_millis(300));
        let timer = tokio::spawn(update::deferral(action, after));

        app.controller.next_photo();
        assert_eq!(current(&app), Some("b.jpg"));

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(!timer.is_finished());
        assert!(library.deleted.lock().expect("lock").is_empty());

        tokio::time::sleep(Duration::from_millis(1)).await;
        let fired = timer.await.expect("timer task");
        assert_eq!(fired, Deferred::DeletePhoto(PhotoHandle::new("a.jpg")));

        let _ = app.update(Message::DeferralElapsed(fired.clone()));
        let _ = app.update(Message::DeferralElapsed(fired));
        assert_eq!(
            *library.deleted.lock().expect("lock"),
            vec![PhotoHandle::new("a.jpg")]
        );
    }
}
