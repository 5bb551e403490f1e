//! Application state and screen management

use std::time::Instant;

use tracing::debug;

use super::screens::Screens;
use crate::config::{AppPaths, Config};
use crate::model::Notification;
use crate::router::{BackOutcome, Router, ScreenId, TRANSITION_DURATION};
use crate::settings::{SettingsService, Theme};

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Screen navigation and back-stack
    pub router: Router,
    /// Live screen instances
    pub screens: Screens,
    /// Live theme every screen draws with
    pub theme: Theme,
    /// Settings and font packages
    pub settings: SettingsService,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
    /// When the transition in flight started animating
    pub(crate) transition_started: Option<Instant>,
}

impl App {
    /// Construct a new instance of [`App`] and load settings.
    ///
    /// Screens are registered after the first frame, see [`App::after_draw`].
    pub fn new(config: &Config) -> Self {
        Self::with_paths(config.paths.clone(), config.sp_scale)
    }

    pub fn with_paths(paths: AppPaths, sp_scale: f32) -> Self {
        let mut theme = Theme::new(sp_scale);
        let settings = SettingsService::load(paths, Some(&mut theme));
        Self {
            running: true,
            router: Router::new(),
            screens: Screens::default(),
            theme,
            settings,
            error_message: None,
            notification: None,
            transition_started: None,
        }
    }

    /// Called once a frame has been drawn.
    ///
    /// The first call registers the screens; later calls apply tab restores
    /// that wait for a layout pass.
    pub fn after_draw(&mut self) {
        if self.router.is_registered() {
            self.router.after_layout(&mut self.screens);
        } else {
            self.router.register_screens(&mut self.screens);
        }
    }

    /// Called on every loop iteration
    pub fn on_tick(&mut self) {
        self.clear_expired_notification();

        if self
            .transition_progress()
            .is_some_and(|progress| progress >= 1.0)
        {
            self.complete_transition();
        }
    }

    /// Fraction of the running transition animation, if one is in flight
    pub fn transition_progress(&self) -> Option<f32> {
        self.router.transition()?;
        let started = self.transition_started?;
        let progress = started.elapsed().as_secs_f32() / TRANSITION_DURATION.as_secs_f32();
        Some(progress.min(1.0))
    }

    /// Finish the transition in flight without waiting for the animation
    pub fn complete_transition(&mut self) {
        self.router.finish_transition(&mut self.screens);
        self.transition_started = None;
    }

    /// Navigate to a screen, pushing the current one onto the back-stack
    pub(crate) fn go_to(&mut self, target: ScreenId) {
        self.router.navigate(&mut self.screens, target, false);
        self.start_transition_clock();
    }

    /// Go back; quits when there is nothing to go back to.
    ///
    /// Leaving the Theme & Style screen rebuilds every screen so the new
    /// theme is picked up everywhere.
    pub(crate) fn go_back(&mut self) {
        let reload_all = self.router.current() == Some(ScreenId::ThemeAndStyle);
        match self.router.back(&mut self.screens, reload_all) {
            BackOutcome::Handled => self.start_transition_clock(),
            BackOutcome::NotHandled => {
                debug!("back-stack empty, quitting");
                self.quit();
            }
        }
    }

    fn start_transition_clock(&mut self) {
        self.transition_started = self.router.transition().map(|_| Instant::now());
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub(crate) fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
