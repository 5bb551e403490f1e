//! Screen router with a back-stack
//!
//! The router tracks the current screen, a LIFO stack of the screens the user
//! came from (with their captured UI state) and the transition in flight.
//! Live screen instances belong to a [`ScreenHost`]; the router only talks to
//! them through the [`Screen`] trait.

mod screen;
mod transition;

pub use screen::{Screen, ScreenHost, ScreenId, ScreenState};
pub use transition::{Direction, TRANSITION_DURATION, Transition};

use std::collections::BTreeMap;

use tracing::debug;

/// A screen the user navigated away from, with its captured state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEntry {
    pub screen: ScreenId,
    pub state: ScreenState,
}

/// Result of a back action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// The router (or an overlay) consumed the action
    Handled,
    /// Nothing to go back to; the host may exit
    NotHandled,
}

impl BackOutcome {
    pub fn is_handled(self) -> bool {
        self == BackOutcome::Handled
    }
}

/// Back-stack router
#[derive(Debug, Default)]
pub struct Router {
    current: Option<ScreenId>,
    back_stack: Vec<NavigationEntry>,
    /// Remembered active tab per screen, re-applied after a reload
    ui_state: BTreeMap<ScreenId, String>,
    transition: Option<Transition>,
    /// Tab restores waiting for the next layout pass
    pending_tab_restores: Vec<(ScreenId, String)>,
    registered: bool,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logical current screen (None until screens are registered)
    pub fn current(&self) -> Option<ScreenId> {
        self.current
    }

    /// Screen to draw right now.
    ///
    /// Differs from [`Router::current`] while a backward transition is still
    /// animating the outgoing screen.
    pub fn visible(&self) -> Option<ScreenId> {
        match &self.transition {
            Some(transition) => Some(transition.visible()),
            None => self.current,
        }
    }

    pub fn back_stack(&self) -> &[NavigationEntry] {
        &self.back_stack
    }

    pub fn depth(&self) -> usize {
        self.back_stack.len()
    }

    pub fn ui_state(&self) -> &BTreeMap<ScreenId, String> {
        &self.ui_state
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Install every known screen into the host and show the initial screen.
    ///
    /// Existing instances are replaced. Remembered tabs are queued and
    /// re-applied by [`Router::after_layout`].
    pub fn register_screens<H: ScreenHost + ?Sized>(&mut self, host: &mut H) {
        for id in ScreenId::ALL {
            host.install(id);
        }
        let initial = ScreenId::INITIAL;
        self.registered = true;
        self.current = Some(initial);
        self.pending_tab_restores = self
            .ui_state
            .iter()
            .map(|(id, tab)| (*id, tab.clone()))
            .collect();
        debug!(
            initial = %initial,
            pending_tabs = self.pending_tab_restores.len(),
            "screens registered"
        );
    }

    /// Apply tab restores queued by the last registration
    pub fn after_layout<H: ScreenHost + ?Sized>(&mut self, host: &mut H) {
        for (id, tab) in self.pending_tab_restores.drain(..) {
            if let Some(screen) = host.screen_mut(id) {
                debug!(screen = %id, tab = %tab, "restoring active tab");
                screen.set_active_tab(&tab);
            }
        }
    }

    /// Navigate to `target`.
    ///
    /// Unless `replace` is set, the current screen and its captured state are
    /// pushed onto the back-stack first.
    pub fn navigate<H: ScreenHost + ?Sized>(
        &mut self,
        host: &mut H,
        target: ScreenId,
        replace: bool,
    ) {
        self.finish_transition(host);

        let previous = self.current;
        if let Some(current) = previous
            && !replace
            && current != target
        {
            let state = host
                .screen(current)
                .map(|screen| screen.capture_state())
                .unwrap_or_default();
            self.back_stack.push(NavigationEntry {
                screen: current,
                state,
            });
        }

        self.current = Some(target);
        if previous != Some(target) {
            self.transition = Some(Transition::forward(previous, target));
        }
        debug!(to = %target, replace, depth = self.back_stack.len(), "navigate");
    }

    /// Go back to the previous screen.
    ///
    /// An open overlay on the current screen consumes the action first.
    /// Returns [`BackOutcome::NotHandled`] when the back-stack is empty.
    pub fn back<H: ScreenHost + ?Sized>(&mut self, host: &mut H, reload_all: bool) -> BackOutcome {
        self.finish_transition(host);

        if let Some(current) = self.current
            && host
                .screen_mut(current)
                .is_some_and(|screen| screen.close_overlay())
        {
            debug!(screen = %current, "back consumed by overlay");
            return BackOutcome::Handled;
        }

        let Some(entry) = self.back_stack.pop() else {
            return BackOutcome::NotHandled;
        };

        // State goes back in before the screen becomes visible
        if let Some(screen) = host.screen_mut(entry.screen) {
            screen.restore_state(&entry.state);
        }
        self.remember_tabs(host);

        let previous = self.current.replace(entry.screen);
        self.transition = Some(Transition::backward(previous, entry.screen, reload_all));
        debug!(to = %entry.screen, reload_all, depth = self.back_stack.len(), "back");
        BackOutcome::Handled
    }

    /// Complete the transition in flight, if any.
    ///
    /// Called by the host when the outgoing animation has finished. A
    /// transition that requested a reload re-registers the screen set.
    pub fn finish_transition<H: ScreenHost + ?Sized>(&mut self, host: &mut H) {
        let Some(transition) = self.transition.take() else {
            return;
        };
        if transition.reload_all {
            self.register_screens(host);
        }
    }

    fn remember_tabs<H: ScreenHost + ?Sized>(&mut self, host: &H) {
        for id in ScreenId::ALL {
            if let Some(tab) = host.screen(id).and_then(|screen| screen.active_tab()) {
                self.ui_state.insert(id, tab);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct FakeScreen {
        tab: Option<String>,
        overlay_open: bool,
    }

    impl Screen for FakeScreen {
        fn capture_state(&self) -> ScreenState {
            let mut state = ScreenState::new();
            if let Some(tab) = &self.tab {
                state.insert("tab_name".to_string(), tab.clone());
            }
            state
        }

        fn restore_state(&mut self, state: &ScreenState) {
            if let Some(tab) = state.get("tab_name") {
                self.tab = Some(tab.clone());
            }
        }

        fn active_tab(&self) -> Option<String> {
            self.tab.clone()
        }

        fn set_active_tab(&mut self, tab: &str) {
            self.tab = Some(tab.to_string());
        }

        fn close_overlay(&mut self) -> bool {
            std::mem::take(&mut self.overlay_open)
        }
    }

    #[derive(Debug, Default)]
    struct FakeHost {
        screens: BTreeMap<ScreenId, FakeScreen>,
        installs: usize,
    }

    impl ScreenHost for FakeHost {
        fn screen(&self, id: ScreenId) -> Option<&dyn Screen> {
            self.screens.get(&id).map(|s| s as &dyn Screen)
        }

        fn screen_mut(&mut self, id: ScreenId) -> Option<&mut dyn Screen> {
            self.screens.get_mut(&id).map(|s| s as &mut dyn Screen)
        }

        fn install(&mut self, id: ScreenId) {
            self.installs += 1;
            let fresh = match id {
                ScreenId::Main => FakeScreen {
                    tab: Some("Home".to_string()),
                    overlay_open: false,
                },
                ScreenId::ThemeAndStyle => FakeScreen::default(),
            };
            self.screens.insert(id, fresh);
        }
    }

    fn registered() -> (Router, FakeHost) {
        let mut router = Router::new();
        let mut host = FakeHost::default();
        router.register_screens(&mut host);
        (router, host)
    }

    #[test]
    fn test_unregistered_router_has_no_screen() {
        let router = Router::new();
        assert!(!router.is_registered());
        assert_eq!(router.current(), None);
        assert_eq!(router.visible(), None);
    }

    #[test]
    fn test_register_shows_initial_screen() {
        let (router, host) = registered();
        assert!(router.is_registered());
        assert_eq!(router.current(), Some(ScreenId::Main));
        assert_eq!(host.installs, ScreenId::ALL.len());
    }

    #[test]
    fn test_navigate_pushes_current_with_state() {
        let (mut router, mut host) = registered();
        host.screens.get_mut(&ScreenId::Main).unwrap().tab = Some("Settings".to_string());

        router.navigate(&mut host, ScreenId::ThemeAndStyle, false);

        assert_eq!(router.current(), Some(ScreenId::ThemeAndStyle));
        assert_eq!(router.depth(), 1);
        let entry = &router.back_stack()[0];
        assert_eq!(entry.screen, ScreenId::Main);
        assert_eq!(entry.state.get("tab_name").map(String::as_str), Some("Settings"));
        assert_eq!(
            router.transition().map(|t| t.direction),
            Some(Direction::Forward)
        );
    }

    #[test]
    fn test_navigate_to_current_does_not_push() {
        let (mut router, mut host) = registered();
        router.navigate(&mut host, ScreenId::Main, false);
        assert_eq!(router.depth(), 0);
        assert!(router.transition().is_none());
    }

    #[test]
    fn test_navigate_replace_does_not_push() {
        let (mut router, mut host) = registered();
        router.navigate(&mut host, ScreenId::ThemeAndStyle, true);
        assert_eq!(router.depth(), 0);
        assert_eq!(router.current(), Some(ScreenId::ThemeAndStyle));
    }

    #[test]
    fn test_back_pops_and_restores_state() {
        let (mut router, mut host) = registered();
        host.screens.get_mut(&ScreenId::Main).unwrap().tab = Some("Settings".to_string());
        router.navigate(&mut host, ScreenId::ThemeAndStyle, false);
        // Screen state drifts while away
        host.screens.get_mut(&ScreenId::Main).unwrap().tab = Some("Home".to_string());

        let outcome = router.back(&mut host, false);

        assert_eq!(outcome, BackOutcome::Handled);
        assert_eq!(router.current(), Some(ScreenId::Main));
        assert_eq!(router.depth(), 0);
        assert_eq!(
            host.screens[&ScreenId::Main].tab.as_deref(),
            Some("Settings")
        );
        assert_eq!(
            router.ui_state().get(&ScreenId::Main).map(String::as_str),
            Some("Settings")
        );
    }

    #[test]
    fn test_back_defers_visible_swap_until_finished() {
        let (mut router, mut host) = registered();
        router.navigate(&mut host, ScreenId::ThemeAndStyle, false);
        router.finish_transition(&mut host);

        router.back(&mut host, false);
        assert_eq!(router.current(), Some(ScreenId::Main));
        assert_eq!(router.visible(), Some(ScreenId::ThemeAndStyle));

        router.finish_transition(&mut host);
        assert_eq!(router.visible(), Some(ScreenId::Main));
    }

    #[test]
    fn test_back_with_empty_stack_is_not_handled() {
        let (mut router, mut host) = registered();
        assert_eq!(router.back(&mut host, false), BackOutcome::NotHandled);
        assert_eq!(router.current(), Some(ScreenId::Main));
    }

    #[test]
    fn test_back_closes_overlay_without_popping() {
        let (mut router, mut host) = registered();
        router.navigate(&mut host, ScreenId::ThemeAndStyle, false);
        host.screens
            .get_mut(&ScreenId::ThemeAndStyle)
            .unwrap()
            .overlay_open = true;

        assert_eq!(router.back(&mut host, false), BackOutcome::Handled);
        assert_eq!(router.depth(), 1);
        assert_eq!(router.current(), Some(ScreenId::ThemeAndStyle));

        assert_eq!(router.back(&mut host, false), BackOutcome::Handled);
        assert_eq!(router.depth(), 0);
    }

    #[test]
    fn test_back_with_reload_reinstalls_and_restores_tab() {
        let (mut router, mut host) = registered();
        host.screens.get_mut(&ScreenId::Main).unwrap().tab = Some("Settings".to_string());
        router.navigate(&mut host, ScreenId::ThemeAndStyle, false);

        router.back(&mut host, true);
        let installs_before = host.installs;
        router.finish_transition(&mut host);

        assert_eq!(host.installs, installs_before + ScreenId::ALL.len());
        // Fresh instance starts on its default tab until layout completes
        assert_eq!(host.screens[&ScreenId::Main].tab.as_deref(), Some("Home"));
        router.after_layout(&mut host);
        assert_eq!(
            host.screens[&ScreenId::Main].tab.as_deref(),
            Some("Settings")
        );
        assert_eq!(router.current(), Some(ScreenId::Main));
    }

    #[test]
    fn test_pending_transition_finishes_before_next_navigation() {
        let (mut router, mut host) = registered();
        router.navigate(&mut host, ScreenId::ThemeAndStyle, false);
        router.back(&mut host, true);
        let installs_before = host.installs;

        router.navigate(&mut host, ScreenId::ThemeAndStyle, false);

        assert_eq!(host.installs, installs_before + ScreenId::ALL.len());
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_navigate_before_registration_does_not_push() {
        let mut router = Router::new();
        let mut host = FakeHost::default();
        router.navigate(&mut host, ScreenId::ThemeAndStyle, false);
        assert_eq!(router.depth(), 0);
        assert_eq!(router.current(), Some(ScreenId::ThemeAndStyle));
    }
}
