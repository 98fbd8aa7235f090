//! Explicit environment injection for detached overlay content.
//!
//! Overlay/tooltip content renders outside the main tree, where ambient
//! context does not reach. Instead of re-forwarding contexts across that
//! boundary, the required values travel in an [`OverlayEnv`] handed to the
//! content when it renders.

use retention_core::messages::MessageCatalog;

/// Ambient values a detached overlay subtree needs: the owning store handle
/// and the localization catalog.
pub struct OverlayEnv<'a, S> {
    pub store: &'a S,
    pub catalog: &'a dyn MessageCatalog,
}

impl<'a, S> OverlayEnv<'a, S> {
    #[must_use]
    pub fn new(store: &'a S, catalog: &'a dyn MessageCatalog) -> Self {
        Self { store, catalog }
    }
}

/// Content rendered through the overlay boundary. The env arrives as an
/// argument, never as inherited context.
pub trait OverlayContent<S> {
    type Output;

    fn render(&self, env: &OverlayEnv<'_, S>) -> Self::Output;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayActivation {
    Hover,
    Focus,
    Click,
}

/// How the overlay opens. Defaults match the stock trigger: hover and
/// focus, hidden until activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayTrigger {
    pub activations: Vec<OverlayActivation>,
    pub default_shown: bool,
}

impl Default for OverlayTrigger {
    fn default() -> Self {
        Self {
            activations: vec![OverlayActivation::Hover, OverlayActivation::Focus],
            default_shown: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    PointerEnter,
    PointerLeave,
    FocusGained,
    FocusLost,
    Click,
}

/// Visibility state machine fed by pointer/focus events from the anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayState {
    trigger: OverlayTrigger,
    hover: bool,
    focus: bool,
    clicked: bool,
}

impl OverlayState {
    #[must_use]
    pub fn new(trigger: OverlayTrigger) -> Self {
        let clicked = trigger.default_shown;
        Self {
            trigger,
            hover: false,
            focus: false,
            clicked,
        }
    }

    pub fn handle(&mut self, event: OverlayEvent) {
        match event {
            OverlayEvent::PointerEnter => self.hover = true,
            OverlayEvent::PointerLeave => self.hover = false,
            OverlayEvent::FocusGained => self.focus = true,
            OverlayEvent::FocusLost => self.focus = false,
            OverlayEvent::Click => {
                if self.activates_on(OverlayActivation::Click) {
                    self.clicked = !self.clicked;
                }
            }
        }
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        (self.activates_on(OverlayActivation::Hover) && self.hover)
            || (self.activates_on(OverlayActivation::Focus) && self.focus)
            || self.clicked
    }

    /// Render the content with the env injected, if the overlay is open.
    pub fn render_if_shown<S, C: OverlayContent<S>>(
        &self,
        env: &OverlayEnv<'_, S>,
        content: &C,
    ) -> Option<C::Output> {
        self.is_shown().then(|| content.render(env))
    }

    fn activates_on(&self, activation: OverlayActivation) -> bool {
        self.trigger.activations.contains(&activation)
    }
}

#[cfg(test)]
mod tests {
    use retention_core::messages::{self, DefaultCatalog};

    use super::{
        OverlayActivation, OverlayContent, OverlayEnv, OverlayEvent, OverlayState, OverlayTrigger,
    };

    struct Store {
        policy_name: String,
    }

    struct Tooltip;

    impl OverlayContent<Store> for Tooltip {
        type Output = String;

        fn render(&self, env: &OverlayEnv<'_, Store>) -> String {
            format!(
                "{}: {}",
                env.store.policy_name,
                messages::REMOVE_ACTION.resolve(env.catalog)
            )
        }
    }

    #[test]
    fn default_trigger_is_hover_and_focus_hidden() {
        let state = OverlayState::new(OverlayTrigger::default());
        assert!(!state.is_shown());
    }

    #[test]
    fn hover_shows_and_leave_hides() {
        let mut state = OverlayState::new(OverlayTrigger::default());
        state.handle(OverlayEvent::PointerEnter);
        assert!(state.is_shown());
        state.handle(OverlayEvent::PointerLeave);
        assert!(!state.is_shown());
    }

    #[test]
    fn focus_keeps_the_overlay_open_without_hover() {
        let mut state = OverlayState::new(OverlayTrigger::default());
        state.handle(OverlayEvent::FocusGained);
        state.handle(OverlayEvent::PointerEnter);
        state.handle(OverlayEvent::PointerLeave);
        assert!(state.is_shown());
    }

    #[test]
    fn click_only_toggles_when_configured() {
        let mut state = OverlayState::new(OverlayTrigger::default());
        state.handle(OverlayEvent::Click);
        assert!(!state.is_shown());

        let mut state = OverlayState::new(OverlayTrigger {
            activations: vec![OverlayActivation::Click],
            default_shown: false,
        });
        state.handle(OverlayEvent::Click);
        assert!(state.is_shown());
        state.handle(OverlayEvent::Click);
        assert!(!state.is_shown());
    }

    #[test]
    fn content_renders_with_injected_env_only_when_shown() {
        let store = Store {
            policy_name: "90 days".to_owned(),
        };
        let env = OverlayEnv::new(&store, &DefaultCatalog);
        let mut state = OverlayState::new(OverlayTrigger::default());

        assert!(state.render_if_shown(&env, &Tooltip).is_none());
        state.handle(OverlayEvent::PointerEnter);
        assert_eq!(
            state.render_if_shown(&env, &Tooltip).as_deref(),
            Some("90 days: Remove")
        );
    }
}
