// tracker.rs - Appearance state tracking and change notification

use log::warn;
use serde::Serialize;

use crate::context::{Environment, ForcedNightMode, HostContext, SystemNightMode};
use crate::scheme::Scheme;

/// Event name attached to every change notification.
pub const APPEARANCE_CHANGED_EVENT: &str = "appearanceChanged";

/// Optional override to the current color scheme.
///
/// When injected, the override's value is used instead of the host
/// configuration. Any `Fn() -> Scheme` qualifies.
pub trait OverrideColorScheme {
    fn scheme(&self) -> Scheme;
}

impl<F> OverrideColorScheme for F
where
    F: Fn() -> Scheme,
{
    fn scheme(&self) -> Scheme {
        self()
    }
}

/// Notification payload describing a scheme transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppearanceChange {
    #[serde(rename = "colorScheme")]
    pub color_scheme: Scheme,
}

/// Change-notification sink. Listener bookkeeping lives entirely behind this
/// seam; the tracker only fires one event per observed transition.
pub trait EventEmitter {
    /// Whether the hosting context can still receive events. Emission into an
    /// inactive host is skipped, not an error.
    fn is_active(&self) -> bool {
        true
    }

    fn emit(&self, event: &str, change: &AppearanceChange);
}

/// Tracks the host's light/dark preference and notifies the emitter when an
/// observed configuration change flips it.
///
/// Not thread-safe: the read-resolve-compare-emit sequence assumes a single
/// logical owner, which `&mut self` on the mutating operations encodes.
pub struct AppearanceTracker<E: Environment, M: EventEmitter> {
    environment: E,
    emitter: M,
    override_scheme: Option<Box<dyn OverrideColorScheme>>,
    current_scheme: Scheme,
}

impl<E: Environment, M: EventEmitter> AppearanceTracker<E, M> {
    /// Build a tracker without an override. The scheme is resolved from the
    /// environment right away; no event fires for this first resolution.
    pub fn new(environment: E, emitter: M) -> Self {
        Self::with_override(environment, emitter, None)
    }

    pub fn with_override(
        environment: E,
        emitter: M,
        override_scheme: Option<Box<dyn OverrideColorScheme>>,
    ) -> Self {
        let mut tracker = Self {
            environment,
            emitter,
            override_scheme,
            current_scheme: Scheme::Light,
        };
        let context = tracker.environment.base_context();
        tracker.current_scheme = tracker.resolve(&context);
        tracker
    }

    /// Resolve the scheme for a context. The override provider dominates,
    /// then activity-level forcing, then the system night-mode bit; an
    /// `Unset` forcing falls through rather than short-circuiting.
    fn resolve(&self, context: &HostContext) -> Scheme {
        if let Some(override_scheme) = &self.override_scheme {
            return override_scheme.scheme();
        }
        if let Some(activity) = &context.activity {
            match activity.forced_night_mode {
                ForcedNightMode::ForceDark => return Scheme::Dark,
                ForcedNightMode::ForceLight => return Scheme::Light,
                ForcedNightMode::Unset => {}
            }
        }
        match context.system_night_mode {
            SystemNightMode::No => Scheme::Light,
            SystemNightMode::Yes => Scheme::Dark,
            SystemNightMode::Undefined => Scheme::Light,
        }
    }

    /// Current scheme, re-resolved against the live activity context when one
    /// is available. This covers hosts that flip forcing after construction
    /// without delivering a configuration-change callback. The stored value
    /// is refreshed on every read; no event fires from this path.
    pub fn current_scheme(&mut self) -> Scheme {
        let context = self
            .environment
            .live_activity_context()
            .unwrap_or_else(|| self.environment.base_context());
        self.current_scheme = self.resolve(&context);
        self.current_scheme
    }

    /// Call whenever the host observes a configuration change. If the scheme
    /// resolved from the supplied snapshot differs from the stored one, the
    /// state is updated and exactly one event fires; otherwise nothing
    /// happens, so repeated identical calls are no-ops.
    pub fn on_configuration_changed(&mut self, context: &HostContext) {
        let next = self.resolve(context);
        if next != self.current_scheme {
            self.current_scheme = next;
            self.emit_change(next);
        }
    }

    fn emit_change(&self, scheme: Scheme) {
        if !self.emitter.is_active() {
            warn!(
                "scheme changed to {} but the hosting context is inactive, dropping event",
                scheme
            );
            return;
        }
        self.emitter.emit(
            APPEARANCE_CHANGED_EVENT,
            &AppearanceChange {
                color_scheme: scheme,
            },
        );
    }

    /// Listener bookkeeping stub. Subscription management belongs to the
    /// emitter collaborator; nothing to do here.
    pub fn add_listener(&mut self, _event_name: &str) {}

    /// Listener bookkeeping stub, see `add_listener`.
    pub fn remove_listeners(&mut self, _count: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StaticEnvironment;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingEmitter {
        events: Rc<RefCell<Vec<(String, AppearanceChange)>>>,
    }

    impl EventEmitter for RecordingEmitter {
        fn emit(&self, event: &str, change: &AppearanceChange) {
            self.events.borrow_mut().push((event.to_string(), *change));
        }
    }

    fn tracker_at(
        context: HostContext,
    ) -> (
        AppearanceTracker<StaticEnvironment, RecordingEmitter>,
        RecordingEmitter,
    ) {
        let emitter = RecordingEmitter::default();
        let tracker = AppearanceTracker::new(StaticEnvironment::new(context), emitter.clone());
        (tracker, emitter)
    }

    #[test]
    fn test_construction_resolves_without_emitting() {
        let (mut tracker, emitter) = tracker_at(HostContext::headless(SystemNightMode::Yes));
        assert_eq!(tracker.current_scheme(), Scheme::Dark);
        assert!(emitter.events.borrow().is_empty());
    }

    #[test]
    fn test_override_dominates_everything() {
        let context =
            HostContext::headless(SystemNightMode::No).with_activity(ForcedNightMode::ForceLight);
        let emitter = RecordingEmitter::default();
        let mut tracker = AppearanceTracker::with_override(
            StaticEnvironment::new(context),
            emitter,
            Some(Box::new(|| Scheme::Dark)),
        );
        assert_eq!(tracker.current_scheme(), Scheme::Dark);
    }

    #[test]
    fn test_forced_dark_beats_system_light() {
        let context =
            HostContext::headless(SystemNightMode::No).with_activity(ForcedNightMode::ForceDark);
        let (mut tracker, _) = tracker_at(context);
        assert_eq!(tracker.current_scheme(), Scheme::Dark);
    }

    #[test]
    fn test_unset_forcing_falls_through_to_system() {
        let context =
            HostContext::headless(SystemNightMode::Yes).with_activity(ForcedNightMode::Unset);
        let (mut tracker, _) = tracker_at(context);
        assert_eq!(tracker.current_scheme(), Scheme::Dark);
    }

    #[test]
    fn test_system_bit_mirrored_with_light_fallback() {
        let cases = [
            (SystemNightMode::No, Scheme::Light),
            (SystemNightMode::Yes, Scheme::Dark),
            (SystemNightMode::Undefined, Scheme::Light),
        ];
        for (bit, expected) in cases {
            let (mut tracker, _) = tracker_at(HostContext::headless(bit));
            assert_eq!(tracker.current_scheme(), expected, "bit {:?}", bit);
        }
    }

    #[test]
    fn test_configuration_change_emits_once() {
        let (mut tracker, emitter) = tracker_at(HostContext::headless(SystemNightMode::No));
        let dark = HostContext::headless(SystemNightMode::Yes);

        tracker.on_configuration_changed(&dark);
        tracker.on_configuration_changed(&dark);

        let events = emitter.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, APPEARANCE_CHANGED_EVENT);
        assert_eq!(events[0].1.color_scheme, Scheme::Dark);
    }

    #[test]
    fn test_no_op_change_does_not_emit() {
        let (mut tracker, emitter) = tracker_at(HostContext::headless(SystemNightMode::No));
        tracker.on_configuration_changed(&HostContext::headless(SystemNightMode::Undefined));
        assert!(emitter.events.borrow().is_empty());
        assert_eq!(tracker.current_scheme(), Scheme::Light);
    }

    #[test]
    fn test_listener_hooks_are_inert() {
        let (mut tracker, emitter) = tracker_at(HostContext::headless(SystemNightMode::No));
        tracker.add_listener(APPEARANCE_CHANGED_EVENT);
        tracker.remove_listeners(1);
        assert!(emitter.events.borrow().is_empty());
        assert_eq!(tracker.current_scheme(), Scheme::Light);
    }

    #[test]
    fn test_payload_json_shape() {
        let change = AppearanceChange {
            color_scheme: Scheme::Dark,
        };
        assert_eq!(
            serde_json::to_string(&change).unwrap(),
            "{\"colorScheme\":\"dark\"}"
        );
    }
}
