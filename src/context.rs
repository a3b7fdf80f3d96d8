// context.rs - Host context model: activity forcing and system night mode

use serde::{Deserialize, Serialize};

/// Activity-scoped forced night mode. `Unset` means the activity leaves the
/// decision to the system configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ForcedNightMode {
    ForceLight,
    ForceDark,
    #[default]
    Unset,
}

/// Night-mode bit extracted from the host OS configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemNightMode {
    No,
    Yes,
    #[default]
    Undefined,
}

/// An activity that supports forced night mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityContext {
    pub forced_night_mode: ForcedNightMode,
}

/// Snapshot of a host context at one point in time. No activity at all is a
/// valid, common case (headless and background hosts).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostContext {
    pub activity: Option<ActivityContext>,
    pub system_night_mode: SystemNightMode,
}

impl HostContext {
    /// Context without an activity, carrying only the system bit.
    pub fn headless(system_night_mode: SystemNightMode) -> Self {
        Self {
            activity: None,
            system_night_mode,
        }
    }

    /// Attach an activity with the given forced night mode.
    pub fn with_activity(mut self, forced_night_mode: ForcedNightMode) -> Self {
        self.activity = Some(ActivityContext { forced_night_mode });
        self
    }
}

/// Handle to the host environment a tracker is constructed against.
///
/// Both accessors are queried fresh on every call; implementations must not
/// hand out cached snapshots of state that can move underneath them.
pub trait Environment {
    /// The constructing context.
    fn base_context(&self) -> HostContext;

    /// Context of the currently-foregrounded activity, if any. Reads prefer
    /// this over the base context to pick up forcing applied after
    /// construction.
    fn live_activity_context(&self) -> Option<HostContext> {
        None
    }
}

/// Environment backed by plain fields. Suits headless hosts, the CLI, and
/// tests; there is never a live activity.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticEnvironment {
    pub context: HostContext,
}

impl StaticEnvironment {
    pub fn new(context: HostContext) -> Self {
        Self { context }
    }
}

impl Environment for StaticEnvironment {
    fn base_context(&self) -> HostContext {
        self.context
    }
}
