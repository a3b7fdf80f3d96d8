// Common test utilities: fake environments and a recording emitter

use appearance::context::{Environment, HostContext};
use appearance::tracker::{AppearanceChange, EventEmitter};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Emitter that records every event and can simulate a torn-down host.
#[derive(Clone)]
pub struct RecordingEmitter {
    inner: Rc<RecorderState>,
}

struct RecorderState {
    active: Cell<bool>,
    events: RefCell<Vec<(String, AppearanceChange)>>,
}

impl RecordingEmitter {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RecorderState {
                active: Cell::new(true),
                events: RefCell::new(Vec::new()),
            }),
        }
    }

    #[allow(dead_code)]
    pub fn set_active(&self, active: bool) {
        self.inner.active.set(active);
    }

    pub fn events(&self) -> Vec<(String, AppearanceChange)> {
        self.inner.events.borrow().clone()
    }
}

impl EventEmitter for RecordingEmitter {
    fn is_active(&self) -> bool {
        self.inner.active.get()
    }

    fn emit(&self, event: &str, change: &AppearanceChange) {
        self.inner
            .events
            .borrow_mut()
            .push((event.to_string(), *change));
    }
}

/// Environment whose contexts can be swapped out from the test side while a
/// tracker holds a clone of it.
#[derive(Clone, Default)]
pub struct SharedEnvironment {
    inner: Rc<RefCell<EnvState>>,
}

#[derive(Default)]
struct EnvState {
    base: HostContext,
    live: Option<HostContext>,
}

impl SharedEnvironment {
    pub fn new(base: HostContext) -> Self {
        let environment = Self::default();
        environment.set_base(base);
        environment
    }

    pub fn set_base(&self, context: HostContext) {
        self.inner.borrow_mut().base = context;
    }

    #[allow(dead_code)]
    pub fn set_live(&self, context: Option<HostContext>) {
        self.inner.borrow_mut().live = context;
    }
}

impl Environment for SharedEnvironment {
    fn base_context(&self) -> HostContext {
        self.inner.borrow().base
    }

    fn live_activity_context(&self) -> Option<HostContext> {
        self.inner.borrow().live
    }
}
