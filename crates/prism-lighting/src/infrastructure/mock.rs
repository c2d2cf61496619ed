//! Recording lighting provider for coordinator tests.
//!
//! # Why a mock provider?
//!
//! The real providers need a vendor engine loaded in the process, which a
//! test machine does not have.  `MockProvider` replaces the engine with an
//! in-memory call log so tests can assert exactly which backend received
//! which canonical request, and in what order.
//!
//! The log lives behind an `Arc`, so a test keeps a [`CallLog`] handle
//! after the provider itself has been boxed and moved into the coordinator:
//!
//! ```ignore
//! let provider = MockProvider::new(BackendKind::Zone);
//! let calls = provider.calls();
//! let mut coordinator = LightingCoordinator::new(vec![Box::new(provider)]);
//! coordinator.initialize().await?;
//! coordinator.set_all((0.0, 1.0, 0.0))?;
//! assert!(calls.snapshot().contains(&ProviderCall::SetAll(Color::new(0.0, 1.0, 0.0))));
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use prism_core::{CanonicalKey, CanonicalPosition, Color, GridArea};

use crate::application::provider::{BackendKind, EngineError, LightingProvider, ProviderError};

/// One call received by a [`MockProvider`].
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderCall {
    Initialize,
    Dispose,
    SetAll(Color),
    SetKeyboardAll(Color),
    SetPosition(CanonicalPosition, Color),
    SetArea(GridArea, Color),
    SetKey(CanonicalKey, Color),
    SetMouse(Color),
}

/// Shared handle to a mock provider's call log.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<ProviderCall>>>);

impl CallLog {
    /// Copy of every call recorded so far.
    pub fn snapshot(&self) -> Vec<ProviderCall> {
        self.0.lock().expect("call log poisoned").clone()
    }

    /// Recorded `set_*` calls, ignoring lifecycle entries.
    pub fn set_calls(&self) -> Vec<ProviderCall> {
        self.snapshot()
            .into_iter()
            .filter(|c| !matches!(c, ProviderCall::Initialize | ProviderCall::Dispose))
            .collect()
    }

    fn push(&self, call: ProviderCall) {
        self.0.lock().expect("call log poisoned").push(call);
    }
}

/// Shared handle controlling whether the next probe succeeds.
#[derive(Debug, Clone)]
pub struct InitSwitch(Arc<AtomicBool>);

impl InitSwitch {
    pub fn set(&self, succeeds: bool) {
        self.0.store(succeeds, Ordering::SeqCst);
    }

    fn get(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// A provider that records calls instead of driving hardware.
#[derive(Debug)]
pub struct MockProvider {
    kind: BackendKind,
    calls: CallLog,
    init_succeeds: InitSwitch,
    /// When `true`, every `set_*` returns an engine error without recording.
    should_fail: bool,
    probe_delay: Option<Duration>,
}

impl MockProvider {
    /// A provider of `kind` whose probe succeeds immediately.
    pub fn new(kind: BackendKind) -> Self {
        Self {
            kind,
            calls: CallLog::default(),
            init_succeeds: InitSwitch(Arc::new(AtomicBool::new(true))),
            should_fail: false,
            probe_delay: None,
        }
    }

    /// Makes the probe report failure.
    pub fn failing_init(self) -> Self {
        self.init_succeeds.set(false);
        self
    }

    /// Makes every `set_*` call fail after a successful probe.
    pub fn with_runtime_failures(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Makes the probe block its thread for `delay` before answering.
    pub fn with_probe_delay(mut self, delay: Duration) -> Self {
        self.probe_delay = Some(delay);
        self
    }

    pub fn calls(&self) -> CallLog {
        self.calls.clone()
    }

    pub fn init_switch(&self) -> InitSwitch {
        self.init_succeeds.clone()
    }

    fn record(&self, call: ProviderCall) -> Result<(), ProviderError> {
        if self.should_fail {
            return Err(EngineError::Call {
                entry: "mock",
                reason: "mock failure".into(),
            }
            .into());
        }
        self.calls.push(call);
        Ok(())
    }
}

impl LightingProvider for MockProvider {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    fn initialize(&mut self) -> bool {
        if let Some(delay) = self.probe_delay {
            std::thread::sleep(delay);
        }
        self.calls.push(ProviderCall::Initialize);
        self.init_succeeds.get()
    }

    fn dispose(&mut self) {
        self.calls.push(ProviderCall::Dispose);
    }

    fn set_all(&mut self, color: Color) -> Result<(), ProviderError> {
        self.record(ProviderCall::SetAll(color))
    }

    fn set_keyboard_all(&mut self, color: Color) -> Result<(), ProviderError> {
        self.record(ProviderCall::SetKeyboardAll(color))
    }

    fn set_position(
        &mut self,
        position: CanonicalPosition,
        color: Color,
    ) -> Result<(), ProviderError> {
        self.record(ProviderCall::SetPosition(position, color))
    }

    fn set_area(&mut self, area: GridArea, color: Color) -> Result<(), ProviderError> {
        self.record(ProviderCall::SetArea(area, color))
    }

    fn set_key(&mut self, key: CanonicalKey, color: Color) -> Result<(), ProviderError> {
        self.record(ProviderCall::SetKey(key, color))
    }

    fn set_mouse(&mut self, color: Color) -> Result<(), ProviderError> {
        self.record(ProviderCall::SetMouse(color))
    }
}
