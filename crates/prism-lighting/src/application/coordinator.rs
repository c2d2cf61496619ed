//! LightingCoordinator: the single entry point callers talk to.
//!
//! # Lifecycle
//!
//! ```text
//!   new()  ──►  standby  ── initialize().await ──►  active  ── dispose() ──►  standby
//!                  ▲                                                            │
//!                  └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every registered provider starts on standby.  `initialize` probes all of
//! them at once on blocking threads; the ones that report success form the
//! active set, frozen until `dispose`.  Providers that fail stay on standby
//! and are probed again by the next `initialize`.  A provider whose probe
//! overruns the shared deadline is left out of the active set; when its
//! probe finally returns, the blocking thread disposes it and hands it back
//! to standby.
//!
//! `initialize` is cancel-safe.  In-flight probes and the providers that
//! already joined are kept on the coordinator, so dropping the future and
//! calling `initialize` again picks up where the first call stopped.
//!
//! # Fan-out (for beginners)
//!
//! Each `set_*` call is checked against the canonical grid exactly once,
//! here, before any backend sees it.  The validated request is then handed
//! to every active provider in registration order.  A provider that returns
//! an error is logged at `warn` and skipped; the caller still gets `Ok`
//! because the remaining backends were lit.  Only two things reach the
//! caller as errors: lifecycle misuse and out-of-range coordinates.

use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use prism_core::{CanonicalKey, CanonicalPosition, Color, GridArea, GridError};
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::error::Elapsed;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, info, warn};

use super::provider::{BackendKind, LightingProvider, ProviderError};

/// Deadline shared by all probes when none is configured.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors surfaced to callers of the coordinator.
#[derive(Debug, Error)]
pub enum LightingError {
    #[error("lighting has not been initialized")]
    NotInitialized,
    #[error("lighting is already initialized; dispose it first")]
    AlreadyInitialized,
    #[error(transparent)]
    Range(#[from] GridError),
}

/// A registered provider and its registration index.
struct Slot {
    order: usize,
    provider: Box<dyn LightingProvider>,
}

/// Where a provider is while its `initialize` runs.
enum AttemptState {
    Running,
    Finished { slot: Slot, joined: bool },
    /// The coordinator stopped waiting; the thread releases the provider.
    Abandoned,
}

/// One provider's `initialize` running on a blocking thread.
struct Attempt {
    kind: BackendKind,
    outcome: Arc<Mutex<AttemptState>>,
    handle: JoinHandle<()>,
}

/// Owns every registered backend and fans color requests out to the active ones.
pub struct LightingCoordinator {
    standby: Vec<Slot>,
    active: Option<Vec<Slot>>,
    /// Attempts not yet settled by an `initialize` call.
    pending: Vec<Attempt>,
    /// Providers that came up during an `initialize` that has not finished.
    joining: Vec<Slot>,
    /// Abandoned providers handed back by their blocking threads.
    late: Arc<Mutex<Vec<Slot>>>,
    probe_timeout: Duration,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl LightingCoordinator {
    /// Registers `providers` in the given order.  Nothing is probed yet.
    pub fn new(providers: Vec<Box<dyn LightingProvider>>) -> Self {
        let standby = providers
            .into_iter()
            .enumerate()
            .map(|(order, provider)| Slot { order, provider })
            .collect();
        Self {
            standby,
            active: None,
            pending: Vec::new(),
            joining: Vec::new(),
            late: Arc::new(Mutex::new(Vec::new())),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    /// Overrides the deadline shared by all probes of one `initialize`.
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Probes every standby provider and activates the ones that come up.
    ///
    /// Returns `Ok(true)` if at least one backend joined.  The coordinator
    /// counts as initialized even when none did.
    ///
    /// # Errors
    ///
    /// Returns [`LightingError::AlreadyInitialized`] if called twice without
    /// an intervening [`dispose`](Self::dispose).
    pub async fn initialize(&mut self) -> Result<bool, LightingError> {
        if self.active.is_some() {
            return Err(LightingError::AlreadyInitialized);
        }

        self.standby.append(&mut lock(&self.late));
        for slot in mem::take(&mut self.standby) {
            let attempt = self.spawn_attempt(slot);
            self.pending.push(attempt);
        }

        let deadline = Instant::now() + self.probe_timeout;
        while let Some(attempt) = self.pending.first_mut() {
            let finished = timeout_at(deadline, &mut attempt.handle).await;
            let attempt = self.pending.remove(0);
            self.settle(attempt, finished);
        }

        let mut active = mem::take(&mut self.joining);
        active.sort_by_key(|slot| slot.order);
        self.standby.sort_by_key(|slot| slot.order);

        let joined = !active.is_empty();
        info!(
            active = ?active.iter().map(|s| s.provider.kind()).collect::<Vec<_>>(),
            "lighting initialized"
        );
        self.active = Some(active);
        Ok(joined)
    }

    fn spawn_attempt(&self, mut slot: Slot) -> Attempt {
        let kind = slot.provider.kind();
        let outcome = Arc::new(Mutex::new(AttemptState::Running));
        let shared = Arc::clone(&outcome);
        let late = Arc::clone(&self.late);
        let handle = tokio::task::spawn_blocking(move || {
            let joined = slot.provider.initialize();
            let mut state = lock(&shared);
            if matches!(*state, AttemptState::Running) {
                *state = AttemptState::Finished { slot, joined };
                return;
            }
            drop(state);
            if joined {
                slot.provider.dispose();
            }
            debug!(backend = %kind, joined, "late backend released to standby");
            lock(&late).push(slot);
        });
        Attempt {
            kind,
            outcome,
            handle,
        }
    }

    /// Files the provider of an attempt that finished or ran out of time.
    fn settle(&mut self, attempt: Attempt, finished: Result<Result<(), JoinError>, Elapsed>) {
        let kind = attempt.kind;
        let outcome = mem::replace(&mut *lock(&attempt.outcome), AttemptState::Abandoned);
        match (outcome, finished) {
            (AttemptState::Finished { slot, joined: true }, _) => {
                debug!(backend = %kind, "backend joined the active set");
                self.joining.push(slot);
            }
            (AttemptState::Finished { slot, joined: false }, _) => {
                warn!(backend = %kind, "backend failed to initialize");
                self.standby.push(slot);
            }
            (_, Ok(Err(e))) => {
                warn!(backend = %kind, "backend probe aborted: {e}");
            }
            (_, _) => {
                warn!(
                    backend = %kind,
                    timeout_ms = self.probe_timeout.as_millis() as u64,
                    "backend probe timed out; leaving it out"
                );
            }
        }
    }

    /// Releases every active backend and returns to the uninitialized state.
    ///
    /// Never fails.  Calling it twice, or before `initialize`, does nothing.
    /// Providers that came up during a cancelled `initialize` are released too.
    pub fn dispose(&mut self) {
        if self.active.is_none() && self.joining.is_empty() {
            return;
        }
        let mut released = self.active.take().unwrap_or_default();
        released.append(&mut self.joining);
        for mut slot in released {
            slot.provider.dispose();
            self.standby.push(slot);
        }
        self.standby.sort_by_key(|slot| slot.order);
        info!("lighting disposed");
    }

    pub fn is_initialized(&self) -> bool {
        self.active.is_some()
    }

    /// Whether a backend of `kind` is in the active set.
    pub fn is_enabled(&self, kind: BackendKind) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.iter().any(|s| s.provider.kind() == kind))
    }

    /// Kinds of the active backends in registration order; empty when
    /// uninitialized.
    pub fn active_backends(&self) -> Vec<BackendKind> {
        self.active
            .iter()
            .flatten()
            .map(|s| s.provider.kind())
            .collect()
    }

    /// Sets every LED on every device.
    ///
    /// # Errors
    ///
    /// Returns [`LightingError::NotInitialized`] before `initialize`.
    pub fn set_all(&mut self, color: impl Into<Color>) -> Result<(), LightingError> {
        let color = color.into();
        self.for_each("set_all", |p| p.set_all(color))
    }

    /// Sets every keyboard LED.
    ///
    /// # Errors
    ///
    /// Returns [`LightingError::NotInitialized`] before `initialize`.
    pub fn set_keyboard_all(&mut self, color: impl Into<Color>) -> Result<(), LightingError> {
        let color = color.into();
        self.for_each("set_keyboard_all", |p| p.set_keyboard_all(color))
    }

    /// Sets the keyboard LEDs at canonical cell `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`LightingError::Range`] if the cell is outside the 22×6
    /// grid (no backend is called), or [`LightingError::NotInitialized`].
    pub fn set_position(
        &mut self,
        x: i32,
        y: i32,
        color: impl Into<Color>,
    ) -> Result<(), LightingError> {
        let position = CanonicalPosition::new(x, y)?;
        let color = color.into();
        self.for_each("set_position", |p| p.set_position(position, color))
    }

    /// Sets the keyboard LEDs inside the rectangle at `(x, y)` of
    /// `width × height` cells.
    ///
    /// # Errors
    ///
    /// Returns [`LightingError::Range`] if any part of the rectangle lies
    /// outside the grid (no backend is called), or
    /// [`LightingError::NotInitialized`].
    pub fn set_area(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: impl Into<Color>,
    ) -> Result<(), LightingError> {
        let area = GridArea::new(x, y, width, height)?;
        let color = color.into();
        self.for_each("set_area", |p| p.set_area(area, color))
    }

    /// Sets the LED of `key` on every backend that can address it.
    ///
    /// # Errors
    ///
    /// Returns [`LightingError::NotInitialized`] before `initialize`.
    pub fn set_key(&mut self, key: CanonicalKey, color: impl Into<Color>) -> Result<(), LightingError> {
        let color = color.into();
        self.for_each("set_key", |p| p.set_key(key, color))
    }

    /// Sets every mouse LED.
    ///
    /// # Errors
    ///
    /// Returns [`LightingError::NotInitialized`] before `initialize`.
    pub fn set_mouse(&mut self, color: impl Into<Color>) -> Result<(), LightingError> {
        let color = color.into();
        self.for_each("set_mouse", |p| p.set_mouse(color))
    }

    fn for_each<F>(&mut self, op: &'static str, mut call: F) -> Result<(), LightingError>
    where
        F: FnMut(&mut dyn LightingProvider) -> Result<(), ProviderError>,
    {
        let active = self.active.as_mut().ok_or(LightingError::NotInitialized)?;
        for slot in active.iter_mut() {
            let kind = slot.provider.kind();
            debug!(backend = %kind, op, "dispatching");
            if let Err(e) = call(slot.provider.as_mut()) {
                warn!(backend = %kind, op, "backend call failed: {e}");
            }
        }
        Ok(())
    }
}

impl Drop for LightingCoordinator {
    fn drop(&mut self) {
        self.dispose();
        for attempt in self.pending.drain(..) {
            let outcome = mem::replace(&mut *lock(&attempt.outcome), AttemptState::Abandoned);
            if let AttemptState::Finished {
                mut slot,
                joined: true,
            } = outcome
            {
                slot.provider.dispose();
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
