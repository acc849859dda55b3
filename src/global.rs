use once_cell::sync::Lazy;
use parking_lot::{Mutex, MutexGuard};

use crate::registry::Registry;

/// Scope label of the [`global`] registry
pub const GLOBAL_SCOPE: &str = "GLOBAL";

static GLOBAL_REGISTRY: Lazy<Mutex<Registry>> = Lazy::new(|| Mutex::new(Registry::new(GLOBAL_SCOPE)));

/// Locks the process-wide default registry, creating it on first access.
///
/// It behaves exactly like a registry created with [`Registry::new`],
/// it's just shared. Prefer passing an own [`Registry`] around where possible.
///
/// # Warning
/// The guard must be dropped before calling [`global`] again on the same thread, otherwise it deadlocks.
/// Factories are called with the lock held, so they must not call [`global`] either.
pub fn global() -> MutexGuard<'static, Registry> {
    GLOBAL_REGISTRY.lock()
}
