use alloc::sync::Arc;
use core::any::{type_name, Any};

/// A resolved module, shared between the registry and every module it was injected into.
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Downcasts an instance, returning the expected type name on mismatch.
#[inline]
pub(crate) fn downcast<T: Send + Sync + 'static>(instance: Instance) -> Result<Arc<T>, &'static str> {
    instance.downcast::<T>().map_err(|_| type_name::<T>())
}
