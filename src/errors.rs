mod injector;
mod instantiate;

pub use injector::{InjectorError, InjectorErrorKind};
pub use instantiate::InstantiateErrorKind;
