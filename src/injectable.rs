use alloc::{boxed::Box, sync::Arc};
use core::fmt::{self, Debug, Formatter};

use crate::{
    any::Instance,
    arguments::Arguments,
    dependency_resolver::DependencyResolver,
    errors::InstantiateErrorKind,
    instantiator::{boxed_instantiator, Instantiator},
};

/// Boxed constructor of a module, called with its positional arguments.
pub struct Factory(Box<dyn FnMut(Arguments) -> Result<Instance, InstantiateErrorKind> + Send + Sync>);

impl Factory {
    #[inline]
    #[must_use]
    pub(crate) fn new(f: Box<dyn FnMut(Arguments) -> Result<Instance, InstantiateErrorKind> + Send + Sync>) -> Self {
        Self(f)
    }

    #[inline]
    pub(crate) fn call(&mut self, arguments: Arguments) -> Result<Instance, InstantiateErrorKind> {
        (self.0)(arguments)
    }
}

impl Debug for Factory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Factory")
    }
}

/// What a module is made of.
///
/// A [`Injectable::Value`] is used as is and never invoked, so it has no dependencies.
/// A [`Injectable::Constructible`] is invoked once with its resolved dependencies.
#[derive(Debug)]
pub enum Injectable {
    Value(Instance),
    Constructible(Factory),
}

impl Injectable {
    /// Wraps a value created outside the registry.
    #[inline]
    #[must_use]
    pub fn value<T: Send + Sync + 'static>(value: T) -> Self {
        Self::Value(Arc::new(value))
    }

    #[inline]
    #[must_use]
    pub fn from_instance(instance: Instance) -> Self {
        Self::Value(instance)
    }

    #[inline]
    #[must_use]
    pub fn factory<Inst, Deps>(instantiator: Inst) -> Self
    where
        Inst: Instantiator<Deps> + Send + Sync,
        Deps: DependencyResolver,
    {
        Self::Constructible(boxed_instantiator(instantiator))
    }

    #[inline]
    #[must_use]
    pub const fn is_constructible(&self) -> bool {
        matches!(self, Self::Constructible(_))
    }
}
