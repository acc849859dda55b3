use alloc::{
    collections::BTreeMap,
    string::String,
    sync::Arc,
    vec::Vec,
};
use tracing::{debug, error};

use crate::{
    any::{downcast, Instance},
    dependency_resolver::DependencyResolver,
    errors::{InjectorError, InjectorErrorKind, InstantiateErrorKind},
    injectable::Injectable,
    instantiator::{boxed_instantiator, Instantiator},
};

#[derive(Debug)]
pub(crate) struct Module {
    pub(crate) name: String,
    pub(crate) injectable: Injectable,
    pub(crate) dependencies: Vec<String>,
    pub(crate) instance: Option<Instance>,
}

impl Module {
    #[inline]
    #[must_use]
    pub(crate) const fn is_resolved(&self) -> bool {
        self.instance.is_some()
    }
}

/// Named modules of a single scope.
///
/// Every registry is an independent namespace. The scope label only appears in error messages.
#[derive(Debug, Default)]
pub struct Registry {
    pub(crate) scope: String,
    pub(crate) modules: Vec<Module>,
    pub(crate) index: BTreeMap<String, usize>,
}

impl Registry {
    #[inline]
    #[must_use]
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            modules: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Registers a module under a unique name.
    ///
    /// `dependencies` are names of other modules, passed to the factory in the same order.
    /// They're ignored for [`Injectable::Value`], because a value isn't invoked.
    /// The dependencies don't have to be registered yet.
    ///
    /// # Errors
    /// - Returns [`InjectorErrorKind::InvalidName`] if `name` is empty
    /// - Returns [`InjectorErrorKind::InvalidFactory`] if `injectable` is absent
    /// - Returns [`InjectorErrorKind::DuplicateName`] if `name` is already registered.
    ///   The registered module isn't changed in this case.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        injectable: impl Into<Option<Injectable>>,
        dependencies: &[&str],
    ) -> Result<&mut Self, InjectorError> {
        let name = name.into();

        if name.is_empty() {
            return Err(self.registration_error(InjectorErrorKind::InvalidName { name }));
        }
        let Some(injectable) = injectable.into() else {
            return Err(self.registration_error(InjectorErrorKind::InvalidFactory { name }));
        };
        if self.index.contains_key(&name) {
            return Err(self.registration_error(InjectorErrorKind::DuplicateName { name }));
        }

        let dependencies = if injectable.is_constructible() {
            dependencies.iter().map(|dependency| String::from(*dependency)).collect()
        } else {
            Vec::new()
        };

        debug!(module = %name, ?dependencies, "Registered");

        self.index.insert(name.clone(), self.modules.len());
        self.modules.push(Module {
            name,
            injectable,
            dependencies,
            instance: None,
        });

        Ok(self)
    }

    /// Registers a factory, see [`Self::register`]
    ///
    /// The factory must return [`InstantiateErrorKind`] as its error, so closures like `|| Ok(Config)` infer it.
    /// Other errors convert with `?`, for example an [`anyhow::Error`].
    /// A factory with another error type can still be registered with [`Injectable::factory`].
    ///
    /// # Errors
    /// See [`Self::register`]
    #[inline]
    pub fn provide<Inst, Deps>(
        &mut self,
        name: impl Into<String>,
        instantiator: Inst,
        dependencies: &[&str],
    ) -> Result<&mut Self, InjectorError>
    where
        Inst: Instantiator<Deps, Error = InstantiateErrorKind> + Send + Sync,
        Deps: DependencyResolver,
    {
        self.register(name, Injectable::Constructible(boxed_instantiator(instantiator)), dependencies)
    }

    /// Registers a value created outside the registry, see [`Self::register`]
    ///
    /// # Errors
    /// See [`Self::register`]
    #[inline]
    pub fn provide_value<T: Send + Sync + 'static>(&mut self, name: impl Into<String>, value: T) -> Result<&mut Self, InjectorError> {
        self.register(name, Injectable::value(value), &[])
    }

    /// Gets the instance of an already resolved module.
    /// Returns `None` if the module isn't registered or isn't resolved yet, it never resolves it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Instance> {
        self.module(name).and_then(|module| module.instance.clone())
    }

    /// Typed [`Self::get`].
    /// Returns `None` also if the instance has another type.
    #[must_use]
    pub fn get_as<T: Send + Sync + 'static>(&self, name: &str) -> Option<Arc<T>> {
        self.get(name).and_then(|instance| downcast(instance).ok())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[inline]
    #[must_use]
    pub fn is_resolved(&self, name: &str) -> bool {
        self.module(name).is_some_and(Module::is_resolved)
    }

    /// Declared dependencies of a module, empty for values
    #[inline]
    #[must_use]
    pub fn dependencies(&self, name: &str) -> Option<&[String]> {
        self.module(name).map(|module| module.dependencies.as_slice())
    }

    /// Names of registered modules in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|module| module.name.as_str())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Registry {
    #[inline]
    pub(crate) fn module(&self, name: &str) -> Option<&Module> {
        self.index.get(name).map(|&index| &self.modules[index])
    }

    #[inline]
    #[must_use]
    pub(crate) fn error(&self, kind: InjectorErrorKind) -> InjectorError {
        InjectorError::new(&self.scope, kind)
    }

    #[must_use]
    fn registration_error(&self, kind: InjectorErrorKind) -> InjectorError {
        let err = self.error(kind);
        error!("{}", err);
        err
    }
}
