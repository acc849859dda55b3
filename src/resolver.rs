use alloc::{collections::BTreeSet, string::String, sync::Arc, vec::Vec};
use core::iter;
use tracing::{debug, debug_span, error, info_span, warn};

use crate::{
    any::{downcast, Instance},
    arguments::Arguments,
    errors::{InjectorError, InjectorErrorKind},
    injectable::Injectable,
    path::ResolvePath,
    registry::Registry,
};

impl Registry {
    /// Resolves a module, constructing it and its unresolved dependencies first.
    ///
    /// Every module is constructed at most once, later calls return the same instance.
    ///
    /// # Errors
    /// - Returns [`InjectorErrorKind::NotFound`] if `name` isn't registered
    /// - Returns [`InjectorErrorKind::CircularDependency`] if the module depends on itself, directly or transitively
    /// - Returns [`InjectorErrorKind::UnresolvedDependency`] if any declared dependency isn't registered
    /// - Returns [`InjectorErrorKind::Instantiate`] if a factory fails
    ///
    /// A module that failed stays unresolved, so it can be resolved again after the registration is fixed.
    pub fn resolve(&mut self, name: &str) -> Result<Instance, InjectorError> {
        let span = info_span!("resolve", module = name, scope = %self.scope);
        let _guard = span.enter();

        let Some(&index) = self.index.get(name) else {
            let err = self.error(InjectorErrorKind::NotFound { name: String::from(name) });
            error!("{}", err);
            return Err(err);
        };

        if let Some(instance) = &self.modules[index].instance {
            debug!("Found resolved");
            return Ok(instance.clone());
        }
        debug!("Not resolved");

        self.resolve_for(index, &mut ResolvePath::new())
    }

    /// Typed [`Self::resolve`]
    ///
    /// # Errors
    /// Same as [`Self::resolve`], and [`InjectorErrorKind::IncorrectType`] if the instance has another type.
    /// The module stays resolved in the last case.
    pub fn resolve_as<T: Send + Sync + 'static>(&mut self, name: &str) -> Result<Arc<T>, InjectorError> {
        let instance = self.resolve(name)?;

        downcast(instance).map_err(|expected| {
            let err = self.error(InjectorErrorKind::IncorrectType {
                name: String::from(name),
                expected,
            });
            error!("{}", err);
            err
        })
    }

    /// Resolves every module that isn't resolved yet, in registration order.
    ///
    /// # Errors
    /// Returns the first error of [`Self::resolve`].
    /// Modules resolved before the error stay resolved.
    pub fn resolve_all(&mut self) -> Result<(), InjectorError> {
        let span = info_span!("resolve_all", scope = %self.scope);
        let _guard = span.enter();

        for index in 0..self.modules.len() {
            if self.modules[index].is_resolved() {
                continue;
            }
            self.resolve_for(index, &mut ResolvePath::new())?;
        }

        debug!(count = self.modules.len(), "All resolved");
        Ok(())
    }

    /// Checks the whole dependency graph for cycles without constructing anything.
    /// Dependencies that aren't registered are skipped.
    ///
    /// # Errors
    /// Returns [`InjectorErrorKind::CircularDependency`] with the first cycle found.
    pub fn check_cycles(&self) -> Result<(), InjectorError> {
        let mut visited = BTreeSet::new();
        let mut stack = Vec::new();

        for index in 0..self.modules.len() {
            if let Some(closing) = self.dfs_visit(index, &mut visited, &mut stack) {
                let start = stack.iter().position(|&entered| entered == closing).unwrap_or_default();
                let path = stack[start..]
                    .iter()
                    .chain(iter::once(&closing))
                    .map(|&index| self.modules[index].name.clone())
                    .collect();

                let err = self.error(InjectorErrorKind::CircularDependency {
                    name: self.modules[closing].name.clone(),
                    path,
                });
                error!("{}", err);
                return Err(err);
            }
        }
        Ok(())
    }
}

impl Registry {
    fn resolve_for(&mut self, index: usize, path: &mut ResolvePath) -> Result<Instance, InjectorError> {
        let span = debug_span!("resolve_for", module = %self.modules[index].name);
        let _guard = span.enter();

        if let Err(cycle) = path.enter(&self.modules[index].name) {
            let err = self.error(InjectorErrorKind::CircularDependency {
                name: self.modules[index].name.clone(),
                path: cycle,
            });
            error!("{}", err);
            return Err(err);
        }

        let result = self.construct(index, path);
        path.leave();
        result
    }

    fn construct(&mut self, index: usize, path: &mut ResolvePath) -> Result<Instance, InjectorError> {
        let dependencies = self.modules[index].dependencies.clone();

        let mut slots = Vec::with_capacity(dependencies.len());
        let mut missing = Vec::new();
        for dependency in dependencies {
            let Some(&dependency_index) = self.index.get(&dependency) else {
                warn!(dependency = %dependency, "Dependency not registered");
                missing.push(dependency);
                continue;
            };

            let instance = match &self.modules[dependency_index].instance {
                Some(instance) => {
                    debug!(dependency = %dependency, "Found resolved");
                    instance.clone()
                }
                None => self.resolve_for(dependency_index, path)?,
            };
            slots.push(instance);
        }

        if !missing.is_empty() {
            let err = self.error(InjectorErrorKind::UnresolvedDependency {
                name: self.modules[index].name.clone(),
                missing,
            });
            error!("{}", err);
            return Err(err);
        }

        let module = &mut self.modules[index];
        let constructed = match &mut module.injectable {
            Injectable::Value(value) => Ok(value.clone()),
            Injectable::Constructible(factory) => factory.call(Arguments::new(slots)),
        };

        match constructed {
            Ok(instance) => {
                module.instance = Some(instance.clone());
                debug!("Resolved");
                Ok(instance)
            }
            Err(source) => {
                let err = self.error(InjectorErrorKind::Instantiate {
                    name: self.modules[index].name.clone(),
                    source,
                });
                error!("{}", err);
                Err(err)
            }
        }
    }

    fn dfs_visit(&self, index: usize, visited: &mut BTreeSet<usize>, stack: &mut Vec<usize>) -> Option<usize> {
        if visited.contains(&index) {
            return None;
        }
        if stack.contains(&index) {
            return Some(index);
        }
        stack.push(index);

        for dependency in &self.modules[index].dependencies {
            if let Some(&dependency_index) = self.index.get(dependency) {
                if let Some(closing) = self.dfs_visit(dependency_index, visited, stack) {
                    return Some(closing);
                }
            }
        }

        stack.pop();
        visited.insert(index);
        None
    }
}
