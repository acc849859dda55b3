use alloc::{string::String, vec::Vec};

use super::instantiate::InstantiateErrorKind;

/// Error raised by a [`crate::Registry`], tagged with the registry scope.
#[derive(thiserror::Error, Debug)]
#[error("Injector[{scope}]: {kind}")]
pub struct InjectorError {
    pub scope: String,
    pub kind: InjectorErrorKind,
}

impl InjectorError {
    #[inline]
    #[must_use]
    pub(crate) fn new(scope: &str, kind: InjectorErrorKind) -> Self {
        Self {
            scope: String::from(scope),
            kind,
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> &InjectorErrorKind {
        &self.kind
    }

    #[inline]
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }
}

#[derive(thiserror::Error, Debug)]
pub enum InjectorErrorKind {
    #[error("\"{name}\" is not valid module name")]
    InvalidName { name: String },
    #[error("Absent injectable cannot be registered as module \"{name}\"")]
    InvalidFactory { name: String },
    #[error("Module \"{name}\" already registered")]
    DuplicateName { name: String },
    #[error("Could not find module \"{name}\"")]
    NotFound { name: String },
    #[error("Circular dependency in \"{name}\" module: {}", path.join(" -> "))]
    CircularDependency { name: String, path: Vec<String> },
    #[error("Module \"{name}\" has unresolved dependencies: {}", missing.join(", "))]
    UnresolvedDependency { name: String, missing: Vec<String> },
    #[error("Module \"{name}\" failed to instantiate: {source}")]
    Instantiate {
        name: String,
        #[source]
        source: InstantiateErrorKind,
    },
    #[error("Module \"{name}\" has incorrect type, expected: {expected}")]
    IncorrectType { name: String, expected: &'static str },
}

impl InjectorErrorKind {
    /// Name of the module the error is about.
    #[must_use]
    pub fn module_name(&self) -> &str {
        match self {
            Self::InvalidName { name }
            | Self::InvalidFactory { name }
            | Self::DuplicateName { name }
            | Self::NotFound { name }
            | Self::CircularDependency { name, .. }
            | Self::UnresolvedDependency { name, .. }
            | Self::Instantiate { name, .. }
            | Self::IncorrectType { name, .. } => name,
        }
    }
}
