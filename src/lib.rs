//! Light-weight dependency injection by module name.
//!
//! A [`Registry`] maps names to [`Injectable`]s together with the names of their
//! dependencies. Resolution walks the dependency graph depth-first, constructs
//! every module at most once and passes resolved dependencies to factories
//! positionally, in the order they were declared.
//!
//! ```rust
//! use injector::{Inject, Registry};
//!
//! struct Config {
//!     url: &'static str,
//! }
//!
//! struct Database {
//!     url: &'static str,
//! }
//!
//! let mut registry = Registry::new("app");
//! registry
//!     .provide(
//!         "database",
//!         |Inject(config): Inject<Config>| Ok(Database { url: config.url }),
//!         &["config"],
//!     )?
//!     .provide_value("config", Config { url: "postgres://localhost" })?;
//!
//! let database = registry.resolve_as::<Database>("database")?;
//! assert_eq!(database.url, "postgres://localhost");
//! # Ok::<(), injector::InjectorError>(())
//! ```
#![no_std]

extern crate alloc;

#[macro_use]
pub(crate) mod macros;

pub(crate) mod any;
pub(crate) mod arguments;
pub(crate) mod dependency_resolver;
pub(crate) mod errors;
pub(crate) mod inject;
pub(crate) mod injectable;
pub(crate) mod instantiator;
pub(crate) mod path;
pub(crate) mod registry;
pub(crate) mod registry_macros;
pub(crate) mod resolver;

#[cfg(feature = "global")]
pub(crate) mod global;

pub use any::Instance;
pub use arguments::Arguments;
pub use dependency_resolver::DependencyResolver;
pub use errors::{InjectorError, InjectorErrorKind, InstantiateErrorKind};
pub use inject::Inject;
pub use injectable::{Factory, Injectable};
pub use instantiator::Instantiator;
pub use path::ResolvePath;
pub use registry::Registry;

#[cfg(feature = "global")]
pub use global::{global, GLOBAL_SCOPE};
