/// Builds a [`crate::Registry`] from a list of entries.
///
/// The optional first entry `scope(..)` sets the scope label.
/// Then `value(name, value)` registers a value and `provide(name, instantiator [, [dependencies]])` registers a factory.
/// Evaluates to `Result<Registry, InjectorError>` with the first registration error.
///
/// # Examples
/// ```rust
/// use injector::{registry, Inject};
///
/// struct Config(&'static str);
/// struct Client(std::sync::Arc<Config>);
///
/// let mut registry = registry! {
///     scope("app"),
///     provide("client", |Inject(config): Inject<Config>| Ok(Client(config)), ["config"]),
///     value("config", Config("localhost")),
/// }?;
///
/// assert_eq!(registry.resolve_as::<Client>("client")?.0 .0, "localhost");
/// # Ok::<(), injector::InjectorError>(())
/// ```
#[macro_export]
macro_rules! registry {
    (
        scope($scope:expr) $(, $kind:ident ( $( $args:tt )* ) )* $(,)?
    ) => {{
        (|| -> ::core::result::Result<$crate::Registry, $crate::InjectorError> {
            #[allow(unused_mut)]
            let mut registry = $crate::Registry::new($scope);
            $( $crate::registry_internal! { @entry registry, $kind ( $( $args )* ) } )*
            ::core::result::Result::Ok(registry)
        })()
    }};

    (
        $( $kind:ident ( $( $args:tt )* ) ),* $(,)?
    ) => {
        $crate::registry! { scope("") $(, $kind ( $( $args )* ) )* }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! registry_internal {
    // Example: registry_internal! { @entry registry, value("config", Config) }
    (@entry $registry:ident, value( $name:expr, $value:expr $(,)? )) => {
        $registry.provide_value($name, $value)?;
    };

    // Example: registry_internal! { @entry registry, provide("client", inst_client, ["config"]) }
    (@entry $registry:ident, provide( $name:expr, $inst:expr, [ $( $dep:expr ),* $(,)? ] $(,)? )) => {
        $registry.provide($name, $inst, &[ $( $dep ),* ])?;
    };

    // Example: registry_internal! { @entry registry, provide("config", inst_config) }
    (@entry $registry:ident, provide( $name:expr, $inst:expr $(,)? )) => {
        $registry.provide($name, $inst, &[])?;
    };
}
