use alloc::sync::Arc;

use crate::{any::downcast, arguments::Arguments, dependency_resolver::DependencyResolver, errors::InstantiateErrorKind};

/// Factory parameter holding the shared instance of the dependency at its position.
pub struct Inject<Dep>(pub Arc<Dep>);

impl<Dep: Send + Sync + 'static> DependencyResolver for Inject<Dep> {
    type Error = InstantiateErrorKind;

    fn resolve(arguments: &mut Arguments) -> Result<Self, Self::Error> {
        let position = arguments.position();
        let instance = arguments.next_slot()?;

        downcast::<Dep>(instance)
            .map(Self)
            .map_err(|expected| InstantiateErrorKind::IncorrectType { position, expected })
    }

    #[inline]
    fn type_name() -> &'static str {
        core::any::type_name::<Dep>()
    }
}

#[cfg(test)]
mod tests {
    use super::Inject;
    use crate::{any::Instance, arguments::Arguments, DependencyResolver as _, InstantiateErrorKind};

    use alloc::{sync::Arc, vec};

    struct Config(&'static str);

    #[test]
    fn test_inject_shares_instance() {
        let instance: Instance = Arc::new(Config("url"));
        let mut arguments = Arguments::new(vec![instance.clone()]);

        let Inject(config) = Inject::<Config>::resolve(&mut arguments).unwrap();

        assert_eq!(config.0, "url");
        assert_eq!(Arc::strong_count(&config), 2);
    }

    #[test]
    fn test_inject_incorrect_type() {
        let mut arguments = Arguments::new(vec![Arc::new(1u32) as Instance]);

        let result = Inject::<Config>::resolve(&mut arguments);

        assert!(matches!(
            result,
            Err(InstantiateErrorKind::IncorrectType { position: 0, expected }) if expected.ends_with("Config")
        ));
    }

    #[test]
    fn test_inject_type_name() {
        assert!(Inject::<Config>::type_name().ends_with("Config"));
    }
}
