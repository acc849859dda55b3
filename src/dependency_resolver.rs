use core::any::type_name;

use crate::{any::Instance, arguments::Arguments, errors::InstantiateErrorKind};

/// Extracts a factory parameter from its positional arguments.
///
/// Single parameters take exactly one slot, tuples take one slot per element in order.
pub trait DependencyResolver: Sized {
    type Error: Into<InstantiateErrorKind>;

    fn resolve(arguments: &mut Arguments) -> Result<Self, Self::Error>;

    #[inline]
    #[must_use]
    fn type_name() -> &'static str {
        type_name::<Self>()
    }
}

impl DependencyResolver for Instance {
    type Error = InstantiateErrorKind;

    #[inline]
    fn resolve(arguments: &mut Arguments) -> Result<Self, Self::Error> {
        arguments.next_slot()
    }
}

impl DependencyResolver for Arguments {
    type Error = InstantiateErrorKind;

    #[inline]
    fn resolve(arguments: &mut Arguments) -> Result<Self, Self::Error> {
        Ok(arguments.take_rest())
    }
}

macro_rules! impl_dependency_resolver {
    (
        [$($ty:ident),*]
    ) => {
        #[allow(non_snake_case, unused_mut)]
        impl<$($ty,)*> DependencyResolver for ($($ty,)*)
        where
            $( $ty: DependencyResolver, )*
        {
            type Error = InstantiateErrorKind;

            #[inline]
            #[allow(unused_variables)]
            fn resolve(arguments: &mut Arguments) -> Result<Self, Self::Error> {
                Ok(($($ty::resolve(arguments).map_err(Into::into)?,)*))
            }
        }
    };
}

all_the_tuples!(impl_dependency_resolver);

#[cfg(test)]
mod tests {
    use super::DependencyResolver;
    use crate::{any::Instance, arguments::Arguments, inject::Inject, InstantiateErrorKind};

    use alloc::{sync::Arc, vec};

    struct A(u8);
    struct B(u8);

    #[test]
    #[allow(dead_code)]
    fn test_dependency_resolver_impls() {
        fn resolver<T: DependencyResolver>() {}
        fn resolver_with_dep<Dep: Send + Sync + 'static>() {
            resolver::<Inject<Dep>>();
            resolver::<Instance>();
            resolver::<Arguments>();
            resolver::<(Inject<Dep>, Instance, Arguments)>();
        }
    }

    #[test]
    fn test_tuple_resolve_in_order() {
        let mut arguments = Arguments::new(vec![Arc::new(A(1)) as Instance, Arc::new(B(2))]);

        let (Inject(a), Inject(b)) = <(Inject<A>, Inject<B>)>::resolve(&mut arguments).unwrap();

        assert_eq!(a.0, 1);
        assert_eq!(b.0, 2);
    }

    #[test]
    fn test_tuple_resolve_swapped_types() {
        let mut arguments = Arguments::new(vec![Arc::new(A(1)) as Instance, Arc::new(B(2))]);

        let result = <(Inject<B>, Inject<A>)>::resolve(&mut arguments);

        assert!(matches!(
            result,
            Err(InstantiateErrorKind::IncorrectType { position: 0, .. })
        ));
    }

    #[test]
    fn test_tuple_resolve_missing_argument() {
        let mut arguments = Arguments::new(vec![Arc::new(A(1)) as Instance]);

        let result = <(Inject<A>, Instance)>::resolve(&mut arguments);

        assert!(matches!(result, Err(InstantiateErrorKind::MissingArgument { position: 1 })));
    }

    #[test]
    fn test_rest_arguments() {
        let mut arguments = Arguments::new(vec![Arc::new(A(1)) as Instance, Arc::new(B(2)), Arc::new(B(3))]);

        let (Inject(a), rest) = <(Inject<A>, Arguments)>::resolve(&mut arguments).unwrap();

        assert_eq!(a.0, 1);
        assert_eq!(rest.len(), 2);
    }
}
