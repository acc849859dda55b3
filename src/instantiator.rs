use alloc::{boxed::Box, sync::Arc};
use tracing::debug;

use crate::{
    any::Instance, arguments::Arguments, dependency_resolver::DependencyResolver, errors::InstantiateErrorKind,
    injectable::Factory,
};

/// Constructs a module from its resolved dependencies.
///
/// Implemented for closures and functions of up to 16 parameters,
/// where every parameter is a [`DependencyResolver`] taking its value from the matching positional slot.
pub trait Instantiator<Deps>: 'static
where
    Deps: DependencyResolver,
{
    type Provides: Send + Sync + 'static;
    type Error: Into<InstantiateErrorKind>;

    fn instantiate(&mut self, dependencies: Deps) -> Result<Self::Provides, Self::Error>;
}

#[must_use]
pub(crate) fn boxed_instantiator<Inst, Deps>(mut instantiator: Inst) -> Factory
where
    Inst: Instantiator<Deps> + Send + Sync,
    Deps: DependencyResolver,
{
    Factory::new(Box::new(move |mut arguments: Arguments| {
        let dependencies = Deps::resolve(&mut arguments).map_err(Into::into)?;
        let dependency = instantiator.instantiate(dependencies).map_err(Into::into)?;

        debug!("Instantiated");

        Ok(Arc::new(dependency) as Instance)
    }))
}

macro_rules! impl_instantiator {
    (
        [$($ty:ident),*]
    ) => {
        #[allow(non_snake_case)]
        impl<F, Response, Err, $($ty,)*> Instantiator<($($ty,)*)> for F
        where
            F: FnMut($($ty,)*) -> Result<Response, Err> + 'static,
            Response: Send + Sync + 'static,
            Err: Into<InstantiateErrorKind>,
            $( $ty: DependencyResolver, )*
        {
            type Provides = Response;
            type Error = Err;

            #[inline]
            fn instantiate(&mut self, ($($ty,)*): ($($ty,)*)) -> Result<Self::Provides, Self::Error> {
                self($($ty,)*)
            }
        }
    };
}

all_the_tuples!(impl_instantiator);

#[cfg(test)]
mod tests {
    extern crate std;

    use super::{boxed_instantiator, DependencyResolver, InstantiateErrorKind, Instantiator};
    use crate::{any::Instance, arguments::Arguments, inject::Inject};

    use alloc::{
        format,
        string::{String, ToString as _},
        sync::Arc,
        vec,
    };
    use core::sync::atomic::{AtomicU8, Ordering};
    use tracing::debug;
    use tracing_test::traced_test;

    struct Request(bool);
    struct Response(bool);

    #[test]
    #[allow(dead_code)]
    fn test_instantiator_helper() {
        fn instantiator<Deps: DependencyResolver, F: Instantiator<Deps>>(_f: F) {}
        fn instantiator_with_dep() {
            instantiator(|| Ok::<_, InstantiateErrorKind>(()));
            instantiator(|Inject(_): Inject<u8>| Ok::<_, InstantiateErrorKind>(()));
            instantiator(|_: Instance, _: Arguments| Ok::<_, anyhow::Error>(()));
        }
    }

    #[test]
    #[traced_test]
    fn test_boxed_instantiator() {
        let call_count = Arc::new(AtomicU8::new(0));

        let mut factory = boxed_instantiator({
            let call_count = call_count.clone();
            move |Inject(request): Inject<Request>, Inject(flag): Inject<bool>| {
                call_count.fetch_add(1, Ordering::SeqCst);

                debug!("Call instantiator response");
                Ok::<_, InstantiateErrorKind>(Response(request.0 && *flag))
            }
        });

        let arguments = Arguments::new(vec![Arc::new(Request(true)) as Instance, Arc::new(true)]);
        let response = factory.call(arguments).unwrap();

        assert!(response.downcast::<Response>().unwrap().0);
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    #[traced_test]
    fn test_boxed_instantiator_missing_argument() {
        let call_count = Arc::new(AtomicU8::new(0));

        let mut factory = boxed_instantiator({
            let call_count = call_count.clone();
            move |Inject(request): Inject<Request>, Inject(_): Inject<Request>| {
                call_count.fetch_add(1, Ordering::SeqCst);
                Ok::<_, InstantiateErrorKind>(Response(request.0))
            }
        });

        let result = factory.call(Arguments::new(vec![Arc::new(Request(true)) as Instance]));

        assert!(matches!(result, Err(InstantiateErrorKind::MissingArgument { position: 1 })));
        assert_eq!(call_count.load(Ordering::SeqCst), 0);
    }

    #[test]
    #[traced_test]
    fn test_boxed_instantiator_custom_error() {
        let mut factory = boxed_instantiator(|| Err::<(), _>(anyhow::anyhow!("connection refused")));

        let result = factory.call(Arguments::new(vec![]));

        assert!(matches!(result, Err(InstantiateErrorKind::Custom(ref err)) if err.to_string() == "connection refused"));
    }
}
