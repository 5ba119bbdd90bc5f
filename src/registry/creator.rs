// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Type-erased creation functions.
//!
//! [`CreatorFn`] is implemented for every `Fn(A1, ..., An) -> R` up to six
//! arguments. The implementation reports the declared parameter and return
//! types as [`TypeTag`]s so the registry can validate a call before making it,
//! and performs the call by cloning each bound [`Param`] into its argument
//! position.

use std::any::Any;
use std::marker::PhantomData;

use crate::errors::{BoxError, ProcessorError, RegistryError};
use crate::registry::{Param, TypeTag};
use crate::traits::Component;

/// A function usable as a component constructor.
///
/// `Args` is the tuple of argument types. It only disambiguates the
/// per-arity implementations and never has to be named by callers.
pub trait CreatorFn<Args>: Send + Sync + 'static {
    fn param_specs(&self) -> Vec<TypeTag>;

    fn return_tag(&self) -> TypeTag;

    /// Call with the given parameters. Callers are expected to have checked
    /// them with [`check_params`] first; a mismatch still fails cleanly.
    fn call(&self, params: &[Param]) -> Result<Box<dyn Any>, RegistryError>;
}

fn argument<T: Any + Clone>(params: &[Param], index: usize) -> Result<T, RegistryError> {
    let param = params.get(index).ok_or(RegistryError::ArityMismatch {
        expected: index + 1,
        got: params.len(),
    })?;
    param.downcast::<T>().ok_or(RegistryError::TypeMismatch {
        position: index + 1,
        expected: std::any::type_name::<T>(),
        got: param.type_tag().name(),
    })
}

macro_rules! impl_creator_fn {
    ($($arg:ident $index:tt),*) => {
        impl<Func, Ret, $($arg,)*> CreatorFn<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Ret + Send + Sync + 'static,
            Ret: Any,
            $($arg: Any + Clone + Send + Sync,)*
        {
            fn param_specs(&self) -> Vec<TypeTag> {
                vec![$(TypeTag::of::<$arg>()),*]
            }

            fn return_tag(&self) -> TypeTag {
                TypeTag::of::<Ret>()
            }

            #[allow(unused_variables)]
            fn call(&self, params: &[Param]) -> Result<Box<dyn Any>, RegistryError> {
                Ok(Box::new((self)($(argument::<$arg>(params, $index)?),*)))
            }
        }
    };
}

impl_creator_fn!();
impl_creator_fn!(A1 0);
impl_creator_fn!(A1 0, A2 1);
impl_creator_fn!(A1 0, A2 1, A3 2);
impl_creator_fn!(A1 0, A2 1, A3 2, A4 3);
impl_creator_fn!(A1 0, A2 1, A3 2, A4 3, A5 4);
impl_creator_fn!(A1 0, A2 1, A3 2, A4 3, A5 4, A6 5);

/// Object-safe view of a [`CreatorFn`] with its argument tuple erased.
pub(crate) trait ErasedCreator: Send + Sync {
    fn param_specs(&self) -> Vec<TypeTag>;
    fn return_tag(&self) -> TypeTag;
    fn call(&self, params: &[Param]) -> Result<Box<dyn Any>, RegistryError>;
}

pub(crate) struct Erased<F, Args> {
    func: F,
    _args: PhantomData<fn() -> Args>,
}

impl<F, Args> Erased<F, Args> {
    pub(crate) fn new(func: F) -> Self {
        Self {
            func,
            _args: PhantomData,
        }
    }
}

impl<F, Args> ErasedCreator for Erased<F, Args>
where
    F: CreatorFn<Args>,
    Args: 'static,
{
    fn param_specs(&self) -> Vec<TypeTag> {
        CreatorFn::<Args>::param_specs(&self.func)
    }

    fn return_tag(&self) -> TypeTag {
        CreatorFn::<Args>::return_tag(&self.func)
    }

    fn call(&self, params: &[Param]) -> Result<Box<dyn Any>, RegistryError> {
        CreatorFn::<Args>::call(&self.func, params)
    }
}

/// Check bound parameters against the declared ones: count first, then the
/// type at each position.
pub(crate) fn check_params(specs: &[TypeTag], params: &[Param]) -> Result<(), RegistryError> {
    if specs.len() != params.len() {
        return Err(RegistryError::ArityMismatch {
            expected: specs.len(),
            got: params.len(),
        });
    }
    for (index, (spec, param)) in specs.iter().zip(params).enumerate() {
        if *spec != param.type_tag() {
            return Err(RegistryError::TypeMismatch {
                position: index + 1,
                expected: spec.name(),
                got: param.type_tag().name(),
            });
        }
    }
    Ok(())
}

/// Return values a constructor may produce.
trait ConstructorReturn: Any {
    fn into_outcome(self) -> Result<Option<Component>, BoxError>;
}

impl ConstructorReturn for Component {
    fn into_outcome(self) -> Result<Option<Component>, BoxError> {
        Ok(Some(self))
    }
}

impl ConstructorReturn for Option<Component> {
    fn into_outcome(self) -> Result<Option<Component>, BoxError> {
        Ok(self)
    }
}

macro_rules! impl_fallible_return {
    ($($error:ty),*) => {
        $(
            impl ConstructorReturn for Result<Component, $error> {
                fn into_outcome(self) -> Result<Option<Component>, BoxError> {
                    self.map(Some).map_err(Into::into)
                }
            }

            impl ConstructorReturn for Result<Option<Component>, $error> {
                fn into_outcome(self) -> Result<Option<Component>, BoxError> {
                    self.map_err(Into::into)
                }
            }
        )*
    };
}

impl_fallible_return!(BoxError, anyhow::Error, ProcessorError);

type Unpack = fn(Box<dyn Any>) -> Result<Option<Component>, RegistryError>;

fn unpack<R: ConstructorReturn>(value: Box<dyn Any>) -> Result<Option<Component>, RegistryError> {
    match value.downcast::<R>() {
        Ok(value) => value
            .into_outcome()
            .map_err(RegistryError::ConstructionFailed),
        Err(_) => Err(RegistryError::InvalidConstructorSignature(
            std::any::type_name::<R>(),
        )),
    }
}

fn shape<R: ConstructorReturn>() -> (TypeTag, Unpack) {
    (TypeTag::of::<R>(), unpack::<R>)
}

/// Find the unpacker for an accepted return type.
pub(crate) fn return_shape(tag: TypeTag) -> Result<Unpack, RegistryError> {
    let shapes = [
        shape::<Component>(),
        shape::<Option<Component>>(),
        shape::<Result<Component, BoxError>>(),
        shape::<Result<Option<Component>, BoxError>>(),
        shape::<Result<Component, anyhow::Error>>(),
        shape::<Result<Option<Component>, anyhow::Error>>(),
        shape::<Result<Component, ProcessorError>>(),
        shape::<Result<Option<Component>, ProcessorError>>(),
    ];
    shapes
        .into_iter()
        .find(|(accepted, _)| *accepted == tag)
        .map(|(_, unpack)| unpack)
        .ok_or(RegistryError::InvalidConstructorSignature(tag.name()))
}
