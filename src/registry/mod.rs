// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Typed constructor registry.
//!
//! Maps a component type name to a creation function and the parameters
//! bound to it. Invoking a constructor validates the bound parameters against
//! the function's declared signature at runtime, calls it, and normalizes the
//! result into a [`Component`] handle.
//!
//! # Accepted creation functions
//!
//! Any `Fn(A1, ..., An) -> R` with `n <= 6` and every `Ai: Clone + Send +
//! Sync + 'static`, where `R` is one of:
//!
//! * `Component`
//! * `Option<Component>`
//! * `Result<Component, E>` or `Result<Option<Component>, E>`, with `E` one of
//!   [`BoxError`](crate::errors::BoxError), `anyhow::Error` or
//!   [`ProcessorError`](crate::errors::ProcessorError)
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use the_meshwork::backends::local::{ExampleParams, ExampleProcessor};
//! use the_meshwork::params;
//! use the_meshwork::registry::ConstructorRegistry;
//!
//! let mut registry = ConstructorRegistry::new();
//! registry
//!     .register(
//!         "ExampleProcessor",
//!         ExampleProcessor::create,
//!         params![Arc::new(ExampleParams::default())],
//!     )
//!     .unwrap();
//!
//! let component = registry.invoke("ExampleProcessor").unwrap();
//! assert!(!component.is_service());
//! ```

mod creator;
mod param;

use std::collections::HashMap;

pub use creator::CreatorFn;
pub use param::{Param, TypeTag};

use crate::errors::RegistryError;
use crate::observability::messages::mesh::ConstructorRegistered;
use crate::observability::messages::StructuredLog;
use crate::traits::Component;
use creator::{check_params, return_shape, Erased, ErasedCreator};

/// Build a bound-parameter list from a sequence of values.
///
/// ```rust
/// use the_meshwork::params;
///
/// let bound = params![1u8, String::from("two")];
/// assert_eq!(bound.len(), 2);
/// assert!(params![].is_empty());
/// ```
#[macro_export]
macro_rules! params {
    () => {
        ::std::vec::Vec::<$crate::registry::Param>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::registry::Param::new($value)),+]
    };
}

struct Constructor {
    creator: Box<dyn ErasedCreator>,
    params: Vec<Param>,
}

impl Constructor {
    fn invoke(&self) -> Result<Component, RegistryError> {
        check_params(&self.creator.param_specs(), &self.params)?;
        let unpack = return_shape(self.creator.return_tag())?;
        let value = self.creator.call(&self.params)?;
        unpack(value)?.ok_or(RegistryError::NilComponent)
    }
}

/// Type name to constructor map.
#[derive(Default)]
pub struct ConstructorRegistry {
    constructors: HashMap<String, Constructor>,
}

impl ConstructorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `creator` under `type_name` with the parameters it will be
    /// called with. The signature is only checked when invoked.
    pub fn register<F, Args>(
        &mut self,
        type_name: impl Into<String>,
        creator: F,
        params: Vec<Param>,
    ) -> Result<(), RegistryError>
    where
        F: CreatorFn<Args>,
        Args: 'static,
    {
        let type_name = type_name.into();
        if self.constructors.contains_key(&type_name) {
            return Err(RegistryError::DuplicateConstructor(type_name));
        }

        ConstructorRegistered {
            type_name: &type_name,
            arity: params.len(),
        }
        .log();

        self.constructors.insert(
            type_name,
            Constructor {
                creator: Box::new(Erased::<F, Args>::new(creator)),
                params,
            },
        );
        Ok(())
    }

    /// Validate and call the constructor registered under `type_name`.
    pub fn invoke(&self, type_name: &str) -> Result<Component, RegistryError> {
        self.constructors
            .get(type_name)
            .ok_or_else(|| RegistryError::UnknownConstructor(type_name.to_string()))?
            .invoke()
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.constructors.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    pub fn clear(&mut self) {
        self.constructors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::{ExampleParams, ExampleProcessor, ExampleService};
    use crate::errors::{BoxError, ProcessorError};
    use std::sync::Arc;
    use std::time::Duration;

    fn example_params() -> Arc<ExampleParams> {
        Arc::new(ExampleParams::with_liveness_interval(Duration::from_secs(1)))
    }

    #[test]
    fn test_duplicate_registration() {
        let mut registry = ConstructorRegistry::new();
        registry
            .register("Type1", ExampleProcessor::create, params![example_params()])
            .unwrap();

        let result = registry.register("Type1", ExampleService::create, params![example_params()]);
        assert!(matches!(result, Err(RegistryError::DuplicateConstructor(t)) if t == "Type1"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_constructor() {
        let registry = ConstructorRegistry::new();
        assert!(matches!(
            registry.invoke("Type1"),
            Err(RegistryError::UnknownConstructor(_))
        ));
    }

    #[test]
    fn test_invoke_signature_checks_table_driven() {
        struct TestCase {
            name: &'static str,
            params: Vec<Param>,
            expected: fn(&Result<Component, RegistryError>) -> bool,
        }

        let test_cases = vec![
            TestCase {
                name: "missing param",
                params: params![],
                expected: |r| {
                    matches!(r, Err(RegistryError::ArityMismatch { expected: 1, got: 0 }))
                },
            },
            TestCase {
                name: "too many params",
                params: params![example_params(), "extra-param"],
                expected: |r| {
                    matches!(r, Err(RegistryError::ArityMismatch { expected: 1, got: 2 }))
                },
            },
            TestCase {
                name: "mismatching param type",
                params: params!["not-your-param-type"],
                expected: |r| {
                    matches!(r, Err(RegistryError::TypeMismatch { position: 1, got: "&str", .. }))
                },
            },
            TestCase {
                name: "params by value instead of shared",
                params: params![ExampleParams::default()],
                expected: |r| matches!(r, Err(RegistryError::TypeMismatch { .. })),
            },
            TestCase {
                name: "matching params",
                params: params![example_params()],
                expected: |r| matches!(r, Ok(c) if !c.is_service()),
            },
        ];

        for test_case in test_cases {
            let mut registry = ConstructorRegistry::new();
            registry
                .register("Type1", ExampleProcessor::create, test_case.params)
                .unwrap();

            let result = registry.invoke("Type1");
            assert!(
                (test_case.expected)(&result),
                "Test case '{}': unexpected result {:?}",
                test_case.name,
                result.as_ref().err()
            );
        }
    }

    #[test]
    fn test_invalid_return_types() {
        let mut registry = ConstructorRegistry::new();
        registry.register("Empty", || {}, params![]).unwrap();
        registry.register("Integer", || 42, params![]).unwrap();
        registry
            .register(
                "BadError",
                || -> Result<Component, i32> { Ok(ExampleProcessor::create(example_params())) },
                params![],
            )
            .unwrap();

        for type_name in ["Empty", "Integer", "BadError"] {
            assert!(
                matches!(
                    registry.invoke(type_name),
                    Err(RegistryError::InvalidConstructorSignature(_))
                ),
                "{} should be rejected",
                type_name
            );
        }
    }

    #[test]
    fn test_creation_error_is_propagated() {
        let mut registry = ConstructorRegistry::new();
        registry
            .register(
                "Failing",
                |params: Arc<ExampleParams>| -> Result<Component, BoxError> {
                    let _ = ExampleProcessor::create(params);
                    Err("some test error".into())
                },
                params![example_params()],
            )
            .unwrap();
        registry
            .register(
                "FailingAnyhow",
                || -> anyhow::Result<Component> { Err(anyhow::anyhow!("anyhow failure")) },
                params![],
            )
            .unwrap();

        let error = registry.invoke("Failing").unwrap_err();
        assert!(matches!(&error, RegistryError::ConstructionFailed(e) if e.to_string() == "some test error"));

        let error = registry.invoke("FailingAnyhow").unwrap_err();
        assert!(matches!(error, RegistryError::ConstructionFailed(_)));
    }

    #[test]
    fn test_nil_component() {
        let mut registry = ConstructorRegistry::new();
        registry
            .register(
                "Nil",
                || -> Result<Option<Component>, ProcessorError> { Ok(None) },
                params![],
            )
            .unwrap();
        registry.register("NilPlain", || -> Option<Component> { None }, params![]).unwrap();

        assert!(matches!(registry.invoke("Nil"), Err(RegistryError::NilComponent)));
        assert!(matches!(registry.invoke("NilPlain"), Err(RegistryError::NilComponent)));
    }

    #[test]
    fn test_one_registration_serves_many_instances() {
        let shared = example_params();
        let mut registry = ConstructorRegistry::new();
        registry
            .register("ExampleService", ExampleService::create, params![shared.clone()])
            .unwrap();

        let first = registry.invoke("ExampleService").unwrap();
        let second = registry.invoke("ExampleService").unwrap();

        assert!(first.is_service() && second.is_service());
        assert!(!Arc::ptr_eq(first.processor(), second.processor()));
        // The caller, the bound param, and one clone per instance.
        assert_eq!(Arc::strong_count(&shared), 4);
    }

    #[test]
    fn test_clear() {
        let mut registry = ConstructorRegistry::new();
        registry.register("A", ExampleProcessor::create, params![example_params()]).unwrap();
        registry.register("B", ExampleService::create, params![example_params()]).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("A"));

        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.contains("A"));
    }
}
