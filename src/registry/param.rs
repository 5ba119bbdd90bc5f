// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Runtime identity of a Rust type, with its name kept for error messages.
#[derive(Debug, Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A construction parameter bound to a constructor at registration time.
///
/// The value is shared, and each invocation receives its own clone of the
/// concrete value. Pass `Arc<T>` to have every instance share one `T`.
#[derive(Clone)]
pub struct Param {
    value: Arc<dyn Any + Send + Sync>,
    tag: TypeTag,
}

impl Param {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            tag: TypeTag::of::<T>(),
        }
    }

    pub fn type_tag(&self) -> TypeTag {
        self.tag
    }

    /// Clone the value out if it has type `T`.
    pub fn downcast<T: Any + Clone>(&self) -> Option<T> {
        self.value.downcast_ref::<T>().cloned()
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Param").field("type", &self.tag.name).finish()
    }
}
