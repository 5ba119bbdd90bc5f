// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for constructor registration and typed invocation.

use thiserror::Error;

/// Boxed error accepted from component constructors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by the constructor registry.
///
/// Signature problems (`ArityMismatch`, `TypeMismatch`,
/// `InvalidConstructorSignature`) are detected before the creation function is
/// called. `ConstructionFailed` and `NilComponent` describe what the call
/// itself returned.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("constructor {0} already exists")]
    DuplicateConstructor(String),

    #[error("no constructor registered for type {0}")]
    UnknownConstructor(String),

    #[error("unexpected number of parameters (expects: {expected} got: {got})")]
    ArityMismatch { expected: usize, got: usize },

    /// `position` is 1-based.
    #[error("mismatching type for param #{position} (expects: {expected} got: {got})")]
    TypeMismatch {
        position: usize,
        expected: &'static str,
        got: &'static str,
    },

    #[error(
        "unsupported constructor return type {0}; expected Component, Option<Component> or a Result of either"
    )]
    InvalidConstructorSignature(&'static str),

    #[error("constructor failed: {0}")]
    ConstructionFailed(#[source] BoxError),

    #[error("constructor returned nil component")]
    NilComponent,
}
