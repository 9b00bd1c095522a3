// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Recoverable errors for marshal / unmarshal dispatch.
//!
//! Contract violations (unknown names) are not represented here: those
//! panic, see [`crate::TypeRegistry::instantiate`]. This module only covers
//! codec-capability failures, which are returned to the caller together
//! with whatever partial result exists.

use std::error::Error;
use std::fmt;

use thiserror::Error;

use crate::capability::Registrable;

/// What a codec capability fails with.
///
/// The registry does not constrain a type's error surface, it only carries
/// it through.
pub type BoxedError = Box<dyn Error + Send + Sync + 'static>;

// ---------------------------------------------------------------------------
// MarshalError
// ---------------------------------------------------------------------------

/// An encode capability failed.
///
/// The registered name is retained for logging; the partial result on the
/// encode path is always the empty byte sequence.
#[derive(Debug, Error)]
#[error("encode failed for `{name}`: {source}")]
pub struct MarshalError {
    /// Name of the type whose encode capability failed.
    pub name: String,
    /// The failure raised by the capability.
    #[source]
    pub source: BoxedError,
}

// ---------------------------------------------------------------------------
// UnmarshalError
// ---------------------------------------------------------------------------

/// A decode capability failed.
///
/// Carries the instantiated-and-injected (but undecoded) instance so the
/// caller can inspect injected state for diagnostics, or discard it.
#[derive(Error)]
#[error("decode failed for `{name}`: {source}")]
pub struct UnmarshalError {
    name: String,
    instance: Box<dyn Registrable>,
    #[source]
    source: BoxedError,
}

impl UnmarshalError {
    pub(crate) fn new(name: &str, instance: Box<dyn Registrable>, source: BoxedError) -> Self {
        UnmarshalError {
            name: name.to_string(),
            instance,
            source,
        }
    }

    /// Name of the type whose decode capability failed.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the partially-constructed instance.
    #[must_use]
    pub fn instance(&self) -> &dyn Registrable {
        self.instance.as_ref()
    }

    /// Take ownership of the partially-constructed instance.
    #[must_use]
    pub fn into_instance(self) -> Box<dyn Registrable> {
        self.instance
    }
}

// `Registrable` has no `Debug` bound, so the partial instance is elided.
impl fmt::Debug for UnmarshalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnmarshalError")
            .field("name", &self.name)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
