// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Capability traits for registrable types.
//!
//! A type becomes usable with [`crate::TypeRegistry`] by implementing
//! [`Registrable`]. On top of that it may opt into any subset of the four
//! codec capabilities ([`EncodeBinary`], [`EncodeText`], [`DecodeBinary`],
//! [`DecodeText`]) by implementing the capability trait *and* overriding the
//! matching `as_*` hook to return `Some(self)`. The registry queries the
//! hooks at run time and never assumes a capability is present.
//!
//! The registry itself is format-agnostic: "binary" and "text" are styles,
//! not wire formats. A type is free to emit JSON from its binary capability.

use std::any::Any;

use crate::error::BoxedError;

// ---------------------------------------------------------------------------
// AsAny
// ---------------------------------------------------------------------------

/// Downcast seam between `dyn Registrable` and [`Any`].
///
/// Blanket-implemented for every `'static` type; implementors never write
/// these methods by hand.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

// ---------------------------------------------------------------------------
// Codec capabilities
// ---------------------------------------------------------------------------

/// Binary-style encode capability: produce bytes representing current state.
pub trait EncodeBinary {
    fn encode_binary(&self) -> Result<Vec<u8>, BoxedError>;
}

/// Text-style encode capability.
///
/// Loses to [`EncodeBinary`] when a type implements both; see
/// [`crate::TypeRegistry::marshal`] for the precedence rule.
pub trait EncodeText {
    fn encode_text(&self) -> Result<Vec<u8>, BoxedError>;
}

/// Binary-style decode capability: populate current state in place from bytes.
pub trait DecodeBinary {
    fn decode_binary(&mut self, data: &[u8]) -> Result<(), BoxedError>;
}

/// Text-style decode capability.
///
/// Loses to [`DecodeBinary`] when a type implements both.
pub trait DecodeText {
    fn decode_text(&mut self, data: &[u8]) -> Result<(), BoxedError>;
}

// ---------------------------------------------------------------------------
// Registrable
// ---------------------------------------------------------------------------

/// Marker-plus-hooks trait for anything the registry can manage.
///
/// The minimal implementation is empty:
///
/// ```ignore
/// #[derive(Default)]
/// struct Heartbeat;
///
/// impl Registrable for Heartbeat {}
/// ```
///
/// A type advertising a codec capability overrides the matching hook:
///
/// ```ignore
/// impl Registrable for Sample {
///     fn as_encode_binary(&self) -> Option<&dyn EncodeBinary> {
///         Some(self)
///     }
/// }
/// ```
pub trait Registrable: AsAny + Send + Sync {
    /// Name this type registers and marshals under.
    ///
    /// The default derivation is [`std::any::type_name`]: deterministic
    /// within a process, human-readable, and distinct for `T` vs `Box<T>`.
    /// It is *not* guaranteed stable across compiler releases, so callers
    /// persisting names long-term accept that risk. Leave the default in
    /// place unless you need a hand-picked stable name.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Query hook for the binary encode capability. Default: absent.
    fn as_encode_binary(&self) -> Option<&dyn EncodeBinary> {
        None
    }

    /// Query hook for the text encode capability. Default: absent.
    fn as_encode_text(&self) -> Option<&dyn EncodeText> {
        None
    }

    /// Query hook for the binary decode capability. Default: absent.
    fn as_decode_binary(&mut self) -> Option<&mut dyn DecodeBinary> {
        None
    }

    /// Query hook for the text decode capability. Default: absent.
    fn as_decode_text(&mut self) -> Option<&mut dyn DecodeText> {
        None
    }
}

/// By-reference registration form.
///
/// Registering a `Box<T>` is the heap-allocated counterpart of registering
/// `T` directly: it yields a distinct name and [`crate::TypeRegistry::instantiate`]
/// produces a fresh allocation each time, never an alias. Capability hooks
/// forward to the inner value, so decode populates the heap storage in place.
impl<T: Registrable> Registrable for Box<T> {
    fn as_encode_binary(&self) -> Option<&dyn EncodeBinary> {
        (**self).as_encode_binary()
    }

    fn as_encode_text(&self) -> Option<&dyn EncodeText> {
        (**self).as_encode_text()
    }

    fn as_decode_binary(&mut self) -> Option<&mut dyn DecodeBinary> {
        (**self).as_decode_binary()
    }

    fn as_decode_text(&mut self) -> Option<&mut dyn DecodeText> {
        (**self).as_decode_text()
    }
}

impl dyn Registrable {
    /// Returns `true` if the concrete type of this instance is `T`.
    #[must_use]
    pub fn is<T: Registrable>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Borrow the concrete value, or `None` on a type mismatch.
    #[must_use]
    pub fn downcast_ref<T: Registrable>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Mutably borrow the concrete value, or `None` on a type mismatch.
    #[must_use]
    pub fn downcast_mut<T: Registrable>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
