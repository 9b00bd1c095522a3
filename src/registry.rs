// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Name-to-type registry with marshal / unmarshal dispatch.
//!
//! [`TypeRegistry`] maps registered names to factories so a fresh,
//! zero-valued instance can be produced from a name alone, without static
//! knowledge of the type at the call site. On top of instantiation it
//! dispatches to whatever codec capability the type advertises (see
//! [`crate::capability`]) and supports injecting collaborators into an
//! instance before decode runs.

use std::collections::HashMap;

use log::{debug, trace};

use crate::capability::Registrable;
use crate::error::{MarshalError, UnmarshalError};

// ---------------------------------------------------------------------------
// Dependency injection
// ---------------------------------------------------------------------------

/// Injector invoked by [`TypeRegistry::unmarshal`] after instantiation and
/// before decoding. Use it to set collaborator fields the decode step needs,
/// e.g. a service handle used to resolve an ID back into an object.
///
/// Injectors are infallible by signature; a collaborator that can fail to
/// attach should record that in the instance instead.
pub type DepsFn = dyn Fn(&mut dyn Registrable);

/// Injector that does nothing.
///
/// Behaviorally identical to passing `None`, but more descriptive at call
/// sites that deliberately have no dependencies to inject, so please do.
pub fn no_deps(_instance: &mut dyn Registrable) {}

// ---------------------------------------------------------------------------
// TypeRegistry
// ---------------------------------------------------------------------------

/// Descriptor captured at registration: everything needed to build a fresh
/// zero-valued instance of the registered form. Never exposed to callers.
struct TypeEntry {
    construct: Box<dyn Fn() -> Box<dyn Registrable> + Send + Sync>,
}

/// Registry of instantiable types, keyed by registered name.
///
/// Created empty, grows monotonically via [`register`](Self::register)
/// (re-registration overwrites), and has no removal operation. Registration
/// takes `&mut self` while every other operation takes `&self`: register
/// once during single-threaded startup, then share the registry freely for
/// concurrent instantiate / marshal / unmarshal traffic.
///
/// # Example
///
/// ```ignore
/// use type_registry::TypeRegistry;
///
/// let mut registry = TypeRegistry::new();
/// let name = registry.register(&SensorReading::default());
///
/// // Later, with only the name and bytes in hand:
/// let instance = registry.unmarshal(&name, &bytes, None)?;
/// let reading = instance.downcast_ref::<SensorReading>().unwrap();
/// ```
#[derive(Default)]
pub struct TypeRegistry {
    types: HashMap<String, TypeEntry>,
}

impl TypeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T`, making it instantiable by name. Returns the name for
    /// the caller to persist alongside encoded data.
    ///
    /// The prototype value is only consulted for its type; its field values
    /// are irrelevant. Registering `Box<T>` instead of `T` registers the
    /// by-reference form under a distinct name. Registering the same form
    /// twice is idempotent: same name, descriptor overwritten.
    pub fn register<T: Registrable + Default>(&mut self, prototype: &T) -> String {
        let name = prototype.type_name();
        debug!("register `{name}`");
        self.insert::<T>(name);
        name.to_string()
    }

    /// Turbofish variant of [`register`](Self::register) for callers with no
    /// prototype value at hand. Uses the default name derivation.
    pub fn register_type<T: Registrable + Default>(&mut self) -> String {
        let name = std::any::type_name::<T>();
        debug!("register `{name}`");
        self.insert::<T>(name);
        name.to_string()
    }

    fn insert<T: Registrable + Default>(&mut self, name: &str) {
        let entry = TypeEntry {
            construct: Box::new(|| Box::new(T::default()) as Box<dyn Registrable>),
        };
        self.types.insert(name.to_string(), entry);
    }

    /// Produce a fresh, zero-valued instance of the type registered under
    /// `name`. The caller owns the instance; the registry keeps no reference
    /// to it, and a registered `Box<T>` form always yields fresh heap
    /// storage, never an alias of an earlier instance.
    ///
    /// # Panics
    ///
    /// Panics on an unknown name. Unknown names are a contract violation by
    /// the caller (who controls the universe of registered names), not an
    /// expected runtime condition.
    #[must_use]
    pub fn instantiate(&self, name: &str) -> Box<dyn Registrable> {
        match self.types.get(name) {
            Some(entry) => {
                trace!("instantiate `{name}`");
                (entry.construct)()
            }
            None => panic!("type registry does not know {name:?}"),
        }
    }

    /// Encode a value, returning its registered name and bytes.
    ///
    /// The name is derived from the value's type alone — no registry lookup
    /// happens, so this works for values whose type was never registered.
    /// Capability precedence is fixed: binary before text. A value with no
    /// encode capability yields empty bytes and no error; there is simply
    /// nothing to serialize beyond the type tag.
    ///
    /// # Errors
    ///
    /// [`MarshalError`] when the selected encode capability fails; the
    /// error carries the derived name.
    pub fn marshal(&self, value: &dyn Registrable) -> Result<(String, Vec<u8>), MarshalError> {
        let name = value.type_name().to_string();
        let encoded = if let Some(enc) = value.as_encode_binary() {
            trace!("marshal `{name}` (binary)");
            enc.encode_binary()
        } else if let Some(enc) = value.as_encode_text() {
            trace!("marshal `{name}` (text)");
            enc.encode_text()
        } else {
            trace!("marshal `{name}` (no capability)");
            Ok(Vec::new())
        };
        match encoded {
            Ok(bytes) => Ok((name, bytes)),
            Err(source) => Err(MarshalError { name, source }),
        }
    }

    /// Decode a value by name: instantiate, inject, then decode.
    ///
    /// If `deps` is supplied it runs against the fresh instance *before*
    /// decoding, so collaborators it sets are visible to the decode
    /// capability ([`no_deps`] is the explicit no-dependency choice).
    /// Capability precedence mirrors [`marshal`](Self::marshal): binary
    /// before text. An instance with no decode capability is returned as-is
    /// with `data` unused and no error.
    ///
    /// # Errors
    ///
    /// [`UnmarshalError`] when the selected decode capability fails; the
    /// error carries the injected-but-undecoded instance for diagnostics.
    ///
    /// # Panics
    ///
    /// Panics on an unknown name, as [`instantiate`](Self::instantiate) does.
    pub fn unmarshal(
        &self,
        name: &str,
        data: &[u8],
        deps: Option<&DepsFn>,
    ) -> Result<Box<dyn Registrable>, UnmarshalError> {
        let mut instance = self.instantiate(name);
        if let Some(deps) = deps {
            deps(instance.as_mut());
        }
        let decoded = if let Some(dec) = instance.as_decode_binary() {
            trace!("unmarshal `{name}` (binary)");
            dec.decode_binary(data)
        } else if let Some(dec) = instance.as_decode_text() {
            trace!("unmarshal `{name}` (text)");
            dec.decode_text(data)
        } else {
            trace!("unmarshal `{name}` (no capability)");
            Ok(())
        };
        match decoded {
            Ok(()) => Ok(instance),
            Err(source) => Err(UnmarshalError::new(name, instance, source)),
        }
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// All registered names (sorted for determinism).
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
