// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime type registry: instantiate, marshal, and unmarshal heterogeneous
//! types by name.
//!
//! Persistence and transport layers often store extensible sets of types
//! tagged by a discriminator string — plug-in message kinds, polymorphic
//! domain objects — without a central `match` enumerating every type. This
//! crate provides the registry for that: register a concrete type once,
//! then build fresh zero-valued instances of it from the name alone, and
//! round-trip values through whatever encode/decode capability the type
//! itself advertises.
//!
//! # Features
//!
//! - **Registration**: map a deterministic, human-readable name to a
//!   factory for the type; `T` and `Box<T>` register as distinct forms
//! - **Instantiation**: fresh zero-valued ([`Default`]) instances by name
//! - **Marshal/unmarshal dispatch**: capability-based, format-agnostic;
//!   binary style wins over text when a type advertises both
//! - **Dependency injection**: a caller-supplied hook runs between
//!   instantiation and decoding, to attach collaborators the decode step
//!   needs
//!
//! # Architecture
//!
//! ```text
//! register(&T::default()) ──> name ──────────────┐
//!                                                v
//! unmarshal(name, bytes, deps):  instantiate -> inject -> decode
//!                                                |
//!                                                v
//!                                    Box<dyn Registrable>
//! ```
//!
//! The construction lifecycle is strictly ordered — instantiated, then
//! optionally injected, then optionally decoded — and never revisits an
//! earlier step.
//!
//! # Concurrency
//!
//! Every operation is a synchronous in-memory computation. Registration
//! takes `&mut self`; do it once during startup, then share the registry
//! (`TypeRegistry` is `Send + Sync`) for concurrent read traffic.

pub mod capability;
pub mod error;
pub mod registry;

pub use capability::{AsAny, DecodeBinary, DecodeText, EncodeBinary, EncodeText, Registrable};
pub use error::{BoxedError, MarshalError, UnmarshalError};
pub use registry::{no_deps, DepsFn, TypeRegistry};
