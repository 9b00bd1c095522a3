// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! End-to-end dependency-injection scenario: a record that serializes a
//! foreign key and needs an injected service to resolve it back into a
//! full object during decode.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use type_registry::{BoxedError, DecodeBinary, EncodeBinary, Registrable, TypeRegistry};

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: String,
    name: String,
}

/// Service backend that resolves user IDs.
#[derive(Debug, Default)]
struct UserService {
    users: Vec<User>,
}

impl UserService {
    fn find(&self, id: &str) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }
}

/// Stores only the user's ID on the wire; the full `User` is restored
/// through the injected service during decode.
#[derive(Debug, Default, Serialize, Deserialize)]
struct UserRecord {
    user_id: String,
    #[serde(skip)]
    user: Option<User>,
    #[serde(skip)]
    svc: Option<Arc<UserService>>,
}

impl EncodeBinary for UserRecord {
    fn encode_binary(&self) -> Result<Vec<u8>, BoxedError> {
        Ok(serde_json::to_vec(self)?)
    }
}

impl DecodeBinary for UserRecord {
    fn decode_binary(&mut self, data: &[u8]) -> Result<(), BoxedError> {
        let wire: UserRecord = serde_json::from_slice(data)?;
        self.user_id = wire.user_id;
        // Foreign-key resolution via the collaborator injected before decode.
        self.user = self
            .svc
            .as_ref()
            .and_then(|svc| svc.find(&self.user_id));
        Ok(())
    }
}

impl Registrable for UserRecord {
    fn as_encode_binary(&self) -> Option<&dyn EncodeBinary> {
        Some(self)
    }

    fn as_decode_binary(&mut self) -> Option<&mut dyn DecodeBinary> {
        Some(self)
    }
}

#[test]
fn injected_service_resolves_foreign_key() {
    let mut registry = TypeRegistry::new();
    registry.register(&UserRecord::default());

    let ryan = User {
        id: "1".to_string(),
        name: "Ryan".to_string(),
    };
    let svc = Arc::new(UserService {
        users: vec![ryan.clone()],
    });

    let sample = UserRecord {
        user_id: ryan.id.clone(),
        user: Some(ryan.clone()),
        svc: None,
    };

    let (name, data) = registry.marshal(&sample).expect("marshal");
    assert_eq!(data, br#"{"user_id":"1"}"#);

    let deps = move |instance: &mut dyn Registrable| {
        if let Some(record) = instance.downcast_mut::<UserRecord>() {
            record.svc = Some(svc.clone());
        }
    };
    let instance = registry.unmarshal(&name, &data, Some(&deps)).expect("unmarshal");

    let record = instance.downcast_ref::<UserRecord>().unwrap();
    assert_eq!(record.user_id, "1");
    assert_eq!(record.user.as_ref(), Some(&ryan));
}

#[test]
fn missing_collaborator_leaves_key_unresolved() {
    let mut registry = TypeRegistry::new();
    let name = registry.register(&UserRecord::default());

    let instance = registry
        .unmarshal(&name, br#"{"user_id":"42"}"#, None)
        .expect("unmarshal");

    let record = instance.downcast_ref::<UserRecord>().unwrap();
    assert_eq!(record.user_id, "42");
    assert!(record.user.is_none());
}

#[test]
fn malformed_payload_surfaces_decode_error_with_partial_instance() {
    let mut registry = TypeRegistry::new();
    let name = registry.register(&UserRecord::default());

    let svc = Arc::new(UserService::default());
    let deps = move |instance: &mut dyn Registrable| {
        if let Some(record) = instance.downcast_mut::<UserRecord>() {
            record.svc = Some(svc.clone());
        }
    };

    let err = registry
        .unmarshal(&name, b"not json", Some(&deps))
        .err()
        .unwrap();
    assert_eq!(err.name(), name);

    // The injected collaborator survives for diagnostics.
    let partial = err.into_instance();
    let record = partial.downcast_ref::<UserRecord>().unwrap();
    assert!(record.svc.is_some());
}
