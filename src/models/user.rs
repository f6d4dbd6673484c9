//! User record types matching the backend's JSON shape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned user identifier.
///
/// Opaque to the client: it is only ever received from the backend and
/// echoed back in item URLs. Numeric on the wire (`{"id": 1, ...}`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(UserId)
            .map_err(|_| format!("invalid user id: {s}"))
    }
}

/// A user record as held by the Remote Data Store.
///
/// The client's copy is a transient cache; the backend owns the
/// authoritative state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Body of create and update requests: name and email only.
///
/// The identifier is never part of a request body — create lets the
/// backend assign one, update carries it in the item URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
}

impl From<&User> for UserPayload {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_from_wire_shape() {
        let user: User =
            serde_json::from_str(r#"{"id": 1, "name": "Ana", "email": "ana@x.com"}"#).unwrap();
        assert_eq!(user.id, UserId(1));
        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "ana@x.com");
    }

    #[test]
    fn user_list_deserializes_from_json_array() {
        let users: Vec<User> = serde_json::from_str(
            r#"[{"id": 1, "name": "Ana", "email": "ana@x.com"},
                {"id": 2, "name": "Bo", "email": "bo@x.com"}]"#,
        )
        .unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].id, UserId(2));
    }

    #[test]
    fn payload_serializes_without_id() {
        let payload = UserPayload {
            name: "Ana".into(),
            email: "ana@x.com".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["email"], "ana@x.com");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn payload_from_user_copies_fields() {
        let user = User {
            id: UserId(7),
            name: "Ana".into(),
            email: "ana@x.com".into(),
        };
        let payload = UserPayload::from(&user);
        assert_eq!(payload.name, "Ana");
        assert_eq!(payload.email, "ana@x.com");
    }

    #[test]
    fn user_id_display_and_parse() {
        assert_eq!(UserId(42).to_string(), "42");
        assert_eq!("42".parse::<UserId>(), Ok(UserId(42)));
        assert!("abc".parse::<UserId>().is_err());
    }

    #[test]
    fn user_id_transparent_serde() {
        let json = serde_json::to_string(&UserId(3)).unwrap();
        assert_eq!(json, "3");
        let id: UserId = serde_json::from_str("3").unwrap();
        assert_eq!(id, UserId(3));
    }
}
