use std::fmt;

use business::domain::auth::errors::AuthError;
use business::domain::shared::value_objects::UserId;
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::Deserialize;

/// Caller identifier as found in the `id` claim.
///
/// Identity providers are inconsistent about the JSON type of this field, so
/// both strings and integers are accepted. Anything else is a decode error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectId {
    Text(String),
    Integer(i64),
}

impl SubjectId {
    pub fn into_user_id(self) -> UserId {
        match self {
            SubjectId::Text(id) => UserId::new(id),
            SubjectId::Integer(id) => UserId::new(id.to_string()),
        }
    }
}

struct SubjectIdVisitor;

impl<'de> Visitor<'de> for SubjectIdVisitor {
    type Value = SubjectId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or a 64-bit signed integer")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<SubjectId, E> {
        Ok(SubjectId::Text(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<SubjectId, E> {
        Ok(SubjectId::Text(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<SubjectId, E> {
        Ok(SubjectId::Integer(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<SubjectId, E> {
        i64::try_from(value)
            .map(SubjectId::Integer)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }
}

impl<'de> Deserialize<'de> for SubjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SubjectIdVisitor)
    }
}

/// Claim set carried by a verified token.
///
/// Temporal claims are checked by `jsonwebtoken` during verification; they are
/// kept here only so a malformed value fails the decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Claims {
    #[serde(rename = "id", default)]
    pub user_id: Option<SubjectId>,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub iss: Option<String>,
    #[serde(default)]
    pub jti: Option<String>,
    #[serde(default)]
    pub exp: Option<u64>,
    #[serde(default)]
    pub iat: Option<u64>,
    #[serde(default)]
    pub nbf: Option<u64>,
}

impl Claims {
    pub fn from_json(payload: &str) -> Result<Self, AuthError> {
        serde_json::from_str(payload).map_err(|e| AuthError::MalformedClaims(e.to_string()))
    }

    /// Normalised caller identity. An absent or empty `id` is rejected.
    pub fn identity(&self) -> Result<UserId, AuthError> {
        match &self.user_id {
            Some(SubjectId::Text(id)) if id.is_empty() => Err(AuthError::MissingSubject),
            Some(id) => Ok(id.clone().into_user_id()),
            None => Err(AuthError::MissingSubject),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_keep_string_id_verbatim() {
        let claims = Claims::from_json(r#"{"id":"u-17","exp":4102444800}"#).unwrap();

        assert_eq!(claims.identity().unwrap(), UserId::new("u-17"));
        assert_eq!(claims.exp, Some(4102444800));
    }

    #[test]
    fn should_render_integer_id_in_base_ten() {
        let claims = Claims::from_json(r#"{"id":42}"#).unwrap();

        assert_eq!(claims.user_id, Some(SubjectId::Integer(42)));
        assert_eq!(claims.identity().unwrap(), UserId::new("42"));
    }

    #[test]
    fn should_accept_negative_integer_id() {
        let claims = Claims::from_json(r#"{"id":-7}"#).unwrap();

        assert_eq!(claims.identity().unwrap(), UserId::new("-7"));
    }

    #[test]
    fn should_reject_fractional_id() {
        let result = Claims::from_json(r#"{"id":4.5}"#);

        assert!(matches!(result, Err(AuthError::MalformedClaims(_))));
    }

    #[test]
    fn should_reject_integer_id_out_of_i64_range() {
        let result = Claims::from_json(r#"{"id":18446744073709551615}"#);

        assert!(matches!(result, Err(AuthError::MalformedClaims(_))));
    }

    #[test]
    fn should_reject_object_id() {
        let result = Claims::from_json(r#"{"id":{"value":"u1"}}"#);

        assert!(matches!(result, Err(AuthError::MalformedClaims(_))));
    }

    #[test]
    fn should_fail_when_other_claim_has_wrong_type_even_if_id_is_valid() {
        let result = Claims::from_json(r#"{"id":"u1","exp":"tomorrow"}"#);

        assert!(matches!(result, Err(AuthError::MalformedClaims(_))));
    }

    #[test]
    fn should_fail_on_malformed_json() {
        let result = Claims::from_json(r#"{"id":"u1""#);

        assert!(matches!(result, Err(AuthError::MalformedClaims(_))));
    }

    #[test]
    fn should_report_missing_subject_when_id_absent_or_empty() {
        let absent = Claims::from_json(r#"{"sub":"someone"}"#).unwrap();
        let empty = Claims::from_json(r#"{"id":""}"#).unwrap();

        assert_eq!(absent.identity(), Err(AuthError::MissingSubject));
        assert_eq!(empty.identity(), Err(AuthError::MissingSubject));
    }

    proptest! {
        #[test]
        fn string_ids_are_extracted_unchanged(id in "[A-Za-z0-9_-]{1,32}") {
            let payload = serde_json::json!({ "id": id }).to_string();

            let identity = Claims::from_json(&payload).unwrap().identity().unwrap();

            prop_assert_eq!(identity.as_str(), id.as_str());
        }

        #[test]
        fn integer_ids_are_extracted_as_decimal(id in any::<i64>()) {
            let payload = serde_json::json!({ "id": id }).to_string();

            let identity = Claims::from_json(&payload).unwrap().identity().unwrap();

            prop_assert_eq!(identity.into_inner(), id.to_string());
        }
    }
}
