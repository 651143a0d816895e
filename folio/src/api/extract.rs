//! Request extractors that reject with [`Error`], so malformed input gets the same
//! `{"error": "..."}` body as every other failure instead of axum's plain-text rejections.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::api::models::Validate;
use crate::errors::Error;

/// JSON body that has been deserialized and passed [`Validate::validate`].
///
/// Strings containing NUL are refused up front: Postgres cannot store them in text columns.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(raw) = axum::Json::<serde_json::Value>::from_request(req, state).await?;

        if let Some(field) = nul_field(&raw) {
            let field = if field.is_empty() { "request body".to_string() } else { field };
            return Err(Error::BadRequest {
                message: format!("{field} must not contain NUL characters"),
            });
        }

        let value: T = serde_json::from_value(raw).map_err(|e| Error::BadRequest {
            message: format!("Failed to deserialize the JSON body into the target type: {e}"),
        })?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Dotted path of the first key or string value containing `\0`; empty when it is the root.
fn nul_field(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match value {
        Value::String(s) => s.contains('\0').then(String::new),
        Value::Array(items) => items.iter().find_map(nul_field),
        Value::Object(map) => map.iter().find_map(|(key, inner)| {
            if key.contains('\0') {
                return Some(key.replace('\0', ""));
            }
            nul_field(inner).map(|rest| if rest.is_empty() { key.clone() } else { format!("{key}.{rest}") })
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nul_field_names_the_offending_key() {
        assert_eq!(nul_field(&json!({"name": "A\0B", "title": "ok"})).as_deref(), Some("name"));
        assert_eq!(
            nul_field(&json!({"technologies": ["Rust", "Post\0gres"]})).as_deref(),
            Some("technologies")
        );
        assert_eq!(nul_field(&json!("\0")).as_deref(), Some(""));
        assert_eq!(nul_field(&json!({"name": "clean", "count": 3, "tags": [null]})), None);
    }
}

/// Path parameters; an unparseable id is a 400.
#[derive(Debug)]
pub struct Path<T>(pub T);

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) = axum::extract::Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

/// Query string parameters.
#[derive(Debug)]
pub struct Query<T>(pub T);

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Query(value) = axum::extract::Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}
