//! URL construction.

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::http::error::ClientError;

/// Flatten a serializable filter struct into query pairs.
///
/// `None`/`null` fields are skipped. Scalars are rendered as plain text,
/// arrays become repeated keys.
pub fn query_pairs<Q: Serialize + ?Sized>(query: &Q) -> Result<Vec<(String, String)>, ClientError> {
    let value = serde_json::to_value(query).map_err(|e| ClientError::Encode(e.to_string()))?;
    let mut pairs = Vec::new();

    match value {
        Value::Object(map) => {
            for (key, value) in map {
                push_pair(&mut pairs, key, value);
            }
        }
        Value::Null => {}
        other => {
            return Err(ClientError::Encode(format!(
                "query parameters must be a map, got {}",
                other
            )))
        }
    }

    Ok(pairs)
}

fn push_pair(pairs: &mut Vec<(String, String)>, key: String, value: Value) {
    match value {
        Value::Null => {}
        Value::String(s) => pairs.push((key, s)),
        Value::Array(items) => {
            for item in items {
                push_pair(pairs, key.clone(), item);
            }
        }
        other => pairs.push((key, other.to_string())),
    }
}

/// Join base URL and path, then append URL-encoded query pairs.
pub fn build_url(base: &str, path: &str, pairs: &[(String, String)]) -> Result<Url, ClientError> {
    let joined = if base.ends_with('/') && path.starts_with('/') {
        format!("{}{}", base.trim_end_matches('/'), path)
    } else {
        format!("{}{}", base, path)
    };

    let mut url = Url::parse(&joined).map_err(|e| ClientError::InvalidUrl {
        url: joined.clone(),
        reason: e.to_string(),
    })?;

    if !pairs.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    Ok(url)
}
