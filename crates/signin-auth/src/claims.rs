use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// ID token claims as issued by the authorization server.
///
/// Every field is optional on the wire. Fields of the wrong JSON type
/// decode as absent instead of failing the whole token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdTokenClaims {
    /// Subject (stable user identifier)
    #[serde(default, deserialize_with = "lenient_string")]
    pub sub: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    /// Expiration timestamp (Unix seconds)
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub exp: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub iss: Option<String>,
    /// Audience; a single string on the wire is normalised to one entry
    #[serde(default, deserialize_with = "one_or_many")]
    pub aud: Vec<String>,
    /// Raw `name` claim, read through [`NameClaim::from_value`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
}

impl IdTokenClaims {
    pub fn name(&self) -> NameClaim {
        self.name
            .as_ref()
            .map(NameClaim::from_value)
            .unwrap_or_default()
    }
}

/// First and last name out of a `{"firstName": .., "lastName": ..}` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameClaim {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl NameClaim {
    /// Anything that is not an object yields an empty name.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(String::from)
        };

        Self {
            first_name: field("firstName"),
            last_name: field("lastName"),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_str().map(String::from)))
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64))))
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(single)) => vec![single],
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| item.as_str().map(String::from))
            .collect(),
        _ => Vec::new(),
    })
}
