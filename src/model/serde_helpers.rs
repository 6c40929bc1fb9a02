use serde::{Deserialize, Deserializer};

/// Upstream identifiers are delivered either as JSON numbers or as decimal strings
/// (`21` or `"21"`); both decode to the same integer.
pub mod lenient_id {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    /// `null` decodes to `None`; pair with `#[serde(default)]` so an absent field does too.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawId>::deserialize(deserializer)? {
            None => Ok(None),
            Some(RawId::Number(id)) => Ok(Some(id)),
            Some(RawId::Text(text)) => text.trim().parse::<i64>().map(Some).map_err(|_| {
                serde::de::Error::custom(format!("identifier {text:?} is not an integer"))
            }),
        }
    }
}

/// Decodes `null` as the type's default value instead of failing.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
