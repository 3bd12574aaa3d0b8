use serde::{Deserialize, Deserializer};

/// Reads an explicit JSON `null` as `T::default()`.
///
/// Pair with `#[serde(default)]` so a missing column behaves the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Wraps whatever is present, `null` included, in `Some`.
///
/// With `#[serde(default)]` an absent column stays `None`, so a
/// `skip_serializing_if = "Option::is_none"` field writes back exactly
/// what the backend sent.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
