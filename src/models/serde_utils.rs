use serde::{Deserialize, Deserializer};

/// Deserialize a dataset section, treating `null` the same as an absent key.
pub fn section<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let records = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(records.unwrap_or_default())
}
