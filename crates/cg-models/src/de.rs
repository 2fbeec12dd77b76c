//! Deserialize helpers for fields CoinGecko sometimes sends as `null`

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::hash::Hash;

/// Deserializes `null` into `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes a list, treating a `null` list as empty and dropping `null` items.
pub(crate) fn vec_skip_nulls<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
  Ok(items.unwrap_or_default().into_iter().flatten().collect())
}

/// Deserializes a map, treating a `null` map as empty and dropping `null` values.
pub(crate) fn map_skip_nulls<'de, D, K, V>(deserializer: D) -> Result<HashMap<K, V>, D::Error>
where
  D: Deserializer<'de>,
  K: Deserialize<'de> + Eq + Hash,
  V: Deserialize<'de>,
{
  let entries = Option::<HashMap<K, Option<V>>>::deserialize(deserializer)?;
  Ok(
    entries
      .unwrap_or_default()
      .into_iter()
      .filter_map(|(key, value)| value.map(|value| (key, value)))
      .collect(),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, Deserialize)]
  struct Sample {
    #[serde(default, deserialize_with = "null_as_default")]
    flag: bool,

    #[serde(default, deserialize_with = "vec_skip_nulls")]
    names: Vec<String>,

    #[serde(default, deserialize_with = "map_skip_nulls")]
    prices: HashMap<String, f64>,
  }

  #[test]
  fn test_nulls_become_defaults() {
    let sample: Sample =
      serde_json::from_str(r#"{"flag": null, "names": null, "prices": null}"#).unwrap();
    assert!(!sample.flag);
    assert!(sample.names.is_empty());
    assert!(sample.prices.is_empty());
  }

  #[test]
  fn test_null_entries_are_dropped() {
    let sample: Sample = serde_json::from_str(
      r#"{"flag": true, "names": [null, "DeFi"], "prices": {"usd": null, "eur": 1.5}}"#,
    )
    .unwrap();
    assert!(sample.flag);
    assert_eq!(sample.names, vec!["DeFi".to_string()]);
    assert_eq!(sample.prices.len(), 1);
    assert_eq!(sample.prices["eur"], 1.5);
  }

  #[test]
  fn test_missing_fields_use_defaults() {
    let sample: Sample = serde_json::from_str("{}").unwrap();
    assert!(!sample.flag && sample.names.is_empty() && sample.prices.is_empty());
  }

  #[test]
  fn test_wrong_types_still_fail() {
    assert!(serde_json::from_str::<Sample>(r#"{"names": "DeFi"}"#).is_err());
    assert!(serde_json::from_str::<Sample>(r#"{"prices": {"usd": "x"}}"#).is_err());
  }
}
