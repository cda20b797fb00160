use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::cfg::MISSING_KEY_DEFAULT;
use crate::error::DrillError;
use crate::value::Loose;

/// Element at a loosely typed index.
///
/// The index must coerce to an integer (floats truncate) and lie in
/// `[0, len)`; negative indices are rejected rather than counted from the end.
pub fn try_element_at<T: Clone>(seq: &[T], index: &Loose) -> Result<T, DrillError> {
    let idx = index.to_i64().ok_or_else(|| DrillError::InvalidIndex {
        raw: index.to_string(),
    })?;
    usize::try_from(idx)
        .ok()
        .and_then(|i| seq.get(i))
        .cloned()
        .ok_or(DrillError::IndexOutOfRange {
            index: idx,
            len: seq.len(),
        })
}

/// Sentinel form of `try_element_at`.
pub fn element_at<T: Clone + fmt::Debug>(seq: &[T], index: &Loose) -> Option<T> {
    match try_element_at(seq, index) {
        Ok(v) => {
            tracing::info!(%index, value = ?v, "element");
            Some(v)
        }
        Err(err) => {
            tracing::warn!(%index, %err, "element rejected");
            None
        }
    }
}

/// Value under `key`; a miss reports the documented default and yields `None`.
pub fn lookup<'a, K, V>(map: &'a HashMap<K, V>, key: &str) -> Option<&'a V>
where
    K: Borrow<str> + Hash + Eq,
    V: fmt::Debug,
{
    match map.get(key) {
        Some(v) => {
            tracing::info!(key, value = ?v, "lookup");
            Some(v)
        }
        None => {
            tracing::warn!(key, default = MISSING_KEY_DEFAULT, "missing key");
            None
        }
    }
}

/// Value under `key`, or the caller's `default` on a miss.
pub fn lookup_or<'a, K, V>(map: &'a HashMap<K, V>, key: &str, default: &'a V) -> &'a V
where
    K: Borrow<str> + Hash + Eq,
{
    map.get(key).unwrap_or(default)
}
