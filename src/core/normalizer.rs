//! Turns a source's response document into [`UserRecord`]s.
//!
//! The user list is looked up under `results`, then `data`, then `users`;
//! the first key holding an array wins. Each entry is mapped field by field
//! through the source's [`FieldMapping`].

use crate::core::{FieldMapping, NormalizedBatch, RejectedEntry, UserField, UserRecord};
use crate::utils::error::{EtlError, Result};
use serde_json::Value;

pub const USER_LIST_KEYS: [&str; 3] = ["results", "data", "users"];

pub fn locate_user_list(document: &Value) -> Option<&Vec<Value>> {
    USER_LIST_KEYS
        .iter()
        .find_map(|key| document.get(key).and_then(Value::as_array))
}

/// Resolves a dot separated path such as `"name.first"`.
pub fn lookup_path<'a>(entry: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(entry, |current, key| current.get(key))
}

// null、空字串、物件與陣列都視為缺值
fn present_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub fn extract_field(entry: &Value, candidates: &[String]) -> Option<String> {
    candidates
        .iter()
        .find_map(|path| lookup_path(entry, path).and_then(present_text))
}

/// Maps one entry, or reports which fields could not be found.
pub fn normalize_entry(
    entry: &Value,
    mapping: &FieldMapping,
) -> std::result::Result<UserRecord, Vec<UserField>> {
    let values = UserField::ALL.map(|field| extract_field(entry, mapping.candidates(field)));

    let missing: Vec<UserField> = UserField::ALL
        .into_iter()
        .zip(values.iter())
        .filter(|(_, value)| value.is_none())
        .map(|(field, _)| field)
        .collect();
    if !missing.is_empty() {
        return Err(missing);
    }

    let [first_name, last_name, email, source_id] = values;
    UserRecord::new(
        first_name.unwrap_or_default(),
        last_name.unwrap_or_default(),
        email.unwrap_or_default(),
        source_id.unwrap_or_default(),
    )
}

pub fn normalize_document(
    source_name: &str,
    document: &Value,
    mapping: &FieldMapping,
) -> Result<NormalizedBatch> {
    let entries = locate_user_list(document).ok_or_else(|| EtlError::MissingUserList {
        source_name: source_name.to_string(),
    })?;

    let mut batch = NormalizedBatch::default();
    for (index, entry) in entries.iter().enumerate() {
        match normalize_entry(entry, mapping) {
            Ok(record) => batch.records.push(record),
            Err(missing) => batch.rejected.push(RejectedEntry { index, missing }),
        }
    }

    tracing::debug!(
        "🔧 {}: {} accepted, {} rejected",
        source_name,
        batch.records.len(),
        batch.rejected.len()
    );
    Ok(batch)
}

pub fn normalize_body(source_name: &str, body: &str, mapping: &FieldMapping) -> Result<NormalizedBatch> {
    let document: Value = serde_json::from_str(body)?;
    normalize_document(source_name, &document, mapping)
}
