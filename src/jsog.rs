//! Shared-reference JSON codec (JSOG)
//!
//! The backend serializes any object that appears more than once in a
//! response graph only at its first occurrence, tagged with `"@id"`. Later
//! occurrences are written as `{"@ref": "<id>"}`. Decoding happens in two
//! passes: the id table is built over the whole document, then the graph is
//! walked and every reference is replaced by a copy of the object it names.
//!
//! Each id is expanded once. Every later occurrence, whether a reference or the
//! in-place definition reached after a forward reference, is a clone of that
//! first expansion, so all copies of one object compare equal.
//!
//! A reference back to an object that is still being expanded (a cycle) has
//! no tree representation and decodes to `null`. A plain tree of a densely
//! shared graph still grows quickly, so decoding stops with
//! [`JsogError::TooLarge`] once the output exceeds [`MAX_NODES`] values.

use std::collections::HashMap;

use serde_json::{Map, Value};
use thiserror::Error;

const ID_KEY: &str = "@id";
const REF_KEY: &str = "@ref";

/// Upper bound on the number of JSON values a decoded document may contain
pub const MAX_NODES: usize = 1 << 20;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum JsogError {
    #[error("reference to unknown id `{0}`")]
    UnknownReference(String),

    #[error("id `{0}` is defined more than once")]
    DuplicateId(String),

    #[error("invalid id value: {0}")]
    InvalidId(String),

    #[error("decoded document exceeds {0} values")]
    TooLarge(usize),
}

/// Reinflate a JSOG document into plain nested JSON
pub fn decode(document: Value) -> Result<Value, JsogError> {
    let mut table = HashMap::new();
    collect_ids(&document, &mut table)?;

    let mut resolver = Resolver {
        table,
        resolved: HashMap::new(),
        expanding: Vec::new(),
        nodes: 0,
    };
    resolver.resolve(&document).map(|(value, _)| value)
}

/// Encode plain JSON, collapsing structurally equal objects into references
pub fn encode(document: &Value) -> Value {
    let mut seen = HashMap::new();
    encode_value(document, &mut seen)
}

fn id_of(value: &Value) -> Result<String, JsogError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(JsogError::InvalidId(other.to_string())),
    }
}

fn collect_ids<'a>(
    value: &'a Value,
    table: &mut HashMap<String, &'a Value>,
) -> Result<(), JsogError> {
    match value {
        Value::Object(map) => {
            if map.contains_key(REF_KEY) {
                return Ok(());
            }
            if let Some(raw) = map.get(ID_KEY) {
                let id = id_of(raw)?;
                if table.insert(id.clone(), value).is_some() {
                    return Err(JsogError::DuplicateId(id));
                }
            }
            for child in map.values() {
                collect_ids(child, table)?;
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_ids(item, table)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Second pass state: expanded objects by id and the ids on the current path
struct Resolver<'a> {
    table: HashMap<String, &'a Value>,
    resolved: HashMap<String, (Value, usize)>,
    expanding: Vec<String>,
    nodes: usize,
}

impl<'a> Resolver<'a> {
    fn charge(&mut self, count: usize) -> Result<(), JsogError> {
        self.nodes += count;
        if self.nodes > MAX_NODES {
            return Err(JsogError::TooLarge(MAX_NODES));
        }
        Ok(())
    }

    /// Clone of an already expanded id, charged at its full size
    fn cached(&mut self, id: &str) -> Result<Option<(Value, usize)>, JsogError> {
        let Some(count) = self.resolved.get(id).map(|(_, count)| *count) else {
            return Ok(None);
        };
        self.charge(count)?;
        Ok(self.resolved.get(id).map(|(value, _)| (value.clone(), count)))
    }

    /// Resolve one value, returning it with the number of JSON values it holds
    fn resolve(&mut self, value: &'a Value) -> Result<(Value, usize), JsogError> {
        match value {
            Value::Object(map) => {
                if let Some(raw) = map.get(REF_KEY) {
                    let id = id_of(raw)?;
                    if let Some(hit) = self.cached(&id)? {
                        return Ok(hit);
                    }
                    if self.expanding.contains(&id) {
                        self.charge(1)?;
                        return Ok((Value::Null, 1));
                    }
                    let target = *self
                        .table
                        .get(&id)
                        .ok_or(JsogError::UnknownReference(id))?;
                    return self.resolve(target);
                }

                let own_id = map.get(ID_KEY).map(id_of).transpose()?;
                if let Some(id) = &own_id {
                    if let Some(hit) = self.cached(id)? {
                        return Ok(hit);
                    }
                    self.expanding.push(id.clone());
                }

                self.charge(1)?;
                let mut count = 1;
                let mut out = Map::new();
                for (key, child) in map {
                    if key == ID_KEY {
                        continue;
                    }
                    let (resolved, size) = self.resolve(child)?;
                    count += size;
                    out.insert(key.clone(), resolved);
                }
                let out = Value::Object(out);

                if let Some(id) = own_id {
                    self.expanding.pop();
                    self.resolved.insert(id, (out.clone(), count));
                }
                Ok((out, count))
            }
            Value::Array(items) => {
                self.charge(1)?;
                let mut count = 1;
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    let (resolved, size) = self.resolve(item)?;
                    count += size;
                    out.push(resolved);
                }
                Ok((Value::Array(out), count))
            }
            other => {
                self.charge(1)?;
                Ok((other.clone(), 1))
            }
        }
    }
}

fn encode_value(value: &Value, seen: &mut HashMap<String, String>) -> Value {
    match value {
        Value::Object(map) => {
            let fingerprint = value.to_string();
            if let Some(id) = seen.get(&fingerprint) {
                let mut reference = Map::new();
                reference.insert(REF_KEY.to_string(), Value::String(id.clone()));
                return Value::Object(reference);
            }

            let id = (seen.len() + 1).to_string();
            seen.insert(fingerprint, id.clone());

            let mut out = Map::new();
            out.insert(ID_KEY.to_string(), Value::String(id));
            for (key, child) in map {
                out.insert(key.clone(), encode_value(child, seen));
            }
            Value::Object(out)
        }
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| encode_value(item, seen)).collect())
        }
        other => other.clone(),
    }
}
