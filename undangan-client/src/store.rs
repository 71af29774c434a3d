use std::collections::HashMap;

use anyhow::{anyhow, Context};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub const USER: &str = "user";
pub const CONFIG: &str = "config";
pub const COMMENT: &str = "comment";

/// Read side of the key-value store the host page persists state into
pub trait Store {
    /// Returns the document saved under `namespace`, if any
    fn get(&self, namespace: &str) -> Option<Value>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    namespaces: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    /// Builds a store from a JSON object mapping namespaces to documents
    pub fn from_json(doc: Value) -> anyhow::Result<MemoryStore> {
        match doc {
            Value::Object(m) => Ok(MemoryStore {
                namespaces: m.into_iter().collect(),
            }),
            _ => Err(anyhow!("store document is not a JSON object")),
        }
    }

    pub fn from_json_str(s: &str) -> anyhow::Result<MemoryStore> {
        let doc = serde_json::from_str(s).context("parsing store document")?;
        MemoryStore::from_json(doc)
    }

    pub fn insert(&mut self, namespace: &str, doc: Value) {
        self.namespaces.insert(namespace.to_string(), doc);
    }
}

impl Store for MemoryStore {
    fn get(&self, namespace: &str) -> Option<Value> {
        self.namespaces.get(namespace).cloned()
    }
}

/// Snapshot of one namespace, read once when the render context is built
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bucket(Map<String, Value>);

impl Bucket {
    pub fn load<S: Store + ?Sized>(store: &S, namespace: &str) -> Bucket {
        match store.get(namespace) {
            None => Bucket::default(),
            Some(Value::Object(m)) => Bucket(m),
            Some(v) => {
                tracing::warn!(namespace, kind = kind(&v), "ignoring non-object store namespace");
                Bucket::default()
            }
        }
    }

    /// Returns `key` if it is set and has the expected type
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let v = self.0.get(key)?;
        if v.is_null() {
            return None;
        }
        match serde_json::from_value(v.clone()) {
            Ok(v) => Some(v),
            Err(err) => {
                tracing::warn!(key, %err, "ignoring store value of unexpected type");
                None
            }
        }
    }
}

impl From<Map<String, Value>> for Bucket {
    fn from(m: Map<String, Value>) -> Bucket {
        Bucket(m)
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
