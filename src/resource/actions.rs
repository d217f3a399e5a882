//! Verb-to-HTTP-method action table
//!
//! Declares, per logical CRUD verb, which HTTP method a resource handle
//! issues and whether the result is a single entity or a list. The default
//! table is fixed; a host can replace it wholesale through
//! [`crate::ClientConfig::set_actions`], including from data (the types
//! are serde-deserializable).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Logical CRUD verbs a resource handle understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Get,
    Query,
    Save,
    Update,
    /// Also answers to "delete" in data form.
    #[serde(alias = "delete")]
    Remove,
}

impl Verb {
    pub const ALL: [Verb; 5] = [Verb::Get, Verb::Query, Verb::Save, Verb::Update, Verb::Remove];

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "get",
            Verb::Query => "query",
            Verb::Save => "save",
            Verb::Update => "update",
            Verb::Remove => "remove",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How one verb is carried over the wire. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ActionDescriptor {
    /// HTTP method name (GET, POST, PUT, DELETE, PATCH).
    pub method: String,
    /// Whether the response is expected to be a JSON array.
    #[serde(default)]
    pub is_list: bool,
}

impl ActionDescriptor {
    pub fn new(method: &str, is_list: bool) -> Self {
        Self {
            method: method.to_string(),
            is_list,
        }
    }
}

/// Mapping from verb to action descriptor.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ActionTable(HashMap<Verb, ActionDescriptor>);

impl Default for ActionTable {
    fn default() -> Self {
        let mut table = HashMap::new();
        table.insert(Verb::Get, ActionDescriptor::new("GET", false));
        table.insert(Verb::Query, ActionDescriptor::new("GET", true));
        table.insert(Verb::Save, ActionDescriptor::new("POST", false));
        table.insert(Verb::Update, ActionDescriptor::new("PUT", false));
        table.insert(Verb::Remove, ActionDescriptor::new("DELETE", false));
        Self(table)
    }
}

impl ActionTable {
    pub fn descriptor(&self, verb: Verb) -> Option<&ActionDescriptor> {
        self.0.get(&verb)
    }

    pub fn set(&mut self, verb: Verb, descriptor: ActionDescriptor) {
        self.0.insert(verb, descriptor);
    }
}
