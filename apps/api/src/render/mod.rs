//! Render layer — the caller side of the expansion engine's contract.
//!
//! Assembles a typed `Record` from a resume's stored JSON, pairs it with a
//! catalog template body, and runs one synchronous expansion. The engine
//! itself stays a pure function; everything stateful lives here.

pub mod handlers;

use serde_json::Value;

use crate::engine::{Field, Record};

/// Builds the outermost expansion scope from a resume's structured data.
///
/// The resume editor conventionally nests contact fields under a `contact`
/// object; the expansion model has no single-nested-record field kind, so
/// scalar fields of any top-level object are hoisted into the outer scope
/// here (existing top-level fields win on collision). Everything else maps
/// through the engine's standard JSON classification.
pub fn assemble_record(data: &Value) -> Record {
    let mut record = Record::from_value(data);

    let Value::Object(map) = data else {
        return record;
    };
    for value in map.values() {
        let Value::Object(sub) = value else { continue };
        for (name, v) in sub {
            if record.field(name).is_some() {
                continue;
            }
            if let Some(s) = scalar_string(v) {
                record.set(name.clone(), Field::Scalar(s));
            }
        }
    }

    record
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
