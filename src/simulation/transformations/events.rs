use serde_json::Value;

use crate::models::errors::TransformError;
use crate::models::events::{EventFields, RawLogEntry};
use crate::simulation::transformations::schema::{EventSchema, ValueShape, schema_for};

pub trait EventTransformer {
    /// Flattens one log entry. Unrecognized events yield an empty field set.
    fn transform_event(&self) -> Result<EventFields, TransformError>;
}

impl EventTransformer for RawLogEntry {
    fn transform_event(&self) -> Result<EventFields, TransformError> {
        match self.name().and_then(schema_for) {
            Some(schema) => extract_fields(self, schema),
            None => Ok(EventFields::new()),
        }
    }
}

fn extract_fields(log: &RawLogEntry, schema: &EventSchema) -> Result<EventFields, TransformError> {
    let mut fields = EventFields::new();
    fields.insert("name".to_string(), Value::from(schema.name));

    let address = log.address().ok_or_else(|| TransformError::MissingEmitter {
        event: schema.name.to_string(),
    })?;
    fields.insert(schema.emitter.to_string(), address.clone());

    for field in schema.fields {
        let value = log
            .input(field.index)
            .ok_or_else(|| TransformError::MissingInput {
                event: schema.name.to_string(),
                index: field.index,
                field: field.key.to_string(),
            })?;
        fields.insert(field.key.to_string(), value.clone());
    }

    Ok(fields)
}

/// Keys of list-valued fields whose value is not a JSON array. Values are
/// never rewritten; callers decide whether to report these.
pub fn list_shape_mismatches(fields: &EventFields) -> Vec<&'static str> {
    let Some(schema) = fields
        .get("name")
        .and_then(Value::as_str)
        .and_then(schema_for)
    else {
        return Vec::new();
    };

    schema
        .fields
        .iter()
        .filter(|field| field.shape == ValueShape::List)
        .filter(|field| fields.get(field.key).is_some_and(|value| !value.is_array()))
        .map(|field| field.key)
        .collect()
}
