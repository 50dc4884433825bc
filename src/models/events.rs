use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

////////////////////////////////////// Raw Data ////////////////////////////////////////
// One entry of `call_trace.logs` in the simulation response, kept as raw JSON.
// Fields are only read for recognized events, so the shape of anything else
// (undecoded logs with null `name`/`inputs`, foreign events) never matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawLogEntry(Value);

impl RawLogEntry {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// `raw.address` as sent. A present `null` is `Some(&Value::Null)`.
    pub fn address(&self) -> Option<&Value> {
        self.0.get("raw").and_then(|raw| raw.get("address"))
    }

    /// The `value` of the decoded argument at `index`, if both exist.
    pub fn input(&self, index: usize) -> Option<&Value> {
        self.0
            .get("inputs")
            .and_then(Value::as_array)
            .and_then(|inputs| inputs.get(index))
            .and_then(|input| input.get("value"))
    }
}

/////////////////////////////////// Transformed Data ///////////////////////////////////
/// Named fields extracted from one log entry, in output order.
pub type EventFields = Map<String, Value>;

// Final output record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedEvent {
    pub id: usize,
    #[serde(flatten)] // name, emitter and positional fields sit next to id
    pub fields: EventFields,
}

impl NormalizedEvent {
    pub fn new(id: usize, fields: EventFields) -> Self {
        Self { id, fields }
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn is_recognized(&self) -> bool {
        !self.fields.is_empty()
    }
}
