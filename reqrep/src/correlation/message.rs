use serde_json::{Map, Value};

use crate::correlation::correlation_id::{CorrelationId, RESERVED_CORRELATION_ID};

pub type Message = Map<String, Value>;

pub(crate) fn correlation_id_of(message: &Message, field_name: &str) -> CorrelationId {
    return message
        .get(field_name)
        .and_then(Value::as_u64)
        .unwrap_or(RESERVED_CORRELATION_ID);
}
