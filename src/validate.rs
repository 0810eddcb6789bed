//! Structural validation of decoded batches
//!
//! Works on the serialized (camelCase JSON) form so batches coming back from
//! storage or other services can be checked the same way as fresh ones.
//! Problems are collected, never raised; the caller decides whether a
//! partially valid batch is acceptable.

use serde::Serialize;
use serde_json::Value;

use crate::batch::SensorBatch;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

fn is_integer(value: Option<&Value>) -> bool {
    matches!(value, Some(v) if v.is_i64() || v.is_u64())
}

fn check_sensor(index: usize, sensor: &Value, errors: &mut Vec<String>) {
    let Some(fields) = sensor.as_object() else {
        errors.push(format!("sensors[{index}]: not an object"));
        return;
    };

    let name = fields.get("displayName").or_else(|| fields.get("name"));
    if !matches!(name, Some(Value::String(_))) {
        errors.push(format!("sensors[{index}]: displayName must be a string"));
    }
    if !is_integer(fields.get("typeCode")) {
        errors.push(format!("sensors[{index}]: typeCode must be an integer"));
    }
    if !is_integer(fields.get("physicalChannel")) {
        errors.push(format!("sensors[{index}]: physicalChannel must be an integer"));
    }
    if !is_integer(fields.get("friendlyChannel")) {
        errors.push(format!("sensors[{index}]: friendlyChannel must be an integer"));
    }
    if !matches!(fields.get("values"), Some(Value::Array(_))) {
        errors.push(format!("sensors[{index}]: values must be an array"));
    }
}

/// Validate a batch in its JSON form.
pub fn validate_value(batch: &Value) -> ValidationReport {
    let mut errors = Vec::new();

    let Some(fields) = batch.as_object() else {
        return ValidationReport::from_errors(vec!["batch must be an object".to_string()]);
    };

    match fields.get("deviceId") {
        Some(Value::String(id)) if !id.is_empty() => {}
        Some(Value::String(_)) => errors.push("deviceId is empty".to_string()),
        Some(_) => errors.push("deviceId must be a string".to_string()),
        None => errors.push("deviceId is missing".to_string()),
    }

    if matches!(fields.get("timestamp"), None | Some(Value::Null)) {
        errors.push("timestamp is missing".to_string());
    }

    match fields.get("sensors") {
        Some(Value::Array(sensors)) => {
            for (index, sensor) in sensors.iter().enumerate() {
                check_sensor(index, sensor, &mut errors);
            }
        }
        Some(_) => errors.push("sensors must be an array".to_string()),
        None => errors.push("sensors is missing".to_string()),
    }

    ValidationReport::from_errors(errors)
}

/// Validate a decoded batch.
pub fn validate(batch: &SensorBatch) -> ValidationReport {
    match serde_json::to_value(batch) {
        Ok(value) => validate_value(&value),
        Err(e) => ValidationReport::from_errors(vec![format!("batch is not serializable: {e}")]),
    }
}
