use crate::domain::model::{FieldSpec, ObjectSpec};
use crate::utils::error::{MigrateError, Result};
use serde_json::{Map, Value};

/// 標題列本身被當成物件時的鍵，生成時略過
pub const OBJECT_HEADER_KEY: &str = "OBJECT API NAME";

const NAME_KEYS: &[&str] = &["fieldName", "Field API Name"];
const TYPE_KEYS: &[&str] = &["fieldType", "Data Type"];
const LABEL_KEYS: &[&str] = &["label", "fieldLabel", "Field Label"];
const REQUIRED_KEYS: &[&str] = &["required", "isRequired", "Is Required on Create"];
const HELP_KEYS: &[&str] = &["helpText", "Help Text"];
const LENGTH_KEYS: &[&str] = &["length", "Length"];
const FORMULA_KEYS: &[&str] = &["formula", "Formula Text"];
const PICKLIST_KEYS: &[&str] = &["picklistValues", "Picklist Values"];

pub const DEFAULT_FIELD_TYPE: &str = "Text";

/// The intermediate JSON after shape resolution.
///
/// Objects keep document order. Entries that are neither a list of field
/// records nor an object with a `fields` list end up in `skipped`.
#[derive(Debug, Default)]
pub struct SchemaDocument {
    pub objects: Vec<ObjectSpec>,
    pub skipped: Vec<MigrateError>,
}

impl SchemaDocument {
    pub fn field_count(&self) -> usize {
        self.objects.iter().map(|o| o.fields.len()).sum()
    }

    pub fn skipped_objects(&self) -> Vec<String> {
        self.skipped
            .iter()
            .filter_map(|e| match e {
                MigrateError::ShapeError { object, .. } => Some(object.clone()),
                _ => None,
            })
            .collect()
    }

    fn skip(&mut self, object: String, message: &str) {
        tracing::warn!("⚠️ Skipping {} as it does not have valid fields: {}", object, message);
        self.skipped.push(MigrateError::ShapeError {
            object,
            message: message.to_string(),
        });
    }
}

pub fn parse_schema_bytes(bytes: &[u8]) -> Result<SchemaDocument> {
    let value: Value = serde_json::from_slice(bytes)?;
    schema_from_value(value)
}

pub fn parse_schema_str(content: &str) -> Result<SchemaDocument> {
    let value: Value = serde_json::from_str(content)?;
    schema_from_value(value)
}

pub fn schema_from_value(value: Value) -> Result<SchemaDocument> {
    let entries = match value {
        Value::Object(entries) => entries,
        other => {
            return Err(MigrateError::MalformedInputError {
                message: format!(
                    "expected a JSON object keyed by object name, found {}",
                    json_kind(&other)
                ),
            })
        }
    };

    let mut document = SchemaDocument::default();

    for (object_name, entry) in entries {
        if object_name.eq_ignore_ascii_case(OBJECT_HEADER_KEY) {
            tracing::debug!("Skipping header pseudo-object '{}'", object_name);
            continue;
        }

        let items = match entry {
            Value::Array(items) => items,
            Value::Object(mut inner) => match inner.remove("fields") {
                Some(Value::Array(items)) => items,
                _ => {
                    document.skip(object_name, "an object entry needs a \"fields\" array");
                    continue;
                }
            },
            other => {
                let message = format!("expected a list of fields, found {}", json_kind(&other));
                document.skip(object_name, &message);
                continue;
            }
        };

        let mut fields = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::Object(attributes) => match resolve_field(attributes) {
                    Some(field) => fields.push(field),
                    None => tracing::warn!(
                        "⚠️ Skipping field #{} of {}: no fieldName or \"Field API Name\"",
                        index + 1,
                        object_name
                    ),
                },
                other => tracing::warn!(
                    "⚠️ Skipping field #{} of {}: expected an object, found {}",
                    index + 1,
                    object_name,
                    json_kind(other)
                ),
            }
        }

        document.objects.push(ObjectSpec {
            name: object_name,
            fields,
        });
    }

    Ok(document)
}

/// Builds a [`FieldSpec`] from one attribute map, `None` when no name resolves.
pub fn resolve_field(attributes: &Map<String, Value>) -> Option<FieldSpec> {
    let name = first_text(attributes, NAME_KEYS)?;

    Some(FieldSpec {
        name,
        field_type: first_text(attributes, TYPE_KEYS).unwrap_or_else(|| DEFAULT_FIELD_TYPE.to_string()),
        label: first_text(attributes, LABEL_KEYS).unwrap_or_default(),
        required: is_required(attributes),
        help_text: first_text(attributes, HELP_KEYS),
        length: first_text(attributes, LENGTH_KEYS),
        formula: first_text(attributes, FORMULA_KEYS),
        picklist_values: picklist_values(attributes),
    })
}

// 空字串、null、false 都視為缺值
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn first_text(attributes: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| attributes.get(*key))
        .find_map(text_of)
}

fn is_required(attributes: &Map<String, Value>) -> bool {
    let value = REQUIRED_KEYS
        .iter()
        .filter_map(|key| attributes.get(*key))
        .find(|v| text_of(*v).is_some() || matches!(v, Value::Bool(false)));

    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "y" | "1" | "x"
        ),
        _ => false,
    }
}

fn picklist_values(attributes: &Map<String, Value>) -> Vec<String> {
    for key in PICKLIST_KEYS {
        let values: Vec<String> = match attributes.get(*key) {
            Some(Value::Array(items)) => items.iter().filter_map(text_of).collect(),
            Some(Value::String(s)) => s
                .split([';', '|', '\n'])
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect(),
            _ => continue,
        };
        if !values.is_empty() {
            return values;
        }
    }
    Vec::new()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
