use serde::Deserialize;
use serde_json::{Map, Value};

/// A post exactly as the content API returned it.
///
/// The API is not consistent about where it puts the fields: either directly on the record,
/// or nested under `attributes`. [`RawRecord::shape`] decides that once per record.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct RawRecord(Value);

pub enum RecordShape<'a> {
    Nested(Fields<'a>),
    Direct(Fields<'a>),
}

impl<'a> RecordShape<'a> {
    pub fn fields(&self) -> Fields<'a> {
        match self {
            RecordShape::Nested(fields) | RecordShape::Direct(fields) => *fields,
        }
    }
}

impl RawRecord {
    pub fn new(value: Value) -> Self {
        RawRecord(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// `None` when the record is not an object at all.
    pub fn shape(&self) -> Option<RecordShape<'_>> {
        let record = self.0.as_object()?;
        match record.get("attributes").and_then(Value::as_object) {
            Some(attributes) => Some(RecordShape::Nested(Fields(attributes))),
            None => Some(RecordShape::Direct(Fields(record))),
        }
    }
}

/// Read-only view over one level of record fields.
#[derive(Clone, Copy)]
pub struct Fields<'a>(&'a Map<String, Value>);

impl<'a> Fields<'a> {
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Non-empty string value of `key`.
    pub fn text(&self, key: &str) -> Option<&'a str> {
        self.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// Resolves a related record (media, author) stored either as `{data: {attributes: {..}}}`
    /// or directly as `{..}`.
    pub fn relation(&self, key: &str) -> Option<Fields<'a>> {
        let related = self.get(key)?.as_object()?;
        match related.get("data").filter(|d| !d.is_null()) {
            Some(data) => {
                let entry = match data {
                    Value::Array(items) => items.first()?,
                    other => other,
                };
                entry.get("attributes")
                    .and_then(Value::as_object)
                    .map(Fields)
            }
            None => Some(Fields(related)),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_shape_detection() {
        let nested = RawRecord::new(json!({"id": 1, "attributes": {"slug": "a"}}));
        assert!(matches!(nested.shape(), Some(RecordShape::Nested(_))));
        assert_eq!(nested.shape().unwrap().fields().text("slug"), Some("a"));

        let direct = RawRecord::new(json!({"id": 1, "slug": "b"}));
        assert!(matches!(direct.shape(), Some(RecordShape::Direct(_))));
        assert_eq!(direct.shape().unwrap().fields().text("slug"), Some("b"));

        // A null attributes member does not count as the nested convention
        let null_attrs = RawRecord::new(json!({"attributes": null, "slug": "c"}));
        assert!(matches!(null_attrs.shape(), Some(RecordShape::Direct(_))));

        assert!(RawRecord::new(json!("not a record")).shape().is_none());
    }

    #[test]
    fn test_text_ignores_blank_and_non_strings() {
        let record = RawRecord::new(json!({"title": "  ", "slug": 12, "description": "desc"}));
        let fields = record.shape().unwrap().fields();
        assert_eq!(fields.text("title"), None);
        assert_eq!(fields.text("slug"), None);
        assert_eq!(fields.text("description"), Some("desc"));
        assert_eq!(fields.text("missing"), None);
    }

    #[test]
    fn test_relation_conventions() {
        let record = RawRecord::new(json!({
            "nested": {"data": {"id": 3, "attributes": {"url": "/uploads/n.png"}}},
            "direct": {"url": "/uploads/d.png"},
            "list": {"data": [{"attributes": {"url": "/uploads/first.png"}}]},
            "empty": {"data": null},
            "broken": {"data": {"id": 3}},
            "scalar": "x",
        }));
        let fields = record.shape().unwrap().fields();

        assert_eq!(fields.relation("nested").and_then(|f| f.text("url")), Some("/uploads/n.png"));
        assert_eq!(fields.relation("direct").and_then(|f| f.text("url")), Some("/uploads/d.png"));
        assert_eq!(fields.relation("list").and_then(|f| f.text("url")), Some("/uploads/first.png"));
        assert_eq!(fields.relation("empty").and_then(|f| f.text("url")), None);
        assert!(fields.relation("broken").is_none());
        assert!(fields.relation("scalar").is_none());
        assert!(fields.relation("missing").is_none());
    }
}
