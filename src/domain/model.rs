use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 一列資料：欄位名稱 (來自標題列) -> 儲存格內容，保留欄位順序
pub type FieldAttributes = IndexMap<String, String>;

/// CSV 匯出解析後的結果。分組鍵為每列第一個欄位，重複出現時附加到同一組。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataRecord {
    groups: IndexMap<String, Vec<FieldAttributes>>,
}

impl MetadataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, attributes: FieldAttributes) {
        self.groups.entry(key.into()).or_default().push(attributes);
    }

    pub fn get(&self, key: &str) -> Option<&[FieldAttributes]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FieldAttributes])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn record_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Generator-side view of one field, resolved from either JSON shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: String,
    pub label: String,
    pub required: bool,
    pub help_text: Option<String>,
    pub length: Option<String>,
    pub formula: Option<String>,
    pub picklist_values: Vec<String>,
}

impl FieldSpec {
    pub fn is_formula(&self) -> bool {
        self.field_type.contains("Formula")
    }

    pub fn is_picklist(&self) -> bool {
        self.field_type.starts_with("Picklist")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSpec {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

/// 生成器的輸出：文字行與統計，交給 load 階段寫出
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub statements: Vec<String>,
    pub separator: &'static str,
    pub objects: usize,
    pub fields: usize,
    pub skipped: Vec<String>,
}

impl GeneratedArtifact {
    pub fn render(&self) -> String {
        self.statements.join(self.separator)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum StatementForm {
    /// `CREATE OBJECT <name> ( ... )`
    #[default]
    Ddl,
    /// `SELECT <fields> FROM <name>`
    Select,
}
