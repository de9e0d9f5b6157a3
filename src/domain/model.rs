use crate::utils::error::EtlError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 正規化後的使用者資料，建立後不可變更
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "First name")]
    first_name: String,
    #[serde(rename = "Last name")]
    last_name: String,
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "Source ID")]
    source_id: String,
}

impl UserRecord {
    /// Builds a record, reporting every field that is empty.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        source_id: impl Into<String>,
    ) -> std::result::Result<Self, Vec<UserField>> {
        let record = Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            source_id: source_id.into(),
        };

        let missing: Vec<UserField> = UserField::ALL
            .into_iter()
            .filter(|field| record.get(*field).trim().is_empty())
            .collect();

        if missing.is_empty() {
            Ok(record)
        } else {
            Err(missing)
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn get(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.first_name,
            UserField::LastName => &self.last_name,
            UserField::Email => &self.email,
            UserField::SourceId => &self.source_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    FirstName,
    LastName,
    Email,
    SourceId,
}

impl UserField {
    pub const ALL: [UserField; 4] = [
        UserField::FirstName,
        UserField::LastName,
        UserField::Email,
        UserField::SourceId,
    ];

    /// Column label used by both export formats.
    pub fn label(&self) -> &'static str {
        match self {
            UserField::FirstName => "First name",
            UserField::LastName => "Last name",
            UserField::Email => "Email",
            UserField::SourceId => "Source ID",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered candidate lookup paths for each of the four user fields.
///
/// Paths are dot separated (`"name.first"`) and resolved through nested
/// objects. The first candidate holding a present value wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMapping {
    pub first_name: Vec<String>,
    pub last_name: Vec<String>,
    pub email: Vec<String>,
    pub source_id: Vec<String>,
}

impl FieldMapping {
    pub fn candidates(&self, field: UserField) -> &[String] {
        match field {
            UserField::FirstName => &self.first_name,
            UserField::LastName => &self.last_name,
            UserField::Email => &self.email,
            UserField::SourceId => &self.source_id,
        }
    }
}

fn paths(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for FieldMapping {
    // 合併的 "name" 欄位會同時填入 first/last name
    fn default() -> Self {
        Self {
            first_name: paths(&["name", "first", "firstName", "first_name"]),
            last_name: paths(&["name", "last", "lastName", "last_name"]),
            email: paths(&["email"]),
            source_id: paths(&["id"]),
        }
    }
}

/// One configured HTTP source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub fields: FieldMapping,
}

impl SourceSpec {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            fields: FieldMapping::default(),
        }
    }

    pub fn with_fields(mut self, fields: FieldMapping) -> Self {
        self.fields = fields;
        self
    }
}

/// 內建的四個來源，順序即為查詢順序
pub fn default_sources() -> Vec<SourceSpec> {
    vec![
        SourceSpec::new("randomuser", "https://randomuser.me/api/").with_fields(FieldMapping {
            first_name: paths(&["name.first"]),
            last_name: paths(&["name.last"]),
            email: paths(&["email"]),
            source_id: paths(&["id.value", "login.uuid"]),
        }),
        SourceSpec::new("jsonplaceholder", "https://jsonplaceholder.typicode.com/users"),
        SourceSpec::new("dummyjson", "https://dummyjson.com/users"),
        SourceSpec::new("reqres", "https://reqres.in/api/users"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "users.json",
            OutputFormat::Csv => "users.csv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Json => "JSON",
            OutputFormat::Csv => "CSV",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = EtlError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(EtlError::UnsupportedFormat {
                value: s.trim().to_string(),
            }),
        }
    }
}

/// Raw result of fetching one source.
#[derive(Debug)]
pub struct FetchOutcome {
    pub source: SourceSpec,
    pub body: std::result::Result<String, EtlError>,
}

/// An entry that could not be turned into a [`UserRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    pub index: usize,
    pub missing: Vec<UserField>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedBatch {
    pub records: Vec<UserRecord>,
    pub rejected: Vec<RejectedEntry>,
}

#[derive(Debug)]
pub struct SourceReport {
    pub source: String,
    pub url: String,
    pub result: std::result::Result<NormalizedBatch, EtlError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSummary {
    pub source: String,
    pub accepted: usize,
    pub rejected: usize,
    pub failed: bool,
}

/// Records accepted across all sources, in query order.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub records: Vec<UserRecord>,
    pub sources: Vec<SourceSummary>,
    pub diagnostics: Vec<String>,
}

impl Collection {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub total_records: usize,
    pub output_path: Option<String>,
    pub export_error: Option<String>,
    pub diagnostics: Vec<String>,
    /// "User data saved to ..." or the save failure, shown after the diagnostics.
    pub export_message: String,
}
