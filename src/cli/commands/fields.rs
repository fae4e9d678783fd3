//! Implementation of the `guildwarden fields` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{or_dash, output, table_with_header, CommandOutput};
use crate::infrastructure::config::FIELDS;

/// The schema as printed by `fields`
#[derive(Debug, Serialize)]
pub struct FieldsOutput {
    /// One row per variable, in validation order
    pub fields: Vec<FieldRow>,
}

/// One schema row
#[derive(Debug, Serialize)]
pub struct FieldRow {
    /// Variable name
    pub name: &'static str,
    /// Coercion kind label
    pub kind: &'static str,
    /// Default when absent, if any
    pub default: Option<String>,
}

impl FieldsOutput {
    fn from_schema() -> Self {
        Self {
            fields: FIELDS
                .iter()
                .map(|spec| FieldRow {
                    name: spec.name,
                    kind: spec.kind.label(),
                    default: spec.kind.default_display(),
                })
                .collect(),
        }
    }
}

impl CommandOutput for FieldsOutput {
    fn to_human(&self) -> String {
        let mut table = table_with_header(&["Variable", "Kind", "Default"]);
        for field in &self.fields {
            table.add_row(vec![
                field.name.to_string(),
                field.kind.to_string(),
                or_dash(field.default.as_deref()),
            ]);
        }
        table.to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print the schema
pub fn execute(json_mode: bool) -> Result<()> {
    output(&FieldsOutput::from_schema(), json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_schema_field_in_order() {
        let output = FieldsOutput::from_schema();
        let names: Vec<_> = output.fields.iter().map(|field| field.name).collect();
        let expected: Vec<_> = FIELDS.iter().map(|spec| spec.name).collect();
        assert_eq!(names, expected);

        let json = output.to_json();
        assert_eq!(json["fields"][0]["name"], "DISCORD_TOKEN");
        assert_eq!(json["fields"][0]["kind"], "required string");
        assert!(json["fields"][0]["default"].is_null());
        assert_eq!(json["fields"][2]["default"], "./data/bot.db");
    }
}
