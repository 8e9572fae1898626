use crate::core::schema::SchemaDocument;
use crate::domain::model::{FieldSpec, GeneratedArtifact};

pub const DEFAULT_EXECUTABLE: &str = "sfdx";

/// Builds `force:object:create` / `force:field:create` invocations.
///
/// Nothing is executed; the flag order of each command is fixed because the
/// consuming tool and any scripts wrapping the output depend on it.
#[derive(Debug, Clone)]
pub struct CliCommandBuilder {
    executable: String,
}

impl Default for CliCommandBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_EXECUTABLE)
    }
}

impl CliCommandBuilder {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn object_command(&self, object_name: &str) -> String {
        format!("{} force:object:create -n {}", self.executable, object_name)
    }

    pub fn field_command(&self, object_name: &str, field: &FieldSpec) -> String {
        let mut command = format!(
            "{} force:field:create -t {} -n {} -l \"{}\" -r {}",
            self.executable,
            field.field_type,
            field.name,
            quote_escape(&field.label),
            object_name
        );

        if let Some(help_text) = &field.help_text {
            command.push_str(&format!(" -d \"{}\"", quote_escape(help_text)));
        }
        if let Some(length) = &field.length {
            command.push_str(&format!(" --length {}", length));
        }
        if field.required {
            command.push_str(" --required");
        }
        if field.is_formula() {
            if let Some(formula) = &field.formula {
                command.push_str(&format!(" --formula \"{}\"", quote_escape(formula)));
            }
        }
        if field.is_picklist() && !field.picklist_values.is_empty() {
            command.push_str(&format!(
                " --picklist-values \"{}\"",
                quote_escape(&field.picklist_values.join(";"))
            ));
        }

        command
    }

    pub fn generate(&self, document: &SchemaDocument) -> GeneratedArtifact {
        let mut statements = Vec::with_capacity(document.objects.len() + document.field_count());

        for object in &document.objects {
            statements.push(self.object_command(&object.name));
            for field in &object.fields {
                statements.push(self.field_command(&object.name, field));
            }
        }

        if statements.is_empty() {
            tracing::warn!("⚠️ No valid objects to generate CLI commands for");
        }

        GeneratedArtifact {
            statements,
            separator: "\n",
            objects: document.objects.len(),
            fields: document.field_count(),
            skipped: document.skipped_objects(),
        }
    }
}

pub fn generate_cli_commands(document: &SchemaDocument) -> GeneratedArtifact {
    CliCommandBuilder::default().generate(document)
}

fn quote_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
