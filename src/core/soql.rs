use crate::core::schema::SchemaDocument;
use crate::domain::model::{GeneratedArtifact, ObjectSpec, StatementForm};

/// `CREATE OBJECT <name> (` ... `)` for one object; fields comma-separated,
/// no trailing comma. An object without fields still yields an empty body.
pub fn create_statement(object: &ObjectSpec) -> String {
    let mut statement = format!("CREATE OBJECT {} (\n", object.name);
    let last = object.fields.len().saturating_sub(1);

    for (index, field) in object.fields.iter().enumerate() {
        let separator = if index < last { "," } else { "" };
        statement.push_str(&format!("  {}: {}{}\n", field.name, field.field_type, separator));
    }

    statement.push(')');
    statement
}

pub fn select_statement(object: &ObjectSpec) -> String {
    let fields: Vec<&str> = object.fields.iter().map(|f| f.name.as_str()).collect();
    format!("SELECT {} FROM {}", fields.join(", "), object.name)
}

pub fn generate_ddl(document: &SchemaDocument) -> GeneratedArtifact {
    build(document, StatementForm::Ddl)
}

pub fn generate_select(document: &SchemaDocument) -> GeneratedArtifact {
    build(document, StatementForm::Select)
}

pub fn generate_statements(document: &SchemaDocument, form: StatementForm) -> GeneratedArtifact {
    build(document, form)
}

fn build(document: &SchemaDocument, form: StatementForm) -> GeneratedArtifact {
    let (render, separator): (fn(&ObjectSpec) -> String, &'static str) = match form {
        StatementForm::Ddl => (create_statement, "\n\n"),
        StatementForm::Select => (select_statement, "\n"),
    };

    for object in document.objects.iter().filter(|o| o.fields.is_empty()) {
        tracing::warn!("⚠️ {} has no fields", object.name);
    }

    let statements = document.objects.iter().map(render).collect();

    GeneratedArtifact {
        statements,
        separator,
        objects: document.objects.len(),
        fields: document.field_count(),
        skipped: document.skipped_objects(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::schema_from_value;
    use serde_json::json;

    fn account_document() -> SchemaDocument {
        schema_from_value(json!({
            "Account": [
                {"fieldName": "Email", "fieldType": "Email"},
                {"fieldName": "Name", "fieldType": ""}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_create_statement_defaults_type_and_places_commas() {
        let artifact = generate_ddl(&account_document());
        assert_eq!(
            artifact.render(),
            "CREATE OBJECT Account (\n  Email: Email,\n  Name: Text\n)"
        );
    }

    #[test]
    fn test_empty_object_keeps_create_header() {
        let doc = schema_from_value(json!({"Empty__c": {"fields": []}})).unwrap();
        assert_eq!(generate_ddl(&doc).render(), "CREATE OBJECT Empty__c (\n)");
    }

    #[test]
    fn test_multiple_objects_are_separated_by_blank_line() {
        let doc = schema_from_value(json!({
            "B": [{"Field API Name": "One", "Data Type": "Number"}],
            "A": [{"fieldName": "Two"}]
        }))
        .unwrap();

        assert_eq!(
            generate_ddl(&doc).render(),
            "CREATE OBJECT B (\n  One: Number\n)\n\nCREATE OBJECT A (\n  Two: Text\n)"
        );
    }

    #[test]
    fn test_select_form() {
        let artifact = generate_select(&account_document());
        assert_eq!(artifact.render(), "SELECT Email, Name FROM Account");
        assert_eq!(artifact.objects, 1);
        assert_eq!(artifact.fields, 2);
    }

    #[test]
    fn test_select_keeps_one_statement_per_object() {
        let doc = schema_from_value(json!({
            "Lead": [{"fieldName": "Status"}, {"Field API Name": "Company"}],
            "Empty": []
        }))
        .unwrap();
        assert_eq!(
            generate_statements(&doc, StatementForm::Select).render(),
            "SELECT Status, Company FROM Lead\nSELECT  FROM Empty"
        );
    }

    #[test]
    fn test_skipped_objects_are_reported() {
        let doc = schema_from_value(json!({"Bad": 3, "Good": []})).unwrap();
        let artifact = generate_ddl(&doc);
        assert_eq!(artifact.statements.len(), 1);
        assert_eq!(artifact.skipped, vec!["Bad"]);
    }
}
