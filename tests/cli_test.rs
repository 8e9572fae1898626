use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const EXPORT: &str = "Exported schema\n\
Object API Name,Field API Name,Data Type,Field Label,Is Required on Create\n\
Account,Email__c,Email,Email,true\n\
Account,Name__c,,Name,\n";

fn ssm(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ssm").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_import_then_generate_soql() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("schema.csv"), EXPORT).unwrap();

    ssm(&dir)
        .args(["import-metadata", "schema.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("schema.csv.json"));

    ssm(&dir)
        .args(["generate-soql", "schema.csv.json"])
        .assert()
        .success();

    let ddl = std::fs::read_to_string(dir.path().join("csv_files/soql_output/create_queries.soql")).unwrap();
    assert_eq!(ddl, "CREATE OBJECT Account (\n  Email__c: Email,\n  Name__c: Text\n)");
}

#[test]
fn test_generate_cli_to_stdout() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("schema.csv"), EXPORT).unwrap();

    ssm(&dir).args(["import-metadata", "schema.csv"]).assert().success();

    ssm(&dir)
        .args(["generate-cli", "schema.csv.json", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("sfdx force:object:create -n Account\n"))
        .stdout(predicate::str::contains(
            "sfdx force:field:create -t Email -n Email__c -l \"Email\" -r Account --required\n",
        ));

    assert!(!dir.path().join("csv_files/cli_output").exists());
}

#[test]
fn test_missing_header_fails_without_output() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("plain.csv"), "a,b\n1,2\n").unwrap();

    ssm(&dir)
        .args(["import-metadata", "plain.csv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("header row not found"));

    assert!(!dir.path().join("plain.csv.json").exists());
}

#[test]
fn test_malformed_json_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bad.json"), "{ nope").unwrap();

    ssm(&dir)
        .args(["generate-cli", "bad.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not valid JSON"));

    assert!(!dir.path().join("csv_files").exists());
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();

    ssm(&dir)
        .args(["generate-soql", "missing.json"])
        .assert()
        .code(3);
}

#[test]
fn test_config_file_controls_output_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("ssm.toml"), "[output]\nbase_dir = \"generated\"\n").unwrap();
    std::fs::write(dir.path().join("meta.json"), r#"{"Lead": [{"fieldName": "Status"}]}"#).unwrap();

    ssm(&dir)
        .args(["generate-soql", "meta.json", "--form", "select"])
        .assert()
        .success();

    let select = std::fs::read_to_string(dir.path().join("generated/soql_output/select_queries.soql")).unwrap();
    assert_eq!(select, "SELECT Status FROM Lead");
}
