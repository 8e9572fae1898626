use crate::core::{ConfigProvider, Storage};
use crate::domain::model::StatementForm;
use crate::utils::error::{MigrateError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct MockStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_file(self, path: &str, data: &str) -> Self {
        self.files
            .lock()
            .await
            .insert(path.to_string(), data.as_bytes().to_vec());
        self
    }

    pub async fn get_file(&self, path: &str) -> Option<String> {
        let files = self.files.lock().await;
        files
            .get(path)
            .map(|data| String::from_utf8_lossy(data).into_owned())
    }

    pub async fn file_count(&self) -> usize {
        self.files.lock().await.len()
    }
}

impl Storage for MockStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let files = self.files.lock().await;
        files.get(path).cloned().ok_or_else(|| {
            MigrateError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path),
            ))
        })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let mut files = self.files.lock().await;
        files.insert(path.to_string(), data.to_vec());
        Ok(())
    }

    fn resolve(&self, path: &str) -> String {
        path.to_string()
    }
}

pub struct MockConfig {
    pub delimiter: u8,
    pub executable: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            executable: "sfdx".to_string(),
        }
    }
}

impl ConfigProvider for MockConfig {
    fn header_marker(&self) -> &str {
        "Field API Name"
    }

    fn delimiter(&self) -> u8 {
        self.delimiter
    }

    fn output_path(&self) -> &str {
        "out"
    }

    fn soql_output_file(&self, form: StatementForm) -> String {
        match form {
            StatementForm::Ddl => "out/soql_output/create_queries.soql".to_string(),
            StatementForm::Select => "out/soql_output/select_queries.soql".to_string(),
        }
    }

    fn cli_output_file(&self) -> String {
        "out/cli_output/cli_commands.soql".to_string()
    }

    fn cli_executable(&self) -> &str {
        &self.executable
    }
}
