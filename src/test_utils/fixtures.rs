use std::path::PathBuf;

use tempfile::TempDir;

/// Isolated data root for table fixtures.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl Default for UnitTestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitTestFixture {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            data_path,
        }
    }

    /// Write `content` under the data root, creating parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!("[FIXTURE] Created table: {:?} ({} bytes)", full_path, content.len());
        full_path
    }

    /// Write a CSV table from a header and rows under the data root.
    pub fn create_table(&self, relative_path: &str, header: &[&str], rows: &[&[&str]]) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        let mut writer = csv::Writer::from_path(&full_path).expect("Failed to open table");
        writer.write_record(header).expect("Failed to write header");
        for row in rows {
            writer.write_record(*row).expect("Failed to write row");
        }
        writer.flush().expect("Failed to flush table");
        println!("[FIXTURE] Created table: {:?} ({} rows)", full_path, rows.len());
        full_path
    }
}
