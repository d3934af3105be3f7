use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const FILE_STEM: &str = "memoryCells";

/// Reads and writes exported memory cells as a JSON array of strings
pub struct MemoryCellStore;

impl MemoryCellStore {
    /// `<dir>/memoryCells<suffix>.json`
    pub fn path_for<P: AsRef<Path>>(dir: P, suffix: usize) -> PathBuf {
        dir.as_ref().join(format!("{}{}.json", FILE_STEM, suffix))
    }

    pub fn save<P: AsRef<Path>>(dir: P, suffix: usize, cells: &[String]) -> Result<PathBuf> {
        let path = Self::path_for(dir, suffix);

        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut writer, cells)?;
        writer.flush()?;

        log::info!("Wrote {} memory cells to {}", cells.len(), path.display());
        Ok(path)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClonalgError;

    #[test]
    fn test_file_name_uses_suffix() {
        let path = MemoryCellStore::path_for("/tmp/out", 12);
        assert_eq!(path, PathBuf::from("/tmp/out/memoryCells12.json"));
    }

    #[test]
    fn test_save_writes_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let cells = vec!["ACGT".to_string(), "TTGA".to_string()];

        let path = MemoryCellStore::save(dir.path(), 4, &cells).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();

        assert_eq!(raw, "[\"ACGT\",\"TTGA\"]");
        assert_eq!(MemoryCellStore::load(&path).unwrap(), cells);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = MemoryCellStore::save(&missing, 1, &["A".to_string()]).unwrap_err();
        assert!(matches!(err, ClonalgError::Io(_)));
    }
}
