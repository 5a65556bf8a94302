//! 入力ファイル読み込み

use crate::error::{QuinielaError, Result};
use std::path::Path;

/// テキストファイルを読み込む（UTF-8）
pub fn read_document(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(QuinielaError::FileNotFound(path.display().to_string()));
    }

    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_document() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "Quiniela 1 2\n").unwrap();

        assert_eq!(read_document(&path).unwrap(), "Quiniela 1 2\n");
    }

    #[test]
    fn test_read_document_not_found() {
        let result = read_document(Path::new("/nonexistent/input.txt"));
        assert!(matches!(result, Err(QuinielaError::FileNotFound(_))));
    }

    #[test]
    fn test_read_document_directory() {
        let dir = tempdir().expect("Failed to create temp dir");
        let result = read_document(dir.path());
        assert!(matches!(result, Err(QuinielaError::FileNotFound(_))));
    }

    #[test]
    fn test_read_document_invalid_utf8() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, [0x51, 0xff, 0xfe]).unwrap();

        let result = read_document(&path);
        assert!(matches!(result, Err(QuinielaError::Io(_))));
    }
}
