//! Reading source files as UTF-8 text.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Reads a whole file as text, rejecting UTF-16 and stripping a UTF-8 BOM.
pub fn read_utf8(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::read(path, e))?;
    let unsupported = |encoding| IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding,
    };

    match bytes.get(0..2) {
        Some([0xFF, 0xFE]) => return Err(unsupported("UTF-16 LE")),
        Some([0xFE, 0xFF]) => return Err(unsupported("UTF-16 BE")),
        _ => {}
    }

    let text = String::from_utf8(bytes).map_err(|_| unsupported("non-UTF-8"))?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn test_read_utf8_strips_bom() {
        let file = temp_file(b"\xEF\xBB\xBFName,Position\n");
        assert_eq!(read_utf8(file.path()).unwrap(), "Name,Position\n");
    }

    #[test]
    fn test_read_utf8_rejects_utf16() {
        let file = temp_file(&[0xFF, 0xFE, b'N', 0x00]);
        let err = read_utf8(file.path()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            }
        ));
    }

    #[test]
    fn test_read_utf8_missing_file() {
        let err = read_utf8(Path::new("/nonexistent/board.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
