use anyhow::Context;
use std::{
    fs::{self, File},
    io::{Read, Write},
    path::Path,
};

/// Helper function to read a file that logs the path of the file in case of an error.
pub fn read_file(path: &Path) -> Result<Vec<u8>, anyhow::Error> {
    let mut buffer = Vec::new();
    let mut file = open_file(path)?;
    file.read_to_end(&mut buffer)
        .context(format!("Can't read file at {}", path.display()))?;
    Ok(buffer)
}

/// Helper function to read a file as UTF-8 string.
pub fn read_file_to_string(path: &Path) -> Result<String, anyhow::Error> {
    let buffer = read_file(path)?;
    let content =
        String::from_utf8(buffer).context(format!("Invalid utf8 in file {}", path.display()))?;
    Ok(content)
}

/// Helper function to write a file that logs the path of the file in case of an error.
pub fn write_file(path: &Path, content: &[u8]) -> Result<(), anyhow::Error> {
    let mut file = create_file(path)?;
    file.write_all(content)
        .context(format!("Can't write to file at {}", path.display()))?;
    file.flush()?;
    Ok(())
}

/// Helper function to open a file that logs the path of the file in case of an error.
pub fn open_file(path: &Path) -> Result<File, anyhow::Error> {
    let file = File::open(path).context(format!("Can't open file at {}", path.display()))?;
    Ok(file)
}

/// Helper function to create a file that logs the path of the file in case of an error.
///
/// Missing parent directories are created.
pub fn create_file(path: &Path) -> Result<File, anyhow::Error> {
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            fs::create_dir_all(parent_dir).context(format!(
                "Can't create directory at {}",
                parent_dir.display()
            ))?;
        }
    }

    let file = File::create(path).context(format!("Can't create file at {}", path.display()))?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_and_read_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/bookmarks.html");

        write_file(&file_path, b"<DL><p>").unwrap();
        assert!(file_path.exists(), "Missing path: {}", file_path.display());

        let content = read_file_to_string(&file_path).unwrap();
        assert_eq!(content, "<DL><p>");
    }

    #[test]
    fn test_open_missing_file() {
        let temp_dir = tempdir().unwrap();
        let res = open_file(&temp_dir.path().join("missing.html"));
        assert!(res.is_err());
    }
}
