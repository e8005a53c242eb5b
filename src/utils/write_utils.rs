//! Output writing utilities

use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::ines::errors::InesResult;

/// Create the parent directory of `path` if it is missing
///
/// # Returns
/// The directory that was created, or `None` if nothing needed creating
pub fn ensure_parent_dir(path: &Path) -> InesResult<Option<PathBuf>> {
    let Some(parent) = path.parent() else {
        return Ok(None);
    };
    if parent.as_os_str().is_empty() || parent.exists() {
        return Ok(None);
    }

    fs::create_dir_all(parent)?;
    info!("Created directory: {}", parent.display());
    Ok(Some(parent.to_path_buf()))
}

/// Write `bytes` verbatim to `path`, replacing any existing file
pub fn write_blob(path: &Path, bytes: &[u8]) -> InesResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()?;
    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_parent_dir_creates_once() {
        let root = std::env::temp_dir().join(format!("chrkit-write-{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        let target = root.join("data").join("graphics").join("out.bin");

        let created = ensure_parent_dir(&target).unwrap();
        assert_eq!(created, Some(root.join("data").join("graphics")));
        assert!(ensure_parent_dir(&target).unwrap().is_none());

        write_blob(&target, &[1, 2, 3, 4]).unwrap();
        assert_eq!(fs::read(&target).unwrap(), vec![1, 2, 3, 4]);

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_bare_file_name_needs_no_directory() {
        assert!(ensure_parent_dir(Path::new("out.bin")).unwrap().is_none());
    }
}
