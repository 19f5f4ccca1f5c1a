use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// File path together with the file contents.
pub struct PathRead {
    pub path: PathBuf,
    pub read: String,
}

impl PathRead {
    /// Read a file, or standard input if the path is "-".
    pub fn try_from(path: &Path) -> io::Result<Self> {
        let read = if path == Path::new("-") {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)?;
            s
        } else {
            std::fs::read_to_string(path)?
        };
        let path = path.to_path_buf();
        Ok(Self { path, read })
    }

    /// Return stdin if no files given, else lazily read and return the files.
    pub fn from_pathbufs(files: &[PathBuf]) -> Box<dyn Iterator<Item = io::Result<Self>> + '_> {
        if files.is_empty() {
            Box::new(std::iter::once(Self::try_from(Path::new("-"))))
        } else {
            Box::new(files.iter().map(|file| Self::try_from(file)))
        }
    }
}
