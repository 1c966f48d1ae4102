use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use komento_client::{
    api::{Error, QuestionId},
    Backend,
};

/// Stores each key as `<key>.json` in a directory
pub struct DirBackend {
    dir: PathBuf,
}

impl DirBackend {
    pub fn open(dir: impl AsRef<Path>) -> io::Result<DirBackend> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(DirBackend { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Questions that currently have stored comments, in increasing order
    pub fn questions(&self) -> io::Result<Vec<QuestionId>> {
        let mut res = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let name = entry?.file_name();
            let id = name
                .to_str()
                .and_then(|n| n.strip_prefix("comments-"))
                .and_then(|n| n.strip_suffix(".json"))
                .and_then(|n| n.parse().ok());
            if let Some(id) = id {
                res.push(QuestionId(id));
            }
        }
        res.sort();
        Ok(res)
    }
}

impl Backend for DirBackend {
    fn read(&self, key: &str) -> Result<Option<String>, Error> {
        match fs::read_to_string(self.path(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::unavailable(format!("reading {key}: {e}"))),
        }
    }

    fn write(&mut self, key: &str, value: String) -> Result<(), Error> {
        // Readers must never see a partially written collection
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)
            .map_err(|e| Error::unavailable(format!("creating temporary file: {e}")))?;
        tmp.write_all(value.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| Error::unavailable(format!("writing {key}: {e}")))?;
        tmp.persist(self.path(key))
            .map_err(|e| Error::unavailable(format!("replacing {key}: {}", e.error)))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), Error> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::unavailable(format!("removing {key}: {e}"))),
        }
    }
}
