use crate::{error::Error, utils::any::Any};
use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// String key/value persistence that outlives a page, like a browser's local storage.
pub trait Storage: Send + 'static {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: BTreeMap<String, String>,
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.values.insert(key.into(), value.into());

        ().ok()
    }
}

/// Storage persisted as a flat JSON object; every write rewrites the file.
#[derive(Debug)]
pub struct FileStorage {
    filepath: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStorage {
    pub fn open(filepath: &Path) -> Result<Self, Error> {
        let values = match filepath.read_to_string() {
            Ok(json) => json.deserialize_from_json::<BTreeMap<String, String>>()?,
            Err(error) if error.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => return Error::from(error).err(),
        };

        tracing::debug!(filepath = %filepath.display(), num_keys = values.len(), "opened storage");

        Self {
            filepath: filepath.to_path_buf(),
            values,
        }
        .ok()
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.values.insert(key.into(), value.into());

        let json = self.values.serialize()?;

        std::fs::write(&self.filepath, json)?.ok()
    }
}
