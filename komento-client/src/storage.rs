use std::collections::HashMap;

use crate::api::{Comment, Error, QuestionId};

/// A key-value medium holding the serialized comment collections
pub trait Backend {
    fn read(&self, key: &str) -> Result<Option<String>, Error>;
    fn write(&mut self, key: &str, value: String) -> Result<(), Error>;
    fn remove(&mut self, key: &str) -> Result<(), Error>;
}

impl<B: Backend + ?Sized> Backend for &mut B {
    fn read(&self, key: &str) -> Result<Option<String>, Error> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: String) -> Result<(), Error> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), Error> {
        (**self).remove(key)
    }
}

pub fn encode(comments: &[Comment]) -> Result<String, Error> {
    serde_json::to_string(comments).map_err(|e| Error::Unknown(format!("encoding comments: {e}")))
}

/// Records that fail to decode are dropped, so that one corrupt comment does
/// not make the whole conversation unreadable
pub fn decode(data: &str) -> Result<Vec<Comment>, Error> {
    let records: Vec<serde_json::Value> = serde_json::from_str(data)
        .map_err(|e| Error::Corrupt(format!("stored comments are not a list: {e}")))?;
    let total = records.len();
    let comments = records
        .into_iter()
        .enumerate()
        .filter_map(|(idx, r)| match serde_json::from_value::<Comment>(r) {
            Ok(c) => Some(c),
            Err(err) => {
                tracing::warn!(idx, %err, "dropping undecodable stored comment");
                None
            }
        })
        .collect::<Vec<_>>();
    if comments.len() != total {
        tracing::warn!(
            kept = comments.len(),
            total,
            "some stored comments could not be decoded"
        );
    }
    Ok(comments)
}

/// Nothing stored yet is an empty conversation
pub fn load<B: Backend>(backend: &B, question: QuestionId) -> Result<Vec<Comment>, Error> {
    match backend.read(&question.storage_key())? {
        None => Ok(Vec::new()),
        Some(data) => decode(&data),
    }
}

/// An empty collection is removed rather than stored
pub fn save<B: Backend>(
    backend: &mut B,
    question: QuestionId,
    comments: &[Comment],
) -> Result<(), Error> {
    let key = question.storage_key();
    if comments.is_empty() {
        return backend.remove(&key);
    }
    backend.write(&key, encode(comments)?)
}

/// In-memory medium, with an optional quota on the total stored bytes
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    data: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> MemoryBackend {
        MemoryBackend::default()
    }

    pub fn with_quota(bytes: usize) -> MemoryBackend {
        MemoryBackend {
            data: HashMap::new(),
            quota: Some(bytes),
        }
    }

    pub fn set_quota(&mut self, bytes: Option<usize>) {
        self.quota = bytes;
    }

    pub fn used_bytes(&self) -> usize {
        self.data.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl Backend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.data.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: String) -> Result<(), Error> {
        if let Some(quota) = self.quota {
            let replaced = self.data.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
            let available = quota.saturating_sub(self.used_bytes() - replaced);
            let needed = key.len() + value.len();
            if needed > available {
                return Err(Error::QuotaExceeded {
                    key: String::from(key),
                    needed,
                    available,
                });
            }
        }
        self.data.insert(String::from(key), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), Error> {
        self.data.remove(key);
        Ok(())
    }
}
