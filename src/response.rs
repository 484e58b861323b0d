use crate::error::{KankaError, Result};
use crate::time::Time;
use serde::{Deserialize, Serialize};

/// Envelope of a single-object response: `{"data": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    /// Response data payload
    pub data: Option<T>,
}

impl<T> DataEnvelope<T> {
    /// Unwrap the payload; an absent or null `data` is an error
    pub fn into_data(self) -> Result<T> {
        self.data.ok_or(KankaError::MissingData)
    }
}

/// Envelope of a list response: `{"data": [...], "sync": "..."}`.
///
/// Paging keys (`links`, `meta`) are ignored: only the first page is read.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Option<Vec<T>>,

    /// Server time of the listing, usable as the next sync filter
    pub sync: Option<Time>,
}

impl<T> ListEnvelope<T> {
    pub fn into_list(self) -> Result<List<T>> {
        let data = self.data.ok_or(KankaError::MissingData)?;
        Ok(List {
            data,
            sync: self.sync,
        })
    }
}

/// Result of every Index operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    pub data: Vec<T>,
    pub sync: Option<Time>,
}

impl<T> List<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
