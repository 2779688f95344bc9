//! In-Memory Collection
//!
//! A `Vec<Document>` standing in for a MongoDB collection.
//! Useful for testing and for running the CLI without a server.
//!
//! Only the filter shapes `VesselService` issues are understood:
//! top-level field equality and `$or` over sub-filters.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};

use super::collection::VesselCollection;
use super::converter::ID;
use crate::error::{Result, StoreError};

/// In-memory vessel collection
///
/// Thread-safe implementation using RwLock. Clones share the same documents.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVesselCollection {
    documents: Arc<RwLock<Vec<Document>>>,
}

impl InMemoryVesselCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection pre-loaded with `documents`, in order
    pub fn with_documents(documents: impl IntoIterator<Item = Document>) -> Self {
        Self {
            documents: Arc::new(RwLock::new(documents.into_iter().collect())),
        }
    }

    /// Copy of every stored document
    pub fn documents(&self) -> Result<Vec<Document>> {
        let documents = self.documents.read().map_err(|_| StoreError::Memory {
            message: "Failed to acquire read lock".to_string(),
        })?;
        Ok(documents.clone())
    }

    pub fn len(&self) -> Result<usize> {
        let documents = self.documents.read().map_err(|_| StoreError::Memory {
            message: "Failed to acquire read lock".to_string(),
        })?;
        Ok(documents.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl VesselCollection for InMemoryVesselCollection {
    async fn find(&self, filter: Document) -> Result<Vec<Document>> {
        let documents = self.documents.read().map_err(|_| StoreError::Memory {
            message: "Failed to acquire read lock".to_string(),
        })?;
        let mut found = Vec::new();
        for document in documents.iter() {
            if matches(document, &filter)? {
                found.push(document.clone());
            }
        }
        Ok(found)
    }

    async fn find_one(&self, filter: Document) -> Result<Option<Document>> {
        let documents = self.documents.read().map_err(|_| StoreError::Memory {
            message: "Failed to acquire read lock".to_string(),
        })?;
        for document in documents.iter() {
            if matches(document, &filter)? {
                return Ok(Some(document.clone()));
            }
        }
        Ok(None)
    }

    async fn insert_one(&self, document: Document) -> Result<()> {
        let mut documents = self.documents.write().map_err(|_| StoreError::Memory {
            message: "Failed to acquire write lock".to_string(),
        })?;
        // Same guarantee as MongoDB's implicit unique index on _id
        if let Some(id) = document.get(ID) {
            if documents.iter().any(|d| d.get(ID) == Some(id)) {
                return Err(StoreError::Memory {
                    message: format!("Duplicate key: {} already exists", id),
                });
            }
        }
        documents.push(document);
        Ok(())
    }
}

fn matches(document: &Document, filter: &Document) -> Result<bool> {
    for (key, expected) in filter {
        let matched = match key.as_str() {
            "$or" => matches_any(document, expected)?,
            op if op.starts_with('$') => {
                return Err(StoreError::Memory {
                    message: format!("Unsupported query operator: {}", op),
                })
            }
            field => document.get(field) == Some(expected),
        };
        if !matched {
            return Ok(false);
        }
    }
    Ok(true)
}

fn matches_any(document: &Document, branches: &Bson) -> Result<bool> {
    let Bson::Array(branches) = branches else {
        return Err(StoreError::Memory {
            message: "$or expects an array of filters".to_string(),
        });
    };
    for branch in branches {
        let Bson::Document(branch) = branch else {
            return Err(StoreError::Memory {
                message: "$or branches must be documents".to_string(),
            });
        };
        if matches(document, branch)? {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    fn fleet() -> InMemoryVesselCollection {
        InMemoryVesselCollection::with_documents([
            doc! { "_id": "a", "visibility": "_ALL" },
            doc! { "_id": "b", "visibility": "1" },
            doc! { "_id": "c", "visibility": "2" },
        ])
    }

    #[tokio::test]
    async fn test_equality_filter() {
        let found = fleet().find(doc! { "visibility": "2" }).await.unwrap();
        assert_eq!(found, vec![doc! { "_id": "c", "visibility": "2" }]);
    }

    #[tokio::test]
    async fn test_or_filter_keeps_insertion_order() {
        let filter = doc! {
            "$or": [ { "visibility": "_ALL" }, { "visibility": "1" } ]
        };

        let found = fleet().find(filter).await.unwrap();
        let ids: Vec<&str> = found.iter().map(|d| d.get_str("_id").unwrap()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_empty_filter_matches_everything() {
        assert_eq!(fleet().find(Document::new()).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_find_one_missing() {
        let found = fleet().find_one(doc! { "_id": "z" }).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_insert_is_shared_between_clones() {
        let collection = InMemoryVesselCollection::new();
        let handle = collection.clone();

        handle.insert_one(doc! { "_id": "a" }).await.unwrap();

        assert_eq!(collection.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let collection = fleet();
        let err = collection.insert_one(doc! { "_id": "a" }).await.unwrap_err();

        assert!(matches!(err, StoreError::Memory { .. }));
        assert_eq!(collection.len().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_unsupported_operator() {
        let err = fleet()
            .find(doc! { "$and": [ { "visibility": "1" } ] })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("$and"));
    }
}
