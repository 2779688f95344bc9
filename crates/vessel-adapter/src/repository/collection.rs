//! VesselCollection - The handle vessel documents live in
//!
//! `VesselService` only ever issues three calls against its collection.
//! This trait names them so the service can run over a real MongoDB
//! collection or over [`InMemoryVesselCollection`](super::in_memory::InMemoryVesselCollection).

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::Document;

use crate::error::Result;

#[async_trait]
pub trait VesselCollection: Send + Sync {
    /// Every document matching `filter`, in store order
    async fn find(&self, filter: Document) -> Result<Vec<Document>>;

    /// First document matching `filter`
    async fn find_one(&self, filter: Document) -> Result<Option<Document>>;

    /// Insert one new document
    async fn insert_one(&self, document: Document) -> Result<()>;
}

#[async_trait]
impl VesselCollection for mongodb::Collection<Document> {
    async fn find(&self, filter: Document) -> Result<Vec<Document>> {
        let cursor = mongodb::Collection::find(self, filter).await?;
        Ok(cursor.try_collect::<Vec<Document>>().await?)
    }

    async fn find_one(&self, filter: Document) -> Result<Option<Document>> {
        Ok(mongodb::Collection::find_one(self, filter).await?)
    }

    async fn insert_one(&self, document: Document) -> Result<()> {
        mongodb::Collection::insert_one(self, document).await?;
        Ok(())
    }
}
