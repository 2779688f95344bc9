//! VesselService - `VesselRepository` backed by a document collection

use mongodb::bson::{Bson, Document};
use tracing::trace;
use uuid::Uuid;
use vessel_domain::{CenterReference, Vessel, VesselId, VesselRepository};

use super::collection::VesselCollection;
use super::converter::{from_document, to_document, GLOBAL_VISIBILITY, ID, VISIBILITY};
use crate::error::{ConversionError, StoreError};

/// Vessel persistence over a MongoDB-shaped collection
///
/// Holds nothing but the collection handle; every operation is a single
/// round trip to the store.
#[derive(Debug, Clone)]
pub struct VesselService<C> {
    vessels: C,
}

impl<C: VesselCollection> VesselService<C> {
    /// Create a service over the vessels collection
    pub fn new(vessels: C) -> Self {
        Self { vessels }
    }

    pub fn collection(&self) -> &C {
        &self.vessels
    }
}

impl<C: VesselCollection> VesselRepository for VesselService<C> {
    type Error = StoreError;

    async fn find_all(&self, center: &CenterReference) -> Result<Vec<Vessel>, StoreError> {
        trace!(%center, "Find vessels by center");
        let documents = self.vessels.find(visible_to(center)).await?;
        let vessels = documents
            .iter()
            .map(from_document)
            .collect::<Result<Vec<_>, _>>()?;
        trace!(%center, matches = vessels.len(), "Found visible vessels");
        Ok(vessels)
    }

    async fn find(&self, id: &VesselId) -> Result<Option<Vessel>, StoreError> {
        trace!(%id, "Find vessel by UUID");
        if id.is_empty() {
            return Err(ConversionError::MissingArgument("uuid").into());
        }
        let document = self.vessels.find_one(with_id(id)).await?;
        trace!(%id, found = document.is_some(), "Vessel lookup completed");
        Ok(document.as_ref().map(from_document).transpose()?)
    }

    async fn add(&self, vessel: &Vessel) -> Result<VesselId, StoreError> {
        trace!(name = vessel.name(), "Create vessel");
        let id = VesselId::new(Uuid::new_v4().to_string());
        let document = to_document(&id, vessel)?;
        self.vessels.insert_one(document).await?;
        trace!(%id, name = vessel.name(), "Creation of vessel completed");
        Ok(id)
    }
}

/// `{ $or: [ { visibility: "_ALL" }, { visibility: <center> } ] }`
fn visible_to(center: &CenterReference) -> Document {
    let mut global = Document::new();
    global.insert(VISIBILITY, GLOBAL_VISIBILITY);
    let mut local = Document::new();
    local.insert(VISIBILITY, center.as_str());

    let mut filter = Document::new();
    filter.insert(
        "$or",
        Bson::Array(vec![Bson::Document(global), Bson::Document(local)]),
    );
    filter
}

fn with_id(id: &VesselId) -> Document {
    let mut filter = Document::new();
    filter.insert(ID, id.as_str());
    filter
}
