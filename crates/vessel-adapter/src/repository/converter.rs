//! Converter - Map vessels to and from MongoDB documents
//!
//! The stored `visibility` field folds two domain facts into one
//! indexable string: the [`GLOBAL_VISIBILITY`] marker when every center
//! may see the vessel, or the creation center UUID otherwise. A single
//! `$or` of two equality predicates then serves any center.

use mongodb::bson::{Bson, Document};
use vessel_domain::{CategoryReference, CenterReference, Vessel, VesselId, Visibility};

use crate::error::ConversionError;

pub const ID: &str = "_id";
pub const NAME: &str = "name";
pub const CATEGORY: &str = "category";
pub const CREATION_CENTER: &str = "creation";
pub const VISIBILITY: &str = "visibility";

/// Stored in `visibility` for vessels every center may see
pub const GLOBAL_VISIBILITY: &str = "_ALL";

/// Transform a domain vessel into the document stored under `id`
///
/// Any id already carried by `vessel` is ignored in favor of `id`.
pub fn to_document(id: &VesselId, vessel: &Vessel) -> Result<Document, ConversionError> {
    if id.is_empty() {
        return Err(ConversionError::MissingArgument("uuid"));
    }

    let mut document = Document::new();
    document.insert(ID, id.as_str());
    document.insert(NAME, vessel.name());
    document.insert(CATEGORY, vessel.category().as_str());
    document.insert(CREATION_CENTER, vessel.creation_center().as_str());
    document.insert(VISIBILITY, write_visibility(vessel)?);
    Ok(document)
}

/// Transform a stored document back into a domain vessel
pub fn from_document(document: &Document) -> Result<Vessel, ConversionError> {
    if document.is_empty() {
        return Err(ConversionError::MissingArgument("document"));
    }

    let id = read_string(document, ID)?;
    let creation = read_string(document, CREATION_CENTER)?;
    let visibility = read_visibility(id, creation, read_string(document, VISIBILITY)?)?;

    let vessel = Vessel::new(
        read_string(document, NAME)?,
        CategoryReference::new(read_string(document, CATEGORY)?),
        CenterReference::new(creation),
        visibility,
    );
    Ok(vessel.with_id(VesselId::new(id)))
}

fn write_visibility(vessel: &Vessel) -> Result<&str, ConversionError> {
    match vessel.visibility() {
        Visibility::AllCenters => Ok(GLOBAL_VISIBILITY),
        Visibility::CreationCenterOnly => {
            let center = vessel.creation_center().as_str();
            if center == GLOBAL_VISIBILITY {
                return Err(ConversionError::ReservedCenter {
                    center: center.to_string(),
                });
            }
            Ok(center)
        }
    }
}

// Anything other than the marker or the creation center is corrupt data,
// not a restricted vessel.
fn read_visibility(id: &str, creation: &str, stored: &str) -> Result<Visibility, ConversionError> {
    if stored == GLOBAL_VISIBILITY {
        Ok(Visibility::AllCenters)
    } else if stored == creation {
        Ok(Visibility::CreationCenterOnly)
    } else {
        Err(ConversionError::InconsistentVisibility {
            id: id.to_string(),
            visibility: stored.to_string(),
            creation: creation.to_string(),
        })
    }
}

fn read_string<'a>(document: &'a Document, field: &'static str) -> Result<&'a str, ConversionError> {
    match document.get(field) {
        Some(Bson::String(value)) => Ok(value),
        Some(other) => Err(ConversionError::UnexpectedType {
            field,
            found: format!("{:?}", other.element_type()),
        }),
        None => Err(ConversionError::MissingField { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    fn vessel(visibility: Visibility) -> Vessel {
        Vessel::new(
            "Le_Name",
            CategoryReference::new("Cargo"),
            CenterReference::new("Le_center"),
            visibility,
        )
    }

    #[test]
    fn test_round_trip_global_vessel() {
        let input = vessel(Visibility::AllCenters);
        let id = VesselId::new("2");

        let document = to_document(&id, &input).unwrap();
        let output = from_document(&document).unwrap();

        assert_eq!(output, input.with_id(id));
    }

    #[test]
    fn test_round_trip_local_vessel() {
        let input = vessel(Visibility::CreationCenterOnly);
        let id = VesselId::new("3");

        let document = to_document(&id, &input).unwrap();
        let output = from_document(&document).unwrap();

        assert_eq!(output, input.with_id(id));
    }

    #[test]
    fn test_document_layout() {
        let document = to_document(&VesselId::new("2"), &vessel(Visibility::AllCenters)).unwrap();

        assert_eq!(
            document,
            doc! {
                "_id": "2",
                "name": "Le_Name",
                "category": "Cargo",
                "creation": "Le_center",
                "visibility": "_ALL",
            }
        );
    }

    #[test]
    fn test_local_visibility_stores_creation_center() {
        let document =
            to_document(&VesselId::new("2"), &vessel(Visibility::CreationCenterOnly)).unwrap();

        assert_eq!(document.get_str(VISIBILITY).unwrap(), "Le_center");
    }

    #[test]
    fn test_stored_id_wins_over_carried_id() {
        let carried = vessel(Visibility::AllCenters).with_id(VesselId::new("old"));
        let document = to_document(&VesselId::new("new"), &carried).unwrap();

        assert_eq!(document.get_str(ID).unwrap(), "new");
    }

    #[test]
    fn test_reject_empty_id() {
        let err = to_document(&VesselId::new(""), &vessel(Visibility::AllCenters)).unwrap_err();
        assert_eq!(err, ConversionError::MissingArgument("uuid"));
    }

    #[test]
    fn test_reject_empty_document() {
        let err = from_document(&Document::new()).unwrap_err();
        assert_eq!(err, ConversionError::MissingArgument("document"));
    }

    #[test]
    fn test_reject_missing_field() {
        let document = doc! {
            "_id": "1",
            "category": "Cargo",
            "creation": "1",
            "visibility": "_ALL",
        };

        let err = from_document(&document).unwrap_err();
        assert_eq!(err, ConversionError::MissingField { field: NAME });
    }

    #[test]
    fn test_reject_non_string_field() {
        let document = doc! {
            "_id": 42,
            "name": "GLOBAL_1",
            "category": "Cargo",
            "creation": "1",
            "visibility": "_ALL",
        };

        let err = from_document(&document).unwrap_err();
        assert!(matches!(err, ConversionError::UnexpectedType { field: ID, .. }));
    }

    #[test]
    fn test_reject_inconsistent_visibility() {
        let document = doc! {
            "_id": "1",
            "name": "BROKEN",
            "category": "Cargo",
            "creation": "1",
            "visibility": "2",
        };

        let err = from_document(&document).unwrap_err();
        assert_eq!(
            err,
            ConversionError::InconsistentVisibility {
                id: "1".to_string(),
                visibility: "2".to_string(),
                creation: "1".to_string(),
            }
        );
    }

    #[test]
    fn test_reject_center_named_like_marker() {
        let input = Vessel::new(
            "Le_Name",
            CategoryReference::new("Cargo"),
            CenterReference::new(GLOBAL_VISIBILITY),
            Visibility::CreationCenterOnly,
        );

        let err = to_document(&VesselId::new("1"), &input).unwrap_err();
        assert!(matches!(err, ConversionError::ReservedCenter { .. }));
    }

    #[test]
    fn test_marker_center_is_fine_when_global() {
        let input = Vessel::new(
            "Le_Name",
            CategoryReference::new("Cargo"),
            CenterReference::new(GLOBAL_VISIBILITY),
            Visibility::AllCenters,
        );

        let document = to_document(&VesselId::new("1"), &input).unwrap();
        assert_eq!(from_document(&document).unwrap(), input.with_id(VesselId::new("1")));
    }
}
