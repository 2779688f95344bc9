//! Rendering vessels for the terminal

use serde::Serialize;
use vessel_domain::{Vessel, VesselId};

/// Serializable view of a vessel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselView {
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub creation_center: String,
    pub visibility: String,
}

impl From<&Vessel> for VesselView {
    fn from(vessel: &Vessel) -> Self {
        Self {
            id: vessel.id().map(VesselId::to_string),
            name: vessel.name().to_string(),
            category: vessel.category().to_string(),
            creation_center: vessel.creation_center().to_string(),
            visibility: vessel.visibility().to_string(),
        }
    }
}

impl VesselView {
    /// One tab-separated line: id, name, category, center, visibility
    pub fn to_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.id.as_deref().unwrap_or("-"),
            self.name,
            self.category,
            self.creation_center,
            self.visibility
        )
    }
}

/// Text or JSON output, chosen by the global `--json` flag
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn render_list(&self, vessels: &[Vessel]) -> anyhow::Result<String> {
        let views: Vec<VesselView> = vessels.iter().map(VesselView::from).collect();
        if self.json {
            return Ok(serde_json::to_string_pretty(&views)?);
        }
        Ok(views
            .iter()
            .map(VesselView::to_line)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    pub fn render_one(&self, vessel: &Vessel) -> anyhow::Result<String> {
        let view = VesselView::from(vessel);
        if self.json {
            return Ok(serde_json::to_string_pretty(&view)?);
        }
        Ok(view.to_line())
    }

    pub fn render_id(&self, id: &VesselId) -> anyhow::Result<String> {
        if self.json {
            return Ok(serde_json::json!({ "id": id.as_str() }).to_string());
        }
        Ok(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vessel_domain::{CategoryReference, CenterReference, Visibility};

    fn stored() -> Vessel {
        Vessel::new(
            "GLOBAL_1",
            CategoryReference::new("cargo"),
            CenterReference::new("1"),
            Visibility::AllCenters,
        )
        .with_id(VesselId::new("0"))
    }

    #[test]
    fn test_text_line() {
        let line = Output::new(false).render_one(&stored()).unwrap();
        assert_eq!(line, "0\tGLOBAL_1\tcargo\t1\tall-centers");
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = Output::new(true).render_one(&stored()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["creationCenter"], "1");
        assert_eq!(value["visibility"], "all-centers");
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert_eq!(Output::new(false).render_list(&[]).unwrap(), "");
        assert_eq!(Output::new(true).render_list(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_unsaved_vessel_has_no_id() {
        let vessel = Vessel::new(
            "Draft",
            CategoryReference::new("cargo"),
            CenterReference::new("1"),
            Visibility::CreationCenterOnly,
        );
        assert!(VesselView::from(&vessel).to_line().starts_with("-\t"));
    }
}
