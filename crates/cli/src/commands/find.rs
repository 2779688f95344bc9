//! vessel find command

use clap::Args;
use vessel_domain::{VesselId, VesselRepository};

use crate::output::Output;

#[derive(Debug, Args)]
pub struct FindCommand {
    /// Vessel UUID
    pub id: String,
}

impl FindCommand {
    pub async fn run<R: VesselRepository>(&self, repo: &R, output: Output) -> anyhow::Result<String> {
        match repo.find(&VesselId::new(&self.id)).await? {
            Some(vessel) => output.render_one(&vessel),
            None => anyhow::bail!("Vessel '{}' not found", self.id),
        }
    }
}
