//! vessel add command

use clap::Args;
use tracing::info;
use vessel_domain::{CategoryReference, CenterReference, Vessel, VesselRepository, Visibility};

use crate::output::Output;

#[derive(Debug, Args)]
pub struct AddCommand {
    /// Display name
    #[arg(short, long)]
    pub name: String,

    /// Category UUID
    #[arg(short = 'k', long)]
    pub category: String,

    /// UUID of the creating center
    #[arg(short, long)]
    pub center: String,

    /// all-centers or creation-center-only
    #[arg(short, long, default_value = "creation-center-only")]
    pub visibility: Visibility,
}

impl AddCommand {
    pub fn vessel(&self) -> Vessel {
        Vessel::new(
            self.name.as_str(),
            CategoryReference::new(&self.category),
            CenterReference::new(&self.center),
            self.visibility,
        )
    }

    pub async fn run<R: VesselRepository>(&self, repo: &R, output: Output) -> anyhow::Result<String> {
        let id = repo.add(&self.vessel()).await?;
        info!(%id, name = %self.name, "Registered vessel");
        output.render_id(&id)
    }
}
