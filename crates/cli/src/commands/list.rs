//! vessel list command

use clap::Args;
use vessel_domain::{CenterReference, VesselRepository};

use crate::output::Output;

#[derive(Debug, Args)]
pub struct ListCommand {
    /// UUID of the center asking
    #[arg(short, long)]
    pub center: String,
}

impl ListCommand {
    pub async fn run<R: VesselRepository>(&self, repo: &R, output: Output) -> anyhow::Result<String> {
        let vessels = repo.find_all(&CenterReference::new(&self.center)).await?;
        output.render_list(&vessels)
    }
}
