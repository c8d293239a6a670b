use anyhow::{Context, Result};
use std::path::PathBuf;

use fitcoach::client::CatalogClient;
use fitcoach::landing::LandingRenderer;

/// Render the landing page from the API's featured coaches
pub async fn landing(
    client: &CatalogClient,
    output: Option<PathBuf>,
    template: Option<PathBuf>,
) -> Result<()> {
    let renderer = match template {
        Some(path) => LandingRenderer::with_template(&path)?,
        None => LandingRenderer::new()?,
    };

    let coaches = client
        .featured_coaches()
        .await
        .context("Failed to fetch featured coaches")?;
    tracing::info!(count = coaches.len(), "Fetched featured coaches");

    match output {
        Some(path) => {
            let saved = renderer.save(&path, &coaches)?;
            println!("Landing page written to {}", saved.display());
        }
        None => print!("{}", renderer.render(&coaches)?),
    }

    Ok(())
}
