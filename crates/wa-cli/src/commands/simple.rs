use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use wa_client::{Params, SimpleImage};
use wa_config::WaConfig;

use crate::bootstrap::build_client;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::SimpleArgs;
use crate::output::{TextView, output};

/// Where an image was written. The request URL carries the app id and is
/// left out.
#[derive(Debug, Serialize)]
struct SavedImage {
    content_type: Option<String>,
    bytes: usize,
    path: PathBuf,
}

impl TextView for SavedImage {
    fn to_text(&self) -> String {
        format!(
            "wrote {} bytes ({}) to {}",
            self.bytes,
            self.content_type.as_deref().unwrap_or("unknown type"),
            self.path.display()
        )
    }
}

/// Handle `wa simple`.
pub async fn handle(args: &SimpleArgs, config: &WaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let params: Params = args.params.iter().cloned().collect();

    let image = client.simple(&args.input, &params).await?;
    let saved = save(image, &args.out)?;
    output(&saved, flags.format)
}

fn save(image: SimpleImage, path: &Path) -> anyhow::Result<SavedImage> {
    std::fs::write(path, &image.bytes)
        .with_context(|| format!("failed to write image to {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = image.bytes.len(), "saved simple image");

    Ok(SavedImage {
        content_type: image.content_type,
        bytes: image.bytes.len(),
        path: path.to_path_buf(),
    })
}
