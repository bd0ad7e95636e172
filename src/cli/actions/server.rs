use crate::payfee;
use anyhow::{Result, bail};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dist: PathBuf,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the dist directory is missing or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    if !args.dist.is_dir() {
        bail!(
            "web bundle not found at {}; build apps/web first (trunk build)",
            args.dist.display()
        );
    }
    if !args.dist.join("index.html").is_file() {
        warn!(dist = %args.dist.display(), "index.html missing, client-side routes will 404");
    }

    info!(port = args.port, dist = %args.dist.display(), "starting payfee");

    payfee::new(args.port, args.dist).await
}
