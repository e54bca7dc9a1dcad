use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::preset_pipeline::common::error::{PresetError, Result};

pub trait RendererLauncher {
    /// Starts the renderer on the presets in `data_share_path`.
    fn launch(&self, renderer_dir: &Path, executable: &str, data_share_path: &Path) -> Result<()>;
}

/// Spawns the renderer as a detached child process.
pub struct ProcessLauncher;

impl RendererLauncher for ProcessLauncher {
    fn launch(&self, renderer_dir: &Path, executable: &str, data_share_path: &Path) -> Result<()> {
        let program = renderer_dir.join(executable);
        debug!(program = %program.display(), "Spawning renderer");

        let child = Command::new(&program)
            .arg(data_share_path)
            .current_dir(renderer_dir)
            .spawn()
            .map_err(|e| PresetError::LaunchError(format!("{}: {}", program.display(), e)))?;

        info!(pid = child.id(), "Renderer started");
        Ok(())
    }
}
