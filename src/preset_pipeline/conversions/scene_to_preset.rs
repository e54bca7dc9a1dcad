use tracing::{info, instrument, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::preset_pipeline::{
    appearance::{AppearancePreset, export_appearance},
    camera::{CameraPreset, export_camera},
    common::error::{PresetError, Result},
    conversions::launcher::{ProcessLauncher, RendererLauncher},
    conversions::types::{LinkConfig, Transport},
    host::{HostScene, require},
    xml::{PresetWriter, StandardXmlWriter},
};

/// Presets built from one snapshot of the host scene
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePresets {
    pub appearance: AppearancePreset,
    pub camera: CameraPreset,
}

/// Outcome of sending a scene to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct SendSummary {
    pub appearance_path: PathBuf,
    pub camera_path: PathBuf,
    pub nodes: usize,
    pub launched: bool,
}

pub struct ScenePresetPipeline<W: PresetWriter, L: RendererLauncher> {
    writer: W,
    launcher: L,
    config: LinkConfig,
}

impl ScenePresetPipeline<StandardXmlWriter, ProcessLauncher> {
    pub fn new(config: LinkConfig) -> Self {
        Self {
            writer: StandardXmlWriter,
            launcher: ProcessLauncher,
            config,
        }
    }
}

impl<W: PresetWriter, L: RendererLauncher> ScenePresetPipeline<W, L> {
    pub fn with_custom(writer: W, launcher: L, config: LinkConfig) -> Self {
        Self {
            writer,
            launcher,
            config,
        }
    }

    /// Reads the configured nodes from `scene` and converts them to presets.
    #[instrument(skip(self, scene))]
    pub fn build_presets<S: HostScene + ?Sized>(&self, scene: &S) -> Result<ScenePresets> {
        let nodes = &self.config.nodes;

        let geometry = require(scene.volume_geometry(&nodes.volume), "volume", &nodes.volume)?;
        let color = require(
            scene.color_curve(&nodes.volume_property),
            "colour transfer function",
            &nodes.volume_property,
        )?;
        let opacity = require(
            scene.opacity_curve(&nodes.volume_property),
            "opacity transfer function",
            &nodes.volume_property,
        )?;
        let shading = require(scene.shading(&nodes.shading), "shading", &nodes.shading)?;
        let camera = require(scene.camera(&nodes.camera), "camera", &nodes.camera)?;

        let appearance = export_appearance(
            color,
            opacity,
            &shading,
            geometry.scalar_range,
            self.config.preset.sample_policy,
        )?;
        let camera = export_camera(&camera, &geometry, self.config.preset.camera_normalization)?;

        Ok(ScenePresets { appearance, camera })
    }

    pub fn export<S: HostScene + ?Sized>(
        &self,
        scene: &S,
        appearance_output: &mut dyn Write,
        camera_output: &mut dyn Write,
    ) -> Result<ScenePresets> {
        let presets = self.build_presets(scene)?;

        {
            let _span = tracing::info_span!("write_appearance", nodes = presets.appearance.len()).entered();
            self.writer.write_appearance(&presets.appearance, appearance_output, &self.config.preset)?;
        }

        {
            let _span = tracing::info_span!("write_camera").entered();
            self.writer.write_camera(&presets.camera, camera_output, &self.config.preset)?;
        }

        Ok(presets)
    }

    /// Writes both preset files into the data share and, when configured,
    /// starts the renderer on them.
    #[instrument(skip(self, scene), fields(data_share = %self.config.data_share_path.display()))]
    pub fn send<S: HostScene + ?Sized>(&self, scene: &S) -> Result<SendSummary> {
        let (renderer_dir, executable) = match &self.config.transport {
            Transport::Cli { renderer_dir, executable } => (renderer_dir, executable),
            Transport::Http { host } => {
                warn!(host = %host, "HTTP transport requested");
                return Err(PresetError::UnsupportedTransport(format!("http://{}", host)));
            }
        };

        info!("Sending scene to renderer");

        let appearance_path = self.config.appearance_path();
        let camera_path = self.config.camera_path();

        let mut appearance = Vec::new();
        let mut camera = Vec::new();
        let presets = self.export(scene, &mut appearance, &mut camera)?;

        publish(&[
            (appearance_path.as_path(), appearance.as_slice()),
            (camera_path.as_path(), camera.as_slice()),
        ])?;

        if self.config.launch_renderer {
            let _span = tracing::info_span!("launch_renderer").entered();
            self.launcher.launch(renderer_dir, executable, &self.config.data_share_path)?;
        }

        info!(
            nodes = presets.appearance.len(),
            appearance = %appearance_path.display(),
            camera = %camera_path.display(),
            "Presets written"
        );

        Ok(SendSummary {
            appearance_path,
            camera_path,
            nodes: presets.appearance.len(),
            launched: self.config.launch_renderer,
        })
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LinkConfig) {
        self.config = config;
    }
}

const STAGING_SUFFIX: &str = ".tmp";

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(STAGING_SUFFIX);
    PathBuf::from(name)
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    std::fs::write(path, contents)
        .map_err(|e| PresetError::OutputWriteError(format!("{}: {}", path.display(), e)))
}

/// Writes every file under a staging name first and renames them into place
/// only once all writes succeeded, so a failed write leaves the previous
/// preset pair untouched. The renames themselves are not atomic as a group.
fn publish(files: &[(&Path, &[u8])]) -> Result<()> {
    let mut staged: Vec<(PathBuf, &Path)> = Vec::with_capacity(files.len());
    for &(path, contents) in files {
        let staging = staging_path(path);
        if let Err(e) = write_file(&staging, contents) {
            for (staging, _) in &staged {
                let _ = std::fs::remove_file(staging);
            }
            return Err(e);
        }
        staged.push((staging, path));
    }

    for (staging, path) in &staged {
        std::fs::rename(staging, path)
            .map_err(|e| PresetError::OutputWriteError(format!("{}: {}", path.display(), e)))?;
    }
    Ok(())
}
