//! Scene export configuration types

use std::path::PathBuf;

use crate::preset_pipeline::xml::PresetConfig;

pub const APPEARANCE_PRESETS_FILE: &str = "AppearancePresets.xml";
pub const CAMERA_PRESETS_FILE: &str = "CameraPresets.xml";

/// How presets reach the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// Write preset files to the data share and start the renderer locally
    Cli {
        /// Directory containing the renderer executable, also its working directory
        renderer_dir: PathBuf,
        executable: String,
    },
    /// Send presets to a renderer host (`ip:port`). Not implemented.
    Http { host: String },
}

impl Default for Transport {
    fn default() -> Self {
        Transport::Cli {
            renderer_dir: PathBuf::from("."),
            executable: "ExposureRender.exe".to_string(),
        }
    }
}

/// Names of the host nodes read during export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeNames {
    pub volume: String,
    pub volume_property: String,
    pub shading: String,
    pub camera: String,
}

impl Default for NodeNames {
    fn default() -> Self {
        Self {
            volume: "Volume".to_string(),
            volume_property: "VolumeProperty".to_string(),
            shading: "VolumeRendering".to_string(),
            camera: "Default Scene Camera".to_string(),
        }
    }
}

/// Configuration for exporting a scene to the renderer
#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// Directory the preset files are written to and the renderer reads from
    pub data_share_path: PathBuf,
    pub nodes: NodeNames,
    pub transport: Transport,
    /// Whether to start the renderer after the presets are written
    pub launch_renderer: bool,
    pub preset: PresetConfig,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            data_share_path: PathBuf::from("."),
            nodes: NodeNames::default(),
            transport: Transport::default(),
            launch_renderer: false,
            preset: PresetConfig::default(),
        }
    }
}

impl LinkConfig {
    pub fn builder() -> LinkConfigBuilder {
        LinkConfigBuilder::default()
    }

    pub fn appearance_path(&self) -> PathBuf {
        self.data_share_path.join(APPEARANCE_PRESETS_FILE)
    }

    pub fn camera_path(&self) -> PathBuf {
        self.data_share_path.join(CAMERA_PRESETS_FILE)
    }
}

/// Builder for LinkConfig
#[derive(Default)]
pub struct LinkConfigBuilder {
    data_share_path: Option<PathBuf>,
    nodes: Option<NodeNames>,
    transport: Option<Transport>,
    launch_renderer: Option<bool>,
    preset: Option<PresetConfig>,
}

impl LinkConfigBuilder {
    pub fn data_share_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_share_path = Some(path.into());
        self
    }

    pub fn nodes(mut self, nodes: NodeNames) -> Self {
        self.nodes = Some(nodes);
        self
    }

    pub fn transport(mut self, transport: Transport) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn launch_renderer(mut self, launch: bool) -> Self {
        self.launch_renderer = Some(launch);
        self
    }

    pub fn preset(mut self, preset: PresetConfig) -> Self {
        self.preset = Some(preset);
        self
    }

    pub fn build(self) -> LinkConfig {
        let default = LinkConfig::default();
        LinkConfig {
            data_share_path: self.data_share_path.unwrap_or(default.data_share_path),
            nodes: self.nodes.unwrap_or(default.nodes),
            transport: self.transport.unwrap_or(default.transport),
            launch_renderer: self.launch_renderer.unwrap_or(default.launch_renderer),
            preset: self.preset.unwrap_or(default.preset),
        }
    }
}
