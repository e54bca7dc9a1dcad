use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use exposure_link_rs::logger;
use exposure_link_rs::preset_pipeline::{
    CameraNormalization, EditorBridge, EditorSource, LinkConfig, MemoryScene, NodeNames,
    PresetConfig, PresetError, Result as PresetResult, SamplePolicy, ScenePresetPipeline, TransferFunctionEditor,
    Transport,
};

use tracing::{error, info};

/// Links a volume scene snapshot with the ExposureRender preset format
#[derive(Parser)]
#[command(name = "exposure-link")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write appearance and camera presets for a scene
    Export(ExportArgs),

    /// Replace a scene's transfer function with points from the editor
    ApplyEdits(ApplyEditsArgs),

    /// Print the URL the editor page is loaded from
    EditorUrl(EditorUrlArgs),
}

#[derive(Args)]
struct ExportArgs {
    /// Scene snapshot (JSON)
    #[arg(short, long)]
    scene: PathBuf,

    /// Directory the preset files are written to
    #[arg(short, long, default_value = ".")]
    data_share: PathBuf,

    /// Start the renderer after writing the presets
    #[arg(long)]
    launch: bool,

    /// Directory containing the renderer executable
    #[arg(long, default_value = ".")]
    renderer_dir: PathBuf,

    #[arg(long, default_value = "ExposureRender.exe")]
    executable: String,

    /// Renderer host (ip:port) for the HTTP transport
    #[arg(long)]
    http: Option<String>,

    /// Only emit positions where both curves own a control point
    #[arg(long)]
    shared_only: bool,

    /// Normalize camera positions by physical bounds instead of voxel extent
    #[arg(long)]
    physical_bounds: bool,

    #[command(flatten)]
    nodes: NodeArgs,
}

#[derive(Args)]
struct NodeArgs {
    #[arg(long, default_value = "Volume")]
    volume_node: String,

    #[arg(long, default_value = "VolumeProperty")]
    property_node: String,

    #[arg(long, default_value = "VolumeRendering")]
    shading_node: String,

    #[arg(long, default_value = "Default Scene Camera")]
    camera_node: String,
}

#[derive(Args)]
struct ApplyEditsArgs {
    /// Scene snapshot (JSON)
    #[arg(short, long)]
    scene: PathBuf,

    /// Editor payload: `[[x, {"r":..,"g":..,"b":..,"a":..}], ...]`
    #[arg(short, long)]
    edits: PathBuf,

    #[arg(long, default_value = "VolumeProperty")]
    property_node: String,

    /// Where to write the updated scene, defaults to overwriting `--scene`
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct EditorUrlArgs {
    /// Module directory holding the bundled editor resources
    #[arg(long, conflicts_with = "remote")]
    module_dir: Option<PathBuf>,

    /// Remote editor URL
    #[arg(long)]
    remote: Option<String>,
}

/// Editor bridge backed by a saved editor payload. There is no editor on the
/// other end, so histograms cannot be published through it.
struct FileBridge {
    path: PathBuf,
}

impl EditorBridge for FileBridge {
    fn request_transfer_function(&self) -> PresetResult<String> {
        Ok(std::fs::read_to_string(&self.path)?)
    }

    fn set_histogram(&mut self, _histogram_json: String) -> PresetResult<()> {
        Err(PresetError::Io(io::Error::new(
            io::ErrorKind::Unsupported,
            "histograms cannot be published to a saved editor payload",
        )))
    }
}

fn run_export(args: ExportArgs) -> Result<()> {
    let scene = MemoryScene::load(&args.scene)
        .with_context(|| format!("loading scene {}", args.scene.display()))?;

    let transport = match args.http {
        Some(host) => Transport::Http { host },
        None => Transport::Cli {
            renderer_dir: args.renderer_dir,
            executable: args.executable,
        },
    };

    let preset = PresetConfig::builder()
        .sample_policy(if args.shared_only {
            SamplePolicy::SharedOnly
        } else {
            SamplePolicy::Evaluate
        })
        .camera_normalization(if args.physical_bounds {
            CameraNormalization::PhysicalBounds
        } else {
            CameraNormalization::ExtentUpperBounds
        })
        .build();

    let config = LinkConfig::builder()
        .data_share_path(args.data_share)
        .nodes(NodeNames {
            volume: args.nodes.volume_node,
            volume_property: args.nodes.property_node,
            shading: args.nodes.shading_node,
            camera: args.nodes.camera_node,
        })
        .transport(transport)
        .launch_renderer(args.launch)
        .preset(preset)
        .build();

    let pipeline = ScenePresetPipeline::new(config);
    let summary = pipeline.send(&scene).context("sending scene to renderer")?;

    info!(
        "Wrote {} nodes to {} and camera to {}{}",
        summary.nodes,
        summary.appearance_path.display(),
        summary.camera_path.display(),
        if summary.launched { ", renderer started" } else { "" }
    );
    Ok(())
}

fn run_apply_edits(args: ApplyEditsArgs) -> Result<()> {
    let mut scene = MemoryScene::load(&args.scene)
        .with_context(|| format!("loading scene {}", args.scene.display()))?;

    let editor = TransferFunctionEditor::new(FileBridge { path: args.edits }, args.property_node);
    let staged = editor.sync(&mut scene).context("applying edited transfer function")?;

    let output = args.output.unwrap_or(args.scene);
    scene
        .save(&output)
        .with_context(|| format!("saving scene {}", output.display()))?;

    info!(
        "Scene updated with {} colour and {} opacity points: {}",
        staged.color.len(),
        staged.opacity.len(),
        output.display()
    );
    Ok(())
}

fn run_editor_url(args: EditorUrlArgs) -> Result<()> {
    let source = match (args.module_dir, args.remote) {
        (_, Some(url)) => EditorSource::Remote(url),
        (Some(dir), None) => EditorSource::bundled(dir),
        (None, None) => EditorSource::bundled(std::env::current_dir()?),
    };
    println!("{}", source.url());
    Ok(())
}

fn main() -> Result<()> {
    logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Export(args) => run_export(args),
        Commands::ApplyEdits(args) => run_apply_edits(args),
        Commands::EditorUrl(args) => run_editor_url(args),
    };

    if let Err(e) = &result {
        error!("{:#}", e);
    }
    result
}
