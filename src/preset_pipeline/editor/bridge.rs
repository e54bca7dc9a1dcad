use tracing::{info, instrument};

use crate::preset_pipeline::common::error::Result;
use crate::preset_pipeline::common::range::IntensityRange;
use crate::preset_pipeline::editor::histogram::Histogram;
use crate::preset_pipeline::editor::merge::apply_edited_transfer_function;
use crate::preset_pipeline::editor::parse::parse_edited_points;
use crate::preset_pipeline::editor::types::{EditorSource, StagedTransferFunction};
use crate::preset_pipeline::host::{HostScene, require};

/// Connection to the embedded transfer function editor.
///
/// Payloads are exchanged as raw JSON strings so the bridge does not need to
/// know the editor's internal types.
pub trait EditorBridge {
    /// Current transfer function of the editor, `[[x, {r, g, b, a}], ...]`
    fn request_transfer_function(&self) -> Result<String>;

    /// Hands a serialized [`Histogram`] to the editor for display.
    fn set_histogram(&mut self, histogram_json: String) -> Result<()>;
}

pub struct TransferFunctionEditor<B: EditorBridge> {
    bridge: B,
    source: Option<EditorSource>,
    property_node: String,
}

impl<B: EditorBridge> TransferFunctionEditor<B> {
    pub fn new(bridge: B, property_node: impl Into<String>) -> Self {
        Self {
            bridge,
            source: None,
            property_node: property_node.into(),
        }
    }

    /// Records where the editor page was loaded from.
    pub fn with_source(mut self, source: EditorSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn source(&self) -> Option<&EditorSource> {
        self.source.as_ref()
    }

    pub fn property_node(&self) -> &str {
        &self.property_node
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    /// Pulls the edited transfer function and replaces the host curves with it.
    ///
    /// The host is only touched after the payload has been parsed and merged
    /// successfully.
    #[instrument(skip(self, scene), fields(node = %self.property_node))]
    pub fn sync<S: HostScene + ?Sized>(&self, scene: &mut S) -> Result<StagedTransferFunction> {
        let (color_range, opacity_range) = {
            let node = self.property_node.as_str();
            let color = require(scene.color_curve(node), "colour transfer function", node)?;
            let opacity = require(scene.opacity_curve(node), "opacity transfer function", node)?;
            (color.range(), opacity.range())
        };

        let points = {
            let _span = tracing::info_span!("parse_edits").entered();
            let payload = self.bridge.request_transfer_function()?;
            parse_edited_points(&payload)?
        };

        let staged = apply_edited_transfer_function(&points, color_range, opacity_range)?;

        {
            let _span = tracing::info_span!("commit_curves").entered();
            scene.replace_transfer_function(&self.property_node, &staged.color, &staged.opacity)?;
        }

        info!(
            edited_points = points.len(),
            color_points = staged.color.len(),
            "Transfer function updated from editor"
        );
        Ok(staged)
    }

    /// Computes a histogram of `samples` and sends it to the editor.
    pub fn publish_histogram(&mut self, samples: &[f64], range: IntensityRange, num_bins: usize) -> Result<Histogram> {
        let histogram = Histogram::from_samples(samples, range, num_bins)?;
        self.bridge.set_histogram(histogram.to_json()?)?;
        Ok(histogram)
    }
}
