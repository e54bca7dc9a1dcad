//! Editor payload and configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::preset_pipeline::host::{ColorPoint, OpacityPoint};

/// Colour of an edited point: RGB in [0, 255], alpha in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditedColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// One control point as reported by the editor, `[x, {r, g, b, a}]` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, EditedColor)", into = "(f64, EditedColor)")]
pub struct EditedPoint {
    /// Position in [0, 1]; values outside are clamped on merge
    pub x: f64,
    pub color: EditedColor,
}

impl EditedPoint {
    pub fn new(x: f64, r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            x,
            color: EditedColor { r, g, b, a },
        }
    }
}

impl From<(f64, EditedColor)> for EditedPoint {
    fn from((x, color): (f64, EditedColor)) -> Self {
        Self { x, color }
    }
}

impl From<EditedPoint> for (f64, EditedColor) {
    fn from(point: EditedPoint) -> Self {
        (point.x, point.color)
    }
}

/// Replacement curve contents, staged before they are committed to the host
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StagedTransferFunction {
    pub color: Vec<ColorPoint>,
    pub opacity: Vec<OpacityPoint>,
}

/// Relative location of the bundled editor page inside a module directory
pub const BUNDLED_EDITOR_PAGE: &str = "Resources/web/TF.html";

/// Where the embedded editor page is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorSource {
    /// Module directory containing the bundled editor resources
    Bundled(PathBuf),
    /// Editor served from a remote location
    Remote(String),
}

impl EditorSource {
    pub fn bundled(module_dir: impl AsRef<Path>) -> Self {
        Self::Bundled(module_dir.as_ref().to_path_buf())
    }

    /// URL the host's web view should load
    pub fn url(&self) -> String {
        match self {
            Self::Bundled(module_dir) => {
                let page = module_dir.join(BUNDLED_EDITOR_PAGE);
                let path = std::path::absolute(&page).unwrap_or(page);
                let path = path.to_string_lossy().replace('\\', "/");
                if path.starts_with('/') {
                    format!("file://{}", path)
                } else {
                    format!("file:///{}", path)
                }
            }
            Self::Remote(url) => url.clone(),
        }
    }
}
