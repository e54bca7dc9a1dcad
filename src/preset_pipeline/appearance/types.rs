//! Appearance preset data types

/// One `<Node>` of an appearance preset
#[derive(Debug, Clone, PartialEq)]
pub struct AppearanceNode {
    /// Position in [0, 1] relative to the volume's scalar range
    pub normalized_intensity: f64,
    pub opacity: f64,
    pub diffuse: [u8; 3],
    pub specular: [u8; 3],
    pub emission: [u8; 3],
    /// Roughness percentage in [0, 100]
    pub roughness: u32,
}

/// Ordered appearance nodes of a single preset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppearancePreset {
    pub nodes: Vec<AppearanceNode>,
}

impl AppearancePreset {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn intensities(&self) -> Vec<f64> {
        self.nodes.iter().map(|n| n.normalized_intensity).collect()
    }
}
