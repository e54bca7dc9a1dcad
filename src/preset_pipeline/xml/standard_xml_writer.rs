use std::fmt::Write as _;
use std::io::Write;
use tracing::debug;
use crate::preset_pipeline::appearance::{AppearanceNode, AppearancePreset};
use crate::preset_pipeline::camera::CameraPreset;
use crate::preset_pipeline::common::error::{PresetError, Result};
use crate::preset_pipeline::xml::types::PresetConfig;
use crate::preset_pipeline::xml::writer::PresetWriter;

/// Writes presets in the renderer's plain XML layout.
pub struct StandardXmlWriter;

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn rgb_element(out: &mut String, tag: &str, [r, g, b]: [u8; 3]) -> std::fmt::Result {
    writeln!(out, r#"<{tag} G="{g}" R="{r}" B="{b}"/>"#)
}

fn xyz_element(out: &mut String, tag: &str, [x, y, z]: [f64; 3]) -> std::fmt::Result {
    writeln!(out, r#"    <{tag} X="{x}" Y="{y}" Z="{z}"/>"#)
}

fn node_xml(out: &mut String, node: &AppearanceNode) -> std::fmt::Result {
    writeln!(out, "<Node>")?;
    writeln!(out, r#"<NormalizedIntensity Value="{}"/>"#, node.normalized_intensity)?;
    writeln!(out, r#"<Opacity Value="{}"/>"#, node.opacity)?;
    rgb_element(out, "Diffuse", node.diffuse)?;
    rgb_element(out, "Specular", node.specular)?;
    rgb_element(out, "Emission", node.emission)?;
    writeln!(out, r#"<Roughness Value="{}"/>"#, node.roughness)?;
    writeln!(out, "</Node>")
}

impl StandardXmlWriter {
    pub fn appearance_xml(&self, preset: &AppearancePreset, config: &PresetConfig) -> Result<String> {
        let mut out = String::new();
        Self::build_appearance(&mut out, preset, config)
            .map_err(|e| PresetError::OutputWriteError(e.to_string()))?;
        Ok(out)
    }

    pub fn camera_xml(&self, preset: &CameraPreset, config: &PresetConfig) -> Result<String> {
        let mut out = String::new();
        Self::build_camera(&mut out, preset, config)
            .map_err(|e| PresetError::OutputWriteError(e.to_string()))?;
        Ok(out)
    }

    fn build_appearance(out: &mut String, preset: &AppearancePreset, config: &PresetConfig) -> std::fmt::Result {
        writeln!(out, "<!DOCTYPE Appearance>")?;
        writeln!(out, "<Presets>")?;
        writeln!(out, r#"<Preset Name="{}">"#, escape_attr(&config.preset_name))?;
        writeln!(out, "<Nodes>")?;
        for node in &preset.nodes {
            node_xml(out, node)?;
        }
        writeln!(out, "</Nodes>")?;
        writeln!(out, r#"<DensityScale Value="{}"/>"#, config.density_scale)?;
        writeln!(out, r#"<ShadingType Value="{}"/>"#, config.shading_type)?;
        writeln!(out, r#"<GradientFactor Value="{}"/>"#, config.gradient_factor)?;
        writeln!(out, "</Preset>")?;
        writeln!(out, "</Presets>")
    }

    fn build_camera(out: &mut String, preset: &CameraPreset, config: &PresetConfig) -> std::fmt::Result {
        let film = &config.film;
        writeln!(out, "<!DOCTYPE Camera>")?;
        writeln!(out, "<Presets>")?;
        writeln!(out, r#"  <Preset Name="{}">"#, escape_attr(&config.preset_name))?;
        writeln!(out, "    <Film>")?;
        writeln!(out, r#"      <Width Value="{}"/>"#, film.width)?;
        writeln!(out, r#"      <Height Value="{}"/>"#, film.height)?;
        writeln!(out, r#"      <Exposure Value="{}"/>"#, film.exposure)?;
        writeln!(out, "    </Film>")?;
        writeln!(out, "    <Aperture>")?;
        writeln!(out, r#"      <Size Value="{}"/>"#, config.aperture_size)?;
        writeln!(out, "    </Aperture>")?;
        writeln!(out, "    <Projection>")?;
        writeln!(out, r#"      <FieldOfView Value="{}"/>"#, preset.field_of_view)?;
        writeln!(out, "    </Projection>")?;
        writeln!(out, "    <Focus>")?;
        writeln!(out, r#"      <FocalDistance Value="{}"/>"#, preset.focal_distance)?;
        writeln!(out, "    </Focus>")?;
        xyz_element(out, "From", preset.from)?;
        xyz_element(out, "Target", preset.target)?;
        xyz_element(out, "Up", preset.up)?;
        writeln!(out, "  </Preset>")?;
        writeln!(out, "</Presets>")
    }
}

impl PresetWriter for StandardXmlWriter {
    fn write_appearance(&self, preset: &AppearancePreset, output: &mut dyn Write, config: &PresetConfig) -> Result<()> {
        debug!("Encoding appearance preset: {} nodes", preset.len());

        let xml = self.appearance_xml(preset, config)?;
        output.write_all(xml.as_bytes())?;

        debug!("Appearance encoding complete");
        Ok(())
    }

    fn write_camera(&self, preset: &CameraPreset, output: &mut dyn Write, config: &PresetConfig) -> Result<()> {
        debug!("Encoding camera preset");

        let xml = self.camera_xml(preset, config)?;
        output.write_all(xml.as_bytes())?;

        debug!("Camera encoding complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(intensity: f64) -> AppearanceNode {
        AppearanceNode {
            normalized_intensity: intensity,
            opacity: 0.5,
            diffuse: [255, 128, 0],
            specular: [51, 51, 51],
            emission: [0, 0, 0],
            roughness: 75,
        }
    }

    #[test]
    fn test_node_layout() {
        let preset = AppearancePreset {
            nodes: vec![node(0.25)],
        };
        let xml = StandardXmlWriter
            .appearance_xml(&preset, &PresetConfig::default())
            .unwrap();

        let expected_node = "<Node>\n\
            <NormalizedIntensity Value=\"0.25\"/>\n\
            <Opacity Value=\"0.5\"/>\n\
            <Diffuse G=\"128\" R=\"255\" B=\"0\"/>\n\
            <Specular G=\"51\" R=\"51\" B=\"51\"/>\n\
            <Emission G=\"0\" R=\"0\" B=\"0\"/>\n\
            <Roughness Value=\"75\"/>\n\
            </Node>\n";
        assert!(xml.contains(expected_node), "unexpected layout:\n{}", xml);
    }

    #[test]
    fn test_configured_envelope_and_escaped_name() {
        let config = PresetConfig::builder()
            .preset_name("a<b & \"c\"")
            .density_scale(50)
            .gradient_factor(10)
            .build();
        let xml = StandardXmlWriter
            .appearance_xml(&AppearancePreset::default(), &config)
            .unwrap();

        assert!(xml.contains(r#"<Preset Name="a&lt;b &amp; &quot;c&quot;">"#));
        assert!(xml.contains(r#"<DensityScale Value="50"/>"#));
        assert!(xml.contains(r#"<GradientFactor Value="10"/>"#));
    }

    #[test]
    fn test_write_appearance_to_output() {
        let preset = AppearancePreset {
            nodes: vec![node(0.0), node(1.0)],
        };
        let mut output = Vec::new();
        StandardXmlWriter
            .write_appearance(&preset, &mut output, &PresetConfig::default())
            .unwrap();

        let xml = String::from_utf8(output).unwrap();
        assert_eq!(xml.matches("<Node>").count(), 2);
        assert!(xml.contains(r#"<NormalizedIntensity Value="1"/>"#));
    }
}
