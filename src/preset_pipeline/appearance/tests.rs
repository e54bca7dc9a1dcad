#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::preset_pipeline::appearance::{export_appearance, export_appearance_xml, roughness, unified_positions};
    use crate::preset_pipeline::common::error::PresetError;
    use crate::preset_pipeline::common::range::IntensityRange;
    use crate::preset_pipeline::host::{
        ColorPoint, OpacityPoint, PiecewiseColorCurve, PiecewiseOpacityCurve, ShadingParams,
    };
    use crate::preset_pipeline::xml::{PresetConfig, SamplePolicy};

    fn color_curve(points: &[(f64, [f64; 3])]) -> PiecewiseColorCurve {
        points
            .iter()
            .map(|&(x, [r, g, b])| ColorPoint::new(x, r, g, b))
            .collect::<Vec<_>>()
            .into()
    }

    fn opacity_curve(points: &[(f64, f64)]) -> PiecewiseOpacityCurve {
        points
            .iter()
            .map(|&(x, v)| OpacityPoint::new(x, v))
            .collect::<Vec<_>>()
            .into()
    }

    fn shading() -> ShadingParams {
        ShadingParams {
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.2,
            specular_power: 0.25,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_unified_nodes_use_evaluated_opacity() {
        let color = color_curve(&[
            (10.0, [1.0, 0.0, 0.0]),
            (50.0, [0.0, 1.0, 0.0]),
            (90.0, [0.0, 0.0, 1.0]),
        ]);
        let opacity = opacity_curve(&[(10.0, 0.0), (90.0, 1.0)]);

        let preset = export_appearance(
            &color,
            &opacity,
            &shading(),
            IntensityRange::new(0.0, 100.0),
            SamplePolicy::Evaluate,
        )
        .unwrap();

        assert_eq!(preset.len(), 3);
        let intensities = preset.intensities();
        assert_close(intensities[0], 0.1);
        assert_close(intensities[1], 0.5);
        assert_close(intensities[2], 0.9);

        assert_close(preset.nodes[0].opacity, 0.0);
        assert_close(preset.nodes[1].opacity, 0.5);
        assert_close(preset.nodes[2].opacity, 1.0);
        assert_eq!(preset.nodes[1].diffuse, [0, 255, 0]);
    }

    #[test]
    fn test_shared_only_skips_positions_missing_from_a_curve() {
        let color = color_curve(&[
            (10.0, [1.0, 0.0, 0.0]),
            (50.0, [0.0, 1.0, 0.0]),
            (90.0, [0.0, 0.0, 1.0]),
        ]);
        let opacity = opacity_curve(&[(10.0, 0.0), (90.0, 1.0)]);

        let positions = unified_positions(&color, &opacity, SamplePolicy::SharedOnly);
        assert_eq!(positions, vec![10.0, 90.0]);

        let preset = export_appearance(
            &color,
            &opacity,
            &shading(),
            IntensityRange::new(0.0, 100.0),
            SamplePolicy::SharedOnly,
        )
        .unwrap();
        assert_eq!(preset.len(), 2);
    }

    #[test]
    fn test_positions_are_deduplicated_and_sorted() {
        let color = color_curve(&[(90.0, [0.0; 3]), (10.0, [0.0; 3])]);
        let opacity = opacity_curve(&[(50.0, 0.5), (10.0, 0.0), (90.0, 1.0)]);

        let positions = unified_positions(&color, &opacity, SamplePolicy::Evaluate);
        assert_eq!(positions, vec![10.0, 50.0, 90.0]);
    }

    #[test]
    fn test_empty_curves_produce_empty_nodes() {
        let xml = export_appearance_xml(
            &PiecewiseColorCurve::new(),
            &PiecewiseOpacityCurve::new(),
            &shading(),
            IntensityRange::new(0.0, 255.0),
            &PresetConfig::default(),
        )
        .unwrap();

        assert!(xml.starts_with("<!DOCTYPE Appearance>\n<Presets>\n<Preset Name=\"volume\">\n"));
        assert!(xml.contains("<Nodes>\n</Nodes>\n"));
        assert!(!xml.contains("<Node>"));
        assert!(xml.contains(r#"<DensityScale Value="100"/>"#));
        assert!(xml.contains(r#"<ShadingType Value="2"/>"#));
        assert!(xml.contains(r#"<GradientFactor Value="80"/>"#));
        assert!(xml.trim_end().ends_with("</Preset>\n</Presets>"));
    }

    #[test]
    fn test_zero_width_range_fails() {
        let color = color_curve(&[(10.0, [1.0, 1.0, 1.0])]);
        let opacity = opacity_curve(&[(10.0, 1.0)]);

        let result = export_appearance(
            &color,
            &opacity,
            &shading(),
            IntensityRange::new(10.0, 10.0),
            SamplePolicy::Evaluate,
        );
        assert!(matches!(result, Err(PresetError::InvalidRange { .. })));

        let empty = export_appearance(
            &PiecewiseColorCurve::new(),
            &PiecewiseOpacityCurve::new(),
            &shading(),
            IntensityRange::new(0.0, 0.0),
            SamplePolicy::Evaluate,
        );
        assert!(matches!(empty, Err(PresetError::InvalidRange { .. })));
    }

    #[test]
    fn test_positions_below_range_collapse_onto_zero() {
        let color = color_curve(&[
            (-20.0, [1.0, 0.0, 0.0]),
            (-10.0, [0.0, 1.0, 0.0]),
            (50.0, [0.0, 0.0, 1.0]),
        ]);

        let preset = export_appearance(
            &color,
            &PiecewiseOpacityCurve::new(),
            &shading(),
            IntensityRange::new(0.0, 100.0),
            SamplePolicy::Evaluate,
        )
        .unwrap();

        assert_eq!(preset.len(), 2);
        assert_eq!(preset.nodes[0].normalized_intensity, 0.0);
        assert_eq!(preset.nodes[0].diffuse, [0, 255, 0]);
        assert_close(preset.nodes[1].normalized_intensity, 0.5);
    }

    #[test]
    fn test_emission_stops_after_upper_boundary_node() {
        let color = color_curve(&[
            (50.0, [0.0; 3]),
            (100.0, [1.0, 0.0, 0.0]),
            (120.0, [0.0, 1.0, 0.0]),
            (140.0, [0.0, 0.0, 1.0]),
        ]);

        let preset = export_appearance(
            &color,
            &PiecewiseOpacityCurve::new(),
            &shading(),
            IntensityRange::new(0.0, 100.0),
            SamplePolicy::Evaluate,
        )
        .unwrap();

        assert_eq!(preset.len(), 2);
        assert_eq!(preset.nodes[1].normalized_intensity, 1.0);
        assert_eq!(preset.nodes[1].diffuse, [255, 0, 0]);
    }

    #[test]
    fn test_first_position_beyond_range_is_clamped_once() {
        let color = color_curve(&[
            (50.0, [0.0; 3]),
            (120.0, [0.0, 1.0, 0.0]),
            (140.0, [0.0, 0.0, 1.0]),
        ]);

        let preset = export_appearance(
            &color,
            &PiecewiseOpacityCurve::new(),
            &shading(),
            IntensityRange::new(0.0, 100.0),
            SamplePolicy::Evaluate,
        )
        .unwrap();

        assert_eq!(preset.len(), 2);
        assert_eq!(preset.nodes[1].normalized_intensity, 1.0);
        assert_eq!(preset.nodes[1].diffuse, [0, 255, 0]);
    }

    #[test]
    fn test_channel_scaling() {
        let color = color_curve(&[(0.0, [1.0, 0.5, 0.0])]);
        let opacity = opacity_curve(&[(0.0, 0.3)]);

        let preset = export_appearance(
            &color,
            &opacity,
            &shading(),
            IntensityRange::new(0.0, 1.0),
            SamplePolicy::Evaluate,
        )
        .unwrap();

        let node = &preset.nodes[0];
        assert_eq!(node.diffuse, [255, 127, 0]);
        assert_eq!(node.specular, [51, 51, 51]);
        assert_eq!(node.emission, [0, 0, 0]);
        assert_eq!(node.roughness, 75);
    }

    #[test]
    fn test_non_finite_control_point_is_reported() {
        let color = color_curve(&[(0.0, [1.0, 0.0, 0.0]), (f64::NAN, [0.0, 1.0, 0.0])]);
        let opacity = opacity_curve(&[(0.0, 0.0), (1.0, 1.0)]);

        let result = export_appearance(
            &color,
            &opacity,
            &shading(),
            IntensityRange::new(0.0, 1.0),
            SamplePolicy::Evaluate,
        );
        assert!(matches!(result, Err(PresetError::NonFiniteControlPoint(x)) if x.is_nan()));

        let opacity = opacity_curve(&[(0.0, 0.0), (f64::INFINITY, 1.0)]);
        let color = color_curve(&[(0.0, [1.0, 0.0, 0.0])]);
        let result = export_appearance(
            &color,
            &opacity,
            &shading(),
            IntensityRange::new(0.0, 1.0),
            SamplePolicy::Evaluate,
        );
        assert!(matches!(result, Err(PresetError::NonFiniteControlPoint(x)) if x == f64::INFINITY));
    }

    #[test]
    fn test_roughness_clamps_large_specular_power() {
        assert_eq!(roughness(0.5), 50);
        assert_eq!(roughness(10.0), 0);
        assert_eq!(roughness(-1.0), 100);
    }

    proptest! {
        #[test]
        fn roughness_stays_in_percent_range(power in 0.0f64..=1.0) {
            let value = roughness(power);
            prop_assert!(value <= 100);
            prop_assert_eq!(value, ((1.0 - power) * 100.0).round() as u32);
        }
    }
}
