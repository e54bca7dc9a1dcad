//! Preset document configuration types

/// How the exporter obtains colour and opacity at the unified positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplePolicy {
    /// Evaluate both curves at every position owned by either curve
    #[default]
    Evaluate,
    /// Emit only positions where both curves own a control point
    SharedOnly,
}

/// How camera positions are mapped into the renderer's volume space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraNormalization {
    /// Divide by the voxel extent upper bounds `(xmax, ymax, zmax)`
    #[default]
    ExtentUpperBounds,
    /// Divide by the physical upper bounds `origin + xmax * spacing`
    PhysicalBounds,
}

/// Film settings of the camera preset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilmSettings {
    pub width: u32,
    pub height: u32,
    pub exposure: f64,
}

impl Default for FilmSettings {
    fn default() -> Self {
        Self {
            width: 400,
            height: 500,
            exposure: 0.75,
        }
    }
}

/// Configuration for preset generation
#[derive(Debug, Clone)]
pub struct PresetConfig {
    /// Value of the `Name` attribute of the emitted `<Preset>`
    pub preset_name: String,
    pub density_scale: u32,
    pub shading_type: u32,
    pub gradient_factor: u32,
    pub film: FilmSettings,
    pub aperture_size: f64,
    pub sample_policy: SamplePolicy,
    pub camera_normalization: CameraNormalization,
}

impl Default for PresetConfig {
    fn default() -> Self {
        Self {
            preset_name: "volume".to_string(),
            density_scale: 100,
            shading_type: 2,
            gradient_factor: 80,
            film: FilmSettings::default(),
            aperture_size: 0.0,
            sample_policy: SamplePolicy::default(),
            camera_normalization: CameraNormalization::default(),
        }
    }
}

impl PresetConfig {
    pub fn builder() -> PresetConfigBuilder {
        PresetConfigBuilder::default()
    }
}

/// Builder for PresetConfig
#[derive(Default)]
pub struct PresetConfigBuilder {
    preset_name: Option<String>,
    density_scale: Option<u32>,
    shading_type: Option<u32>,
    gradient_factor: Option<u32>,
    film: Option<FilmSettings>,
    aperture_size: Option<f64>,
    sample_policy: Option<SamplePolicy>,
    camera_normalization: Option<CameraNormalization>,
}

impl PresetConfigBuilder {
    pub fn preset_name(mut self, name: impl Into<String>) -> Self {
        self.preset_name = Some(name.into());
        self
    }

    pub fn density_scale(mut self, scale: u32) -> Self {
        self.density_scale = Some(scale);
        self
    }

    pub fn shading_type(mut self, shading_type: u32) -> Self {
        self.shading_type = Some(shading_type);
        self
    }

    pub fn gradient_factor(mut self, factor: u32) -> Self {
        self.gradient_factor = Some(factor);
        self
    }

    pub fn film(mut self, film: FilmSettings) -> Self {
        self.film = Some(film);
        self
    }

    pub fn aperture_size(mut self, size: f64) -> Self {
        self.aperture_size = Some(size);
        self
    }

    pub fn sample_policy(mut self, policy: SamplePolicy) -> Self {
        self.sample_policy = Some(policy);
        self
    }

    pub fn camera_normalization(mut self, normalization: CameraNormalization) -> Self {
        self.camera_normalization = Some(normalization);
        self
    }

    pub fn build(self) -> PresetConfig {
        let default = PresetConfig::default();
        PresetConfig {
            preset_name: self.preset_name.unwrap_or(default.preset_name),
            density_scale: self.density_scale.unwrap_or(default.density_scale),
            shading_type: self.shading_type.unwrap_or(default.shading_type),
            gradient_factor: self.gradient_factor.unwrap_or(default.gradient_factor),
            film: self.film.unwrap_or(default.film),
            aperture_size: self.aperture_size.unwrap_or(default.aperture_size),
            sample_policy: self.sample_policy.unwrap_or(default.sample_policy),
            camera_normalization: self.camera_normalization.unwrap_or(default.camera_normalization),
        }
    }
}
