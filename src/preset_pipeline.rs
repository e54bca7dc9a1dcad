//! Volume rendering preset pipeline module
//!
//! This module converts a host application's transfer functions and camera
//! into an external renderer's preset documents, and feeds transfer functions
//! edited in an embedded widget back into the host.

pub mod appearance;
pub mod camera;
pub mod common;
pub mod conversions;
pub mod editor;
pub mod host;
pub mod xml;

pub use common::{
    IntensityRange,
    PresetError,
    Result,
};

pub use host::{
    CameraPose,
    ColorCurve,
    ColorPoint,
    HostScene,
    MemoryScene,
    OpacityCurve,
    OpacityPoint,
    PiecewiseColorCurve,
    PiecewiseOpacityCurve,
    ShadingParams,
    VolumeGeometry,
    VolumeProperty,
};

pub use appearance::{
    AppearanceNode,
    AppearancePreset,
    export_appearance,
    export_appearance_xml,
};

pub use camera::{
    CameraPreset,
    export_camera,
    export_camera_xml,
};

pub use xml::{
    CameraNormalization,
    FilmSettings,
    PresetConfig,
    PresetConfigBuilder,
    PresetWriter,
    SamplePolicy,
    StandardXmlWriter,
};

pub use conversions::{
    LinkConfig,
    LinkConfigBuilder,
    NodeNames,
    ProcessLauncher,
    RendererLauncher,
    ScenePresetPipeline,
    ScenePresets,
    SendSummary,
    Transport,
};

pub use editor::{
    EditedPoint,
    EditorBridge,
    EditorSource,
    Histogram,
    StagedTransferFunction,
    TransferFunctionEditor,
    apply_edited_transfer_function,
    parse_edited_points,
};
