use thiserror::Error;

/// Which pipeline stage a shader belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Debug, Error)]
pub enum VizError {
    #[error("missing DOM element: {0}")]
    MissingElement(&'static str),

    #[error("graphics context unavailable: {0}")]
    ContextUnavailable(String),

    #[error("compiling {stage} shader: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("linking shader program: {0}")]
    ProgramLink(String),

    #[error("allocating GPU resource: {0}")]
    Allocation(&'static str),

    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("invalid value {value:?} for control {control}")]
    InvalidControl { control: &'static str, value: String },
}

#[cfg(target_arch = "wasm32")]
impl From<VizError> for wasm_bindgen::JsValue {
    fn from(err: VizError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
