use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to initialize GLFW: {0}")]
    Init(#[from] glfw::InitError),
    #[error("failed to create GLFW window")]
    WindowCreation,
    #[error("error reading {path}: {source}")]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("gl::CreateShader({0}) failed")]
    CreateShader(&'static str),
    #[error("{stage} shader compilation error: {log}")]
    Compilation { stage: &'static str, log: String },
    #[error("program link error: {0}")]
    Linking(String),
    #[error("invalid uniform name {0:?}")]
    InvalidUniformName(String),
    #[error("program({program}): '{name}' does not correspond to an active uniform variable")]
    UniformNotFound { program: u32, name: String },
    #[error("loading image {path} error: {reason}")]
    Image { path: PathBuf, reason: String },
    #[error("unsupported channel count: {0}")]
    UnsupportedChannels(usize),
    #[error("index {index} out of range for {vertices} vertices")]
    IndexOutOfRange { index: u32, vertices: usize },
    #[error("index count {0} is not a multiple of 3")]
    IncompleteTriangle(usize),
    #[error("{0} elements do not fit in a single draw call")]
    TooManyElements(usize),
    #[error("gl error: {name} (0x{code:04X})")]
    Gl { code: u32, name: &'static str },
}
