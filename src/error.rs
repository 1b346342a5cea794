use thiserror::Error;

/// Top-level error type for the SVG to OpenSCAD converter.
#[derive(Debug, Error)]
pub enum Svg2ScadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Errors raised while reading the SVG document or its path data.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("malformed SVG document: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("invalid path data in path #{index}: {source}")]
    PathData {
        index: usize,
        #[source]
        source: svgtypes::Error,
    },
}

/// Errors related to geometric operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to running the conversion pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid conversion parameters: {0}")]
    InvalidParameters(String),

    #[error("worker pool could not be started: {0}")]
    ThreadPool(String),
}

/// Convenience type alias for results using [`Svg2ScadError`].
pub type Result<T> = std::result::Result<T, Svg2ScadError>;
