/// Simplified error system - no over-engineering!
#[derive(Debug, Clone)]
pub enum ChartError {
    CanvasAccess(String),
    Rendering(String),
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartError::CanvasAccess(msg) => write!(f, "Canvas Access Error: {}", msg),
            ChartError::Rendering(msg) => write!(f, "Rendering Error: {}", msg),
        }
    }
}

impl std::error::Error for ChartError {}

pub type RenderResult<T> = Result<T, ChartError>;
