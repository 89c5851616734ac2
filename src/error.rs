use thiserror::Error;

/// Invalid configuration. Reported before any packing is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Surface must have positive, finite dimensions (got {width} x {height})")]
    InvalidSurface { width: f32, height: f32 },
    #[error("Surface {width} x {height} is too small to hold any circle")]
    SurfaceTooSmall { width: f32, height: f32 },
    #[error("Numbered count must be at least 1")]
    ZeroNumberedCount,
    #[error("Max attempts must be at least 1")]
    ZeroAttempts,
    #[error("Radius bounds must be positive and lower < upper (got {lower}..{upper})")]
    InvalidRadiusBounds { lower: f32, upper: f32 },
}
