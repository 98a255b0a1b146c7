use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("latitude {0} is outside [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    Longitude(f64),
    #[error("height {0} is not finite")]
    Height(f64),
    #[error("marker radius must be positive and finite, got {0}")]
    Radius(f64),
    #[error("unknown variant `{0}`")]
    UnknownVariant(String),
}

/// Failure reported by an AR backend while building the scene.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("anchor `{0}` could not be mapped to a scene node")]
    AnchorUnmapped(String),
    #[error("marker could not be created: {0}")]
    Marker(String),
    #[error("attach failed: {0}")]
    Attach(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("scene setup failed: {0}")]
    Scene(#[from] SceneError),
}
