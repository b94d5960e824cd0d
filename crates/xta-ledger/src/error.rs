/// Errors produced while loading report configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid report configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot read report configuration {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
