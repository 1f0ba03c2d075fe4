use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {source}")]
    Config {
        #[from]
        source: crm_config::ConfigError,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
