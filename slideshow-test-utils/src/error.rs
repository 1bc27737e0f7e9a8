use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    ConfigError(#[from] slideshow::shell::error::ConfigError),
    #[error(transparent)]
    ShellError(#[from] slideshow::shell::Error),
}
