#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod opensearch;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
