use crate::summarize::{Strategy, DEFAULT_MAX_SENTENCES};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "transcript-summarizer")]
#[command(about = "Extractive transcript summarizer with graph ranking and topic segmentation", long_about = None)]
pub struct AppConfig {
    /// Transcript file to summarize; reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Upper bound on sentences in the extractive summary.
    #[arg(long, env = "MAX_SENTENCES", default_value_t = DEFAULT_MAX_SENTENCES)]
    pub max_sentences: usize,

    #[arg(long, env = "SUMMARY_STRATEGY", value_enum, default_value_t = Strategy::GraphRank)]
    pub strategy: Strategy,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

impl AppConfig {
    pub fn from_env_and_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_sentences == 0 {
            return Err("max_sentences must be > 0".into());
        }
        if self.max_sentences > 1000 {
            return Err("max_sentences too large (max 1000)".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(max_sentences: usize) -> AppConfig {
        AppConfig {
            input: None,
            max_sentences,
            strategy: Strategy::GraphRank,
            pretty: false,
        }
    }

    #[test]
    fn rejects_zero_max_sentences() {
        assert!(config_with(0).validate().is_err());
    }

    #[test]
    fn rejects_oversized_max_sentences() {
        assert!(config_with(1001).validate().is_err());
    }

    #[test]
    fn accepts_default() {
        assert!(config_with(DEFAULT_MAX_SENTENCES).validate().is_ok());
    }
}
