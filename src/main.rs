use std::io::Read;

use transcript_summarizer::config::AppConfig;
use transcript_summarizer::logging;
use transcript_summarizer::summarize::{build_summarizer, Summarizer as _, SummaryResponse};

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cfg = AppConfig::from_env_and_args();
    if let Err(e) = cfg.validate() {
        anyhow::bail!("invalid config: {e}");
    }

    let text = match &cfg.input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading {}: {e}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let summarizer = build_summarizer(cfg.strategy);
    tracing::info!(
        strategy = ?cfg.strategy,
        max_sentences = cfg.max_sentences,
        input_bytes = text.len(),
        "summarizing transcript"
    );

    // Engine errors become the error envelope, not a process failure.
    let response = SummaryResponse::from(summarizer.summarize(&text, cfg.max_sentences));
    let rendered = if cfg.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{rendered}");
    Ok(())
}
