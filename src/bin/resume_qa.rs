use anyhow::Result;
use clap::Parser;
use resume_intake::init_tracing;
use resume_intake::qa::{self, QaConfig, DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_QUESTION};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-qa")]
#[command(about = "Ask a chat model a question about a resume")]
struct Cli {
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: String,

    #[arg(long, env = "OPENAI_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    #[arg(long, env = "QA_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    #[arg(long, env = "QA_RESUME_URL")]
    resume_url: String,

    #[arg(long, env = "QA_QUESTION", default_value = DEFAULT_QUESTION)]
    question: String,

    #[arg(long, env = "QA_DOWNLOAD_DIR", default_value = ".")]
    download_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("resume_intake=warn");

    let cli = Cli::parse();
    let config = QaConfig {
        api_key: cli.api_key,
        api_base: cli.api_base,
        model: cli.model,
        resume_url: cli.resume_url,
        question: cli.question,
        download_dir: cli.download_dir,
    };

    let answer = qa::run(&config).await?;
    println!("{}", answer);

    Ok(())
}
