use talent_scout::channels::CliChannel;
use talent_scout::config::ScreeningConfig;
use talent_scout::interviewer::Interviewer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the conversation on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = ScreeningConfig::from_env()?;

    eprintln!("🧭 TalentScout Hiring Assistant v{}", env!("CARGO_PKG_VERSION"));
    eprintln!(
        "   Typing delay: {}ms (+ up to {}ms)",
        config.typing_delay.as_millis(),
        config.typing_jitter.as_millis()
    );
    match config.question_seed {
        Some(seed) => eprintln!("   Question seed: {}", seed),
        None => eprintln!("   Question seed: random"),
    }
    eprintln!("   Type your answers and press Enter. /status for progress, /quit to exit.\n");

    let channel = CliChannel::new(&config);
    let status = Interviewer::new(&config, Box::new(channel)).run().await?;

    tracing::info!(
        stage = %status.stage,
        completed_fields = status.completed_fields,
        "Session finished"
    );

    Ok(())
}
