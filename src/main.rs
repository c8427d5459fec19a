use furniture_db::{config::AppConfig, logging::init_tracing, pipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("import failed: {err:?}");
        eprintln!("import failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env()?;
    init_tracing(&cfg.logging)?;

    println!("Rebuilding {}", cfg.database.path.display());
    let report = pipeline::run(&cfg).await?;
    println!("{report}");
    tracing::info!(total_rows = report.total_rows(), "import finished");
    Ok(())
}
