use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const INPUT: &str = "input.ppm";
const OUTPUT: &str = "output.ppm";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    derby::run(INPUT, OUTPUT).with_context(|| format!("failed to enhance {INPUT} into {OUTPUT}"))?;
    Ok(())
}
