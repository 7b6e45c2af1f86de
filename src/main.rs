use anyhow::Context;
use father_announce::{fetch_and_announce, logging, DEFAULT_PERSON_URL};
use reqwest::Client;
use std::io;
use tracing::info;

fn main() -> anyhow::Result<()> {
    logging::init_logging()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")?;
    let client = Client::builder().build().context("build http client")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let person = runtime.block_on(fetch_and_announce(&client, DEFAULT_PERSON_URL, &mut out))?;
    info!(name = %person.name, "announced");

    Ok(())
}
