use anyhow::{Context, Result};
use reqwest::Client;
use std::io::Write;
use tracing::debug;

use crate::person::PersonRecord;

pub const DEFAULT_PERSON_URL: &str = "https://swapi.dev/api/people/1";

pub fn announcement(name: &str) -> String {
    format!("{name}, I am your father!")
}

pub async fn fetch_person(client: &Client, url: &str) -> Result<PersonRecord> {
    debug!(%url, "requesting person record");
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("GET {url}"))?;

    let status = response.status();
    let response = response
        .error_for_status()
        .with_context(|| format!("GET {url} returned {status}"))?;

    let body = response
        .bytes()
        .await
        .with_context(|| format!("read body from {url}"))?;
    debug!(%status, bytes = body.len(), "received person record");

    serde_json::from_slice(&body).with_context(|| format!("decode person record from {url}"))
}

// `out` is only written after a successful decode.
pub async fn fetch_and_announce<W: Write>(
    client: &Client,
    url: &str,
    out: &mut W,
) -> Result<PersonRecord> {
    let person = fetch_person(client, url).await?;
    writeln!(out, "{}", announcement(&person.name)).context("write announcement")?;
    out.flush().context("write announcement")?;
    Ok(person)
}
