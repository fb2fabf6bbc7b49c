use tracing::debug;

/// Hand `url` to the system's default handler without waiting for it.
pub fn open(url: &str) -> anyhow::Result<()> {
    debug!(url, "opening url");
    open::that_detached(url)?;
    Ok(())
}
