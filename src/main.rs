use anyhow::Context;
use edge_bookmarks::plugin::PluginManager;
use edge_bookmarks::plugins::bookmarks::EdgeBookmarksPlugin;
use edge_bookmarks::settings::{Settings, SETTINGS_FILE};
use edge_bookmarks::{logging, rpc};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(settings.debug_logging, settings.log_file.as_deref().map(Path::new));

    let raw = std::env::args()
        .nth(1)
        .context("expected a JSON-RPC request as the first argument")?;
    let request = rpc::Request::parse(&raw)?;

    let mut plugins = PluginManager::new();
    plugins.register(Box::new(EdgeBookmarksPlugin::from_settings(&settings)));

    if let Some(response) = rpc::handle(&plugins, request)? {
        println!("{}", serde_json::to_string(&response)?);
    }
    Ok(())
}
