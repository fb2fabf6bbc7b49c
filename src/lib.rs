pub mod actions;
pub mod launcher;
pub mod logging;
pub mod plugin;
pub mod plugins;
pub mod rpc;
pub mod settings;
