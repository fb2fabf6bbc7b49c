use crate::actions::ActionKind;

/// Execute the given action.
///
/// `OpenUrl` spawns the default browser detached from this process and
/// `Notice` does nothing.
///
/// Returns an error if spawning the external process fails.
pub fn launch_kind(kind: &ActionKind) -> anyhow::Result<()> {
    match kind {
        ActionKind::OpenUrl(url) => crate::actions::url::open(url),
        ActionKind::Notice => Ok(()),
    }
}
