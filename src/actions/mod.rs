/// A single result row handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub label: String,
    pub desc: String,
    /// Icon path relative to the plugin directory.
    pub icon: String,
    pub action: ActionKind,
    /// Keep the result list open after the action runs.
    pub keep_open: bool,
}

/// What happens when a result is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    OpenUrl(String),
    Notice,
}

impl ActionKind {
    /// Method name the host calls back with when the result is activated.
    pub fn method(&self) -> &'static str {
        match self {
            ActionKind::OpenUrl(_) => "open_url",
            ActionKind::Notice => "do_nothing",
        }
    }

    pub fn parameters(&self) -> Vec<String> {
        match self {
            ActionKind::OpenUrl(url) => vec![url.clone()],
            ActionKind::Notice => Vec::new(),
        }
    }
}

pub mod url;
