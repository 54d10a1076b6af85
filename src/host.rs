use tracing::info;

/// Hook for a desktop shell hosting the widget.
///
/// No host calls exist yet; a shell only has to announce itself.
pub trait HostBridge {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEnvironment {
    /// Running inside a desktop shell.
    Desktop,
    /// Running as a plain web page.
    Browser,
}

impl HostEnvironment {
    pub fn detect(bridge: Option<&dyn HostBridge>) -> Self {
        match bridge {
            Some(_) => HostEnvironment::Desktop,
            None => {
                info!("no desktop bridge found, running in browser mode");
                HostEnvironment::Browser
            }
        }
    }

    pub fn is_desktop(&self) -> bool {
        matches!(self, HostEnvironment::Desktop)
    }
}
