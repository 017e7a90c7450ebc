use crate::gui::menu::Point;

/// Host-facing control surface. A host holds the `async_channel::Sender`
/// half and drives the menu with these; dropping every sender ends the
/// forwarding task, so the subscription has an explicit lifetime.
#[derive(Debug, Clone)]
pub enum AppEvent {
    Show,
    Hide,
    SetPos(Point),
    ConfigReload,
}
