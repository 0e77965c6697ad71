//! Small stateless-page widgets: collapsible text and the demo modal.

/// Collapsible text block with a toggle button.
///
/// Starts hidden; the button label always describes the action that a
/// click would perform next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentToggle {
    visible: bool,
}

impl ContentToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn button_label(&self) -> &'static str {
        if self.visible { "Hide Text" } else { "Show Text" }
    }
}

/// The demo modal: opened by a control, closed by its close control or by a
/// click outside the dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modal {
    open: bool,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A click that landed on the backdrop, outside the dialog.
    pub fn click_outside(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
