//! Render targets driven by the controller.
//!
//! Implementations must not interpret text as markup. They are called from
//! timer tasks, hence `Send + Sync` with `&self` receivers.

/// The progress bar: a container, a text label and a fill.
pub trait ProgressSurface: Send + Sync {
    /// Set the label as plain text.
    fn set_label(&self, text: &str);
    /// Set the fill width, in percent.
    fn set_fill(&self, percent: f64);
    fn set_visible(&self, visible: bool);
}

/// The coordinate entry overlay and its text input.
pub trait PanelSurface: Send + Sync {
    fn clear_input(&self);
    fn set_visible(&self, visible: bool);
    fn focus_input(&self);
}
