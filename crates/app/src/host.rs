//! The seam between the pure pipeline and whatever displays it.

/// One selectable language as shown by a picker or the first-visit overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChoice {
    pub code: String,
    pub label: String,
    pub name: String,
    pub flag: String,
}

/// Everything the controller needs from its display host. Implementations
/// stay dumb: they receive finished HTML and prepared choice lists, and
/// report nothing back except user events routed to the controller.
pub trait ViewHost {
    /// Injects rendered page HTML into the content container.
    fn set_content(&mut self, html: &str);

    /// Shows the first-visit language overlay. `title` and `hint` arrive
    /// already translated (best effort, in the detected language).
    fn show_language_overlay(&mut self, title: &str, hint: &str, choices: &[LanguageChoice]);

    /// Hides the overlay after a successful pick.
    fn hide_language_overlay(&mut self);

    /// Refreshes the persistent language picker control.
    fn set_language_picker(&mut self, choices: &[LanguageChoice], active: &str);

    /// Surfaces a blocking, user-facing error message.
    fn alert(&mut self, message: &str);
}
