// file: src/components/event.rs
// description: user interaction event carrying the prevent-default contract

/// A form submission or link activation.
#[derive(Debug, Default)]
pub struct UiEvent {
    default_prevented: bool,
}

impl UiEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses the host's default navigation for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
