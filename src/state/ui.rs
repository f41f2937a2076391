// UI state - theme and transient status messages
use crate::style::Theme;
use std::time::Instant;

pub struct UiState {
    pub theme: Theme,
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            error_message: None,
            info_message: None,
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.error_message = None;
            }
        }
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.info_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_start_empty() {
        let ui = UiState::new(Theme::Dark);
        assert!(ui.error_message.is_none());
        assert!(ui.info_message.is_none());
    }

    #[test]
    fn test_fresh_messages_survive_expiry_pass() {
        let mut ui = UiState::new(Theme::Dark);
        ui.set_info("sent".into());
        ui.set_error("nope".into());
        ui.clear_expired_messages(5);
        assert!(ui.info_message.is_some());
        assert!(ui.error_message.is_some());
    }

    #[test]
    fn test_zero_timeout_clears_messages() {
        let mut ui = UiState::new(Theme::Dark);
        ui.set_info("sent".into());
        ui.clear_expired_messages(0);
        assert!(ui.info_message.is_none());
    }
}
