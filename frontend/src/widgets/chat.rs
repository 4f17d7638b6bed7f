use crate::config::ChatConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatState {
    #[default]
    Closed,
    Open,
}

/// What the page has to do after a transition, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEffect {
    ShowPanel,
    HidePanel,
    /// Focus the message field once the opening animation has run.
    FocusInput { delay_ms: u32 },
    /// Open the URL in a new browsing context.
    OpenLink(String),
    ClearInput,
}

/// Click-to-chat widget: a toggled panel whose message is handed off to an
/// external messaging service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatWidget {
    state: ChatState,
    draft: String,
    service: String,
    recipient: String,
    focus_delay_ms: u32,
}

impl ChatWidget {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            state: ChatState::Closed,
            draft: String::new(),
            service: config.service.clone(),
            recipient: config.recipient.clone(),
            focus_delay_ms: config.focus_delay_ms,
        }
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ChatState::Open
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Deep link that pre-fills `message` in a chat with the recipient.
    pub fn deep_link(&self, message: &str) -> String {
        format!(
            "https://{}/{}?text={}",
            self.service,
            self.recipient,
            urlencoding::encode(message)
        )
    }

    pub fn toggle(&mut self) -> Vec<ChatEffect> {
        match self.state {
            ChatState::Open => self.close(),
            ChatState::Closed => {
                self.state = ChatState::Open;
                vec![
                    ChatEffect::ShowPanel,
                    ChatEffect::FocusInput {
                        delay_ms: self.focus_delay_ms,
                    },
                ]
            }
        }
    }

    /// Pointer interaction outside both the toggle and the panel.
    pub fn outside_click(&mut self) -> Vec<ChatEffect> {
        self.close()
    }

    pub fn escape(&mut self) -> Vec<ChatEffect> {
        self.close()
    }

    /// Hands the draft off to the messaging service. Blank drafts do nothing.
    pub fn send(&mut self) -> Vec<ChatEffect> {
        let message = self.draft.trim();
        if message.is_empty() {
            return Vec::new();
        }
        let link = self.deep_link(message);
        self.draft.clear();
        self.state = ChatState::Closed;
        vec![
            ChatEffect::OpenLink(link),
            ChatEffect::ClearInput,
            ChatEffect::HidePanel,
        ]
    }

    fn close(&mut self) -> Vec<ChatEffect> {
        if self.state == ChatState::Closed {
            return Vec::new();
        }
        self.state = ChatState::Closed;
        self.draft.clear();
        vec![ChatEffect::ClearInput, ChatEffect::HidePanel]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn widget() -> ChatWidget {
        ChatWidget::new(&ChatConfig {
            service: "wa.me".to_string(),
            recipient: "919797387668".to_string(),
            focus_delay_ms: 400,
        })
    }

    #[test]
    fn toggle_opens_and_schedules_focus() {
        let mut chat = widget();
        assert_eq!(chat.state(), ChatState::Closed);
        assert_eq!(
            chat.toggle(),
            vec![ChatEffect::ShowPanel, ChatEffect::FocusInput { delay_ms: 400 }]
        );
        assert!(chat.is_open());
        assert_eq!(chat.toggle(), vec![ChatEffect::ClearInput, ChatEffect::HidePanel]);
        assert!(!chat.is_open());
    }

    #[test]
    fn hello_round_trip() {
        let mut chat = widget();
        chat.toggle();
        chat.set_draft("Hello");
        assert_eq!(
            chat.send(),
            vec![
                ChatEffect::OpenLink("https://wa.me/919797387668?text=Hello".to_string()),
                ChatEffect::ClearInput,
                ChatEffect::HidePanel,
            ]
        );
        assert_eq!(chat.state(), ChatState::Closed);
        assert_eq!(chat.draft(), "");
    }

    #[test]
    fn message_is_trimmed_and_percent_encoded() {
        let mut chat = widget();
        chat.toggle();
        chat.set_draft("  Hi there & welcome? 😊 \n");
        let effects = chat.send();
        assert_eq!(
            effects[0],
            ChatEffect::OpenLink(
                "https://wa.me/919797387668?text=Hi%20there%20%26%20welcome%3F%20%F0%9F%98%8A"
                    .to_string()
            )
        );
    }

    #[test]
    fn blank_send_is_a_no_op() {
        let mut chat = widget();
        chat.toggle();
        chat.set_draft("   \t");
        assert_eq!(chat.send(), Vec::new());
        assert!(chat.is_open());
        assert_eq!(chat.draft(), "   \t");
    }

    #[test]
    fn outside_click_and_escape_close_once() {
        let mut chat = widget();
        chat.toggle();
        assert_eq!(
            chat.outside_click(),
            vec![ChatEffect::ClearInput, ChatEffect::HidePanel]
        );
        assert_eq!(chat.outside_click(), Vec::new());
        assert_eq!(chat.escape(), Vec::new());

        chat.toggle();
        assert_eq!(chat.escape(), vec![ChatEffect::ClearInput, ChatEffect::HidePanel]);
        assert_eq!(chat.escape(), Vec::new());
        assert_eq!(chat.state(), ChatState::Closed);
    }

    #[test]
    fn closing_discards_the_draft() {
        let mut chat = widget();
        chat.toggle();
        chat.set_draft("half typed");
        chat.escape();
        assert_eq!(chat.draft(), "");
    }
}
