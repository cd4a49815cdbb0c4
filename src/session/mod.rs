pub mod parser;

use std::collections::HashMap;

use crate::calculator::{
    amortization_schedule, deposit_projection, deposit_revenue, loan_summary,
};
use crate::config::BotConfig;
use crate::errors::Result;
use crate::render;
use crate::types::{ChatId, Command};

pub use parser::parse_args;

/// pending command per chat, keyed by the transport's chat id
///
/// owned by whoever drives the dispatcher; nothing here is process-global
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: HashMap<ChatId, Command>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, chat: ChatId, command: Command) {
        self.sessions.insert(chat, command);
    }

    pub fn pending(&self, chat: ChatId) -> Option<Command> {
        self.sessions.get(&chat).copied()
    }

    pub fn clear(&mut self, chat: ChatId) {
        self.sessions.remove(&chat);
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// routes chat traffic to the calculator and renders the replies
///
/// the transport binding (polling, webhooks) stays outside; this layer only
/// maps (chat id, input) to reply text
#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: BotConfig,
    sessions: SessionStore,
}

impl Dispatcher {
    pub fn new(config: BotConfig) -> Self {
        Self {
            config,
            sessions: SessionStore::new(),
        }
    }

    /// greeting for a newly started chat
    pub fn start_message(&self) -> &str {
        &self.config.start_message
    }

    /// record the chat's selected command and return its input prompt
    pub fn handle_command(&mut self, chat: ChatId, command: Command) -> String {
        log::info!("chat {chat}: selected {command:?}");
        self.sessions.set(chat, command);

        match command {
            Command::Credit => self.config.credit_prompt.clone(),
            Command::Deposit => self.config.deposit_prompt.clone(),
        }
    }

    /// run the pending calculation on free text, or ask for a command first
    ///
    /// calculator and parse errors are surfaced to the user verbatim; the
    /// pending command survives both errors and successful replies
    pub fn handle_text(&mut self, chat: ChatId, text: &str) -> String {
        let Some(command) = self.sessions.pending(chat) else {
            return self.config.choose_command_reply.clone();
        };

        match self.run(command, text) {
            Ok(report) => report,
            Err(err) => {
                log::warn!("chat {chat}: rejected input: {err}");
                err.to_string()
            }
        }
    }

    /// read access to the per-chat state, mainly for callers that persist it
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    fn run(&self, command: Command, text: &str) -> Result<String> {
        let request = parser::parse_args(text)?;

        match command {
            Command::Credit => {
                let summary =
                    loan_summary(request.amount, request.annual_rate, request.term_months)?;
                let schedule = amortization_schedule(
                    request.amount,
                    request.annual_rate,
                    request.term_months,
                )?;
                Ok(render::credit_report(&summary, &schedule))
            }
            Command::Deposit => {
                let revenue =
                    deposit_revenue(request.amount, request.annual_rate, request.term_months)?;
                let projection = deposit_projection(
                    request.amount,
                    request.annual_rate,
                    request.term_months,
                )?;
                Ok(render::deposit_report(&revenue, &projection))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_store() {
        let mut store = SessionStore::new();
        assert!(store.is_empty());

        store.set(1, Command::Credit);
        store.set(2, Command::Deposit);
        assert_eq!(store.len(), 2);
        assert_eq!(store.pending(1), Some(Command::Credit));

        // reselecting replaces, not duplicates
        store.set(1, Command::Deposit);
        assert_eq!(store.len(), 2);
        assert_eq!(store.pending(1), Some(Command::Deposit));

        store.clear(1);
        assert_eq!(store.pending(1), None);
    }

    #[test]
    fn test_text_without_command_asks_to_choose() {
        let mut bot = Dispatcher::new(BotConfig::default());
        let reply = bot.handle_text(7, "100000 12 12");
        assert_eq!(reply, "Please choose command first");
    }

    #[test]
    fn test_credit_flow() {
        let mut bot = Dispatcher::new(BotConfig::default());

        let prompt = bot.handle_command(7, Command::Credit);
        assert!(prompt.contains("your credit"));

        let reply = bot.handle_text(7, "100000 12 12");
        assert!(reply.contains("Monthly annuity payment: *8884.88*"));
        assert!(reply.contains("Left debt"));

        // the pending command persists, so a second input recomputes
        let reply = bot.handle_text(7, "1200 0 12");
        assert!(reply.contains("Monthly annuity payment: *100.00*"));
    }

    #[test]
    fn test_deposit_flow() {
        let mut bot = Dispatcher::new(BotConfig::default());

        let prompt = bot.handle_command(7, Command::Deposit);
        assert!(prompt.contains("your deposit"));

        let reply = bot.handle_text(7, "10000 6 12");
        assert!(reply.contains("Revenue without capitalization: *600.00*"));
        assert!(reply.contains("Revenue with monthly capitalization: *616.78*"));
    }

    #[test]
    fn test_chats_do_not_share_state() {
        let mut bot = Dispatcher::new(BotConfig::default());

        bot.handle_command(1, Command::Credit);
        let reply = bot.handle_text(2, "10000 6 12");
        assert_eq!(reply, "Please choose command first");
        assert_eq!(bot.sessions().len(), 1);
        assert_eq!(bot.sessions().pending(2), None);
    }

    #[test]
    fn test_errors_surface_verbatim() {
        let mut bot = Dispatcher::new(BotConfig::default());
        bot.handle_command(7, Command::Credit);

        assert_eq!(bot.handle_text(7, "-1 5 12"), "amount must be > 0");
        assert_eq!(bot.handle_text(7, "1000 -1 12"), "annual rate must be >= 0");
        assert_eq!(bot.handle_text(7, "1000 5 0"), "term must be >= 1");
        assert_eq!(bot.handle_text(7, "1000 5"), "you should provide exactly 3 arguments");
        assert_eq!(bot.handle_text(7, "a b c"), "all arguments must be numbers");
    }
}
