use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, Result};

/// user-visible texts the dispatcher replies with
///
/// defaults reproduce the stock bot wording; deployments override them by
/// loading a json document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    pub start_message: String,
    pub credit_prompt: String,
    pub deposit_prompt: String,
    pub choose_command_reply: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            start_message: "I'm a bot, please talk to me!".to_string(),
            credit_prompt:
                "please type [payment sum] [annual interest rate] [period in months] \
                 to get info about your credit"
                    .to_string(),
            deposit_prompt:
                "please type [initial payment sum] [annual interest rate] [period in months] \
                 to get info about your deposit"
                    .to_string(),
            choose_command_reply: "Please choose command first".to_string(),
        }
    }
}

impl BotConfig {
    /// reject configs with blank reply texts
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("start_message", &self.start_message),
            ("credit_prompt", &self.credit_prompt),
            ("deposit_prompt", &self.deposit_prompt),
            ("choose_command_reply", &self.choose_command_reply),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(CalcError::InvalidConfiguration {
                    message: format!("{name} must not be empty"),
                });
            }
        }

        Ok(())
    }

    /// load and validate from a json document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BotConfig =
            serde_json::from_str(json).map_err(|e| CalcError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
