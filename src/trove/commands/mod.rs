use crate::config::TroveConfig;
use crate::model::Record;

pub mod config;
pub mod create;
pub mod delete;
pub mod init;
pub mod list;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub config: Option<TroveConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_config(mut self, config: TroveConfig) -> Self {
        self.config = Some(config);
        self
    }
}
