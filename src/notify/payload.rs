//! Alert payload in Slack block-kit form.

use serde::Serialize;

use crate::report::{CheckResult, Report};

pub const DEFAULT_ALERT_TITLE: &str = "Health Check Alert";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    Header,
    Section,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextType {
    PlainText,
    Mrkdwn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub kind: TextType,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub kind: BlockType,
    pub text: TextObject,
}

impl Block {
    pub fn header(title: impl Into<String>) -> Self {
        Self {
            kind: BlockType::Header,
            text: TextObject {
                kind: TextType::PlainText,
                text: title.into(),
            },
        }
    }

    /// Section describing one check.
    pub fn check(result: &CheckResult) -> Self {
        Self {
            kind: BlockType::Section,
            text: TextObject {
                kind: TextType::Mrkdwn,
                text: format!(
                    "URL: <{}>\n\n- TIME ELAPSED: {}\n\n- ERROR: {}",
                    result.resource(),
                    result.elapsed_text(),
                    result.error()
                ),
            },
        }
    }
}

/// Message posted to the webhook at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertPayload {
    pub blocks: Vec<Block>,
}

impl AlertPayload {
    /// Header followed by one section for every entry of `report`.
    pub fn from_report(report: &Report, title: &str) -> Self {
        let mut blocks = Vec::with_capacity(report.len() + 1);
        blocks.push(Block::header(title));
        blocks.extend(report.entries().iter().map(Block::check));
        Self { blocks }
    }

    pub fn sections(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.kind == BlockType::Section)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
