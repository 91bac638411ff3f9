//! TUI-less "ask" and "quick" commands

use std::error::Error;

use serde::Serialize;

use crate::core::config::data::Config;
use crate::core::message::Message;
use crate::core::quick_action::QuickAction;
use crate::core::responses::{classify, Topic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskFormat {
    Plain,
    Html,
    Json,
}

impl AskFormat {
    pub fn from_flags(html: bool, json: bool) -> Self {
        match (html, json) {
            (_, true) => AskFormat::Json,
            (true, false) => AskFormat::Html,
            (false, false) => AskFormat::Plain,
        }
    }
}

#[derive(Debug, Serialize)]
struct Exchange<'a> {
    question: &'a Message,
    topic: Topic,
    answer: &'a Message,
}

pub fn run_ask(question: &str, format: AskFormat, config: &Config) -> Result<(), Box<dyn Error>> {
    let question = question.trim();
    if question.is_empty() {
        return Err("Usage: psico-assist ask <pergunta>".into());
    }
    println!("{}", render_answer(question, format, config)?);
    Ok(())
}

pub fn run_quick(
    action: QuickAction,
    format: AskFormat,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    run_ask(action.question(), format, config)
}

/// Answer `question` the same way the interactive widget would, minus delays.
pub fn render_answer(
    question: &str,
    format: AskFormat,
    config: &Config,
) -> Result<String, Box<dyn Error>> {
    let response = classify(question);
    let rich = config.rich_responses() || format == AskFormat::Html;
    let answer = Message::from_response(response, rich);

    let rendered = match format {
        AskFormat::Plain => answer.text().to_string(),
        AskFormat::Html => answer
            .rendered_markup()
            .map(str::to_string)
            .unwrap_or_else(|| answer.text().to_string()),
        AskFormat::Json => {
            let question = Message::user(question);
            serde_json::to_string_pretty(&Exchange {
                question: &question,
                topic: response.topic,
                answer: &answer,
            })?
        }
    };
    Ok(rendered)
}
