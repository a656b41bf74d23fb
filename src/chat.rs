use crate::clock::format_clock;
use crate::models::{AppData, ChatMessage};
use crate::validation::{validate_message, ValidationError};
use chrono::NaiveTime;

pub const OWN_USERNAME: &str = "You";

pub fn post_message(
    data: &mut AppData,
    text: &str,
    now: NaiveTime,
) -> Result<ChatMessage, ValidationError> {
    let message = validate_message(text)?;
    let id = data.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;
    let posted = ChatMessage {
        id,
        username: OWN_USERNAME.to_string(),
        message,
        timestamp: format_clock(now),
        likes: 0,
        own: true,
    };
    data.messages.push(posted.clone());
    Ok(posted)
}

pub fn like(data: &mut AppData, id: u64) -> Option<ChatMessage> {
    let message = data.messages.iter_mut().find(|m| m.id == id)?;
    message.likes = message.likes.saturating_add(1);
    Some(message.clone())
}
