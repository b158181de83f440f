//! Timing for the "credits" reveal of messages.
//!
//! Purely presentational: the schedule tells a client when to show each
//! message and when to show the closing line. Nothing here runs timers.

use std::time::Duration;

use uuid::Uuid;

use crate::models::message::Message;

pub const BASE_DISPLAY: Duration = Duration::from_secs(15);
pub const MAX_DISPLAY: Duration = Duration::from_secs(45);
pub const STAGGER: Duration = Duration::from_secs(8);
pub const CLOSING_DELAY: Duration = Duration::from_secs(2);
pub const CLOSING_DISPLAY: Duration = Duration::from_secs(8);

const FREE_CHARS: usize = 200;
const CHARS_PER_EXTRA_SECOND: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub message_id: Uuid,
    pub name: String,
    pub content: String,
    pub start: Duration,
    pub duration: Duration,
}

impl Cue {
    pub fn end(&self) -> Duration {
        self.start + self.duration
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSchedule {
    pub cues: Vec<Cue>,
    pub closing_message: String,
    pub closing_at: Duration,
    pub ends_at: Duration,
}

/// How long a message stays on screen, growing with its length.
pub fn display_duration(content: &str) -> Duration {
    let chars = content.chars().count();
    let extra_secs = chars.saturating_sub(FREE_CHARS) / CHARS_PER_EXTRA_SECOND;
    (BASE_DISPLAY + Duration::from_secs(extra_secs as u64)).min(MAX_DISPLAY)
}

pub fn schedule(messages: &[Message], closing_message: &str) -> PlaybackSchedule {
    let mut cues = Vec::with_capacity(messages.len());
    let mut next_start = Duration::ZERO;

    for message in messages {
        let duration = display_duration(&message.content);
        cues.push(Cue {
            message_id: message.id,
            name: message.name.clone(),
            content: message.content.clone(),
            start: next_start,
            duration,
        });
        next_start += STAGGER + duration.saturating_sub(BASE_DISPLAY);
    }

    let last_end = cues.last().map(Cue::end).unwrap_or(Duration::ZERO);
    let closing_at = last_end + CLOSING_DELAY;

    PlaybackSchedule {
        cues,
        closing_message: closing_message.to_string(),
        closing_at,
        ends_at: closing_at + CLOSING_DISPLAY,
    }
}
