use anchor_lang::prelude::*;

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventStatus {
    Open,
    Closed,
}

#[account]
#[derive(Default, Debug)]
pub struct EventAccount {
    pub creator: Pubkey,
    pub title: String,
    pub description: String,
    pub choices: Vec<String>,
    pub deadline: i64,
    // D21 configuration
    pub max_plus_votes: u8,
    pub allow_minus: bool,
    pub max_minus_votes: u8,
    pub min_plus_for_minus: u8,
    // signed, minus votes pull a choice below zero
    pub total_votes: Vec<i64>,
    pub bump: u8,
}

impl EventAccount {
    pub const SPACE: usize = DISCRIMINATOR_SIZE
        + 32
        + (4 + MAX_TITLE)
        + (4 + MAX_DESC)
        + (4 + MAX_CHOICES * (4 + MAX_CHOICE_LEN))
        + 8
        + 1 + 1 + 1 + 1
        + (4 + MAX_CHOICES * 8)
        + 1;

    /// Open until the deadline second, closed from then on. Never stored.
    pub fn status(&self, now: i64) -> EventStatus {
        if now < self.deadline {
            EventStatus::Open
        } else {
            EventStatus::Closed
        }
    }

    pub fn is_open(&self, now: i64) -> bool {
        self.status(now) == EventStatus::Open
    }
}

#[account]
#[derive(Default, Debug)]
pub struct VoteAccount {
    pub voter: Pubkey,
    pub has_voted: bool,
    pub plus_choices: Vec<u8>,
    pub minus_choices: Vec<u8>,
    pub bump: u8,
}

impl VoteAccount {
    // plus and minus are each bounded by the choice count
    pub const SPACE: usize =
        DISCRIMINATOR_SIZE + 32 + 1 + (4 + MAX_CHOICES) + (4 + MAX_CHOICES) + 1;
}

#[event]
pub struct EventCreated {
    pub event: Pubkey,
    pub creator: Pubkey,
    pub deadline: i64,
    pub choices_count: u8,
    pub allow_minus: bool,
}

#[event]
pub struct VoteCast {
    pub event: Pubkey,
    pub voter: Pubkey,
    pub plus_choices: Vec<u8>,
    pub minus_choices: Vec<u8>,
}
