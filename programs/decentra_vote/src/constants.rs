// PDA seeds
// event: ["event", creator, creation timestamp (i64 LE)]
// vote:  ["vote", event, voter]
pub const EVENT_SEED: &[u8] = b"event";
pub const VOTE_SEED: &[u8] = b"vote";

pub const MAX_TITLE: usize = 64;
pub const MAX_DESC: usize = 256;

// Account space is fixed at creation, so the choice list is bounded too.
pub const MAX_CHOICES: usize = 10;
pub const MAX_CHOICE_LEN: usize = 64;

pub const DISCRIMINATOR_SIZE: usize = 8;
