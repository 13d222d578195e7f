use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod pda;
pub mod states;

use instructions::*;

declare_id!("FXGf1kvpC6pHSZWbPpLjAuDYNW6Bkax3E4SUEcfdBvwY");

#[program]
pub mod decentra_vote {
    use super::*;

    #[allow(clippy::too_many_arguments)]
    pub fn initialize_event(
        ctx: Context<InitializeEvent>,
        title: String,
        description: String,
        choices: Vec<String>,
        deadline: i64,
        timestamp: i64,
        max_plus_votes: u8,
        allow_minus: bool,
        max_minus_votes: u8,
        min_plus_for_minus: u8,
    ) -> Result<()> {
        initialize_event::handler(
            ctx,
            EventParams {
                title,
                description,
                choices,
                deadline,
                max_plus_votes,
                allow_minus,
                max_minus_votes,
                min_plus_for_minus,
            },
            timestamp,
        )
    }

    pub fn cast_vote(
        ctx: Context<CastVote>,
        plus_choices: Vec<u8>,
        minus_choices: Option<Vec<u8>>,
    ) -> Result<()> {
        cast_vote::handler(ctx, plus_choices, minus_choices)
    }
}
