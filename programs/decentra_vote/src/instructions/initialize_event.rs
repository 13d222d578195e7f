use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::D21Error;
use crate::states::{EventAccount, EventCreated};

pub fn handler(ctx: Context<InitializeEvent>, params: EventParams, timestamp: i64) -> Result<()> {
    let cfg = EventConfig::build(params)?;

    msg!("Timestamp seed used: {}", timestamp);
    msg!("Choices: {:?}", cfg.choices());
    msg!("Deadline: {}", cfg.deadline());
    msg!(
        "D21 config: max_plus={}, allow_minus={}, max_minus={}, min_plus_for_minus={}",
        cfg.max_plus_votes(),
        cfg.allow_minus(),
        cfg.max_minus_votes(),
        cfg.min_plus_for_minus()
    );

    let creator = ctx.accounts.creator.key();
    let event = &mut ctx.accounts.event;
    event.set_inner(EventAccount::from_config(cfg, creator, ctx.bumps.event));

    msg!("Event {} initialized by {}: {}", event.key(), event.creator, event.title);

    emit!(EventCreated {
        event: event.key(),
        creator,
        deadline: event.deadline,
        choices_count: event.choices.len() as u8,
        allow_minus: event.allow_minus,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(title: String, description: String, choices: Vec<String>, deadline: i64, timestamp: i64)]
pub struct InitializeEvent<'info> {
    #[account(
        init,
        payer = creator,
        space = EventAccount::SPACE,
        seeds = [EVENT_SEED, creator.key().as_ref(), &timestamp.to_le_bytes()],
        bump
    )]
    pub event: Account<'info, EventAccount>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Raw event settings as submitted by the creator.
#[derive(Clone, Debug, Default)]
pub struct EventParams {
    pub title: String,
    pub description: String,
    pub choices: Vec<String>,
    pub deadline: i64,
    pub max_plus_votes: u8,
    pub allow_minus: bool,
    pub max_minus_votes: u8,
    pub min_plus_for_minus: u8,
}

/// Event settings that passed every D21 rule. Only [`EventConfig::build`]
/// produces one, so an `EventAccount` built from it is always consistent.
#[derive(Clone, Debug)]
pub struct EventConfig {
    title: String,
    description: String,
    choices: Vec<String>,
    deadline: i64,
    max_plus_votes: u8,
    allow_minus: bool,
    max_minus_votes: u8,
    min_plus_for_minus: u8,
}

impl EventConfig {
    /// Checks run in a fixed order and the first failure is reported.
    /// Without minus voting the minus limits are zeroed whatever was sent.
    pub fn build(params: EventParams) -> Result<Self> {
        let EventParams {
            title,
            description,
            choices,
            deadline,
            max_plus_votes,
            allow_minus,
            max_minus_votes,
            min_plus_for_minus,
        } = params;

        require!(!choices.is_empty(), D21Error::NoChoicesProvided);
        require!(title.len() <= MAX_TITLE, D21Error::TitleTooLong);
        require!(description.len() <= MAX_DESC, D21Error::DescriptionTooLong);
        require!(
            max_plus_votes > 0 && (max_plus_votes as usize) <= choices.len(),
            D21Error::InvalidConfig
        );

        let (max_minus_votes, min_plus_for_minus) = if allow_minus {
            require!(
                (1..=max_plus_votes).contains(&max_minus_votes),
                D21Error::InvalidConfig
            );
            require!(
                (1..=max_plus_votes).contains(&min_plus_for_minus),
                D21Error::InvalidConfig
            );
            (max_minus_votes, min_plus_for_minus)
        } else {
            (0, 0)
        };

        require!(choices.len() <= MAX_CHOICES, D21Error::InvalidConfig);
        require!(
            choices.iter().all(|c| c.len() <= MAX_CHOICE_LEN),
            D21Error::InvalidConfig
        );

        Ok(Self {
            title,
            description,
            choices,
            deadline,
            max_plus_votes,
            allow_minus,
            max_minus_votes,
            min_plus_for_minus,
        })
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn deadline(&self) -> i64 {
        self.deadline
    }

    pub fn max_plus_votes(&self) -> u8 {
        self.max_plus_votes
    }

    pub fn allow_minus(&self) -> bool {
        self.allow_minus
    }

    pub fn max_minus_votes(&self) -> u8 {
        self.max_minus_votes
    }

    pub fn min_plus_for_minus(&self) -> u8 {
        self.min_plus_for_minus
    }
}

impl EventAccount {
    pub fn from_config(cfg: EventConfig, creator: Pubkey, bump: u8) -> Self {
        let total_votes = vec![0i64; cfg.choices.len()];
        Self {
            creator,
            title: cfg.title,
            description: cfg.description,
            choices: cfg.choices,
            deadline: cfg.deadline,
            max_plus_votes: cfg.max_plus_votes,
            allow_minus: cfg.allow_minus,
            max_minus_votes: cfg.max_minus_votes,
            min_plus_for_minus: cfg.min_plus_for_minus,
            total_votes,
            bump,
        }
    }
}
