use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::D21Error;
use crate::states::{EventAccount, VoteAccount, VoteCast};

pub fn handler(
    ctx: Context<CastVote>,
    plus_choices: Vec<u8>,
    minus_choices: Option<Vec<u8>>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let voter = ctx.accounts.voter.key();
    let ballot = Ballot::new(plus_choices, minus_choices);

    record_ballot(
        &mut ctx.accounts.event,
        &mut ctx.accounts.vote_record,
        voter,
        ballot,
        now,
        ctx.bumps.vote_record,
    )?;

    let record = &ctx.accounts.vote_record;
    msg!("Voter {} cast D21 vote", voter);
    msg!("Plus choices: {:?}", record.plus_choices);
    msg!("Minus choices: {:?}", record.minus_choices);

    emit!(VoteCast {
        event: ctx.accounts.event.key(),
        voter,
        plus_choices: record.plus_choices.clone(),
        minus_choices: record.minus_choices.clone(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CastVote<'info> {
    #[account(mut)]
    pub event: Account<'info, EventAccount>,

    // created on first use; a committed ballot is detected through `has_voted`
    #[account(
        init_if_needed,
        payer = voter,
        space = VoteAccount::SPACE,
        seeds = [VOTE_SEED, event.key().as_ref(), voter.key().as_ref()],
        bump
    )]
    pub vote_record: Account<'info, VoteAccount>,

    #[account(mut)]
    pub voter: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// One voter's selections. Order inside each list carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ballot {
    pub plus: Vec<u8>,
    pub minus: Vec<u8>,
}

impl Ballot {
    /// A missing minus list is the same as an empty one.
    pub fn new(plus: Vec<u8>, minus: Option<Vec<u8>>) -> Self {
        Self {
            plus,
            minus: minus.unwrap_or_default(),
        }
    }

    /// Checks the selections against the event's D21 rules, first failure wins.
    /// Deadline and repeat-vote checks belong to [`record_ballot`].
    pub fn validate(&self, event: &EventAccount) -> Result<()> {
        let plus = &self.plus;
        let minus = &self.minus;

        require!(!plus.is_empty(), D21Error::NoChoicesProvided);
        require!(
            plus.len() <= event.max_plus_votes as usize,
            D21Error::TooManyPlusVotes
        );
        require!(
            !has_duplicates(plus) && !has_duplicates(minus),
            D21Error::DuplicateChoices
        );
        require!(
            plus.iter()
                .chain(minus.iter())
                .all(|&idx| (idx as usize) < event.choices.len()),
            D21Error::ChoiceOutOfRange
        );

        if !minus.is_empty() {
            require!(event.allow_minus, D21Error::MinusVotesNotAllowed);
            require!(
                minus.len() <= event.max_minus_votes as usize,
                D21Error::TooManyMinusVotes
            );
            require!(
                plus.len() >= event.min_plus_for_minus as usize,
                D21Error::InsufficientPlusVotes
            );
        }

        require!(
            !plus.iter().any(|idx| minus.contains(idx)),
            D21Error::OverlappingChoices
        );

        Ok(())
    }

    /// Returns the tallies with this ballot applied. `totals` is left alone,
    /// so an overflow part way through leaves nothing half-counted.
    pub fn apply(&self, totals: &[i64]) -> Result<Vec<i64>> {
        let mut next = totals.to_vec();

        for &idx in self.plus.iter() {
            let tally = next
                .get_mut(idx as usize)
                .ok_or(D21Error::ChoiceOutOfRange)?;
            *tally = tally.checked_add(1).ok_or(D21Error::Overflow)?;
        }

        for &idx in self.minus.iter() {
            let tally = next
                .get_mut(idx as usize)
                .ok_or(D21Error::ChoiceOutOfRange)?;
            *tally = tally.checked_sub(1).ok_or(D21Error::Overflow)?;
        }

        Ok(next)
    }
}

/// Counts `ballot` into `event` and seals it into `record`.
///
/// Host-independent: the clock reading comes in as `now` and the accounts are
/// plain structs. Either both `event.total_votes` and `record` are updated or
/// neither is touched.
pub fn record_ballot(
    event: &mut EventAccount,
    record: &mut VoteAccount,
    voter: Pubkey,
    ballot: Ballot,
    now: i64,
    bump: u8,
) -> Result<()> {
    require!(event.is_open(now), D21Error::VotingClosed);
    require!(!record.has_voted, D21Error::AlreadyVoted);

    ballot.validate(event)?;
    let totals = ballot.apply(&event.total_votes)?;

    event.total_votes = totals;
    *record = VoteAccount {
        voter,
        has_voted: true,
        plus_choices: ballot.plus,
        minus_choices: ballot.minus,
        bump,
    };

    Ok(())
}

fn has_duplicates(indices: &[u8]) -> bool {
    let mut seen = [false; 256];
    indices
        .iter()
        .any(|&idx| std::mem::replace(&mut seen[idx as usize], true))
}
