//! Off-chain address derivation, matching the `seeds` constraints of the
//! instructions. Clients use these to find the event account before
//! `initialize_event` and to look up a voter's ballot afterwards.

use anchor_lang::prelude::*;

use crate::constants::{EVENT_SEED, VOTE_SEED};

pub fn find_event_address(creator: &Pubkey, timestamp: i64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[EVENT_SEED, creator.as_ref(), &timestamp.to_le_bytes()],
        &crate::ID,
    )
}

pub fn find_vote_address(event: &Pubkey, voter: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VOTE_SEED, event.as_ref(), voter.as_ref()], &crate::ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_address_is_deterministic() {
        let creator = Pubkey::new_unique();
        assert_eq!(
            find_event_address(&creator, 1_700_000_000),
            find_event_address(&creator, 1_700_000_000)
        );
    }

    #[test]
    fn event_address_depends_on_creator_and_timestamp() {
        let creator = Pubkey::new_unique();
        let (a, _) = find_event_address(&creator, 1);
        let (b, _) = find_event_address(&creator, 2);
        let (c, _) = find_event_address(&Pubkey::new_unique(), 1);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn vote_address_is_per_event_and_voter() {
        let event = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        let (alice_vote, _) = find_vote_address(&event, &alice);
        assert_eq!(find_vote_address(&event, &alice).0, alice_vote);
        assert_ne!(find_vote_address(&event, &bob).0, alice_vote);
        assert_ne!(find_vote_address(&Pubkey::new_unique(), &alice).0, alice_vote);
    }

    #[test]
    fn bump_recreates_address() {
        let event = Pubkey::new_unique();
        let voter = Pubkey::new_unique();
        let (address, bump) = find_vote_address(&event, &voter);

        let recreated = Pubkey::create_program_address(
            &[VOTE_SEED, event.as_ref(), voter.as_ref(), &[bump]],
            &crate::ID,
        )
        .unwrap();
        assert_eq!(recreated, address);
    }

    #[test]
    fn timestamp_seed_is_little_endian() {
        let creator = Pubkey::new_unique();
        let (address, bump) = find_event_address(&creator, 0x0102);
        let expected = Pubkey::create_program_address(
            &[b"event", creator.as_ref(), &[2, 1, 0, 0, 0, 0, 0, 0], &[bump]],
            &crate::ID,
        )
        .unwrap();
        assert_eq!(address, expected);
    }
}
