pub mod initialize_event;
pub mod cast_vote;

pub use cast_vote::{record_ballot, Ballot, CastVote};
pub use initialize_event::{EventConfig, EventParams, InitializeEvent};

// #[program] looks these up at the crate root
pub(crate) use cast_vote::__client_accounts_cast_vote;
pub(crate) use initialize_event::__client_accounts_initialize_event;
#[cfg(feature = "cpi")]
pub(crate) use cast_vote::__cpi_client_accounts_cast_vote;
#[cfg(feature = "cpi")]
pub(crate) use initialize_event::__cpi_client_accounts_initialize_event;
