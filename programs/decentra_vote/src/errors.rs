use anchor_lang::prelude::*;

#[error_code]
pub enum D21Error {
    #[msg("Voting deadline has passed")]
    VotingClosed,
    #[msg("You have already voted")]
    AlreadyVoted,
    #[msg("Invalid choice index")]
    InvalidChoice,
    #[msg("No choices provided")]
    NoChoicesProvided,
    #[msg("Title too long (max 64 bytes)")]
    TitleTooLong,
    #[msg("Description too long (max 256 bytes)")]
    DescriptionTooLong,
    #[msg("Invalid event configuration")]
    InvalidConfig,
    #[msg("Duplicate choices provided")]
    DuplicateChoices,
    #[msg("Choice index out of range")]
    ChoiceOutOfRange,
    #[msg("Overflow in vote tally")]
    Overflow,
    #[msg("Too many plus votes")]
    TooManyPlusVotes,
    #[msg("Minus votes are not allowed for this event")]
    MinusVotesNotAllowed,
    #[msg("Too many minus votes")]
    TooManyMinusVotes,
    #[msg("Not enough plus votes to cast minus votes")]
    InsufficientPlusVotes,
    #[msg("Same choice in both plus and minus votes")]
    OverlappingChoices,
}
