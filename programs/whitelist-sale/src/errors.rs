use anchor_lang::prelude::*;

/// Custom error codes for the Whitelist Sale program
#[error_code]
pub enum SaleError {
    #[msg("Account is already initialized")]
    AlreadyInitialized,

    #[msg("Account address does not match its expected seed derivation")]
    SeedConstraintViolated,

    #[msg("No valid bump found while deriving a program address")]
    AddressDerivationFailed,

    #[msg("You are not whitelisted")]
    NotWhitelisted,

    #[msg("Unauthorized - only the whitelist authority can perform this action")]
    Unauthorized,

    #[msg("Invalid owner - only the config owner can withdraw")]
    InvalidOwner,

    #[msg("Insufficient funds to cover the purchase")]
    InsufficientFunds,

    #[msg("Math overflow occurred during calculation")]
    Overflow,

    #[msg("Purchase quantity must be greater than zero")]
    ZeroQuantity,

    #[msg("Token price must be greater than zero")]
    InvalidPrice,

    #[msg("Purchase limit exceeded")]
    PurchaseLimitExceeded,

    #[msg("User is already whitelisted")]
    AlreadyWhitelisted,

    #[msg("Whitelist is full - maximum users reached")]
    WhitelistFull,

    #[msg("Token name too long - maximum 32 characters")]
    NameTooLong,

    #[msg("Token symbol too long - maximum 10 characters")]
    SymbolTooLong,

    #[msg("Token URI too long - maximum 200 characters")]
    UriTooLong,
}
