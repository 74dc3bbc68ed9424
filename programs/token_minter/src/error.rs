use anchor_lang::prelude::*;

// Errors
#[error_code]
pub enum TokenMinterError {
    #[msg("Mint is already initialized")]
    AlreadyInitialized,
    #[msg("Insufficient funds")]
    InsufficientFunds,
    #[msg("Signer is neither the owner nor a delegate with enough allowance")]
    Unauthorized,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Token name is too long")]
    NameTooLong,
    #[msg("Token symbol is too long")]
    SymbolTooLong,
    #[msg("Token uri is too long")]
    UriTooLong,
    #[msg("Decimals value is too large")]
    DecimalsTooLarge,
    #[msg("Token account does not belong to this mint")]
    InvalidMint,
    #[msg("Could not derive a program address from the given seeds")]
    AccountResolutionFailure,
}
