//! Metadata validation for `init_token`
//!
//! Rejects fields Metaplex would refuse before any account is created, so a
//! bad request fails with a specific error instead of a CPI error.
use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_DECIMALS, MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH},
    error::TokenMinterError,
    instructions::InitTokenParams,
};

/// Validate token creation parameters
///
/// Lengths are measured in bytes, which is what Metaplex stores.
pub fn validate_token(params: &InitTokenParams) -> Result<()> {
    require!(
        params.name.len() <= MAX_NAME_LENGTH,
        TokenMinterError::NameTooLong
    );

    require!(
        params.symbol.len() <= MAX_SYMBOL_LENGTH,
        TokenMinterError::SymbolTooLong
    );

    require!(
        params.uri.len() <= MAX_URI_LENGTH,
        TokenMinterError::UriTooLong
    );

    require!(
        params.decimals <= MAX_DECIMALS,
        TokenMinterError::DecimalsTooLarge
    );

    Ok(())
}
