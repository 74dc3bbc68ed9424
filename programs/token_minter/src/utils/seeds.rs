//! PDA derivation helpers
//!
//! Single source of truth for every address the program derives or resolves

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::{
    constants::{METADATA_SEED, MINT_SEED},
    error::TokenMinterError,
};

/// Derive the mint PDA, which doubles as mint and freeze authority
pub fn derive_mint(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_SEED], program_id)
}

/// Derive the Metaplex metadata PDA for a mint
pub fn derive_metadata(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[METADATA_SEED, mpl_token_metadata::ID.as_ref(), mint.as_ref()],
        &mpl_token_metadata::ID,
    )
}

/// Fallible form of [`derive_metadata`] for on-chain use
pub fn try_derive_metadata(mint: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(
        &[METADATA_SEED, mpl_token_metadata::ID.as_ref(), mint.as_ref()],
        &mpl_token_metadata::ID,
    )
    .ok_or_else(|| error!(TokenMinterError::AccountResolutionFailure))
}

/// Canonical token account of `owner` for `mint` under the SPL Token program
pub fn associated_token_address(mint: &Pubkey, owner: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, mint)
}
