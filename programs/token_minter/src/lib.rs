#![allow(deprecated)]
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instruction_builder;
pub mod instructions;
#[cfg(test)]
mod tests;
pub mod token_validate;
pub mod utils;

use instructions::*;

declare_id!("CqBx2Ce1MijhXcASX7rsb9knaPhmPe2N5HWYVaQVR8zt");

#[program]
pub mod token_minter {
    use super::*;

    /// Create the mint PDA and its Metaplex metadata
    pub fn init_token<'info>(ctx: Context<'_, '_, '_, 'info, InitToken<'info>>, metadata: InitTokenParams) -> Result<()> {
        instructions::init_token(ctx, metadata)
    }

    /// Mint to the recipient's associated token account, signed by the mint PDA
    pub fn mint_tokens(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
        instructions::mint_tokens(ctx, amount)
    }

    pub fn transfer_tokens(ctx: Context<TransferTokens>, amount: u64) -> Result<()> {
        instructions::transfer_tokens(ctx, amount)
    }

    pub fn burn_tokens(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
        instructions::burn_tokens(ctx, amount)
    }

    /// Set (not add to) the delegate allowance on the owner's token account
    pub fn approve_tokens(ctx: Context<ApproveTokens>, amount: u64) -> Result<()> {
        instructions::approve_tokens(ctx, amount)
    }

    pub fn revoke_tokens(ctx: Context<RevokeTokens>) -> Result<()> {
        instructions::revoke_tokens(ctx)
    }
}
