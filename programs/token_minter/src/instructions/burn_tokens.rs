use anchor_lang::prelude::*;
use anchor_spl::token::{burn, Burn, Mint, Token, TokenAccount};

use crate::{
    constants::MINT_SEED, error::TokenMinterError, events::TokensBurned, utils::authorize_spend,
};

#[derive(Accounts)]
pub struct BurnTokens<'info> {
    #[account(
        mut,
        seeds = [MINT_SEED],
        bump,
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = from.mint == mint.key() @ TokenMinterError::InvalidMint,
    )]
    pub from: Account<'info, TokenAccount>,

    /// Owner of `from`, or its approved delegate
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn burn_tokens(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
    authorize_spend(&ctx.accounts.from, &ctx.accounts.authority.key(), amount)?;

    burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.mint.to_account_info(),
                from: ctx.accounts.from.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!("Burned {} from {}", amount, ctx.accounts.from.key());

    emit!(TokensBurned {
        mint: ctx.accounts.mint.key(),
        from: ctx.accounts.from.key(),
        authority: ctx.accounts.authority.key(),
        amount,
    });

    Ok(())
}
