//! Delegate management
//!
//! `approve_tokens` replaces any existing delegate and allowance; it never adds
//! to a previous approval. `revoke_tokens` clears the delegate.

use anchor_lang::prelude::*;
use anchor_spl::token::{approve_checked, revoke, ApproveChecked, Mint, Revoke, Token, TokenAccount};

use crate::{
    constants::MINT_SEED,
    error::TokenMinterError,
    events::{DelegateRevoked, TokensApproved},
};

#[derive(Accounts)]
pub struct ApproveTokens<'info> {
    #[account(
        seeds = [MINT_SEED],
        bump,
    )]
    pub mint: Account<'info, Mint>,

    /// Token account the delegate may spend from
    #[account(
        mut,
        constraint = to.mint == mint.key() @ TokenMinterError::InvalidMint,
        constraint = to.owner == owner.key() @ TokenMinterError::Unauthorized,
    )]
    pub to: Account<'info, TokenAccount>,

    /// CHECK: Any account can be a delegate
    pub delegate: UncheckedAccount<'info>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn approve_tokens(ctx: Context<ApproveTokens>, amount: u64) -> Result<()> {
    approve_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            ApproveChecked {
                to: ctx.accounts.to.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                delegate: ctx.accounts.delegate.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        amount,
        ctx.accounts.mint.decimals,
    )?;

    msg!(
        "Approved {} to spend {} from {}",
        ctx.accounts.delegate.key(),
        amount,
        ctx.accounts.to.key()
    );

    emit!(TokensApproved {
        account: ctx.accounts.to.key(),
        delegate: ctx.accounts.delegate.key(),
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RevokeTokens<'info> {
    #[account(
        seeds = [MINT_SEED],
        bump,
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = source.mint == mint.key() @ TokenMinterError::InvalidMint,
        constraint = source.owner == owner.key() @ TokenMinterError::Unauthorized,
    )]
    pub source: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn revoke_tokens(ctx: Context<RevokeTokens>) -> Result<()> {
    revoke(CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Revoke {
            source: ctx.accounts.source.to_account_info(),
            authority: ctx.accounts.owner.to_account_info(),
        },
    ))?;

    msg!("Revoked delegate of {}", ctx.accounts.source.key());

    emit!(DelegateRevoked {
        account: ctx.accounts.source.key(),
    });

    Ok(())
}
