//! Spend authorization for holder instructions

use anchor_lang::{prelude::*, solana_program::program_option::COption};
use anchor_spl::token::spl_token::state::Account as SplTokenAccount;

use crate::error::TokenMinterError;

/// Who is moving funds out of a token account
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpendAuthority {
    Owner,
    Delegate,
}

/// Check that `signer` may debit `amount` from `account`.
///
/// The owner may spend up to the balance. A delegate may spend up to the
/// smaller of the remaining allowance and the balance; going past the
/// allowance is `Unauthorized`, going past the balance is `InsufficientFunds`.
pub fn authorize_spend(
    account: &SplTokenAccount,
    signer: &Pubkey,
    amount: u64,
) -> Result<SpendAuthority> {
    let authority = if account.owner == *signer {
        SpendAuthority::Owner
    } else if account.delegate == COption::Some(*signer) {
        require!(
            amount <= account.delegated_amount,
            TokenMinterError::Unauthorized
        );
        SpendAuthority::Delegate
    } else {
        return err!(TokenMinterError::Unauthorized);
    };

    require!(amount <= account.amount, TokenMinterError::InsufficientFunds);

    Ok(authority)
}
