use anchor_lang::{prelude::*, solana_program::instruction::Instruction, system_program, InstructionData};
use anchor_spl::{associated_token::spl_associated_token_account, token::spl_token};

use crate::{
    instructions::InitTokenParams,
    utils::{associated_token_address, derive_metadata, derive_mint},
};

/// Builds instructions with the complete account set for every call
pub struct InstructionBuilder;

impl InstructionBuilder {
    /// Returns the instruction, the mint PDA and the metadata PDA
    pub fn init_token(payer: &Pubkey, metadata: InitTokenParams) -> (Instruction, Pubkey, Pubkey) {
        let program_id = crate::id();
        let (mint, _) = derive_mint(&program_id);
        let (metadata_pda, _) = derive_metadata(&mint);

        let accounts = crate::accounts::InitToken {
            mint,
            metadata: metadata_pda,
            payer: *payer,
            rent: anchor_lang::solana_program::sysvar::rent::ID,
            system_program: system_program::ID,
            token_program: spl_token::id(),
            token_metadata_program: mpl_token_metadata::ID,
        };

        let instruction = Instruction {
            program_id,
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::InitToken { metadata }.data(),
        };

        (instruction, mint, metadata_pda)
    }

    /// Returns the instruction and the recipient's associated token account
    pub fn mint_tokens(payer: &Pubkey, recipient: &Pubkey, amount: u64) -> (Instruction, Pubkey) {
        let program_id = crate::id();
        let (mint, _) = derive_mint(&program_id);
        let destination = associated_token_address(&mint, recipient);

        let accounts = crate::accounts::MintTokens {
            mint,
            recipient: *recipient,
            destination,
            payer: *payer,
            rent: anchor_lang::solana_program::sysvar::rent::ID,
            system_program: system_program::ID,
            token_program: spl_token::id(),
            associated_token_program: spl_associated_token_account::id(),
        };

        let instruction = Instruction {
            program_id,
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::MintTokens { amount }.data(),
        };

        (instruction, destination)
    }

    /// Transfer out of `owner`'s associated token account, signed by
    /// `authority` (the owner or its delegate)
    pub fn transfer_tokens(
        payer: &Pubkey,
        owner: &Pubkey,
        authority: &Pubkey,
        recipient: &Pubkey,
        amount: u64,
    ) -> (Instruction, Pubkey) {
        let program_id = crate::id();
        let (mint, _) = derive_mint(&program_id);
        let to = associated_token_address(&mint, recipient);

        let accounts = crate::accounts::TransferTokens {
            mint,
            from: associated_token_address(&mint, owner),
            recipient: *recipient,
            to,
            authority: *authority,
            payer: *payer,
            system_program: system_program::ID,
            token_program: spl_token::id(),
            associated_token_program: spl_associated_token_account::id(),
        };

        let instruction = Instruction {
            program_id,
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::TransferTokens { amount }.data(),
        };

        (instruction, to)
    }

    pub fn burn_tokens(owner: &Pubkey, authority: &Pubkey, amount: u64) -> Instruction {
        let program_id = crate::id();
        let (mint, _) = derive_mint(&program_id);

        let accounts = crate::accounts::BurnTokens {
            mint,
            from: associated_token_address(&mint, owner),
            authority: *authority,
            token_program: spl_token::id(),
        };

        Instruction {
            program_id,
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::BurnTokens { amount }.data(),
        }
    }

    pub fn approve_tokens(owner: &Pubkey, delegate: &Pubkey, amount: u64) -> Instruction {
        let program_id = crate::id();
        let (mint, _) = derive_mint(&program_id);

        let accounts = crate::accounts::ApproveTokens {
            mint,
            to: associated_token_address(&mint, owner),
            delegate: *delegate,
            owner: *owner,
            token_program: spl_token::id(),
        };

        Instruction {
            program_id,
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::ApproveTokens { amount }.data(),
        }
    }

    pub fn revoke_tokens(owner: &Pubkey) -> Instruction {
        let program_id = crate::id();
        let (mint, _) = derive_mint(&program_id);

        let accounts = crate::accounts::RevokeTokens {
            mint,
            source: associated_token_address(&mint, owner),
            owner: *owner,
            token_program: spl_token::id(),
        };

        Instruction {
            program_id,
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::RevokeTokens {}.data(),
        }
    }
}
