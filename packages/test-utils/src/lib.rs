use anchor_lang::prelude::*;
use solana_program_test::*;
use solana_sdk::{
    hash::Hash,
    instruction::{AccountMeta, Instruction as SdkInstruction, InstructionError},
    signature::Keypair,
    signer::Signer,
    transaction::{Transaction, TransactionError},
};
use std::fs;

pub mod constants;
pub mod helpers;

pub struct TestApp {
    pub banks_client: BanksClient,
    pub payer: Keypair,
    pub recent_blockhash: Hash,
}

impl TestApp {
    /// Start an app from a prepared `ProgramTest`, e.g. one running a program
    /// natively with pre-seeded accounts
    pub async fn start(program_test: ProgramTest) -> Self {
        let (banks_client, payer, recent_blockhash) = program_test.start().await;
        Self {
            banks_client,
            payer,
            recent_blockhash,
        }
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        Pubkey::new_from_array(self.payer.pubkey().to_bytes())
    }

    pub async fn process_instruction(
        &mut self,
        instruction: SdkInstruction,
    ) -> std::result::Result<(), BanksClientError> {
        self.process_instruction_with_signers(instruction, &[]).await
    }

    /// Process an instruction paid by the app payer and signed by `signers` too
    pub async fn process_instruction_with_signers(
        &mut self,
        instruction: SdkInstruction,
        signers: &[&Keypair],
    ) -> std::result::Result<(), BanksClientError> {
        let mut all_signers = vec![&self.payer];
        all_signers.extend_from_slice(signers);

        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&self.payer.pubkey()),
            &all_signers,
            self.recent_blockhash,
        );

        self.banks_client.process_transaction(transaction).await
    }

    pub async fn process_instructions(
        &mut self,
        instructions: Vec<SdkInstruction>,
    ) -> std::result::Result<(), BanksClientError> {
        let transaction = Transaction::new_signed_with_payer(
            &instructions,
            Some(&self.payer.pubkey()),
            &[&self.payer],
            self.recent_blockhash,
        );

        self.banks_client.process_transaction(transaction).await
    }

    pub async fn get_account_data<T: anchor_lang::AccountDeserialize>(
        &mut self,
        address: Pubkey,
    ) -> Result<T> {
        let account = self
            .banks_client
            .get_account(address)
            .await
            .unwrap()
            .unwrap();
        T::try_deserialize(&mut account.data.as_slice())
    }

    pub async fn get_account(&mut self, address: Pubkey) -> Option<solana_sdk::account::Account> {
        self.banks_client.get_account(address).await.unwrap()
    }
}

/// Register a deployed program binary with the test validator
pub fn add_program_binary(program_test: &mut ProgramTest, program_id: Pubkey, program_path: &str) {
    let program_data = fs::read(program_path)
        .unwrap_or_else(|_| panic!("Failed to read program file: {program_path}"));

    program_test.add_account(
        program_id,
        solana_sdk::account::Account {
            lamports: 1_000_000,
            data: program_data,
            owner: solana_sdk::bpf_loader::id(),
            executable: true,
            rent_epoch: 0,
        },
    );
}

/// Utility to convert Anchor Instruction to SDK Instruction
pub fn to_sdk_instruction(
    instruction: anchor_lang::solana_program::instruction::Instruction,
) -> SdkInstruction {
    SdkInstruction {
        program_id: solana_sdk::pubkey::Pubkey::new_from_array(instruction.program_id.to_bytes()),
        accounts: instruction
            .accounts
            .iter()
            .map(|acc| AccountMeta {
                pubkey: solana_sdk::pubkey::Pubkey::new_from_array(acc.pubkey.to_bytes()),
                is_signer: acc.is_signer,
                is_writable: acc.is_writable,
            })
            .collect(),
        data: instruction.data,
    }
}

/// Custom program error code carried by a failed transaction, if any
pub fn custom_error_code(error: &BanksClientError) -> Option<u32> {
    let transaction_error = match error {
        BanksClientError::TransactionError(err) => err,
        BanksClientError::SimulationError { err, .. } => err,
        _ => return None,
    };

    match transaction_error {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(*code),
        _ => None,
    }
}

/// Assert that a transaction failed with the given Anchor error
pub fn assert_custom_error<E: Into<u32>>(
    result: std::result::Result<(), BanksClientError>,
    expected: E,
) {
    let expected = expected.into();
    match result {
        Ok(()) => panic!("Expected custom error {expected}, transaction succeeded"),
        Err(err) => assert_eq!(
            custom_error_code(&err),
            Some(expected),
            "Unexpected error: {err:?}"
        ),
    }
}
