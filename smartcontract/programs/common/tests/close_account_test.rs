#![allow(unused_mut)]

use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    pubkey::Pubkey,
    system_program,
};
use solana_program_test::{processor, ProgramTest};
use solana_sdk::{
    account::Account as SolanaAccount,
    instruction::{AccountMeta, Instruction},
    signature::{Keypair, Signer},
    transaction::Transaction,
};

use movie_review_program_common::close_account;

/// Accounts:
///   0 - account to close (owned by program_id)
///   1 - receiving account
fn test_processor(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    _ix_data: &[u8],
) -> ProgramResult {
    let mut it = accounts.iter();
    let close_ai = next_account_info(&mut it)?;
    let receiving_ai = next_account_info(&mut it)?;

    close_account(close_ai, receiving_ai)
}

fn close_program_test(
    program_id: Pubkey,
    close_pubkey: Pubkey,
    lamports: u64,
    owner: Pubkey,
) -> ProgramTest {
    let mut pt = ProgramTest::default();
    pt.prefer_bpf(false);
    pt.add_program(
        "close_account_test_program",
        program_id,
        processor!(test_processor),
    );
    pt.add_account(
        close_pubkey,
        SolanaAccount {
            lamports,
            data: vec![0xab; 48],
            owner,
            executable: false,
            rent_epoch: 0,
        },
    );
    pt
}

#[tokio::test]
async fn test_close_account_refunds_receiver_and_releases_address() {
    let program_id = Pubkey::new_unique();
    let close_pubkey = Pubkey::new_unique();
    let receiver = Keypair::new();
    let lamports = 2_000_000;

    let (mut banks_client, payer, recent_blockhash) =
        close_program_test(program_id, close_pubkey, lamports, program_id)
            .start()
            .await;

    let ix = Instruction {
        program_id,
        accounts: vec![
            AccountMeta::new(close_pubkey, false),
            AccountMeta::new(receiver.pubkey(), false),
        ],
        data: vec![],
    };
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        &[&payer],
        recent_blockhash,
    );
    banks_client.process_transaction(tx).await.unwrap();

    // The receiver is not the fee payer, so it receives the full balance.
    let receiver_balance = banks_client.get_balance(receiver.pubkey()).await.unwrap();
    assert_eq!(receiver_balance, lamports);

    // A zero-lamport account is purged by the runtime; if it lingers it must be reset.
    if let Some(closed) = banks_client.get_account(close_pubkey).await.unwrap() {
        assert_eq!(closed.lamports, 0);
        assert!(closed.data.is_empty());
        assert_eq!(closed.owner, system_program::id());
    }
}

#[tokio::test]
async fn test_close_account_into_itself_fails() {
    let program_id = Pubkey::new_unique();
    let close_pubkey = Pubkey::new_unique();

    let (mut banks_client, payer, recent_blockhash) =
        close_program_test(program_id, close_pubkey, 1_000_000, program_id)
            .start()
            .await;

    let ix = Instruction {
        program_id,
        accounts: vec![
            AccountMeta::new(close_pubkey, false),
            AccountMeta::new(close_pubkey, false),
        ],
        data: vec![],
    };
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        &[&payer],
        recent_blockhash,
    );
    assert!(banks_client.process_transaction(tx).await.is_err());

    let account = banks_client.get_account(close_pubkey).await.unwrap().unwrap();
    assert_eq!(account.lamports, 1_000_000);
    assert_eq!(account.data, vec![0xab; 48]);
}

#[tokio::test]
async fn test_close_account_not_owned_by_program_fails() {
    let program_id = Pubkey::new_unique();
    let close_pubkey = Pubkey::new_unique();
    let receiver = Keypair::new();

    let (mut banks_client, payer, recent_blockhash) =
        close_program_test(program_id, close_pubkey, 500_000, system_program::id())
            .start()
            .await;

    let ix = Instruction {
        program_id,
        accounts: vec![
            AccountMeta::new(close_pubkey, false),
            AccountMeta::new(receiver.pubkey(), false),
        ],
        data: vec![],
    };
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        &[&payer],
        recent_blockhash,
    );
    assert!(banks_client.process_transaction(tx).await.is_err());

    let account = banks_client.get_account(close_pubkey).await.unwrap().unwrap();
    assert_eq!(account.lamports, 500_000);
    assert_eq!(account.owner, system_program::id());
}
