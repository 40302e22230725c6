#![allow(unused_mut)]

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    system_program,
};
use solana_program_test::{processor, ProgramTest};
use solana_sdk::{
    instruction::{AccountMeta, Instruction, InstructionError},
    signature::Signer,
    transaction::{Transaction, TransactionError},
};

use movie_review_program_common::write_new_account;

const SEED_PREFIX: &[u8] = b"note";
const NOTE_CAPACITY: usize = 64;

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Eq, Clone)]
struct Note {
    tag: u8,
    text: String,
}

fn derive_pda(tag: u8, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_PREFIX, &[tag]], program_id)
}

/// ix_data = Borsh-serialized Note
/// Accounts:
///   0 - payer (signer)
///   1 - note PDA
///   2 - system_program
fn test_processor(program_id: &Pubkey, accounts: &[AccountInfo], ix_data: &[u8]) -> ProgramResult {
    let note = Note::try_from_slice(ix_data).map_err(|_| ProgramError::InvalidInstructionData)?;

    let mut ai_iter = accounts.iter();
    let payer_ai = next_account_info(&mut ai_iter)?;
    let note_ai = next_account_info(&mut ai_iter)?;
    let system_ai = next_account_info(&mut ai_iter)?;

    let (expected_pda, bump) = derive_pda(note.tag, program_id);
    if *note_ai.key != expected_pda {
        return Err(ProgramError::InvalidSeeds);
    }

    let tag = [note.tag];
    let bump_seed = [bump];
    write_new_account(
        note_ai,
        payer_ai,
        system_ai,
        program_id,
        &note,
        NOTE_CAPACITY,
        &[SEED_PREFIX, &tag, &bump_seed],
    )
}

fn note_program_test(program_id: Pubkey) -> ProgramTest {
    let mut pt = ProgramTest::default();
    pt.prefer_bpf(false);
    pt.add_program(
        "write_new_account_test_program",
        program_id,
        processor!(test_processor),
    );
    pt
}

fn write_note_ix(program_id: Pubkey, payer: Pubkey, note: &Note) -> Instruction {
    let (pda, _) = derive_pda(note.tag, &program_id);
    Instruction {
        program_id,
        accounts: vec![
            AccountMeta::new(payer, true),
            AccountMeta::new(pda, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: borsh::to_vec(note).unwrap(),
    }
}

#[tokio::test]
async fn test_write_new_account_reserves_full_capacity() {
    let program_id = Pubkey::new_unique();
    let note = Note {
        tag: 3,
        text: "short".to_string(),
    };
    let (pda, _) = derive_pda(note.tag, &program_id);

    let (mut banks_client, payer, recent_blockhash) = note_program_test(program_id).start().await;

    let tx = Transaction::new_signed_with_payer(
        &[write_note_ix(program_id, payer.pubkey(), &note)],
        Some(&payer.pubkey()),
        &[&payer],
        recent_blockhash,
    );
    banks_client.process_transaction(tx).await.unwrap();

    let account = banks_client.get_account(pda).await.unwrap().unwrap();
    assert_eq!(account.owner, program_id);
    assert_eq!(account.data.len(), NOTE_CAPACITY);
    assert_eq!(account.lamports, Rent::default().minimum_balance(NOTE_CAPACITY));

    let serialized = borsh::to_vec(&note).unwrap();
    assert_eq!(&account.data[..serialized.len()], &serialized[..]);
    assert!(account.data[serialized.len()..].iter().all(|b| *b == 0));

    let mut data = &account.data[..];
    assert_eq!(Note::deserialize(&mut data).unwrap(), note);
}

#[tokio::test]
async fn test_write_new_account_rejects_instance_larger_than_capacity() {
    let program_id = Pubkey::new_unique();
    let note = Note {
        tag: 9,
        text: "x".repeat(NOTE_CAPACITY),
    };
    let (pda, _) = derive_pda(note.tag, &program_id);

    let (mut banks_client, payer, recent_blockhash) = note_program_test(program_id).start().await;

    let tx = Transaction::new_signed_with_payer(
        &[write_note_ix(program_id, payer.pubkey(), &note)],
        Some(&payer.pubkey()),
        &[&payer],
        recent_blockhash,
    );
    let err = banks_client.process_transaction(tx).await.unwrap_err().unwrap();
    assert_eq!(
        err,
        TransactionError::InstructionError(0, InstructionError::AccountDataTooSmall)
    );

    assert!(banks_client.get_account(pda).await.unwrap().is_none());
}
