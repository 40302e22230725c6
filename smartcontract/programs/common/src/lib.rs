//! Common helpers for SVM programs that keep fixed-capacity records in PDAs.

pub mod close_account;
pub mod create_account;
pub mod serializer;
pub mod write_existing_account;
pub mod write_new_account;

pub use close_account::close_account;
pub use create_account::try_create_account;
pub use write_existing_account::write_existing_account;
pub use write_new_account::write_new_account;

use solana_program::program_error::ProgramError;

/// Copies `serialized` to the start of `data` and zeroes everything after it.
///
/// Fails with `AccountDataTooSmall` without touching `data` when the
/// serialized bytes do not fit.
pub fn copy_into_capacity(data: &mut [u8], serialized: &[u8]) -> Result<(), ProgramError> {
    if serialized.len() > data.len() {
        return Err(ProgramError::AccountDataTooSmall);
    }

    let (head, tail) = data.split_at_mut(serialized.len());
    head.copy_from_slice(serialized);
    tail.fill(0);

    Ok(())
}
