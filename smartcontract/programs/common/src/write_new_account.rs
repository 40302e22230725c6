use borsh::BorshSerialize;
use core::fmt::Debug;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::{copy_into_capacity, create_account::try_create_account};

#[cfg(test)]
use solana_program::msg;

/// Creates a PDA with room for `capacity` bytes and writes `instance` at its start.
///
/// The capacity is reserved up front so that later overwrites through
/// [`crate::write_existing_account`] never need to resize the account. Bytes past the
/// serialized instance are left zeroed.
pub fn write_new_account<'a, T>(
    account: &AccountInfo<'a>,
    payer_account: &AccountInfo<'a>,
    system_program: &AccountInfo<'a>,
    program_id: &Pubkey,
    instance: &T,
    capacity: usize,
    pda_seeds: &[&[u8]],
) -> ProgramResult
where
    T: BorshSerialize + Debug,
{
    // Serialize before any CPI so an oversized instance fails without creating anything.
    let serialized = borsh::to_vec(instance).map_err(|_| ProgramError::InvalidAccountData)?;
    if serialized.len() > capacity {
        return Err(ProgramError::AccountDataTooSmall);
    }

    try_create_account(
        payer_account.key,
        account.key,
        account.lamports(),
        capacity,
        program_id,
        &[
            payer_account.clone(),
            account.clone(),
            system_program.clone(),
        ],
        pda_seeds,
    )?;

    {
        let mut data = account.try_borrow_mut_data()?;
        if data.len() != capacity {
            return Err(ProgramError::AccountDataTooSmall);
        }
        copy_into_capacity(&mut data, &serialized)?;
    }

    #[cfg(test)]
    msg!("write_new_account: wrote {:?}", instance);

    Ok(())
}
