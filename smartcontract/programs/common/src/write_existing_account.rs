use borsh::BorshSerialize;
use core::fmt::Debug;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program_error::ProgramError,
};

use crate::copy_into_capacity;

#[cfg(test)]
use solana_program::msg;

/// Overwrites an existing account in place with `instance`, zeroing the unused tail.
///
/// The account keeps the size it was created with. An instance that no longer fits fails
/// with `AccountDataTooSmall` and the stored bytes are left as they were.
pub fn write_existing_account<T>(account: &AccountInfo, instance: &T) -> ProgramResult
where
    T: BorshSerialize + Debug,
{
    let serialized = borsh::to_vec(instance).map_err(|_| ProgramError::InvalidAccountData)?;

    {
        let mut data = account.try_borrow_mut_data()?;
        copy_into_capacity(&mut data, &serialized)?;
    }

    #[cfg(test)]
    msg!("write_existing_account: wrote {:?}", instance);

    Ok(())
}
