use crate::error::Validate;
use borsh::BorshSerialize;
use movie_review_program_common::{
    close_account::close_account, write_existing_account::write_existing_account,
    write_new_account::write_new_account,
};
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, pubkey::Pubkey};

#[cfg(test)]
use solana_program::msg;

pub fn try_acc_create<'a, T>(
    value: &T,
    account: &AccountInfo<'a>,
    payer_account: &AccountInfo<'a>,
    system_program: &AccountInfo<'a>,
    program_id: &Pubkey,
    capacity: usize,
    new_account_signer_seeds: &[&[u8]],
) -> ProgramResult
where
    T: BorshSerialize + Validate + std::fmt::Debug,
{
    value.validate()?;

    write_new_account(
        account,
        payer_account,
        system_program,
        program_id,
        value,
        capacity,
        new_account_signer_seeds,
    )?;

    #[cfg(test)]
    msg!("Created: {:?}", value);

    Ok(())
}

pub fn try_acc_write<T>(value: &T, account: &AccountInfo) -> ProgramResult
where
    T: BorshSerialize + Validate + std::fmt::Debug,
{
    value.validate()?;

    write_existing_account(account, value)
}

pub fn try_acc_close(
    close_account_info: &AccountInfo,
    receiving_account: &AccountInfo,
) -> ProgramResult {
    close_account(close_account_info, receiving_account)
}
