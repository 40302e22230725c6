#[allow(deprecated)] // system_program not yet migrated to solana_sdk_ids crate-wide
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program_error::ProgramError,
    system_program,
};

/// Closes a program-owned account and refunds its lamports to `receiving_account`.
///
/// The data is zeroed before the account is shrunk, so the discriminator can never be read
/// back within the same transaction, then ownership returns to the system program. Once the
/// transaction lands the address is indistinguishable from one that was never created.
pub fn close_account(
    close_account: &AccountInfo,
    receiving_account: &AccountInfo,
) -> ProgramResult {
    if close_account.key == receiving_account.key {
        return Err(ProgramError::InvalidAccountData);
    }

    let refund = close_account.lamports();
    if refund > 0 {
        **receiving_account.try_borrow_mut_lamports()? = receiving_account
            .lamports()
            .checked_add(refund)
            .ok_or(ProgramError::ArithmeticOverflow)?;
        **close_account.try_borrow_mut_lamports()? = 0;
    }

    close_account.try_borrow_mut_data()?.fill(0);
    close_account.realloc(0, false)?;
    close_account.assign(&system_program::ID);

    Ok(())
}
