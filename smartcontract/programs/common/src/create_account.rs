#[cfg(test)]
use solana_program::msg;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program::invoke_signed_unchecked,
    pubkey::Pubkey, rent::Rent, sysvar::Sysvar,
};

/// Allocates `data_len` bytes at a PDA, assigns it to `program_id` and funds it to rent
/// exemption from `payer_key`.
///
/// A plain system `create_account` fails when the target address already holds lamports, so
/// anyone could block creation by sending dust to a derived address ahead of time. When
/// `current_lamports` is non-zero the account is instead allocated and assigned with the PDA's
/// signer seeds, then topped up with whatever is still missing for rent exemption.
///
/// `new_account_signer_seeds` must include the bump seed. The payer is expected to be an
/// ordinary signer of the transaction.
pub fn try_create_account(
    payer_key: &Pubkey,
    new_account_key: &Pubkey,
    current_lamports: u64,
    data_len: usize,
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    new_account_signer_seeds: &[&[u8]],
) -> ProgramResult {
    let rent_exemption_lamports = Rent::get()?.minimum_balance(data_len);

    if current_lamports == 0 {
        #[cfg(test)]
        msg!(
            "Creating account with {} lamports and {} bytes",
            rent_exemption_lamports,
            data_len
        );
        let create_account_ix = solana_system_interface::instruction::create_account(
            payer_key,
            new_account_key,
            rent_exemption_lamports,
            data_len as u64,
            program_id,
        );
        invoke_signed_unchecked(&create_account_ix, accounts, &[new_account_signer_seeds])?;
        return Ok(());
    }

    #[cfg(test)]
    msg!(
        "Account already holds {} lamports, allocating {} bytes",
        current_lamports,
        data_len
    );
    let allocate_ix =
        solana_system_interface::instruction::allocate(new_account_key, data_len as u64);
    invoke_signed_unchecked(&allocate_ix, accounts, &[new_account_signer_seeds])?;

    let assign_ix = solana_system_interface::instruction::assign(new_account_key, program_id);
    invoke_signed_unchecked(&assign_ix, accounts, &[new_account_signer_seeds])?;

    let lamport_diff = rent_exemption_lamports.saturating_sub(current_lamports);
    if lamport_diff != 0 {
        #[cfg(test)]
        msg!("Transferring {} lamports to new account", lamport_diff);
        let transfer_ix =
            solana_system_interface::instruction::transfer(payer_key, new_account_key, lamport_diff);
        invoke_signed_unchecked(&transfer_ix, accounts, &[])?;
    }

    Ok(())
}
