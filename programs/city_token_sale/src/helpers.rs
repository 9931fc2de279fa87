use super::*;

/// Creates the program-derived account `new_account` with `space` bytes
/// owned by `owner`, paid for by `payer`.
///
/// An address that already holds lamports cannot go through
/// `create_account`, so it is topped up to rent exemption, then
/// allocated and assigned.
pub fn create_pda_account<'info>(
    payer: &Signer<'info>,
    new_account: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
    space: usize,
    owner: &Pubkey,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let lamports = (Rent::get()?).minimum_balance(space);
    let current_lamports = new_account.lamports();

    if current_lamports == 0 {
        return create_account(
            CpiContext::new_with_signer(
                system_program.to_account_info(),
                CreateAccount {
                    from: payer.to_account_info(),
                    to: new_account.clone(),
                },
                signer_seeds,
            ),
            lamports,
            space as u64,
            owner,
        );
    }

    let top_up = lamports.saturating_sub(current_lamports);
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program.to_account_info(),
                SystemTransfer {
                    from: payer.to_account_info(),
                    to: new_account.clone(),
                },
            ),
            top_up,
        )?;
    }

    allocate(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            Allocate {
                account_to_allocate: new_account.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;

    assign(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            Assign {
                account_to_assign: new_account.clone(),
            },
            signer_seeds,
        ),
        owner,
    )
}

/// Creates the city mint at its derived address, with the admin vault as
/// mint and freeze authority.
pub fn create_city_mint<'info>(
    payer: &Signer<'info>,
    mint_account: &AccountInfo<'info>,
    token_program: &Program<'info, Token>,
    system_program: &Program<'info, System>,
    admin_vault: &Pubkey,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    create_pda_account(
        payer,
        mint_account,
        system_program,
        Mint::LEN,
        &token_program.key(),
        signer_seeds,
    )?;

    initialize_mint2(
        CpiContext::new(
            token_program.to_account_info(),
            InitializeMint2 {
                mint: mint_account.clone(),
            },
        ),
        CITY_TOKEN_DECIMALS,
        admin_vault,
        Some(admin_vault),
    )
}

/// Authority check for a city mint created by an earlier purchase.
pub fn check_mint_authority(mint_account: &AccountInfo, admin_vault: &Pubkey) -> Result<()> {
    let data = mint_account.try_borrow_data()?;
    let mint = Mint::try_deserialize(&mut &data[..])?;
    require!(
        mint.mint_authority == Some(*admin_vault).into(),
        SaleError::InvalidMintAuthority
    );
    Ok(())
}
