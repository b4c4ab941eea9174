use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::events::LotteryInitialized;
use crate::state::Lottery;

/// Accounts required to deploy the lottery.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The singleton lottery state account.
    #[account(
        init,
        payer = payer,
        space = Lottery::space_for(0),
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Creates the lottery with the default price and supply and fixes its
/// operator for good.
///
/// # Arguments
/// * `ctx` - Context holding the Initialize accounts
/// * `operator` - The only key allowed to draw and reconfigure rounds
pub fn process_initialize(ctx: Context<Initialize>, operator: Pubkey) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.set_inner(Lottery::new(operator, ctx.bumps.lottery));

    msg!("Lottery initialized, operator: {}", operator);
    msg!(
        "Ticket cost: {}, max tickets: {}",
        lottery.ticket_cost,
        lottery.max_tickets
    );

    emit!(LotteryInitialized {
        operator,
        ticket_cost: lottery.ticket_cost,
        max_tickets: lottery.max_tickets,
    });

    Ok(())
}
