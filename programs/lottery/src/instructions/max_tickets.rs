use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::events::MaxTicketsChanged;
use crate::state::Lottery;

/// Accounts required to change the ticket supply between rounds.
#[derive(Accounts)]
pub struct SetMaxTickets<'info> {
    /// The lottery operator.
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}

pub fn process_max_tickets(ctx: Context<SetMaxTickets>, new_max: u64) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    let old_max = lottery.max_tickets;

    lottery.set_max_tickets(&ctx.accounts.operator.key(), new_max)?;

    msg!("Max tickets: {} -> {}", old_max, new_max);
    emit!(MaxTicketsChanged { old_max, new_max });

    Ok(())
}
