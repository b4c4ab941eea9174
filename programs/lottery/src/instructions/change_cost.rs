use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::events::TicketCostChanged;
use crate::state::Lottery;

/// Accounts required to change the ticket price between rounds.
#[derive(Accounts)]
pub struct ChangeCost<'info> {
    /// The lottery operator.
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}

pub fn process_change_cost(ctx: Context<ChangeCost>, new_cost: u64) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    let old_cost = lottery.ticket_cost;

    lottery.change_cost(&ctx.accounts.operator.key(), new_cost)?;

    msg!("Ticket cost: {} -> {}", old_cost, new_cost);
    emit!(TicketCostChanged { old_cost, new_cost });

    Ok(())
}
