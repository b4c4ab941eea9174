use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::LOTTERY_SEED;
use crate::events::TicketPurchased;
use crate::payout::move_lamports;
use crate::state::Lottery;

/// Accounts required to buy lottery tickets.
#[derive(Accounts)]
pub struct BuyTicket<'info> {
    /// The account paying for the tickets.
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// Lottery state account tracking the current round. Grows by one player
    /// key when the account has no room left from earlier rounds.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
        realloc = Lottery::space_for(lottery.players.len() + 1)
            .max(lottery.to_account_info().data_len()),
        realloc::payer = buyer,
        realloc::zero = false,
    )]
    pub lottery: Account<'info, Lottery>,

    /// System program for the deposit transfer.
    pub system_program: Program<'info, System>,
}

/// Buys `number_tickets` tickets for the caller.
///
/// Steps performed:
/// 1. Check availability, deposit and ticket count, then record the buyer.
/// 2. Transfer the deposit from the buyer to the lottery.
/// 3. Return whatever the deposit paid above the ticket cost.
///
/// # Arguments
/// * `ctx` - Context containing BuyTicket accounts
/// * `number_tickets` - Tickets taken off the round's supply
/// * `amount` - Lamports deposited with the purchase
pub fn process_buy_ticket(ctx: Context<BuyTicket>, number_tickets: u64, amount: u64) -> Result<()> {
    let buyer = ctx.accounts.buyer.key();
    let refund = ctx.accounts.lottery.buy_ticket(buyer, amount, number_tickets)?;
    let ticket_index = ctx.accounts.lottery.players.len() as u64 - 1;

    msg!("Ticket index: {}", ticket_index);
    msg!(
        "Tickets bought: {}, tickets left: {}",
        number_tickets,
        ctx.accounts.lottery.tickets_available
    );

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.lottery.to_account_info(),
            },
        ),
        amount,
    )?;

    if refund > 0 {
        msg!("Refunding: {}", refund);
        move_lamports(
            &ctx.accounts.lottery.to_account_info(),
            &ctx.accounts.buyer.to_account_info(),
            refund,
        )?;
    }

    emit!(TicketPurchased {
        buyer,
        ticket_index,
        number_tickets,
        refund,
        tickets_available: ctx.accounts.lottery.tickets_available,
    });

    Ok(())
}
