use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::events::GameEnded;
use crate::payout::settle_draw;
use crate::state::Lottery;

/// Accounts required to draw the winner of a sold-out round.
#[derive(Accounts)]
pub struct EndGame<'info> {
    /// The lottery operator.
    pub operator: Signer<'info>,

    /// The main lottery state account.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// Receives the pot.
    /// CHECK: Compared against the drawn player inside the handler.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

/// Draws the winner, resets the round and pays out the whole pot.
///
/// `random_number` is taken as given; the operator is trusted to supply an
/// unbiased value.
pub fn process_end_game(ctx: Context<EndGame>, random_number: u64) -> Result<()> {
    let operator = ctx.accounts.operator.key();
    let lottery_info = ctx.accounts.lottery.to_account_info();
    let winner_info = ctx.accounts.winner.to_account_info();

    let draw = settle_draw(
        &mut ctx.accounts.lottery,
        &lottery_info,
        &winner_info,
        &operator,
        random_number,
        &Rent::get()?,
    )?;

    msg!("Random number: {}", random_number);
    msg!("Winner index: {}", draw.winner_index);
    msg!("Winner: {}", draw.winner);
    msg!("Prize: {}", draw.prize);

    emit!(GameEnded {
        winner: draw.winner,
        winner_index: draw.winner_index,
        random_number,
        prize: draw.prize,
    });

    Ok(())
}
