use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::state::Lottery;

/// Outcome of a settled draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Draw {
    pub winner_index: u64,
    pub winner: Pubkey,
    pub prize: u64,
}

/// Lamports held by the lottery account above its rent-exempt floor.
pub fn pot(lottery: &AccountInfo, rent: &Rent) -> u64 {
    lottery
        .lamports()
        .saturating_sub(rent.minimum_balance(lottery.data_len()))
}

/// Moves `amount` lamports out of a program-owned account.
pub fn move_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let from_balance = from
        .lamports()
        .checked_sub(amount)
        .ok_or(LotteryError::LamportOverflow)?;
    let to_balance = to
        .lamports()
        .checked_add(amount)
        .ok_or(LotteryError::LamportOverflow)?;

    **from.try_borrow_mut_lamports()? = from_balance;
    **to.try_borrow_mut_lamports()? = to_balance;

    Ok(())
}

/// Draws the winner, resets the round and pays the whole pot to `winner_info`,
/// which must be the drawn player.
pub fn settle_draw(
    lottery: &mut Lottery,
    lottery_info: &AccountInfo,
    winner_info: &AccountInfo,
    operator: &Pubkey,
    random_number: u64,
    rent: &Rent,
) -> Result<Draw> {
    let (_, expected) = lottery.resolve_winner(operator, random_number)?;
    require_keys_eq!(
        *winner_info.key,
        expected,
        LotteryError::WinnerAccountMismatch
    );

    // reset before the payout
    let (winner_index, winner) = lottery.end_game(operator, random_number)?;

    let prize = pot(lottery_info, rent);
    move_lamports(lottery_info, winner_info, prize)?;

    Ok(Draw {
        winner_index,
        winner,
        prize,
    })
}
