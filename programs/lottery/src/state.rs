use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_MAX_TICKETS, DEFAULT_TICKET_COST};
use crate::error::LotteryError;

#[account]
pub struct Lottery {
    /// The identity allowed to draw and to reconfigure the round.
    /// Set once at initialization and never written again.
    pub operator: Pubkey,

    /// Price (in lamports) of a single ticket.
    pub ticket_cost: u64,

    /// Tickets still on sale in the current round.
    pub tickets_available: u64,

    /// Ticket supply of a round.
    pub max_tickets: u64,

    /// Buyers by ticket index. Index `i` is the `i`-th purchase call of the
    /// round, one entry per call regardless of how many tickets it bought.
    /// The account grows by one key per purchase.
    pub players: Vec<Pubkey>,

    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,
}

/// Where the lottery is within a round. Derived from the counters, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Selling,
    SoldOut,
}

impl Lottery {
    pub const SIZE_WITHOUT_PLAYERS: usize =
        32 + // operator
            8  + // ticket_cost
            8  + // tickets_available
            8  + // max_tickets
            4  + // players length prefix
            1;   // bump

    /// Account space (discriminator included) for a lottery holding `players` entries.
    pub fn space_for(players: usize) -> usize {
        8 + Self::SIZE_WITHOUT_PLAYERS + players * 32
    }

    pub fn new(operator: Pubkey, bump: u8) -> Self {
        Self {
            operator,
            ticket_cost: DEFAULT_TICKET_COST,
            tickets_available: DEFAULT_MAX_TICKETS,
            max_tickets: DEFAULT_MAX_TICKETS,
            players: Vec::new(),
            bump,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.tickets_available == self.max_tickets {
            Phase::Idle
        } else if self.tickets_available == 0 {
            Phase::SoldOut
        } else {
            Phase::Selling
        }
    }

    pub fn is_idle(&self) -> bool {
        self.tickets_available == self.max_tickets
    }

    /// Records a purchase by `buyer` who deposited `amount` lamports and
    /// returns the refund owed to them.
    ///
    /// The deposit only has to cover one ticket, whatever `number_tickets` is,
    /// and a single player entry is appended per call.
    pub fn buy_ticket(
        &mut self,
        buyer: Pubkey,
        amount: u64,
        number_tickets: u64,
    ) -> core::result::Result<u64, LotteryError> {
        if self.tickets_available == 0 {
            return Err(LotteryError::NoTicketsAvailable);
        }
        if amount < self.ticket_cost {
            return Err(LotteryError::InvalidAmount);
        }
        let remaining = self
            .tickets_available
            .checked_sub(number_tickets)
            .ok_or(LotteryError::InvalidTicketCount)?;

        self.players.push(buyer);
        self.tickets_available = remaining;

        Ok(amount - self.ticket_cost)
    }

    /// Runs every draw guard and resolves the winning identity without
    /// touching state.
    pub fn resolve_winner(
        &self,
        caller: &Pubkey,
        random_number: u64,
    ) -> core::result::Result<(u64, Pubkey), LotteryError> {
        if self.tickets_available != 0 {
            return Err(LotteryError::GameStillOngoing);
        }
        if *caller != self.operator {
            return Err(LotteryError::NotAuthorized);
        }
        let winner_index = random_number
            .checked_rem(self.max_tickets)
            .ok_or(LotteryError::WinnerNotFound)?;
        let winner = usize::try_from(winner_index)
            .ok()
            .and_then(|i| self.players.get(i))
            .ok_or(LotteryError::WinnerNotFound)?;

        Ok((winner_index, *winner))
    }

    /// Draws the winner and starts a new round. The caller pays out only after
    /// this returns, so the reset is in place before any lamports move.
    pub fn end_game(
        &mut self,
        caller: &Pubkey,
        random_number: u64,
    ) -> core::result::Result<(u64, Pubkey), LotteryError> {
        let drawn = self.resolve_winner(caller, random_number)?;

        self.players.clear();
        self.tickets_available = self.max_tickets;

        Ok(drawn)
    }

    pub fn change_cost(
        &mut self,
        caller: &Pubkey,
        new_cost: u64,
    ) -> core::result::Result<(), LotteryError> {
        if !self.is_idle() {
            return Err(LotteryError::GameStillOngoing);
        }
        if *caller != self.operator {
            return Err(LotteryError::NotAuthorized);
        }

        self.ticket_cost = new_cost;
        Ok(())
    }

    /// Changes the ticket supply between rounds. Availability follows the new
    /// maximum so the lottery stays idle.
    pub fn set_max_tickets(
        &mut self,
        caller: &Pubkey,
        new_max: u64,
    ) -> core::result::Result<(), LotteryError> {
        if !self.is_idle() {
            return Err(LotteryError::GameStillOngoing);
        }
        if new_max < self.tickets_available {
            return Err(LotteryError::InvalidValue);
        }
        if *caller != self.operator {
            return Err(LotteryError::NotAuthorized);
        }

        self.max_tickets = new_max;
        self.tickets_available = new_max;
        Ok(())
    }
}
