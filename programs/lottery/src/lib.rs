use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod payout;
pub mod state;

pub use instructions::*;

declare_id!("mPdfwKNzmiHeX7NShGQjQhJWDVBxcEa7WRbuAs11e27");

#[program]
pub mod ticket_lottery {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, operator: Pubkey) -> Result<()> {
        process_initialize(ctx, operator)
    }

    pub fn buy_ticket(ctx: Context<BuyTicket>, number_tickets: u64, amount: u64) -> Result<()> {
        process_buy_ticket(ctx, number_tickets, amount)
    }

    pub fn end_game(ctx: Context<EndGame>, random_number: u64) -> Result<()> {
        process_end_game(ctx, random_number)
    }

    pub fn change_cost(ctx: Context<ChangeCost>, new_cost: u64) -> Result<()> {
        process_change_cost(ctx, new_cost)
    }

    pub fn max_tickets(ctx: Context<SetMaxTickets>, new_max: u64) -> Result<()> {
        process_max_tickets(ctx, new_max)
    }
}
