use anchor_lang::prelude::*;

#[event]
pub struct LotteryInitialized {
    pub operator: Pubkey,
    pub ticket_cost: u64,
    pub max_tickets: u64,
}

#[event]
pub struct TicketPurchased {
    pub buyer: Pubkey,
    pub ticket_index: u64,
    pub number_tickets: u64,
    pub refund: u64,
    pub tickets_available: u64,
}

#[event]
pub struct GameEnded {
    pub winner: Pubkey,
    pub winner_index: u64,
    pub random_number: u64,
    pub prize: u64,
}

#[event]
pub struct TicketCostChanged {
    pub old_cost: u64,
    pub new_cost: u64,
}

#[event]
pub struct MaxTicketsChanged {
    pub old_max: u64,
    pub new_max: u64,
}
