pub mod buy_ticket;
pub mod change_cost;
pub mod end_game;
pub mod initialize;
pub mod max_tickets;

pub use buy_ticket::*;
pub use change_cost::*;
pub use end_game::*;
pub use initialize::*;
pub use max_tickets::*;
