use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    // Purchase errors
    #[msg("NO TICKETS AVAILABLE")]
    NoTicketsAvailable,
    #[msg("INVALID AMOUNT")]
    InvalidAmount,
    #[msg("INVALID TICKET COUNT")]
    InvalidTicketCount,

    // Round / authority errors
    #[msg("GAME IS STILL ON")]
    GameStillOngoing,
    #[msg("NOT AUTHORIZED")]
    NotAuthorized,
    #[msg("INVALID VALUE")]
    InvalidValue,

    // Draw errors
    #[msg("WINNER NOT FOUND")]
    WinnerNotFound,
    #[msg("WINNER ACCOUNT MISMATCH")]
    WinnerAccountMismatch,
    #[msg("LAMPORT OVERFLOW")]
    LamportOverflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_strings_are_stable() {
        assert_eq!(LotteryError::NoTicketsAvailable.to_string(), "NO TICKETS AVAILABLE");
        assert_eq!(LotteryError::InvalidAmount.to_string(), "INVALID AMOUNT");
        assert_eq!(LotteryError::GameStillOngoing.to_string(), "GAME IS STILL ON");
        assert_eq!(LotteryError::NotAuthorized.to_string(), "NOT AUTHORIZED");
        assert_eq!(LotteryError::InvalidValue.to_string(), "INVALID VALUE");
        assert_eq!(LotteryError::WinnerNotFound.to_string(), "WINNER NOT FOUND");
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let codes: Vec<u32> = [
            LotteryError::NoTicketsAvailable,
            LotteryError::InvalidAmount,
            LotteryError::InvalidTicketCount,
            LotteryError::GameStillOngoing,
            LotteryError::NotAuthorized,
            LotteryError::InvalidValue,
            LotteryError::WinnerNotFound,
            LotteryError::WinnerAccountMismatch,
            LotteryError::LamportOverflow,
        ]
        .into_iter()
        .map(u32::from)
        .collect();

        for (i, code) in codes.iter().enumerate() {
            assert!(*code >= anchor_lang::error::ERROR_CODE_OFFSET);
            assert!(!codes[i + 1..].contains(code));
        }
    }
}
