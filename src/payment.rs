use crate::*;
use colored::Colorize;
use std::fmt::Display;

/// Stateless payout helper.
pub struct Payment;

impl Payment {
    /// Pays `amount` to `member` over `method`. The balance is overwritten,
    /// not added to. Any method string is accepted.
    pub fn process(member: &mut Member, amount: Rupees, method: &str) -> Receipt {
        log::info!("paying {} {} to {} via {}", amount, CURRENCY, member.name(), method);
        member.set_balance(amount);
        Receipt {
            name: member.name().to_string(),
            method: method.to_string(),
            amount,
        }
    }
}

/// Confirmation of a completed transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub name: String,
    pub method: String,
    pub amount: Rupees,
}

impl Display for Receipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Processing {} payment for {} using {}. Transaction Successful!",
            format!("{} {}", self.amount, CURRENCY).green(),
            self.name,
            self.method
        )
    }
}
