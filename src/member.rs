use crate::*;
use colored::Colorize;
use std::fmt::Display;

/// One participant of the committee.
///
/// Identity is fixed at construction. Balance and the won flag are the only
/// mutable state and only ever describe the current month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: MemberId,
    name: String,
    balance: Rupees,
    won: bool,
}

impl Member {
    pub fn new(id: MemberId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            balance: 0,
            won: false,
        }
    }
    pub fn id(&self) -> MemberId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn balance(&self) -> Rupees {
        self.balance
    }
    pub fn has_won(&self) -> bool {
        self.won
    }
    /// Overwrites the balance.
    pub fn set_balance(&mut self, amount: Rupees) {
        self.balance = amount;
    }
    /// Adds a manual contribution. Saturates at the integer bounds.
    pub fn deposit(&mut self, amount: Rupees) {
        self.balance = self.balance.saturating_add(amount);
    }
    pub fn set_won(&mut self, won: bool) {
        self.won = won;
    }
}

impl Display for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let won = match self.won {
            true => "Yes".green(),
            false => "No".normal(),
        };
        write!(
            f,
            "{:<6}{:<8}{:>10} {}  {}",
            self.id, self.name, self.balance, CURRENCY, won
        )
    }
}
