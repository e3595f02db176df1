use crate::*;
use std::fmt::Display;

const RULE: &str = "----------------------------------------";

/// Fixed, ordered roster of committee members.
///
/// Insertion order is display order. Members are never added or removed
/// after [`Registry::initialize`].
#[derive(Debug, Clone)]
pub struct Registry {
    members: Vec<Member>,
}

impl Registry {
    /// Populates the four founding members with zero balance, unwon.
    pub fn initialize() -> Self {
        Self {
            members: ROSTER
                .iter()
                .map(|(id, name)| Member::new(*id, name))
                .collect(),
        }
    }
    pub fn list(&self) -> &[Member] {
        &self.members
    }
    /// Mutable view. The slice length is fixed, so callers cannot resize.
    pub fn list_mut(&mut self) -> &mut [Member] {
        &mut self.members
    }
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Member> {
        self.members.get_mut(index)
    }
    /// Registry indices of members still eligible in this cycle.
    pub fn eligible(&self) -> Vec<usize> {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.has_won())
            .map(|(i, _)| i)
            .collect()
    }
    pub fn winners(&self) -> usize {
        self.members.iter().filter(|m| m.has_won()).count()
    }
    pub fn reset_balances(&mut self) {
        self.members.iter_mut().for_each(|m| m.set_balance(0));
    }
    /// Starts a new cycle.
    pub fn reset_wins(&mut self) {
        self.members.iter_mut().for_each(|m| m.set_won(false));
    }
}

impl Display for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Committee Members List:")?;
        writeln!(f, "{}", RULE)?;
        writeln!(
            f,
            "{:<6}{:<8}{:>14}  {}",
            "ID", "Name", "Balance", "Has Won"
        )?;
        writeln!(f, "{}", RULE)?;
        for member in self.members.iter() {
            writeln!(f, "{}", member)?;
        }
        write!(f, "{}", RULE)
    }
}
