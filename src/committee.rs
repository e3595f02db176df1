use crate::*;
use colored::Colorize;
use std::fmt::Display;

/// Progress through one month of the committee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    BalancesReset,
    ContributionsCollected,
    DrawPending,
    WinnerPaid,
    Displayed,
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::BalancesReset => write!(f, "balances reset"),
            Self::ContributionsCollected => write!(f, "contributions collected"),
            Self::DrawPending => write!(f, "draw pending"),
            Self::WinnerPaid => write!(f, "winner paid"),
            Self::Displayed => write!(f, "displayed"),
        }
    }
}

/// Result of one lucky draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    /// Registry index of the winner.
    pub winner: usize,
    /// Whether the draw had to start a new cycle first.
    pub reset: bool,
    pub receipt: Receipt,
}

/// Monthly cycle controller.
///
/// Owns the registry and drives each month through
/// reset, contributions, draw and payout. Randomness comes from the
/// [`Picker`] and all interaction goes through the [`Console`].
pub struct Committee<P, C>
where
    P: Picker,
    C: Console,
{
    registry: Registry,
    picker: P,
    console: C,
    phase: Phase,
    payout: Rupees,
}

impl<P, C> Committee<P, C>
where
    P: Picker,
    C: Console,
{
    pub fn new(picker: P, console: C) -> Self {
        Self {
            registry: Registry::initialize(),
            picker,
            console,
            phase: Phase::Idle,
            payout: PAYOUT,
        }
    }
    pub fn with_payout(self, payout: Rupees) -> Self {
        Self { payout, ..self }
    }
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
    pub fn console(&self) -> &C {
        &self.console
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Runs the outer loop. Every month is offered, and the counter
    /// advances whether or not the draw is held.
    pub fn run(&mut self, months: Month) -> anyhow::Result<()> {
        log::info!("starting committee for {} months", months);
        for month in 1..=months {
            self.offer(month)?;
        }
        log::info!("committee finished");
        Ok(())
    }

    /// Asks whether to hold this month's draw and runs it if so.
    /// Returns whether the month was run.
    pub fn offer(&mut self, month: Month) -> anyhow::Result<bool> {
        let held = self
            .console
            .confirm("Do you want to conduct the lucky draw for this month? (y/n)")?;
        match held {
            true => self.run_month(month)?,
            false => {
                log::info!("month {} skipped", month);
                self.console.show("Skipping lucky draw for this month.");
            }
        }
        Ok(held)
    }

    pub fn run_month(&mut self, month: Month) -> anyhow::Result<()> {
        self.phase = Phase::Idle;
        self.banner(month);
        self.registry.reset_balances();
        self.advance(month, Phase::BalancesReset);
        self.display();

        self.console.show("\nAdding manual balances to members...");
        self.collect()?;
        self.advance(month, Phase::ContributionsCollected);
        self.display();

        self.console
            .show(&format!("\nConducting Lucky Draw for Month {}...", month));
        self.advance(month, Phase::DrawPending);
        self.conduct_draw()?;
        self.advance(month, Phase::WinnerPaid);
        self.display();
        self.advance(month, Phase::Displayed);
        Ok(())
    }

    /// Draws one eligible member, starting a new cycle first if everyone
    /// has already won, then pays the winner after zeroing all balances.
    pub fn conduct_draw(&mut self) -> anyhow::Result<Draw> {
        let mut reset = false;
        for _ in 0..DRAW_ATTEMPTS {
            let eligible = self.registry.eligible();
            if eligible.is_empty() {
                log::info!("every member has won, starting a new cycle");
                self.console
                    .show("All members have won once. Resetting winners list.");
                self.registry.reset_wins();
                reset = true;
                continue;
            }
            let winner = self
                .picker
                .pick(&eligible)
                .filter(|i| eligible.contains(i))
                .ok_or_else(|| anyhow::anyhow!("picker chose outside {:?}", eligible))?;
            return self.settle(winner, reset);
        }
        anyhow::bail!("no eligible members after {} attempts", DRAW_ATTEMPTS)
    }
}

impl<P, C> Committee<P, C>
where
    P: Picker,
    C: Console,
{
    fn settle(&mut self, winner: usize, reset: bool) -> anyhow::Result<Draw> {
        let member = self
            .registry
            .get_mut(winner)
            .ok_or_else(|| anyhow::anyhow!("winner {} out of bounds", winner))?;
        member.set_won(true);
        let name = member.name().to_string();
        log::info!("lucky draw winner: {}", name);
        self.console
            .show(&format!("Winner for this month: {}", name.bold()));
        let method = self
            .console
            .token("Enter Payment Method (JazzCash/EasyPaisa/Cash)")?;
        self.registry.reset_balances();
        let member = self
            .registry
            .get_mut(winner)
            .ok_or_else(|| anyhow::anyhow!("winner {} out of bounds", winner))?;
        let receipt = Payment::process(member, self.payout, &method);
        self.console.show(&receipt.to_string());
        Ok(Draw {
            winner,
            reset,
            receipt,
        })
    }

    fn collect(&mut self) -> anyhow::Result<()> {
        for member in self.registry.list_mut() {
            let prompt = format!("Enter balance to add for {}", member.name());
            let amount = self.console.amount(&prompt)?;
            log::debug!("{} contributes {} {}", member.name(), amount, CURRENCY);
            member.deposit(amount);
        }
        Ok(())
    }

    fn advance(&mut self, month: Month, phase: Phase) {
        log::debug!("month {}: {} -> {}", month, self.phase, phase);
        self.phase = phase;
    }

    fn banner(&mut self, month: Month) {
        let banner = format!("==================== Month {} ====================", month);
        self.console.show(&format!("\n{}", banner.bold()));
    }

    fn display(&mut self) {
        let table = format!("\n{}", self.registry);
        self.console.show(&table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Always picks the given registry indices, in order.
    fn rigged(picks: &[usize]) -> impl FnMut(&[usize]) -> Option<usize> {
        let mut picks = picks.iter().copied().collect::<VecDeque<_>>();
        move |_: &[usize]| picks.pop_front()
    }

    fn first(eligible: &[usize]) -> Option<usize> {
        eligible.first().copied()
    }

    fn balances<P: Picker, C: Console>(committee: &Committee<P, C>) -> Vec<Rupees> {
        committee
            .registry()
            .list()
            .iter()
            .map(Member::balance)
            .collect()
    }

    fn wins<P: Picker, C: Console>(committee: &Committee<P, C>) -> Vec<bool> {
        committee
            .registry()
            .list()
            .iter()
            .map(Member::has_won)
            .collect()
    }

    #[test]
    fn full_cycle_then_reset() {
        let script = Script::new(&["Cash"; 5]);
        let ref mut committee = Committee::new(rigged(&[0, 1, 2, 3, 2]), script);
        for i in 0..4 {
            let draw = committee.conduct_draw().expect("draw");
            assert!(draw.winner == i);
            assert!(!draw.reset);
            assert!(committee.registry().winners() == i + 1);
        }
        assert_eq!(wins(committee), vec![true; 4]);
        let draw = committee.conduct_draw().expect("draw");
        assert!(draw.reset);
        assert!(draw.winner == 2);
        assert_eq!(wins(committee), vec![false, false, true, false]);
        assert!(committee.console().transcript().contains("Resetting winners list"));
    }

    #[test]
    fn month_pays_sara() {
        let script = Script::new(&["100", "200", "300", "400", "JazzCash"]);
        let ref mut committee = Committee::new(rigged(&[2]), script);
        committee.run_month(1).expect("month");
        assert_eq!(balances(committee), vec![0, 0, PAYOUT, 0]);
        assert_eq!(wins(committee), vec![false, false, true, false]);
        assert!(committee.phase() == Phase::Displayed);
        let transcript = committee.console().transcript();
        assert!(transcript.contains("Month 1"));
        assert!(transcript.contains("400"));
        assert!(transcript.contains("Sara"));
        assert!(transcript.contains("using JazzCash"));
    }

    #[test]
    fn contributions_shown_before_draw() {
        let script = Script::new(&["100", "200", "300", "400", "Cash"]);
        let ref mut committee = Committee::new(first, script);
        committee.run_month(1).expect("month");
        let tables = committee
            .console()
            .shown
            .iter()
            .filter(|s| s.contains("Has Won"))
            .cloned()
            .collect::<Vec<_>>();
        assert!(tables.len() == 3);
        assert!(tables[1].contains("300"));
        assert!(!tables[2].contains("300"));
    }

    #[test]
    fn exactly_one_paid_each_month() {
        let answers = std::iter::repeat(["y", "10", "20", "30", "40", "EasyPaisa"])
            .take(6)
            .flatten()
            .collect::<Vec<_>>();
        let ref mut committee = Committee::new(Fair::seeded(11), Script::new(&answers));
        for month in 1..=6 {
            let before = committee.registry().winners();
            assert!(committee.offer(month).expect("month"));
            let paid = balances(committee);
            assert!(paid.iter().filter(|b| **b == PAYOUT).count() == 1);
            assert!(paid.iter().filter(|b| **b == 0).count() == 3);
            let after = committee.registry().winners();
            assert!(after == before + 1 || after == 1);
        }
        assert!(committee.console().exhausted());
    }

    #[test]
    fn skipped_month_changes_nothing() {
        let script = Script::new(&["100", "200", "300", "400", "Cash", "n"]);
        let ref mut committee = Committee::new(rigged(&[0]), script);
        committee.run_month(4).expect("month");
        let before = committee.registry().list().to_vec();
        assert!(!committee.offer(5).expect("offer"));
        assert_eq!(committee.registry().list(), before.as_slice());
        assert!(committee.console().transcript().ends_with("Skipping lucky draw for this month."));
    }

    #[test]
    fn loop_always_advances() {
        let answers = ["n"; MONTHS];
        let ref mut committee = Committee::new(first, Script::new(&answers));
        committee.run(MONTHS).expect("run");
        assert!(committee.console().prompts.len() == MONTHS);
        assert!(committee.console().exhausted());
        assert!(committee.registry().winners() == 0);
        assert!(committee.phase() == Phase::Idle);
    }

    #[test]
    fn piped_year_of_skips() {
        let input = "n\n".repeat(MONTHS);
        let stream = Stream::new(std::io::Cursor::new(input.into_bytes()), Vec::new());
        let ref mut committee = Committee::new(first, stream);
        committee.run(MONTHS).expect("run");
        let out = String::from_utf8_lossy(committee.console().output()).to_string();
        assert!(out.matches("Skipping lucky draw for this month.").count() == MONTHS);
    }

    #[test]
    fn piped_month_pays_sara() {
        let input = "y\n100\nabc\n200\n300\n400\nJazzCash\n";
        let stream = Stream::new(std::io::Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let ref mut committee = Committee::new(rigged(&[2]), stream);
        committee.run(1).expect("run");
        assert_eq!(balances(committee), vec![0, 0, PAYOUT, 0]);
        assert_eq!(wins(committee), vec![false, false, true, false]);
        let out = String::from_utf8_lossy(committee.console().output()).to_string();
        assert!(out.contains("Enter a whole number"));
        assert!(out.contains("using JazzCash"));
    }

    #[test]
    fn piped_input_ends_early() {
        let stream = Stream::new(std::io::Cursor::new(b"y\n100\n".to_vec()), Vec::new());
        let ref mut committee = Committee::new(first, stream);
        assert!(committee.run(MONTHS).is_err());
        assert!(committee.registry().winners() == 0);
    }

    #[test]
    fn garbage_amount_reprompts() {
        let script = Script::new(&["ten", "10", "20", "30", "40", "Cash"]);
        let ref mut committee = Committee::new(first, script);
        committee.run_month(1).expect("month");
        let asked = committee
            .console()
            .prompts
            .iter()
            .filter(|p| p.as_str() == "Enter balance to add for Ali")
            .count();
        assert!(asked == 2);
    }

    #[test]
    fn method_takes_first_word() {
        let script = Script::new(&["  ", "Easy Paisa"]);
        let ref mut committee = Committee::new(first, script);
        let draw = committee.conduct_draw().expect("draw");
        assert!(draw.receipt.method == "Easy");
    }

    #[test]
    fn rogue_picker_is_rejected() {
        let ref mut committee = Committee::new(rigged(&[1, 1]), Script::new(&["Cash"]));
        committee.conduct_draw().expect("draw");
        assert!(committee.conduct_draw().is_err());
        assert!(committee.registry().winners() == 1);
    }

    #[test]
    fn custom_payout() {
        let script = Script::new(&["Cash"]);
        let ref mut committee = Committee::new(first, script).with_payout(50_000);
        let draw = committee.conduct_draw().expect("draw");
        assert!(draw.receipt.amount == 50_000);
        assert_eq!(balances(committee), vec![50_000, 0, 0, 0]);
    }

    #[test]
    fn identity_survives_a_year() {
        let answers = std::iter::repeat(["y", "1", "2", "3", "4", "Cash"])
            .take(MONTHS)
            .flatten()
            .collect::<Vec<_>>();
        let ref mut committee = Committee::new(Fair::seeded(3), Script::new(&answers));
        committee.run(MONTHS).expect("run");
        let ids = committee
            .registry()
            .list()
            .iter()
            .map(|m| (m.id(), m.name().to_string()))
            .collect::<Vec<_>>();
        let roster = ROSTER
            .iter()
            .map(|(id, name)| (*id, name.to_string()))
            .collect::<Vec<_>>();
        assert_eq!(ids, roster);
        assert!(committee.console().transcript().matches("Resetting winners list").count() == 2);
    }
}
