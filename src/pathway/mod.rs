//! The ten-step glycolysis pathway as immutable reaction descriptors.
//!
//! Steps are addressed by their 1-based pathway position. Everything here is
//! `'static` read-only data; the composers only ever borrow it.

mod steps;

use serde::Serialize;

pub use steps::STEPS;

/// Number of reactions in the pathway.
pub const STEP_COUNT: u32 = 10;

/// One reaction of the pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReactionStep {
    /// 1-based position in the pathway.
    pub id: u32,
    /// Short reaction name ("Glucose Phosphorylation").
    pub name: &'static str,
    /// Catalysing enzyme.
    pub enzyme: &'static str,
    /// Substrate label, fed to the molecule classifier.
    pub substrate: &'static str,
    /// Product label, fed to the molecule classifier.
    pub product: &'static str,
    /// Coenzyme summary, if the reaction has one.
    pub coenzymes: Option<&'static str>,
    /// Energy bookkeeping text, scanned for energy captions.
    pub energy_change: Option<&'static str>,
    /// What the reaction does.
    pub explanation: &'static str,
    /// Extra mechanistic detail.
    pub additional_details: &'static str,
    /// How the step is regulated.
    pub regulation: &'static str,
    /// Associated disorders or clinical uses.
    pub clinical_relevance: &'static str,
}

impl ReactionStep {
    /// Whether the step sits in the second half of the pathway, where the
    /// layout uses the wider substrate/product separation.
    #[must_use]
    pub fn is_later_step(&self) -> bool {
        self.id >= crate::layout::LATER_STEP_THRESHOLD
    }

    /// Id of the preceding step, `None` for the first.
    #[must_use]
    pub fn previous_id(&self) -> Option<u32> {
        (self.id > 1).then(|| self.id - 1)
    }

    /// Id of the following step, `None` for the last.
    #[must_use]
    pub fn next_id(&self) -> Option<u32> {
        (self.id < STEP_COUNT).then(|| self.id + 1)
    }
}

/// Look up a step by its 1-based id. Returns `None` outside `1..=10`.
#[must_use]
pub fn step(id: u32) -> Option<&'static ReactionStep> {
    let idx = usize::try_from(id.checked_sub(1)?).ok()?;
    STEPS.get(idx)
}

/// All steps in pathway order.
#[must_use]
pub fn steps() -> &'static [ReactionStep] {
    &STEPS
}

/// Net yield of one glucose passing through the whole pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetYield {
    /// ATP spent in the investment phase.
    pub atp_invested: u32,
    /// ATP generated in the payoff phase.
    pub atp_produced: u32,
    /// NADH generated.
    pub nadh_produced: u32,
    /// Pyruvate molecules leaving the pathway.
    pub pyruvate_produced: u32,
}

impl NetYield {
    /// Canonical stoichiometry: -2 ATP, +4 ATP, +2 NADH, 2 pyruvate.
    pub const GLYCOLYSIS: Self = Self {
        atp_invested: 2,
        atp_produced: 4,
        nadh_produced: 2,
        pyruvate_produced: 2,
    };

    /// Net ATP gained (produced minus invested).
    #[must_use]
    pub fn net_atp(&self) -> i64 {
        i64::from(self.atp_produced) - i64::from(self.atp_invested)
    }

    /// One-line summary used as the diagram's closing caption.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Net Result: {:+} ATP, +{} NADH, {} Pyruvate",
            self.net_atp(),
            self.nadh_produced,
            self.pyruvate_produced
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered_and_complete() {
        assert_eq!(steps().len(), STEP_COUNT as usize);
        for (i, s) in steps().iter().enumerate() {
            assert_eq!(s.id as usize, i + 1);
        }
    }

    #[test]
    fn lookup_bounds() {
        assert!(step(0).is_none());
        assert!(step(11).is_none());
        assert_eq!(step(1).map(|s| s.enzyme), Some("Hexokinase"));
        assert_eq!(step(10).map(|s| s.product), Some("Pyruvate"));
    }

    #[test]
    fn navigation_stops_at_the_ends() {
        let first = step(1).unwrap();
        let last = step(10).unwrap();
        assert_eq!(first.previous_id(), None);
        assert_eq!(first.next_id(), Some(2));
        assert_eq!(last.previous_id(), Some(9));
        assert_eq!(last.next_id(), None);
    }

    #[test]
    fn later_steps_start_at_five() {
        assert!(!step(4).unwrap().is_later_step());
        assert!(step(5).unwrap().is_later_step());
    }

    #[test]
    fn net_yield_summary() {
        assert_eq!(NetYield::GLYCOLYSIS.net_atp(), 2);
        assert_eq!(
            NetYield::GLYCOLYSIS.summary(),
            "Net Result: +2 ATP, +2 NADH, 2 Pyruvate"
        );
    }

    #[test]
    fn energy_fields_match_the_payoff_phase() {
        let atp_steps: Vec<u32> = steps()
            .iter()
            .filter(|s| {
                s.energy_change.is_some_and(|e| e.contains("ATP produced"))
            })
            .map(|s| s.id)
            .collect();
        assert_eq!(atp_steps, vec![7, 10]);
    }
}
