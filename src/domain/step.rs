use std::fmt;

/// The six wizard pages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    GuardDetails,
    EnginesAndPumps,
    StorageAndLeaks,
    Power,
    Logistics,
    SecurityAndMisc,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::GuardDetails,
        Step::EnginesAndPumps,
        Step::StorageAndLeaks,
        Step::Power,
        Step::Logistics,
        Step::SecurityAndMisc,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn first() -> Step {
        Step::GuardDetails
    }

    /// 1-based position shown to the guard.
    pub fn number(self) -> usize {
        match self {
            Step::GuardDetails => 1,
            Step::EnginesAndPumps => 2,
            Step::StorageAndLeaks => 3,
            Step::Power => 4,
            Step::Logistics => 5,
            Step::SecurityAndMisc => 6,
        }
    }

    pub fn from_number(number: usize) -> Option<Step> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }

    pub fn next(self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Step> {
        Step::from_number(self.number() - 1)
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::GuardDetails => "Guard Details",
            Step::EnginesAndPumps => "Engines & Pumps",
            Step::StorageAndLeaks => "Storage & Leaks",
            Step::Power => "Power",
            Step::Logistics => "Logistics",
            Step::SecurityAndMisc => "Security & Misc",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_round_trips() {
        for step in Step::ALL {
            assert_eq!(Step::from_number(step.number()), Some(step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(7), None);
    }

    #[test]
    fn neighbours_follow_order() {
        assert_eq!(Step::GuardDetails.previous(), None);
        assert_eq!(Step::GuardDetails.next(), Some(Step::EnginesAndPumps));
        assert_eq!(Step::SecurityAndMisc.next(), None);
        assert!(Step::SecurityAndMisc.is_last());
    }

    #[test]
    fn display_includes_number_and_title() {
        assert_eq!(Step::StorageAndLeaks.to_string(), "Step 3: Storage & Leaks");
    }
}
