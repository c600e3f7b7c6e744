//! Policy toggles offered in the scenario and the choice they add up to.

use serde::{Deserialize, Serialize};

/// One user-togglable policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionFlag {
    HaltFinancialActivity,
    HaltCrossBorderTrade,
    MobilizeTroops,
    GrowPotatoes,
}

impl DecisionFlag {
    pub const ALL: [DecisionFlag; 4] = [
        DecisionFlag::HaltFinancialActivity,
        DecisionFlag::HaltCrossBorderTrade,
        DecisionFlag::MobilizeTroops,
        DecisionFlag::GrowPotatoes,
    ];

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            DecisionFlag::HaltFinancialActivity => "Stop banking and financial transactions",
            DecisionFlag::HaltCrossBorderTrade => "Stop cross-border trade",
            DecisionFlag::MobilizeTroops => "Mobilize troops",
            DecisionFlag::GrowPotatoes => "Start growing potatoes",
        }
    }
}

/// Independent booleans; every combination is legal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecisionFlags {
    pub halt_financial_activity: bool,
    pub halt_cross_border_trade: bool,
    pub mobilize_troops: bool,
    pub grow_potatoes: bool,
}

impl DecisionFlags {
    pub fn get(&self, flag: DecisionFlag) -> bool {
        match flag {
            DecisionFlag::HaltFinancialActivity => self.halt_financial_activity,
            DecisionFlag::HaltCrossBorderTrade => self.halt_cross_border_trade,
            DecisionFlag::MobilizeTroops => self.mobilize_troops,
            DecisionFlag::GrowPotatoes => self.grow_potatoes,
        }
    }

    pub fn set(&mut self, flag: DecisionFlag, value: bool) {
        let slot = match flag {
            DecisionFlag::HaltFinancialActivity => &mut self.halt_financial_activity,
            DecisionFlag::HaltCrossBorderTrade => &mut self.halt_cross_border_trade,
            DecisionFlag::MobilizeTroops => &mut self.mobilize_troops,
            DecisionFlag::GrowPotatoes => &mut self.grow_potatoes,
        };
        *slot = value;
    }

    /// Whether any economic tie to Germany is being cut.
    pub fn halts_economy(&self) -> bool {
        self.halt_financial_activity || self.halt_cross_border_trade
    }

    /// Classify the toggles. Growing potatoes never changes the outcome.
    pub fn classify(&self) -> Choice {
        match (self.mobilize_troops, self.halts_economy()) {
            (true, true) => Choice::MobilizeAndStopTrade,
            (false, true) => Choice::StopTradeOnly,
            (true, false) => Choice::MobilizeAndContinueTrade,
            (false, false) => Choice::ContinueTradeOnly,
        }
    }
}

/// The four-way classification of the player's stance, numbered 1 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    MobilizeAndStopTrade,
    StopTradeOnly,
    MobilizeAndContinueTrade,
    ContinueTradeOnly,
}

impl Choice {
    pub const ALL: [Choice; 4] = [
        Choice::MobilizeAndStopTrade,
        Choice::StopTradeOnly,
        Choice::MobilizeAndContinueTrade,
        Choice::ContinueTradeOnly,
    ];

    pub fn number(&self) -> u8 {
        match self {
            Choice::MobilizeAndStopTrade => 1,
            Choice::StopTradeOnly => 2,
            Choice::MobilizeAndContinueTrade => 3,
            Choice::ContinueTradeOnly => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.number() == n)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Choice::MobilizeAndStopTrade => "Mobilize troops and stop trade",
            Choice::StopTradeOnly => "Not mobilize troops and stop trade",
            Choice::MobilizeAndContinueTrade => "Mobilize troops and continue trade",
            Choice::ContinueTradeOnly => "Not mobilize troops and continue trade",
        }
    }
}
