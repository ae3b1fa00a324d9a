use serde::{Deserialize, Serialize};

/// The four yes/no answers collected from a loan applicant.
///
/// Fields are listed in truth-table order: P, Q, R, S.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicantProfile {
    /// P: credit score above 700.
    #[serde(default)]
    pub good_credit: bool,
    /// Q: a stable source of income.
    #[serde(default)]
    pub stable_income: bool,
    /// R: any criminal record on file.
    #[serde(default)]
    pub criminal_record: bool,
    /// S: requested amount above $50k.
    #[serde(default)]
    pub high_loan_amount: bool,
}

impl ApplicantProfile {
    /// Number of distinct profiles (2^4).
    pub const COMBINATIONS: u8 = 16;

    pub fn new(
        good_credit: bool,
        stable_income: bool,
        criminal_record: bool,
        high_loan_amount: bool,
    ) -> Self {
        Self {
            good_credit,
            stable_income,
            criminal_record,
            high_loan_amount,
        }
    }

    /// Build the profile whose bits, read as `PQRS` with P most significant, equal `index`.
    ///
    /// Only the low four bits are considered.
    pub fn from_index(index: u8) -> Self {
        Self {
            good_credit: index & 0b1000 != 0,
            stable_income: index & 0b0100 != 0,
            criminal_record: index & 0b0010 != 0,
            high_loan_amount: index & 0b0001 != 0,
        }
    }

    /// Position of this profile in the truth table.
    pub fn index(&self) -> u8 {
        (self.good_credit as u8) << 3
            | (self.stable_income as u8) << 2
            | (self.criminal_record as u8) << 1
            | self.high_loan_amount as u8
    }

    pub fn value(&self, attribute: ApplicantAttribute) -> bool {
        match attribute {
            ApplicantAttribute::GoodCredit => self.good_credit,
            ApplicantAttribute::StableIncome => self.stable_income,
            ApplicantAttribute::CriminalRecord => self.criminal_record,
            ApplicantAttribute::HighLoanAmount => self.high_loan_amount,
        }
    }

    /// Inputs in P, Q, R, S order.
    pub fn values(&self) -> [bool; 4] {
        ApplicantAttribute::ALL.map(|attribute| self.value(attribute))
    }
}

/// Labels for each applicant attribute, in truth-table column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicantAttribute {
    GoodCredit,
    StableIncome,
    CriminalRecord,
    HighLoanAmount,
}

impl ApplicantAttribute {
    pub const ALL: [ApplicantAttribute; 4] = [
        ApplicantAttribute::GoodCredit,
        ApplicantAttribute::StableIncome,
        ApplicantAttribute::CriminalRecord,
        ApplicantAttribute::HighLoanAmount,
    ];

    pub fn mnemonic(self) -> char {
        match self {
            ApplicantAttribute::GoodCredit => 'P',
            ApplicantAttribute::StableIncome => 'Q',
            ApplicantAttribute::CriminalRecord => 'R',
            ApplicantAttribute::HighLoanAmount => 'S',
        }
    }

    pub fn column_header(self) -> &'static str {
        match self {
            ApplicantAttribute::GoodCredit => "Credit(P)",
            ApplicantAttribute::StableIncome => "Income(Q)",
            ApplicantAttribute::CriminalRecord => "Crim(R)",
            ApplicantAttribute::HighLoanAmount => "High(S)",
        }
    }

    /// Question shown to the operator when collecting the attribute.
    pub fn prompt(self) -> &'static str {
        match self {
            ApplicantAttribute::GoodCredit => "Good Credit Score (>700)?",
            ApplicantAttribute::StableIncome => "Stable Income Source?",
            ApplicantAttribute::CriminalRecord => "Criminal Record?",
            ApplicantAttribute::HighLoanAmount => "High Loan Amount (>$50k)?",
        }
    }
}

/// Three-way outcome of the loan rules. Exactly one applies to every profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Approved,
    Review,
    Rejected,
}

impl Decision {
    pub const ALL: [Decision; 3] = [Decision::Approved, Decision::Review, Decision::Rejected];

    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Approved => "approved",
            Decision::Review => "review",
            Decision::Rejected => "rejected",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Decision::Approved => "LOAN APPROVED",
            Decision::Review => "SENT FOR MANAGER REVIEW",
            Decision::Rejected => "LOAN REJECTED",
        }
    }

    /// Column header used when the table is flattened to one column per outcome.
    pub fn column_header(self) -> &'static str {
        match self {
            Decision::Approved => "Approve",
            Decision::Review => "Review",
            Decision::Rejected => "Reject",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_for_every_profile() {
        for index in 0..ApplicantProfile::COMBINATIONS {
            assert_eq!(ApplicantProfile::from_index(index).index(), index);
        }
    }

    #[test]
    fn good_credit_is_the_most_significant_bit() {
        let profile = ApplicantProfile::from_index(0b1000);
        assert_eq!(profile, ApplicantProfile::new(true, false, false, false));
        let profile = ApplicantProfile::from_index(0b0001);
        assert_eq!(profile, ApplicantProfile::new(false, false, false, true));
    }

    #[test]
    fn missing_fields_deserialize_as_false() {
        let profile: ApplicantProfile =
            serde_json::from_str(r#"{ "good_credit": true }"#).expect("profile parses");
        assert_eq!(profile, ApplicantProfile::new(true, false, false, false));
    }

    #[test]
    fn decision_serializes_as_snake_case() {
        let value = serde_json::to_value(Decision::Review).expect("serializes");
        assert_eq!(value, serde_json::json!("review"));
    }
}
