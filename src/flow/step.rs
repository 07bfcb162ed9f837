use std::fmt;
use std::str::FromStr;

/// One screen of the wizard. The enum is closed; a step value that arrives
/// from outside (e.g. the `--step` diagnostic flag) and matches no variant
/// is kept as raw text and rendered as the invalid-state screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Initial,
    Verify,
    Kind,
    Identifier,
    ConfirmUser,
    SelectCenter,
    SelectDate,
    SelectTime,
    Summary,
    Complete,
}

impl Step {
    pub const ALL: [Step; 10] = [
        Step::Initial,
        Step::Verify,
        Step::Kind,
        Step::Identifier,
        Step::ConfirmUser,
        Step::SelectCenter,
        Step::SelectDate,
        Step::SelectTime,
        Step::Summary,
        Step::Complete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Step::Initial => "initial",
            Step::Verify => "verify",
            Step::Kind => "type",
            Step::Identifier => "identifier",
            Step::ConfirmUser => "confirm-user",
            Step::SelectCenter => "select-center",
            Step::SelectDate => "select-date",
            Step::SelectTime => "select-time",
            Step::Summary => "summary",
            Step::Complete => "complete",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown wizard step `{0}`")]
pub struct UnknownStep(pub String);

impl FromStr for Step {
    type Err = UnknownStep;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Step::ALL
            .into_iter()
            .find(|step| step.as_str() == value)
            .ok_or_else(|| UnknownStep(value.to_string()))
    }
}
