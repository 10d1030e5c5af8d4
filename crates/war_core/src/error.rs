use thiserror::Error;

/// Rejected attack. Nothing has been rolled or mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombatError {
    #[error("territory {index} does not exist (map has {len})")]
    InvalidIndex { index: usize, len: usize },
    #[error("territory {0} cannot attack itself")]
    SelfAttack(usize),
    #[error("cannot attack a territory of the same faction ({faction})")]
    SameFactionAttack { faction: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectiveError {
    #[error("unknown objective rule `{0}`")]
    UnknownObjective(String),
    #[error("objective rule `{rule}` is missing `{parameter}`")]
    MissingParameter {
        rule: String,
        parameter: &'static str,
    },
}
