use crate::cards::Rank;

/// Failures of positional access and the algorithms derived from it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SequenceError {
    #[error("position {position} outside [-{size}, {size})")]
    IndexOutOfRange { position: isize, size: usize },
    #[error("cannot choose from an empty sequence")]
    Empty,
    #[error("slice step cannot be zero")]
    ZeroStep,
}

/// Invalid ranking configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankingError {
    #[error("rank {0} is not in the rank order")]
    UnknownRank(Rank),
    #[error("rank {0} appears more than once in the rank order")]
    DuplicateRank(Rank),
    #[error("rank {0} is missing from the rank order")]
    MissingRank(Rank),
    #[error("suit value {0} is assigned to more than one suit")]
    DuplicateSuitValue(u8),
    #[error("suit value {value} out of range, must be below {limit}")]
    SuitValueOutOfRange { value: u8, limit: usize },
}
