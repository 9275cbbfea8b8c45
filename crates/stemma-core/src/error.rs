use crate::model::PersonId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("person {person_id} has no x entry in the person settings")]
    MissingPositionSpec { person_id: PersonId },

    #[error("person {person_id} has an invalid x entry {value:?} (expected a number, optionally prefixed with `+` or `-`)")]
    InvalidPositionSpec { person_id: PersonId, value: String },

    #[error("cyclic father-child ancestry: {cycle:?}")]
    CyclicAncestry { cycle: Vec<PersonId> },

    #[error("person {person_id}: cannot parse {field} {value:?} as a date")]
    UnparseableDate {
        person_id: PersonId,
        field: &'static str,
        value: String,
    },

    #[error("relation references unknown person {person_id}")]
    UnknownPerson { person_id: PersonId },

    #[error("person list is empty; nothing to chart")]
    EmptyChart,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
