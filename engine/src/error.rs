//! Errors of the flight network queries.

/// The only thing that can go wrong in a query: referencing an airport that was never added.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown airport code {0:?}")]
    UnknownAirport(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_airport_message_names_the_code() {
        let err = Error::UnknownAirport("XYZ".to_string());
        assert_eq!(err.to_string(), "unknown airport code \"XYZ\"");
    }
}
