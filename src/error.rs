use thiserror::Error;

/// every failure here is a broken contract between the
/// environment, the controllers and whoever drives them.
/// nothing is retried.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid action index {0} (expected 0 = HIT or 1 = STICK)")]
    InvalidAction(usize),

    #[error("no feature vector for dealer {dealer}, player {player}, action {action}")]
    FeatureNotFound {
        dealer: i32,
        player: i32,
        action: usize,
    },

    #[error("state (dealer {dealer}, player {player}) is outside the value table")]
    OutOfDomain { dealer: i32, player: i32 },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
