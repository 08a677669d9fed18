use thiserror::Error;

/// Result alias used throughout the query client.
pub type Result<T> = std::result::Result<T, ValidatorClientError>;

/// Every failure the query client can surface to its caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidatorClientError {
    /// The RPC session could not be established. The client instance is unusable.
    #[error("failed to connect to {endpoint}: {reason}")]
    Connection { endpoint: String, reason: String },

    /// A single request failed in flight (connect, timeout, DNS, body read).
    #[error("transport failure during `{operation}`: {reason}")]
    Transport { operation: String, reason: String },

    /// The node answered but refused to execute the query.
    #[error("`{operation}` was rejected by the node: {message}")]
    ContractQuery { operation: String, message: String },

    /// The response does not have the shape of the expected DTO.
    #[error("`{query}` response does not match the expected schema at `{field}`: {reason}")]
    SchemaMismatch {
        query: String,
        field: String,
        reason: String,
    },

    /// The query was valid but the entity it targets does not exist.
    #[error("{entity} not found")]
    NotFound { entity: String },

    #[error("invalid address `{address}`: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("{contract} contract address is missing or malformed: {reason}")]
    MissingContractAddress {
        contract: &'static str,
        reason: String,
    },

    #[error("invalid amount `{amount}`: {reason}")]
    InvalidAmount { amount: String, reason: String },

    #[error("amount `{amount}` has more than {max_decimals} fractional digits")]
    Precision { amount: String, max_decimals: u32 },

    #[error("amount `{amount}` exceeds the maximum supply of {max} base units")]
    OutOfRange { amount: String, max: u128 },
}

impl ValidatorClientError {
    /// Whether repeating the same call could succeed without changing anything on the caller side.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ValidatorClientError::Transport { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ValidatorClientError::NotFound { .. })
    }

    pub(crate) fn not_found(entity: impl Into<String>) -> Self {
        ValidatorClientError::NotFound {
            entity: entity.into(),
        }
    }

    pub(crate) fn invalid_amount(amount: &str, reason: impl Into<String>) -> Self {
        ValidatorClientError::InvalidAmount {
            amount: amount.to_string(),
            reason: reason.into(),
        }
    }
}
