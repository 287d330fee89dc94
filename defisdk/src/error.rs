use thiserror::Error;

// Higher level error: DeFiSdkError
#[derive(Debug, Error)]
pub enum DeFiSdkError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Decode(#[from] DecodeError),
    #[error("error during RPC call: {0}")]
    Rpc(#[from] RpcError),
}

// Lower level errors; should be used by higher level errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed hex payload: {0}")]
    MalformedPayload(String),
    #[error("empty payload where {0} was expected")]
    EmptyPayload(&'static str),
    #[error("offset out of range decoding {context}: word {offset} of {len}")]
    OffsetOutOfRange {
        context: &'static str,
        offset: usize,
        len: usize,
    },
    #[error("invalid text decoding {0}: {1}")]
    InvalidText(&'static str, String),
    #[error("arithmetic overflow decoding {0}")]
    ArithmeticOverflow(&'static str),
}

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("invalid node endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("node returned no result for {0}")]
    NoResult(String),
    #[error("node returned an empty result")]
    EmptyResult,
    #[error("node error {code}: {message}")]
    Node { code: i64, message: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error reading config file: {0}")]
    FileIO(#[from] std::io::Error),
    #[error("error parsing config: {0}")]
    Parse(#[from] toml::de::Error),
}
