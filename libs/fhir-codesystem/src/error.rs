use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown code '{code}' for code system {system}")]
    UnknownCode { system: String, code: String },

    #[error("code system '{0}' is not registered")]
    UnknownSystem(String),

    #[error("code system '{0}' is already registered")]
    DuplicateRegistration(String),

    #[error("an enumeration named '{0}' is already registered")]
    DuplicateName(String),

    #[error("duplicate wire value '{code}' in enumeration {enumeration}")]
    DuplicateWireValue { enumeration: String, code: String },

    #[error(
        "codes '{first}' and '{second}' in enumeration {enumeration} both map to symbolic name {symbol}"
    )]
    SymbolicNameCollision {
        enumeration: String,
        symbol: String,
        first: String,
        second: String,
    },

    #[error("typed enum {enumeration} names code '{code}' {typed} but the catalog table uses {table}")]
    SymbolMismatch {
        enumeration: String,
        code: String,
        typed: String,
        table: String,
    },

    #[error("enumeration {0} has no members")]
    EmptyEnumeration(String),

    #[error("code '{0}' does not yield a usable symbolic name")]
    InvalidCode(String),

    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Defects in the catalog data or the generator, as opposed to lookup
    /// failures on data received at run time.
    pub fn is_build_time(&self) -> bool {
        !matches!(self, Error::UnknownCode { .. } | Error::UnknownSystem(_))
    }

    pub(crate) fn unknown_code(system: &str, code: &str) -> Self {
        Error::UnknownCode {
            system: system.to_string(),
            code: code.to_string(),
        }
    }
}
