use std::fmt;

/// Which index a failed lookup went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Seller,
    Product,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seller => write!(f, "seller"),
            Self::Product => write!(f, "product"),
        }
    }
}

#[derive(Debug)]
pub enum StatsError {
    /// Dataset absent, `sellers` not a list, or `sellers` empty.
    InvalidInput(String),
    /// A purchase record or line item points at an id/SKU that is not indexed.
    MissingReference { kind: ReferenceKind, key: String },
    /// A required strategy (`calculate_revenue` / `calculate_bonus`) was not supplied.
    MissingConfiguration(&'static str),
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty name, empty dataset path).
    ConfigValidation(String),
    /// Dataset JSON that is well-shaped at the top level but has bad fields.
    DatasetParse(String),
}

impl StatsError {
    pub fn unknown_seller(id: impl Into<String>) -> Self {
        Self::MissingReference { kind: ReferenceKind::Seller, key: id.into() }
    }

    pub fn unknown_product(sku: impl Into<String>) -> Self {
        Self::MissingReference { kind: ReferenceKind::Product, key: sku.into() }
    }
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::MissingReference { kind, key } => {
                write!(f, "unknown {kind} reference '{key}'")
            }
            Self::MissingConfiguration(option) => {
                write!(f, "missing configuration: '{option}' is required")
            }
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::DatasetParse(msg) => write!(f, "dataset parse error: {msg}"),
        }
    }
}

impl std::error::Error for StatsError {}
