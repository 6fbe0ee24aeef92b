use thiserror::Error;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// The classification engine itself never fails; these kinds cover the
/// ambient layers around it (document loading, configuration, I/O). Each kind
/// maps to a stable error code usable in tests and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    /// History bytes are not UTF-8 JSON, or the root is not an object
    InvalidHistory,
    /// A version entry could not be decoded into a player version
    InvalidVersion,
    /// A required document field (e.g. `versions`) is absent
    MissingField,
    /// A requested retained version index does not exist
    NotFound,

    // Configuration
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidHistory => "ERR_INVALID_HISTORY",
            ExErrorKind::InvalidVersion => "ERR_INVALID_VERSION",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and enough
/// context (operation, player, version index) to point at the bad input.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    index: Option<usize>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            index: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (player or version id)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add position context within the version list
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the version index context, if any
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(index) = self.index {
            write!(f, " (index: {})", index)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for the fallible edges of the crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    /// The history document is not valid JSON
    #[error("History document is not valid JSON: {message}")]
    InvalidJson { message: String },

    /// The history document root is not a JSON object
    #[error("History document root must be an object")]
    NotAnObject,

    /// A required top-level field is absent
    #[error("Required field `{field}` is absent")]
    MissingField { field: String },

    /// A version entry failed to decode
    #[error("Version {index} could not be decoded: {message}")]
    InvalidVersion { index: usize, message: String },

    /// A retained version index is out of range
    #[error("Version {index} not found (history has {len} retained versions)")]
    VersionNotFound { index: usize, len: usize },

    /// Classifier configuration could not be parsed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Serialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from RosterError to ExError
impl From<RosterError> for ExError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::InvalidJson { message } => ExError::new(ExErrorKind::InvalidHistory)
                .with_message(format!("History document is not valid JSON: {}", message)),

            RosterError::NotAnObject => ExError::new(ExErrorKind::InvalidHistory)
                .with_message("History document root must be an object"),

            RosterError::MissingField { field } => ExError::new(ExErrorKind::MissingField)
                .with_message(format!("Required field `{}` is absent", field)),

            RosterError::InvalidVersion { index, message } => {
                ExError::new(ExErrorKind::InvalidVersion)
                    .with_index(index)
                    .with_message(message)
            }

            RosterError::VersionNotFound { index, len } => ExError::new(ExErrorKind::NotFound)
                .with_index(index)
                .with_message(format!("History has {} retained versions", len)),

            RosterError::InvalidConfig { message } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }

            RosterError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to RosterError
impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::Serialization {
            message: err.to_string(),
        }
    }
}
