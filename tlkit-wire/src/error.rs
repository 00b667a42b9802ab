//! Decode errors and the strict/lenient [`Mode`].

use std::fmt;

// ─── Error ───────────────────────────────────────────────────────────────────

/// Errors that can occur during deserialization.
///
/// `offset` is always the byte position in the input where the offending
/// value started, so a caller can point at the exact spot in a hex dump.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Ran out of bytes before the value was fully read.
    UnexpectedEof {
        /// Position of the read that could not be satisfied.
        offset: usize,
    },
    /// A boxed vector did not start with `vector#1cb5c415`.
    BadVectorMagic {
        /// The 32-bit word found where the sentinel was expected.
        found: u32,
        /// Position of that word.
        offset: usize,
    },
    /// A constructor id that the family's registry does not know.
    UnknownConstructor {
        /// Family whose registry was consulted.
        family: &'static str,
        /// The unrecognised tag.
        id: u32,
        /// Position of the tag.
        offset: usize,
        /// Nesting depth at which the tag appeared (1 = top-level object).
        depth: usize,
    },
    /// A value that was read completely but violates an invariant of its field.
    MalformedField {
        /// Family being decoded when the value was read (empty at top level).
        family: &'static str,
        /// What was wrong.
        reason: &'static str,
        /// Position of the value.
        offset: usize,
        /// Nesting depth of the enclosing object.
        depth: usize,
    },
}

impl Error {
    /// Whether lenient mode may turn this error into "no value".
    ///
    /// End-of-input and a broken vector sentinel mean the byte stream itself
    /// can't be trusted any more, so they are never recoverable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnknownConstructor { .. } | Self::MalformedField { .. })
    }

    /// Byte offset the error refers to.
    pub fn offset(&self) -> usize {
        match self {
            Self::UnexpectedEof { offset }
            | Self::BadVectorMagic { offset, .. }
            | Self::UnknownConstructor { offset, .. }
            | Self::MalformedField { offset, .. } => *offset,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof { offset } => {
                write!(f, "unexpected end of buffer at offset {offset}")
            }
            Self::BadVectorMagic { found, offset } => {
                write!(f, "bad vector sentinel {found:#010x} at offset {offset}")
            }
            Self::UnknownConstructor { family, id, offset, depth } => write!(
                f,
                "unknown {family} constructor {id:#010x} at offset {offset} (depth {depth})"
            ),
            Self::MalformedField { family, reason, offset, depth } => {
                if family.is_empty() {
                    write!(f, "malformed value at offset {offset}: {reason}")
                } else {
                    write!(
                        f,
                        "malformed {family} field at offset {offset} (depth {depth}): {reason}"
                    )
                }
            }
        }
    }
}

impl std::error::Error for Error {}

/// Specialized `Result` for deserialization.
pub type Result<T> = std::result::Result<T, Error>;

// ─── Mode ────────────────────────────────────────────────────────────────────

/// How a top-level decode reports recoverable failures.
///
/// Nested failures abort the enclosing object in both modes; the mode only
/// decides whether the caller sees an `Err` or `Ok(None)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Every error is returned as `Err`.
    #[default]
    Strict,
    /// Unknown constructors and malformed fields yield `Ok(None)`.
    Lenient,
}

impl Mode {
    /// `true` for [`Mode::Strict`].
    pub fn is_strict(self) -> bool {
        self == Self::Strict
    }
}

impl From<bool> for Mode {
    /// `true` selects strict mode, `false` lenient.
    fn from(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }
}
