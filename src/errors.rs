//! Error types.

/// Alias for [`core::result::Result`] with the `textbook-rsa` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The requested modular inverse does not exist: `gcd(a, m) != 1`.
    InvalidInverse,

    /// The prime candidate search ran past its iteration cap.
    PrimeSearchExhausted,

    /// Both prime searches landed on the same prime.
    DegeneratePrimes,

    /// Message or ciphertext is not in `[0, n)`.
    RangeViolation,

    /// Modulus is zero, or too small for the requested operation.
    InvalidModulus,

    /// Seed range is empty or starts below 2.
    InvalidSeedRange,

    /// Invalid exponent.
    InvalidExponent,

    /// Zero Miller-Rabin rounds requested.
    InvalidRounds,

    /// A freshly generated key pair failed its own consistency check.
    Internal,

    /// Key generation gave up after the configured number of restarts.
    KeyGenerationExhausted {
        /// Number of generation attempts made.
        attempts: usize,
    },
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidInverse => write!(f, "modular inverse does not exist"),
            Error::PrimeSearchExhausted => write!(f, "prime candidate search exhausted"),
            Error::DegeneratePrimes => write!(f, "prime factors are equal"),
            Error::RangeViolation => write!(f, "input out of range for modulus"),
            Error::InvalidModulus => write!(f, "invalid modulus"),
            Error::InvalidSeedRange => write!(f, "invalid seed range"),
            Error::InvalidExponent => write!(f, "invalid exponent"),
            Error::InvalidRounds => write!(f, "at least one Miller-Rabin round is required"),
            Error::Internal => write!(f, "internal error"),
            Error::KeyGenerationExhausted { attempts } => {
                write!(f, "key generation failed after {} attempts", attempts)
            }
        }
    }
}
