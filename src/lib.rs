//! A library for encoding personal names with the NYSIIS phonetic algorithm.
//!
//! The New York State Identification and Intelligence System code maps a
//! name to a short uppercase key approximating its pronunciation, so that
//! differently-spelled forms of the same name encode to the same key. It is
//! useful for fuzzy name matching: database deduplication, search, record
//! linkage.
//!
//! Names are uppercased and stripped to letters before encoding, so
//! punctuation, spacing and casing never affect the key, and accented
//! vowels are understood without being transliterated away.
//!
//! # Examples
//!
//! ```
//! use nysiis::Nysiis;
//!
//! let encoder = Nysiis::default();
//! assert_eq!(encoder.encode("Bishop"), "BASAP");
//! assert_eq!(encoder.encode("knight"), "NAGT");
//! assert_eq!(encoder.encode("Martínez"), "MARTAN");
//!
//! // The original algorithm truncated keys to 6 characters.
//! let encoder = Nysiis::traditional();
//! assert_eq!(encoder.encode("McDonald"), "MCDANA");
//! ```

mod normalize;
mod rules;
mod vowels;

#[cfg(feature = "ffi")]
mod external;

use smallvec::SmallVec;
use std::convert::TryFrom;
use std::error;
use std::fmt;
use std::str::FromStr;

// The in-place rewrite buffer; inline capacity covers all but outlandishly
// long names.
pub(crate) type Buffer = SmallVec<[char; 24]>;

/// An error raised for input the encoder refuses to touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The configured maximum output length was not an integer.
    InvalidConfiguration(String),
    /// The name to encode was not a valid string.
    InvalidInput,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(value) => {
                write!(f, "invalid max_output_length: {:?}", value)
            }
            Error::InvalidInput => write!(f, "encode was passed an invalid name"),
        }
    }
}

impl error::Error for Error {}

/// A NYSIIS encoder.
///
/// Carries nothing but the configured maximum output length, so it is
/// cheap to copy and safe to share across threads; encoding is a pure
/// function of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Nysiis {
    max_output_length: i64,
}

impl Default for Nysiis {
    /// An encoder with unlimited output length.
    fn default() -> Self {
        Nysiis::new(0)
    }
}

impl Nysiis {
    /// Creates an encoder whose keys are truncated to `max_output_length`
    /// characters. Zero or any negative value means unlimited.
    pub const fn new(max_output_length: i64) -> Self {
        Nysiis { max_output_length }
    }

    /// The encoder as originally specified, truncating keys to 6 characters.
    pub const fn traditional() -> Self {
        Nysiis::new(6)
    }

    /// Encodes a name, producing its phonetic key.
    ///
    /// The name is normalized (uppercased, stripped to letters), the
    /// one-time prefix and suffix rewrites run, and the positional scan
    /// walks the rest of the name left to right, appending to the key while
    /// collapsing adjacent duplicates. Three suffix cleanup passes and the
    /// optional truncation finish the key.
    ///
    /// A name with no letters encodes to an empty key.
    ///
    /// # Examples
    ///
    /// ```
    /// use nysiis::Nysiis;
    ///
    /// let encoder = Nysiis::default();
    /// assert_eq!(encoder.encode("Carr"), "CAR");
    /// assert_eq!(encoder.encode("O'Brien"), "OBRAN");
    /// assert_eq!(encoder.encode("Vaughan Williams"), "VAGANWALAN");
    /// assert_eq!(encoder.encode("?!"), "");
    /// ```
    pub fn encode(&self, name: &str) -> String {
        let mut buf = normalize::normalize(name);
        if buf.is_empty() {
            return String::new();
        }

        rules::apply_head_rules(&mut buf);
        rules::apply_tail_rules(&mut buf);

        // The first character goes to the key untranslated; the scan never
        // revisits it.
        let mut key = String::with_capacity(buf.len());
        let mut last = buf[0];
        key.push(last);

        let mut p = 1;
        while p < buf.len() {
            for rule in rules::SCAN_RULES.iter() {
                if rule(&mut buf, p) {
                    break;
                }
            }

            // A rule may have rewritten the character under the cursor, or
            // shifted a later one into its place; re-read before appending.
            let c = buf[p];
            if c != last {
                key.push(c);
                last = c;
            }
            p += 1;
        }

        rules::cleanup_key(&mut key);

        if self.max_output_length > 0 {
            truncate_chars(&mut key, self.max_output_length as usize);
        }
        key
    }

    /// Encodes a name supplied as raw bytes, e.g. read from a file or
    /// handed over by a foreign caller.
    ///
    /// Fails with [`Error::InvalidInput`] if the bytes are not a valid
    /// UTF-8 string; no partial key is produced.
    pub fn encode_bytes(&self, name: &[u8]) -> Result<String, Error> {
        match std::str::from_utf8(name) {
            Ok(name) => Ok(self.encode(name)),
            Err(_) => Err(Error::InvalidInput),
        }
    }

    /// The configured maximum output length; zero or negative means
    /// unlimited.
    pub const fn max_output_length(&self) -> i64 {
        self.max_output_length
    }
}

impl FromStr for Nysiis {
    type Err = Error;

    /// Parses the maximum output length from configuration text.
    ///
    /// Anything that is not an integer is rejected with
    /// [`Error::InvalidConfiguration`], fractional values included.
    ///
    /// # Examples
    ///
    /// ```
    /// use nysiis::Nysiis;
    ///
    /// let encoder: Nysiis = "6".parse().unwrap();
    /// assert_eq!(encoder.max_output_length(), 6);
    ///
    /// assert!("2.5".parse::<Nysiis>().is_err());
    /// assert!("foobar".parse::<Nysiis>().is_err());
    /// ```
    fn from_str(value: &str) -> Result<Self, Error> {
        match value.trim().parse::<i64>() {
            Ok(max) => Ok(Nysiis::new(max)),
            Err(_) => Err(Error::InvalidConfiguration(value.to_string())),
        }
    }
}

impl TryFrom<f64> for Nysiis {
    type Error = Error;

    /// Accepts only integer-valued floats; `2.5` and friends fail with
    /// [`Error::InvalidConfiguration`].
    fn try_from(value: f64) -> Result<Self, Error> {
        if value.is_finite()
            && value.fract() == 0.0
            && value >= i64::MIN as f64
            && value <= i64::MAX as f64
        {
            Ok(Nysiis::new(value as i64))
        } else {
            Err(Error::InvalidConfiguration(value.to_string()))
        }
    }
}

/// Encodes a name with unlimited key length, without constructing an
/// encoder.
///
/// # Examples
///
/// ```
/// assert_eq!(nysiis::encode("Greene"), "GRAN");
/// ```
pub fn encode(name: &str) -> String {
    Nysiis::default().encode(name)
}

fn truncate_chars(key: &mut String, max: usize) {
    if let Some((at, _)) = key.char_indices().nth(max) {
        key.truncate(at);
    }
}
