use crate::dictionary::Dictionary;
use crate::error::{LzcError, Result};
use crate::running::RunningComplexity;
use crate::sequence::Sequence;
use crate::{lz76, lz78};
use std::fmt;
use std::str::FromStr;

/// Lempel-Ziv complexity variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    Lz76,
    Lz78,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Lz76, Method::Lz78];

    /// Numeric code used in baseline file names: 76 or 78.
    pub fn code(self) -> u32 {
        match self {
            Method::Lz76 => 76,
            Method::Lz78 => 78,
        }
    }

    pub fn complexity(self, seq: &Sequence) -> usize {
        match self {
            Method::Lz76 => lz76::complexity(seq),
            Method::Lz78 => lz78::complexity(seq),
        }
    }

    pub fn complexity_with_dictionary(self, seq: &Sequence) -> (usize, Dictionary<u8>) {
        match self {
            Method::Lz76 => lz76::complexity_with_dictionary(seq),
            Method::Lz78 => lz78::complexity_with_dictionary(seq),
        }
    }

    pub fn running_complexity(self, seq: &Sequence) -> RunningComplexity {
        match self {
            Method::Lz76 => lz76::running_complexity(seq),
            Method::Lz78 => lz78::running_complexity(seq),
        }
    }
}

impl TryFrom<u32> for Method {
    type Error = LzcError;

    fn try_from(code: u32) -> Result<Self> {
        match code {
            76 => Ok(Method::Lz76),
            78 => Ok(Method::Lz78),
            _ => Err(LzcError::InvalidArgument(format!(
                "method must be 76 or 78, got {}",
                code
            ))),
        }
    }
}

impl FromStr for Method {
    type Err = LzcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "76" | "lz76" => Ok(Method::Lz76),
            "78" | "lz78" => Ok(Method::Lz78),
            _ => Err(LzcError::InvalidArgument(format!("Invalid method: {}", s))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LZ{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("76".parse::<Method>().unwrap(), Method::Lz76);
        assert_eq!("LZ78".parse::<Method>().unwrap(), Method::Lz78);
        assert_eq!(" lz76 ".parse::<Method>().unwrap(), Method::Lz76);
        assert!(matches!(
            "77".parse::<Method>(),
            Err(LzcError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_codes() {
        for method in Method::ALL {
            assert_eq!(Method::try_from(method.code()).unwrap(), method);
        }
        assert!(Method::try_from(77).is_err());
        assert_eq!(Method::Lz78.to_string(), "LZ78");
    }

    #[test]
    fn test_dispatch() {
        let seq = Sequence::new("0001101001000101").unwrap();
        assert_eq!(Method::Lz76.complexity(&seq), 6);
        assert_eq!(
            Method::Lz78.complexity(&seq),
            Method::Lz78.running_complexity(&seq).total()
        );
        let (c, dict) = Method::Lz76.complexity_with_dictionary(&seq);
        assert_eq!(c, dict.len());
    }
}
