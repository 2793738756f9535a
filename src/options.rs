use crate::error::{Error, Result};
use std::ops::BitOr;

/// Bit-mask of behaviour switches for a [`Cli`](crate::Cli).
///
/// Every named constant is a single bit. Masks can be combined with `|`,
/// but [`Cli::set_options`](crate::Cli::set_options) only accepts one bit per
/// argument and does the combining itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Options(u64);

impl Options {
    /// Don't fall back to interactive mode when no arguments are given.
    pub const NO_INTERACTIVE_MODE: Options = Options(1 << 0);
    /// Mirror error messages to the error sink.
    pub const PRINT_ERRORS: Options = Options(1 << 1);

    const KNOWN: u64 = Self::NO_INTERACTIVE_MODE.0 | Self::PRINT_ERRORS.0;

    pub const fn empty() -> Self {
        Options(0)
    }

    pub const fn from_bits(bits: u64) -> Self {
        Options(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn contains(self, other: Options) -> bool {
        self.0 & other.0 == other.0
    }

    /// Adds a single option, rejecting anything that isn't one known bit.
    pub fn insert(&mut self, option: Options) -> Result<()> {
        if !is_valid(option) {
            return Err(Error::InvalidOption);
        }
        self.0 |= option.0;
        Ok(())
    }
}

impl BitOr for Options {
    type Output = Options;

    fn bitor(self, rhs: Options) -> Options {
        Options(self.0 | rhs.0)
    }
}

/// True when `option` is exactly one of the recognized bits.
pub fn is_valid(option: Options) -> bool {
    option.0.is_power_of_two() && option.0 & Options::KNOWN == option.0
}
