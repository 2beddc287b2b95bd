//! [`Rational`] formatting: `numerator/denominator` in the requested base.

use crate::Rational;
use core::fmt;

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.numerator(), f)?;
        f.write_str("/")?;
        fmt::Display::fmt(self.denominator(), f)
    }
}

impl fmt::Octal for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Octal::fmt(self.numerator(), f)?;
        f.write_str("/")?;
        fmt::Octal::fmt(self.denominator(), f)
    }
}

impl fmt::LowerHex for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self.numerator(), f)?;
        f.write_str("/")?;
        fmt::LowerHex::fmt(self.denominator(), f)
    }
}

impl fmt::UpperHex for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self.numerator(), f)?;
        f.write_str("/")?;
        fmt::UpperHex::fmt(self.denominator(), f)
    }
}
