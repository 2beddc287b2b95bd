//! [`Integer`] formatting.
//!
//! A negative value renders as `-` followed by its magnitude; the `-` comes
//! before any base prefix, matching the grammar the parser accepts.

use crate::Integer;
use core::fmt;

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        fmt::Display::fmt(self.magnitude(), f)
    }
}

impl fmt::Octal for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        fmt::Octal::fmt(self.magnitude(), f)
    }
}

impl fmt::LowerHex for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        fmt::LowerHex::fmt(self.magnitude(), f)
    }
}

impl fmt::UpperHex for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        fmt::UpperHex::fmt(self.magnitude(), f)
    }
}

#[cfg(test)]
mod tests {
    use crate::Integer;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn sign_before_prefix() {
        let n = Integer::from(-255);
        assert_eq!(n.to_string(), "-255");
        assert_eq!(format!("{n:#x}"), "-0xff");
        assert_eq!(format!("{n:#o}"), "-0377");
    }

    #[test]
    fn display_round_trips_through_the_parser() {
        for s in ["-1313", "0", "1313131313131313131313131313"] {
            let n: Integer = s.parse().unwrap();
            assert_eq!(n.to_string(), s);
        }
    }
}
