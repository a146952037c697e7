//! Number-formatting locales for the supported currencies.

/// A number-formatting convention: which separators to use and how to group
/// integer digits. Locales here carry no currency semantics.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub enum Locale {
    DeDe,
    EnAu,
    EnCa,
    EnGb,
    EnIn,
    #[default]
    EnUs,
    EsAr,
    EsMx,
    JaJp,
    PtBr,
}

impl Locale {
    /// The locale used whenever a currency has no mapping of its own.
    /// Cannot happen with the fixed currency set, but callers that format
    /// without a currency (e.g. the raw quantity) use it explicitly.
    pub const FALLBACK: Locale = Locale::EnUs;

    /// The BCP 47 tag for this locale (e.g. "en-US").
    pub fn tag(&self) -> &'static str {
        match self {
            Self::DeDe => "de-DE",
            Self::EnAu => "en-AU",
            Self::EnCa => "en-CA",
            Self::EnGb => "en-GB",
            Self::EnIn => "en-IN",
            Self::EnUs => "en-US",
            Self::EsAr => "es-AR",
            Self::EsMx => "es-MX",
            Self::JaJp => "ja-JP",
            Self::PtBr => "pt-BR",
        }
    }

    /// The character placed between the integer and fraction parts.
    pub fn decimal_separator(&self) -> char {
        match self {
            Self::DeDe | Self::EsAr | Self::PtBr => ',',
            _ => '.',
        }
    }

    /// The character placed between integer digit groups.
    pub fn group_separator(&self) -> char {
        match self {
            Self::DeDe | Self::EsAr | Self::PtBr => '.',
            _ => ',',
        }
    }

    /// en-IN groups the lowest three digits, then pairs (1,23,456).
    fn uses_indian_grouping(&self) -> bool {
        matches!(self, Self::EnIn)
    }

    /// Inserts group separators into a bare run of integer digits.
    ///
    /// `digits` must contain ASCII digits only; sign and fraction handling
    /// belong to the caller.
    pub fn group_digits(&self, digits: &str) -> String {
        let sep = self.group_separator();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);

        if self.uses_indian_grouping() && digits.len() > 3 {
            let (head, tail) = digits.split_at(digits.len() - 3);
            let mut groups: Vec<&str> = Vec::new();
            let mut rest = head;
            while rest.len() > 2 {
                let (h, t) = rest.split_at(rest.len() - 2);
                groups.push(t);
                rest = h;
            }
            groups.push(rest);
            groups.reverse();
            for group in groups {
                out.push_str(group);
                out.push(sep);
            }
            out.push_str(tail);
        } else {
            for (i, ch) in digits.chars().enumerate() {
                if i > 0 && (digits.len() - i) % 3 == 0 {
                    out.push(sep);
                }
                out.push(ch);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_grouping() {
        assert_eq!(Locale::EnUs.group_digits("1"), "1");
        assert_eq!(Locale::EnUs.group_digits("100"), "100");
        assert_eq!(Locale::EnUs.group_digits("1000"), "1,000");
        assert_eq!(Locale::EnUs.group_digits("1234567"), "1,234,567");
        assert_eq!(Locale::DeDe.group_digits("1234567"), "1.234.567");
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(Locale::EnIn.group_digits("100"), "100");
        assert_eq!(Locale::EnIn.group_digits("1000"), "1,000");
        assert_eq!(Locale::EnIn.group_digits("123456"), "1,23,456");
        assert_eq!(Locale::EnIn.group_digits("12345678"), "1,23,45,678");
    }

    #[test]
    fn separators() {
        assert_eq!(Locale::PtBr.decimal_separator(), ',');
        assert_eq!(Locale::PtBr.group_separator(), '.');
        assert_eq!(Locale::EsAr.decimal_separator(), ',');
        assert_eq!(Locale::JaJp.decimal_separator(), '.');
        assert_eq!(Locale::FALLBACK.tag(), "en-US");
    }
}
