//! Number formatting for the display and button labels
//!
//! Integers are shown without a fractional part, everything else with
//! exactly two digits. Both profiles round half up on the magnitude, but
//! from different decimal sources: the default profile rounds the exact
//! binary value, the Persian profile rounds the shortest decimal that
//! round-trips to the same `f64`. So `1.005` (stored as 1.00499…) is
//! `1.00` in the first and `۱٫۰۱` in the second.

/// Numeral shaping rules used by [`format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocaleProfile {
    /// Plain ASCII, no grouping.
    #[default]
    Default,
    /// Extended Arabic-Indic digits with Persian separators.
    Persian,
}

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
const PERSIAN_DECIMAL: char = '\u{066B}';
const PERSIAN_GROUP: char = '\u{066C}';
/// LRM + MINUS SIGN keeps the sign on the left inside RTL runs.
const PERSIAN_MINUS: &str = "\u{200E}\u{2212}";

/// Enough fractional digits to print any `f64` without rounding.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Digits of a finite magnitude, before any locale shaping.
#[derive(Debug, PartialEq)]
struct Digits {
    negative: bool,
    integer: String,
    fraction: Option<String>,
}

impl Digits {
    /// Two decimals from the exact binary expansion.
    fn exact(value: f64) -> Self {
        Self::with_source(value, |abs| format!("{:.*}", EXACT_FRACTION_DIGITS, abs))
    }

    /// Two decimals from the shortest round-trip representation.
    fn shortest(value: f64) -> Self {
        Self::with_source(value, |abs| abs.to_string())
    }

    fn with_source(value: f64, decimal: impl FnOnce(f64) -> String) -> Self {
        // -0.0 < 0.0 is false, so negative zero prints as zero
        let negative = value < 0.0;
        let abs = value.abs();
        if abs.fract() == 0.0 {
            return Self {
                negative,
                integer: format!("{abs:.0}"),
                fraction: None,
            };
        }
        let (integer, fraction) = round_half_up_to_cents(&decimal(abs));
        Self {
            negative,
            integer,
            fraction: Some(fraction),
        }
    }

    fn without_trailing_zeros(mut self) -> Self {
        self.fraction = self
            .fraction
            .map(|f| f.trim_end_matches('0').to_string())
            .filter(|f| !f.is_empty());
        self
    }

    fn render(&self, profile: LocaleProfile) -> String {
        let mut out = String::new();
        match profile {
            LocaleProfile::Default => {
                if self.negative {
                    out.push('-');
                }
                out.push_str(&self.integer);
                if let Some(fraction) = &self.fraction {
                    out.push('.');
                    out.push_str(fraction);
                }
                out
            }
            LocaleProfile::Persian => {
                if self.negative {
                    out.push_str(PERSIAN_MINUS);
                }
                out.push_str(&group_thousands(&self.integer, PERSIAN_GROUP));
                if let Some(fraction) = &self.fraction {
                    out.push(PERSIAN_DECIMAL);
                    out.push_str(fraction);
                }
                shape_persian_digits(&out)
            }
        }
    }
}

/// Round a plain non-negative decimal (`123.4567`) half up to two
/// fractional digits. Returns the integer and fraction digits.
fn round_half_up_to_cents(decimal: &str) -> (String, String) {
    let (integer, fraction) = decimal.split_once('.').unwrap_or((decimal, ""));
    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    if fraction.as_bytes().get(2).is_some_and(|&b| b >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    let (integer, fraction) = text.split_at(text.len() - 2);
    (integer.to_string(), fraction.to_string())
}

/// Render `value` under `profile`. Pure; the same pair always yields the
/// same string.
pub fn format(value: f64, profile: LocaleProfile) -> String {
    if !value.is_finite() {
        return format_non_finite(value, profile);
    }
    let digits = match profile {
        LocaleProfile::Default => Digits::exact(value),
        LocaleProfile::Persian => Digits::shortest(value),
    };
    digits.render(profile)
}

/// Preset button label. The value is first fixed to two decimals; the
/// Persian label then drops trailing fractional zeros (`0.5` is `۰٫۵`),
/// while the default label keeps them (`0.50`).
pub fn format_label(value: f64, profile: LocaleProfile) -> String {
    if !value.is_finite() {
        return format_non_finite(value, profile);
    }
    let digits = Digits::exact(value);
    match profile {
        LocaleProfile::Default => digits.render(profile),
        LocaleProfile::Persian => digits.without_trailing_zeros().render(profile),
    }
}

fn format_non_finite(value: f64, profile: LocaleProfile) -> String {
    let s = match (profile, value.is_nan(), value > 0.0) {
        (LocaleProfile::Default, true, _) => "NaN",
        (LocaleProfile::Default, false, true) => "Infinity",
        (LocaleProfile::Default, false, false) => "-Infinity",
        (LocaleProfile::Persian, true, _) => "ناعدد",
        (LocaleProfile::Persian, false, true) => "∞",
        (LocaleProfile::Persian, false, false) => "\u{200E}\u{2212}∞",
    };
    s.to_string()
}

/// Insert `sep` every three digits counting from the right.
fn group_thousands(integer: &str, sep: char) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3 * sep.len_utf8());
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

fn shape_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => PERSIAN_DIGITS[d as usize],
            None => c,
        })
        .collect()
}
