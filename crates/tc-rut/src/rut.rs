//! Chilean RUT (Rol Único Tributario) numbers.
//!
//! A RUT is a body number followed by a mod-11 check character (`0`–`9` or
//! `K`).  Accepted spellings are `12345678-5`, `12.345.678-5` and
//! `123456785`; `k` is accepted for `K`.

use log::warn;
use rand::Rng;
use std::str::FromStr;
use tc_core::errors::{Error, Result};
use tc_core::text::{remove_dots, remove_extra_spaces};

/// Smallest body produced by [`random_valid_default`].
pub const DEFAULT_MIN_BODY: u32 = 1_000_000;

/// Largest body produced by [`random_valid_default`].
pub const DEFAULT_MAX_BODY: u32 = 27_000_000;

/// Compute the check character of `body`.
///
/// Digits are weighted 2, 3, 4, 5, 6, 7, 2, 3, … from the right; the sum's
/// remainder modulo 11 maps to `11 - r`, with 11 → `0` and 10 → `K`.
///
/// ```
/// assert_eq!(tc_rut::verification_digit(12_345_678), '5');
/// assert_eq!(tc_rut::verification_digit(12_345_670), 'K');
/// ```
pub fn verification_digit(body: u32) -> char {
    let mut n = body;
    let mut sum = 0u32;
    let mut weight = 2u32;
    loop {
        sum += (n % 10) * weight;
        weight = if weight == 7 { 2 } else { weight + 1 };
        n /= 10;
        if n == 0 {
            break;
        }
    }
    match 11 - sum % 11 {
        11 => '0',
        10 => 'K',
        d => char::from_digit(d, 10).unwrap_or('0'),
    }
}

/// A RUT whose check character is known to match its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rut {
    body: u32,
    dv: char,
}

impl Rut {
    /// Build a RUT, checking that `dv` matches `body`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if the check character is wrong.
    pub fn new(body: u32, dv: char) -> Result<Self> {
        let dv = dv.to_ascii_uppercase();
        let expected = verification_digit(body);
        if dv != expected {
            return Err(Error::InvalidArgument(format!(
                "check digit of {body} is {expected}, not {dv}"
            )));
        }
        Ok(Self { body, dv })
    }

    /// Complete `body` with its check character.
    pub fn from_body(body: u32) -> Self {
        Self {
            body,
            dv: verification_digit(body),
        }
    }

    /// The body number.
    pub fn body(&self) -> u32 {
        self.body
    }

    /// The check character (`0`–`9` or `K`).
    pub fn dv(&self) -> char {
        self.dv
    }

    /// Dotted form, e.g. `12.345.678-5`.
    pub fn formatted(&self) -> String {
        format!("{}-{}", group_thousands(self.body), self.dv)
    }
}

impl FromStr for Rut {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (body, dv) = split(s)?;
        Rut::new(body, dv)
    }
}

impl std::fmt::Display for Rut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.body, self.dv)
    }
}

/// `true` if `s` is a well-formed RUT with a matching check character.
///
/// Any spelling [`Rut::from_str`] accepts is checked, not only the dashed
/// `12345678-5` form: dots are ignored and an undashed `123456785` takes its
/// last character as the check character.
///
/// Malformed input is logged at warn level.
pub fn is_valid(s: &str) -> bool {
    match s.parse::<Rut>() {
        Ok(_) => true,
        Err(Error::Parse(msg)) => {
            warn!("RUT {s:?} is malformed: {msg}");
            false
        }
        Err(_) => false,
    }
}

/// Re-spell any accepted RUT form as `12.345.678-K`.
///
/// The check character is carried over as given, not verified.
///
/// # Errors
/// [`Error::Parse`] if `s` is not shaped like a RUT.
pub fn format_rut(s: &str) -> Result<String> {
    let (body, dv) = split(s)?;
    Ok(format!("{}-{}", group_thousands(body), dv))
}

/// A random valid RUT with a body in `[min_body, max_body]`.
///
/// # Errors
/// [`Error::Precondition`] if `min_body > max_body`.
pub fn random_valid<R: Rng + ?Sized>(rng: &mut R, min_body: u32, max_body: u32) -> Result<Rut> {
    tc_core::ensure!(
        min_body <= max_body,
        "min body {min_body} exceeds max body {max_body}"
    );
    Ok(Rut::from_body(rng.gen_range(min_body..=max_body)))
}

/// A random valid RUT in the default body range, drawn from the thread RNG.
pub fn random_valid_default() -> Rut {
    Rut::from_body(rand::thread_rng().gen_range(DEFAULT_MIN_BODY..=DEFAULT_MAX_BODY))
}

/// Split a RUT spelling into body and (upper-cased) check character.
fn split(s: &str) -> Result<(u32, char)> {
    let cleaned = remove_dots(&remove_extra_spaces(s));
    let (body, dv) = match cleaned.split_once('-') {
        Some((body, dv)) => (body.to_string(), dv.to_string()),
        None => {
            let mut chars = cleaned.clone();
            let dv = chars
                .pop()
                .ok_or_else(|| Error::Parse("empty RUT".into()))?;
            (chars, dv.to_string())
        }
    };
    let mut dv_chars = dv.chars();
    let dv = match (dv_chars.next(), dv_chars.next()) {
        (Some(c), None) if c.is_ascii_digit() || c.eq_ignore_ascii_case(&'k') => {
            c.to_ascii_uppercase()
        }
        _ => return Err(Error::Parse(format!("{s:?} has no single check character"))),
    };
    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::Parse(format!("{s:?} has a non-numeric body")));
    }
    let body = body
        .parse::<u32>()
        .map_err(|e| Error::Parse(format!("{s:?}: {e}")))?;
    Ok((body, dv))
}

fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn known_check_digits() {
        assert_eq!(verification_digit(12_345_678), '5');
        assert_eq!(verification_digit(9_007_586), '1');
        assert_eq!(verification_digit(10_689_138), '9');
        assert_eq!(verification_digit(12_345_670), 'K');
        assert_eq!(verification_digit(14), '0');
    }

    #[test]
    fn validation() {
        assert!(is_valid("9007586-1"));
        assert!(!is_valid("9007586-K"));
        assert!(is_valid("12345670-K"));
        assert!(is_valid("12.345.670-k"));
        // Undashed: the last character is the check character
        assert!(is_valid("123456785"));
        assert!(is_valid("12.345.6785"));
        assert!(!is_valid("123456784"));
        // No check character at all
        assert!(!is_valid("12345670"));
        assert!(!is_valid(""));
        assert!(!is_valid("12a45678-5"));
    }

    #[test]
    fn parse_errors_are_typed() {
        assert!(matches!("".parse::<Rut>(), Err(Error::Parse(_))));
        assert!(matches!("1234-56".parse::<Rut>(), Err(Error::Parse(_))));
        assert!(matches!("9007586-K".parse::<Rut>(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn formatting() {
        assert_eq!(format_rut("9007586-1").unwrap(), "9.007.586-1");
        assert_eq!(format_rut("9.007.586-1").unwrap(), "9.007.586-1");
        assert_eq!(format_rut("9.007586-1").unwrap(), "9.007.586-1");
        assert_eq!(format_rut("12345678k").unwrap(), "12.345.678-K");
        assert_eq!(format_rut("123-4").unwrap(), "123-4");

        let rut: Rut = "12.345.678-5".parse().unwrap();
        assert_eq!(rut.to_string(), "12345678-5");
        assert_eq!(rut.formatted(), "12.345.678-5");
    }

    #[test]
    fn completion() {
        let rut = Rut::from_body(9_007_586);
        assert_eq!(rut.to_string(), "9007586-1");
        assert_eq!(rut.body(), 9_007_586);
        assert_eq!(rut.dv(), '1');
    }

    #[test]
    fn random_ruts_are_valid_and_bounded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let rut = random_valid(&mut rng, DEFAULT_MIN_BODY, DEFAULT_MAX_BODY).unwrap();
            assert!((DEFAULT_MIN_BODY..=DEFAULT_MAX_BODY).contains(&rut.body()));
            assert!(is_valid(&rut.to_string()));
        }
        assert!(is_valid(&random_valid_default().formatted()));
        assert!(matches!(
            random_valid(&mut rng, 10, 1),
            Err(Error::Precondition(_))
        ));
    }
}
