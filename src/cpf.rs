//! # CPF
//!
//! Normalization and check-digit validation of CPF numbers (the 11-digit Brazilian
//! individual taxpayer id, `XXX.XXX.XXX-DD`).
//!
//! Both functions are total: any input, however malformed, yields a defined result.

/// Number of digits in a CPF.
pub const CPF_LENGTH: usize = 11;

/// Strips every character that is not an ASCII digit.
///
/// ```
/// use pet_manager::cpf::normalize_cpf;
///
/// assert_eq!(normalize_cpf("529.982.247-25"), "52998224725");
/// assert_eq!(normalize_cpf(""), "");
/// ```
pub fn normalize_cpf(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Whether `raw` holds a CPF with correct check digits.
///
/// Punctuation is ignored. Inputs without exactly 11 digits, or whose digits are all
/// the same (`000.000.000-00`, `111.111.111-11`, ...), are rejected.
pub fn is_valid_cpf(raw: &str) -> bool {
    let digits: Vec<u32> = normalize_cpf(raw)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() != CPF_LENGTH {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Mod-11 check digit over `digits`, weighted from `len + 1` down to 2.
fn check_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        check => check,
    }
}
