// ============================================================================
// Text Shifter
// Multiplies decimal text by a power of ten through string surgery
// ============================================================================
//
// The value never goes through an f64: the decimal point is padded toward,
// moved by adjacent swaps, and the zeros the move introduced are trimmed.
// Zeros that were already written in the input fraction are kept.

use super::config::{MAX_SHIFT_POWER, NAN_TEXT};
use smallvec::SmallVec;
use std::iter;

/// Working buffer; typical decimal strings fit inline.
type Buffer = SmallVec<[char; 32]>;

/// Shift `text` by `power` decimal places, yielding the text of
/// `text × 10^power`.
///
/// `"0"` is returned when the text holds no non-zero digit. Empty text and
/// `power == 0` return the input unchanged. Work grows with `|power|`, so
/// shifts beyond [`MAX_SHIFT_POWER`] yield `"nan"` instead of padding.
///
/// # Example
/// ```
/// use decimal_codec::codec::shift_text;
///
/// assert_eq!(shift_text("123.456", 1), "1234.56");
/// assert_eq!(shift_text("123.456", -4), "0.0123456");
/// assert_eq!(shift_text("0.000010", 3), "0.010");
/// assert_eq!(shift_text("-10100", -5), "-0.101");
/// ```
pub fn shift_text(text: &str, power: i32) -> String {
    if power == 0 || text.is_empty() {
        return text.to_owned();
    }

    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    if !body.chars().any(is_nonzero_digit) {
        return "0".to_owned();
    }

    if power.unsigned_abs() > MAX_SHIFT_POWER {
        tracing::debug!("Shift of {:?} by 10^{} out of range", text, power);
        return NAN_TEXT.to_owned();
    }

    let mut chars: Buffer = body.chars().collect();

    ensure_point(&mut chars);
    pad_zeros(&mut chars, power);
    move_point(&mut chars, power);
    strip_leading_zeros(&mut chars);
    strip_trailing_zeros(&mut chars, fractional_len(text));

    if chars.last() == Some(&'.') {
        chars.pop();
    }

    let mut shifted = String::with_capacity(chars.len() + 1);
    if negative {
        shifted.push('-');
    }
    shifted.extend(chars);
    shifted
}

#[inline]
fn is_nonzero_digit(c: char) -> bool {
    matches!(c, '1'..='9')
}

/// Index of the first decimal point, or the buffer length if there is none.
#[inline]
fn point_index(chars: &[char]) -> usize {
    chars.iter().position(|&c| c == '.').unwrap_or(chars.len())
}

/// Digits after the first decimal point of the caller's text.
fn fractional_len(text: &str) -> usize {
    text.find('.')
        .map_or(0, |pos| text[pos + 1..].chars().count())
}

fn ensure_point(chars: &mut Buffer) {
    if !chars.contains(&'.') {
        chars.push('.');
    }
}

/// Pad zeros on the side the point moves toward so every swap stays in
/// bounds and at least one digit remains ahead of the point.
fn pad_zeros(chars: &mut Buffer, power: i32) {
    let point = point_index(chars) as i64;
    let len = chars.len() as i64;
    let power = i64::from(power);

    if power > 0 {
        let missing = power - (len - point - 1);
        if missing > 0 {
            chars.extend(iter::repeat('0').take(missing as usize));
        }
    } else {
        let missing = -power - point + 1;
        if missing > 0 {
            chars.insert_many(0, iter::repeat('0').take(missing as usize));
        }
    }
}

fn move_point(chars: &mut Buffer, power: i32) {
    let mut pos = point_index(chars);

    if power > 0 {
        for _ in 0..power {
            chars.swap(pos, pos + 1);
            pos += 1;
        }
    } else {
        for _ in 0..power.unsigned_abs() {
            chars.swap(pos, pos - 1);
            pos -= 1;
        }
    }
}

/// Drop zeros ahead of the first significant digit; a fraction keeps a
/// single `0` before the point.
fn strip_leading_zeros(chars: &mut Buffer) {
    let point = point_index(chars);
    let first_digit = chars
        .iter()
        .position(|&c| is_nonzero_digit(c))
        .unwrap_or(chars.len());

    if point > first_digit {
        chars.drain(..first_digit);
    } else if point > 1 {
        chars.drain(..point - 1);
    }
}

/// Drop trailing zeros that the shift appended, keeping any the original
/// fraction already had.
fn strip_trailing_zeros(chars: &mut Buffer, original_frac: usize) {
    let point = point_index(chars);
    let new_frac = chars.len().saturating_sub(point + 1);

    if new_frac <= original_frac {
        return;
    }

    let excess = new_frac - original_frac;
    let significant = chars
        .iter()
        .rposition(|&c| c != '0')
        .map_or(0, |pos| pos + 1);

    let keep = if original_frac == 0 {
        significant
    } else {
        significant.max(chars.len() - excess)
    };

    chars.truncate(keep);
}
