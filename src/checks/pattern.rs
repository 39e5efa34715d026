//! Pattern checks - repeated runs and sequential runs.

use secrecy::{ExposeSecret, SecretString};

const RUN_LENGTH: usize = 3;

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Checks for a run of 3 or more identical consecutive characters
/// (e.g. `aaa`, `111`).
pub fn has_repeated_run(password: &SecretString) -> bool {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if chars.len() < RUN_LENGTH {
        return false;
    }

    let mut repeated_count = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            repeated_count += 1;
            if repeated_count >= RUN_LENGTH {
                return true;
            }
        } else {
            repeated_count = 1;
        }
    }
    false
}

/// Checks for a run of 3 or more sequential characters: consecutive
/// codepoints within letters or digits (`abc`, `321`) or a contiguous
/// slice of a keyboard row (`qwe`, `lkj`), case-insensitive.
pub fn has_sequential_run(password: &SecretString) -> bool {
    let folded: Vec<char> = password.expose_secret().to_lowercase().chars().collect();
    if folded.len() < RUN_LENGTH {
        return false;
    }

    folded
        .windows(RUN_LENGTH)
        .any(|w| is_straight(w) || is_keyboard_run(w))
}

/// Three consecutive codepoints, ascending or descending, within a
/// single class (letters or digits).
fn is_straight(window: &[char]) -> bool {
    let same_class = window.iter().all(|c| c.is_ascii_lowercase())
        || window.iter().all(|c| c.is_ascii_digit());
    if !same_class {
        return false;
    }

    let ascending = window
        .windows(2)
        .all(|w| w[1] as u32 == w[0] as u32 + 1);
    let descending = window
        .windows(2)
        .all(|w| w[0] as u32 == w[1] as u32 + 1);
    ascending || descending
}

/// Contiguous slice of a QWERTY row, forwards or backwards.
fn is_keyboard_run(window: &[char]) -> bool {
    let forward: String = window.iter().collect();
    let backward: String = window.iter().rev().collect();
    KEYBOARD_ROWS
        .iter()
        .any(|row| row.contains(&forward) || row.contains(&backward))
}
