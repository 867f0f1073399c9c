//! Space-delimited character splitting for n-gram indexes.

const OPEN_PAREN: char = '（';
const CLOSE_PAREN: char = '）';
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    /// Emitting characters one at a time
    Plain,
    /// Saw `（`; holding it back
    Opened,
    /// Holding `（` and the character after it
    Held,
}

/// Split `text` into single characters separated by spaces.
///
/// A full-width space following a character is swallowed by the separator.
/// A single character wrapped in full-width parentheses (`（あ）`) stays one
/// unsplit token.
pub fn to_ngram(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut out = String::with_capacity(text.len() * 2);
    let mut state = Scan::Plain;

    let mut i = 0;
    while i < len {
        let c = chars[i];
        match state {
            Scan::Plain if c == OPEN_PAREN => {
                state = Scan::Opened;
                i += 1;
                continue;
            }
            Scan::Plain => {}
            Scan::Opened => {
                state = Scan::Held;
                i += 1;
                continue;
            }
            Scan::Held => {
                state = Scan::Plain;
                out.push(chars[i - 2]);
                if c != CLOSE_PAREN {
                    out.push(' ');
                }
                out.push(chars[i - 1]);
                if c != CLOSE_PAREN {
                    out.push(' ');
                }
            }
        }

        out.push(c);
        if i + 1 < len {
            out.push(' ');
            if chars[i + 1] == IDEOGRAPHIC_SPACE {
                i += 1;
            }
        }
        i += 1;
    }

    match state {
        Scan::Plain => {}
        Scan::Opened => out.push(chars[len - 1]),
        Scan::Held => {
            out.push(chars[len - 2]);
            out.push(' ');
            out.push(chars[len - 1]);
        }
    }
    out
}
