#![deny(warnings)]

use crate::scanner::Scanner;

/*
 * Scanning helpers return the matched lexeme and leave the scanner at a
 * clean start (the lexeme is extracted). When nothing matches the scanner
 * is left where it was.
 */

static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static DELIMS: &[char] = &['(', ')', ',', '"'];

fn is_word_char(c: &char) -> bool {
    c.is_ascii_alphanumeric() || *c == '_'
}

// discard any whitespace ahead of the cursor along with whatever was consumed
pub fn skip_whitespace<I: Iterator<Item=char>>(scanner: &mut Scanner<I>) {
    scanner.skip_while(|c| c.is_whitespace());
    scanner.ignore();
}

// scan a quoted string like "no \escapes here", returns the text inside quotes
pub fn scan_quoted_string<I: Iterator<Item=char>>(scanner: &mut Scanner<I>, q: char) -> Option<String> {
    let backtrack = scanner.pos();
    scanner.accept(&q)?;
    scanner.until_any(&[q]);
    if scanner.accept(&q).is_none() {
        scanner.set_pos(backtrack);
        return None;
    }
    let lexeme = scanner.extract_string();
    Some(lexeme[q.len_utf8()..lexeme.len() - q.len_utf8()].to_string())
}

// scan [0-9]+ only when followed by a word boundary, so "12ab" isn't a number
pub fn scan_integer<I: Iterator<Item=char>>(scanner: &mut Scanner<I>) -> Option<String> {
    let backtrack = scanner.pos();
    if !scanner.skip_all(DIGITS) {
        return None;
    }
    if scanner.peek().map_or(false, |c| is_word_char(&c)) {
        scanner.set_pos(backtrack);
        return None;
    }
    Some(scanner.extract_string())
}

// scan anything up to whitespace or one of the delimiters
pub fn scan_word<I: Iterator<Item=char>>(scanner: &mut Scanner<I>) -> Option<String> {
    if !scanner.skip_while(|c| !c.is_whitespace() && !DELIMS.contains(c)) {
        return None;
    }
    Some(scanner.extract_string())
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_integer() {
        let tests = vec![("987", "987"), ("0", "0"), ("42)", "42"), ("7, 8", "7"), ("12-", "12")];
        for (input, expected) in tests.iter() {
            let mut s = Scanner::from_str(input);
            assert_eq!(Some(expected.to_string()), scan_integer(&mut s));
        }
    }

    #[test]
    fn test_scan_integer_needs_boundary() {
        for t in ["12ab", "3_x", "x12", "-4"].iter() {
            let mut s = Scanner::from_str(t);
            assert_eq!(None, scan_integer(&mut s));
            assert_eq!(s.pos(), -1);
        }
    }

    #[test]
    fn test_scan_words() {
        let tests = vec![
            ("func", "func"), ("+", "+"), ("12ab", "12ab"),
            ("a.b?", "a.b?"), ("f(x)", "f"), ("x,y", "x"), ("w\"s\"", "w"),
        ];
        for (input, expected) in tests.iter() {
            let mut s = Scanner::from_str(input);
            assert_eq!(Some(expected.to_string()), scan_word(&mut s));
        }
        assert_eq!(None, scan_word(&mut Scanner::from_str("(x)")));
        assert_eq!(None, scan_word(&mut Scanner::from_str("")));
    }

    #[test]
    fn test_scan_string() {
        let tests = vec![
            (r#""this is a test""#, "this is a test"),
            (r#""""#, ""),
            (r#""back\slash" rest"#, r"back\slash"),
        ];
        for (input, expected) in tests.iter() {
            let mut s = Scanner::from_str(input);
            assert_eq!(Some(expected.to_string()), scan_quoted_string(&mut s, '"'));
        }
    }

    #[test]
    fn test_scan_unterminated_string() {
        let mut s = Scanner::from_str(r#""open ended"#);
        assert_eq!(None, scan_quoted_string(&mut s, '"'));
        assert_eq!(s.pos(), -1);
        assert_eq!(s.remaining(), r#""open ended"#);
    }

    #[test]
    fn test_skip_whitespace() {
        let mut s = Scanner::from_str(" \t\n\u{a0} x ");
        skip_whitespace(&mut s);
        assert_eq!(s.remaining(), "x ");
        s.next();
        skip_whitespace(&mut s);
        assert_eq!(s.remaining(), "");
        assert_eq!(s.peek(), None);
    }
}
