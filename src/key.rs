//! Dotted key paths.
//!
//! Keys follow TOML dotted-key syntax: bare segments separated by `.`, with
//! optional `"basic"` or `'literal'` quoting so a segment may itself contain
//! dots (`servers."alpha.local".ip`).

/// Split `key` into its segments. The empty key has no segments and addresses
/// the document root. Returns `None` for malformed keys.
pub fn parse_key(key: &str) -> Option<Vec<String>> {
    let key = key.trim();
    if key.is_empty() {
        return Some(Vec::new());
    }

    let mut segments = Vec::new();
    let mut chars = key.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let segment = match chars.peek() {
            Some('"') => {
                chars.next();
                basic_quoted(&mut chars)?
            }
            Some('\'') => {
                chars.next();
                let mut segment = String::new();
                loop {
                    match chars.next()? {
                        '\'' => break,
                        c => segment.push(c),
                    }
                }
                segment
            }
            _ => {
                let mut segment = String::new();
                while let Some(c) = chars.next_if(|c| *c != '.' && !c.is_whitespace()) {
                    if c == '"' || c == '\'' {
                        return None;
                    }
                    segment.push(c);
                }
                if segment.is_empty() {
                    return None;
                }
                segment
            }
        };
        segments.push(segment);

        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        match chars.next() {
            None => return Some(segments),
            Some('.') => continue,
            Some(_) => return None,
        }
    }
}

fn basic_quoted(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<String> {
    let mut segment = String::new();
    loop {
        match chars.next()? {
            '"' => return Some(segment),
            '\\' => match chars.next()? {
                '"' => segment.push('"'),
                '\\' => segment.push('\\'),
                'b' => segment.push('\u{8}'),
                'f' => segment.push('\u{c}'),
                'n' => segment.push('\n'),
                'r' => segment.push('\r'),
                't' => segment.push('\t'),
                'u' => segment.push(unicode_escape(chars, 4)?),
                'U' => segment.push(unicode_escape(chars, 8)?),
                _ => return None,
            },
            c => segment.push(c),
        }
    }
}

/// Exactly `digits` hex digits naming a Unicode scalar value.
fn unicode_escape(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    digits: usize,
) -> Option<char> {
    let mut code = 0u32;
    for _ in 0..digits {
        code = code * 16 + chars.next()?.to_digit(16)?;
    }
    char::from_u32(code)
}
