//! Message interpolation and title casing.

/// Replace `{name}` tokens in `template` with values from `args`.
///
/// Single pass: substituted values are never re-scanned. Unknown tokens and
/// unclosed braces are emitted as-is.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            result.push(ch);
            continue;
        }

        let mut token = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            token.push(c);
        }

        match args.iter().find(|&&(name, _)| closed && name == token) {
            Some(&(_, value)) => result.push_str(value),
            None => {
                result.push('{');
                result.push_str(&token);
                if closed {
                    result.push('}');
                }
            }
        }
    }

    result
}

/// Capitalize the first letter of every whitespace-separated word not in
/// `exclude`. Words are re-joined with single spaces.
///
/// Trailing punctuation is ignored when matching `exclude`, so `"euros,"`
/// counts as `"euros"`.
pub fn title_case(value: &str, exclude: &[&str]) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let bare = word.trim_end_matches(|c: char| c.is_ascii_punctuation());
            if exclude.contains(&word) || exclude.contains(&bare) {
                return word.to_string();
            }
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
