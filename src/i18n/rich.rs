/// A run of translated text, either plain or wrapped in a named tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RichSegment {
    Text(String),
    Tagged { tag: String, text: String },
}

/// Splits `<tag>text</tag>` markup out of a translated string.
///
/// Tags do not nest. Anything that is not a balanced tag pair, including a
/// stray `<`, is kept as plain text.
pub fn parse_rich(input: &str) -> Vec<RichSegment> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut rest = input;

    while let Some(start) = rest.find('<') {
        text.push_str(&rest[..start]);
        let candidate = &rest[start..];
        match split_tagged(candidate) {
            Some((tag, inner, remaining)) => {
                if !text.is_empty() {
                    segments.push(RichSegment::Text(std::mem::take(&mut text)));
                }
                segments.push(RichSegment::Tagged {
                    tag: tag.to_string(),
                    text: inner.to_string(),
                });
                rest = remaining;
            }
            None => {
                text.push('<');
                rest = &candidate[1..];
            }
        }
    }
    text.push_str(rest);
    if !text.is_empty() {
        segments.push(RichSegment::Text(text));
    }
    segments
}

fn split_tagged(s: &str) -> Option<(&str, &str, &str)> {
    let body = s.strip_prefix('<')?;
    let end = body.find('>')?;
    let tag = &body[..end];
    let valid = !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return None;
    }
    let inner = &body[end + 1..];
    let close = format!("</{tag}>");
    let close_at = inner.find(&close)?;
    Some((tag, &inner[..close_at], &inner[close_at + close.len()..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> RichSegment {
        RichSegment::Text(s.to_string())
    }

    fn tagged(tag: &str, s: &str) -> RichSegment {
        RichSegment::Tagged {
            tag: tag.to_string(),
            text: s.to_string(),
        }
    }

    #[test]
    fn test_plain_text_is_one_segment() {
        assert_eq!(parse_rich("just words"), vec![text("just words")]);
        assert!(parse_rich("").is_empty());
    }

    #[test]
    fn test_tags_split_text() {
        let parsed = parse_rich("I use <react>React</react> and <nodejs>Node.js</nodejs>.");
        assert_eq!(
            parsed,
            vec![
                text("I use "),
                tagged("react", "React"),
                text(" and "),
                tagged("nodejs", "Node.js"),
                text("."),
            ]
        );
    }

    #[test]
    fn test_adjacent_tags() {
        assert_eq!(
            parse_rich("<a>x</a><b>y</b>"),
            vec![tagged("a", "x"), tagged("b", "y")]
        );
    }

    #[test]
    fn test_unbalanced_markup_stays_text() {
        assert_eq!(
            parse_rich("1 < 2 and <react>React"),
            vec![text("1 < 2 and <react>React")]
        );
        assert_eq!(
            parse_rich("<a>x</b> then <b>y</b>"),
            vec![text("<a>x</b> then "), tagged("b", "y")]
        );
        assert_eq!(parse_rich("</react>"), vec![text("</react>")]);
    }

    #[test]
    fn test_non_ascii_text_around_tags() {
        assert_eq!(
            parse_rich("perché <angular>Angular</angular> è"),
            vec![text("perché "), tagged("angular", "Angular"), text(" è")]
        );
    }
}
