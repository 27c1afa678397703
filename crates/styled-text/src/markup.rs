//! Scanner for brace-delimited control groups.
//!
//! Input is literal text interleaved with `{key:value,...}` groups; each
//! group styles the literal text that follows it, up to the next group.
//! The scanner is a small explicit state machine so that every
//! malformed-input fallback (stray braces, unterminated groups, empty
//! groups) stays auditable.

/// Styling directives attached to one segment, keyed by single letter.
///
/// Keys are normalized to uppercase and keep their first-seen order so a
/// group re-serializes the way it was written; a repeated key overwrites
/// the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlAttrs {
    pairs: Vec<(char, String)>,
}

impl ControlAttrs {
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, key: char) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    fn insert(&mut self, key: char, value: String) {
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Re-serializes the group the way the scanner accepted it, `{}` for
    /// an unstyled segment.
    pub fn to_group_string(&self) -> String {
        let inner: Vec<String> = self
            .pairs
            .iter()
            .map(|(key, value)| format!("{key}:{value}"))
            .collect();
        format!("{{{}}}", inner.join(","))
    }
}

/// One parsed run of literal text plus the control group that styles it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub attrs: ControlAttrs,
    pub text: String,
}

/// A `{...}` group matched at the scan cursor, with the literal text it
/// owns and the unconsumed remainder.
struct GroupMatch<'a> {
    inner: &'a str,
    text: &'a str,
    rest: &'a str,
}

/// Splits `input` into styled segments plus the concatenated plain text.
///
/// Concatenating every segment's text always reproduces the plain text;
/// empty input yields no segments.
pub fn parse(input: &str) -> (String, Vec<Segment>) {
    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut rest = input;

    // Literal run before the first control group.
    if !rest.is_empty() && !rest.starts_with('{') {
        let end = rest.find('{').unwrap_or(rest.len());
        push_literal(&mut segments, &mut plain, &rest[..end]);
        rest = &rest[end..];
    }

    while !rest.is_empty() {
        let Some(group) = match_group(rest) else {
            // No well-formed group at the cursor (stray `}` run or an
            // unterminated `{`): the remainder is literal.
            push_literal(&mut segments, &mut plain, rest);
            break;
        };

        let pairs = scan_pairs(group.inner);
        if pairs.is_empty() {
            // Not a control group after all; keep the braces verbatim.
            let text = format!("{{{}}}{}", group.inner, group.text);
            push_literal(&mut segments, &mut plain, &text);
        } else {
            let mut attrs = ControlAttrs::default();
            for (key, value) in pairs {
                attrs.insert(key.to_ascii_uppercase(), value);
            }
            let mut text = group.text.to_owned();
            if attrs.get('X').is_some() {
                // Chip text must stay whitespace-free for width math.
                text.retain(|c| !c.is_whitespace());
            }
            plain.push_str(&text);
            segments.push(Segment { attrs, text });
        }
        rest = group.rest;
    }

    (plain, segments)
}

fn push_literal(segments: &mut Vec<Segment>, plain: &mut String, text: &str) {
    plain.push_str(text);
    segments.push(Segment {
        attrs: ControlAttrs::default(),
        text: text.to_owned(),
    });
}

fn match_group(input: &str) -> Option<GroupMatch<'_>> {
    let body = input.strip_prefix('{')?;
    let close = body.find('}')?;
    let inner = &body[..close];
    let after = &body[close + 1..];
    let text_end = after
        .find(|c: char| c == '{' || c == '}')
        .unwrap_or(after.len());
    Some(GroupMatch {
        inner,
        text: &after[..text_end],
        rest: &after[text_end..],
    })
}

/// Scans `key:value` pairs out of a group body: an ASCII letter, a colon,
/// then one or more characters up to the next `,`/`;` separator. Anything
/// between pairs is skipped, which keeps the scanner tolerant of stray
/// whitespace and separators.
fn scan_pairs(inner: &str) -> Vec<(char, String)> {
    let chars: Vec<char> = inner.chars().collect();
    let mut pairs = Vec::new();
    let mut i = 0;
    while i + 2 < chars.len() {
        if chars[i].is_ascii_alphabetic() && chars[i + 1] == ':' && !is_separator(chars[i + 2]) {
            let mut end = i + 2;
            while end < chars.len() && !is_separator(chars[end]) {
                end += 1;
            }
            pairs.push((chars[i], chars[i + 2..end].iter().collect()));
            i = end;
        } else {
            i += 1;
        }
    }
    pairs
}

fn is_separator(c: char) -> bool {
    c == ',' || c == ';'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(char, &str)]) -> ControlAttrs {
        let mut attrs = ControlAttrs::default();
        for (key, value) in pairs {
            attrs.insert(*key, (*value).to_owned());
        }
        attrs
    }

    #[test]
    fn plain_text_is_one_unstyled_segment() {
        let (plain, segments) = parse("no markup here");
        assert_eq!(plain, "no markup here");
        assert_eq!(segments.len(), 1);
        assert!(segments[0].attrs.is_empty());
        assert_eq!(segments[0].text, "no markup here");
    }

    #[test]
    fn empty_input_yields_no_segments() {
        let (plain, segments) = parse("");
        assert_eq!(plain, "");
        assert!(segments.is_empty());
    }

    #[test]
    fn leading_text_then_groups() {
        let (plain, segments) = parse("gain {C:red}+1 Mult");
        assert_eq!(plain, "gain +1 Mult");
        assert_eq!(segments.len(), 2);
        assert!(segments[0].attrs.is_empty());
        assert_eq!(segments[0].text, "gain ");
        assert_eq!(segments[1].attrs, attrs(&[('C', "red")]));
        assert_eq!(segments[1].text, "+1 Mult");
    }

    #[test]
    fn keys_are_uppercased_and_values_kept() {
        let (_, segments) = parse("{c:red,e:1}hot");
        assert_eq!(segments[0].attrs.get('C'), Some("red"));
        assert_eq!(segments[0].attrs.get('E'), Some("1"));
        assert_eq!(segments[0].attrs.get('c'), None);
    }

    #[test]
    fn semicolons_separate_pairs_too() {
        let (_, segments) = parse("{C:red;S:0.5}x");
        assert_eq!(segments[0].attrs.get('C'), Some("red"));
        assert_eq!(segments[0].attrs.get('S'), Some("0.5"));
    }

    #[test]
    fn repeated_key_overwrites_in_place() {
        let (_, segments) = parse("{C:red,C:blue}x");
        assert_eq!(segments[0].attrs.get('C'), Some("blue"));
        assert_eq!(segments[0].attrs.to_group_string(), "{C:blue}");
    }

    #[test]
    fn chip_groups_strip_whitespace_from_their_text() {
        let (plain, segments) = parse("{X:red}a b\tc");
        assert_eq!(segments[0].text, "abc");
        assert_eq!(plain, "abc");
    }

    #[test]
    fn malformed_group_is_kept_verbatim() {
        let (plain, segments) = parse("{not a command}tail");
        assert_eq!(segments.len(), 1);
        assert!(segments[0].attrs.is_empty());
        assert_eq!(segments[0].text, "{not a command}tail");
        assert_eq!(plain, "{not a command}tail");
    }

    #[test]
    fn consecutive_groups_keep_the_empty_segment() {
        let (plain, segments) = parse("{C:red}{E:1}wob");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "");
        assert_eq!(segments[0].attrs.get('C'), Some("red"));
        assert_eq!(segments[1].text, "wob");
        assert_eq!(plain, "wob");
    }

    #[test]
    fn stray_close_brace_becomes_literal() {
        let (plain, segments) = parse("{C:red}ab}cd");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "ab");
        assert!(segments[1].attrs.is_empty());
        assert_eq!(segments[1].text, "}cd");
        assert_eq!(plain, "ab}cd");
    }

    #[test]
    fn unterminated_group_becomes_literal() {
        let (plain, segments) = parse("{C:red}ab{E:1");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].text, "{E:1");
        assert_eq!(plain, "ab{E:1");
    }

    #[test]
    fn unicode_text_passes_through() {
        let (plain, segments) = parse("{C:gold}Geld¥©µ");
        assert_eq!(segments[0].text, "Geld¥©µ");
        assert_eq!(plain, "Geld¥©µ");
    }

    #[test]
    fn segment_texts_concatenate_to_plain_text() {
        let inputs = [
            "plain",
            "{C:red}a{X:blue}b c{E:2}d",
            "lead{bad}mid{C:green}tail}x",
            "{C:red}ab{",
        ];
        for input in inputs {
            let (plain, segments) = parse(input);
            let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
            assert_eq!(joined, plain, "input: {input}");
        }
    }
}
