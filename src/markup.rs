//! Tooltip markup stripping.
//!
//! Tooltip text ships with the client's inline markup: keyword anchors like
//! `<keyword=shield>`, color spans, and their closing tags, plus the odd
//! HTML entity. The catalog publishes both the raw string (`infoRaw`) and a
//! plain-text rendering (`info`); this module produces the latter.

/// Entities that show up in tooltip text. `&amp;` must decode after the
/// others so it cannot manufacture new entities.
const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&amp;", "&"),
];

/// Removes every `<...>` span from the text, decodes common HTML entities,
/// and trims the result.
///
/// The scanner tolerates malformed markup: an unmatched `>` passes through
/// as literal text, and an unterminated `<` swallows the remainder of the
/// string, which matches how the client itself fails on bad tooltips.
pub fn strip_markup(raw: &str) -> String {
    let mut plain = String::with_capacity(raw.len());
    let mut in_tag = false;
    for ch in raw.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => plain.push(ch),
            _ => {}
        }
    }
    for (entity, replacement) in ENTITIES {
        if plain.contains(entity) {
            plain = plain.replace(entity, replacement);
        }
    }
    plain.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip_markup("Deal 5 damage."), "Deal 5 damage.");
    }

    #[test]
    fn keyword_tags_are_removed() {
        assert_eq!(
            strip_markup("<keyword=deathwish>Deathwish</keyword>: Spawn a Rat."),
            "Deathwish: Spawn a Rat."
        );
    }

    #[test]
    fn color_spans_are_removed() {
        assert_eq!(
            strip_markup("Boost an ally by <color=gold>3</color>."),
            "Boost an ally by 3."
        );
    }

    #[test]
    fn unterminated_tag_swallows_the_tail() {
        assert_eq!(strip_markup("Deal 5 damage.<keyword=bleed"), "Deal 5 damage.");
    }

    #[test]
    fn bare_closing_angle_is_literal() {
        assert_eq!(strip_markup("5 > 3"), "5 > 3");
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(
            strip_markup("Spawn a token.&nbsp;&quot;Bear&quot; counts."),
            "Spawn a token. \"Bear\" counts."
        );
        assert_eq!(strip_markup("Mandrake &amp; Ale"), "Mandrake & Ale");
    }

    #[test]
    fn decoded_angle_brackets_stay_literal() {
        // &lt;/&gt; decode after tag removal, so they never open a tag.
        assert_eq!(strip_markup("power &lt;= 5"), "power <= 5");
    }

    #[test]
    fn amp_decodes_last() {
        assert_eq!(strip_markup("&amp;nbsp;"), "&nbsp;");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(strip_markup("  <i>Charge.</i> "), "Charge.");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(strip_markup(""), "");
    }
}
