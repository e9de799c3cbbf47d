/// Remove `{...}` formatting tokens (`{wi}`, `{/it}`, `{ldquo}`, ...) from running text
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;

    for c in text.chars() {
        match c {
            '{' => depth += 1,
            '}' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_paired_tokens() {
        assert_eq!(
            strip_markup("{wi}hello{/wi}, is anybody there?"),
            "hello, is anybody there?"
        );
    }

    #[test]
    fn strips_standalone_tokens_and_tidies_spacing() {
        assert_eq!(
            strip_markup("{ldquo}Hello,{rdquo} she said {it}softly{/it} "),
            "Hello, she said softly"
        );
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(strip_markup("plain text"), "plain text");
    }
}
