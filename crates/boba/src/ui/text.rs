/// Hard-wrap `line` every `width` characters. Whitespace is kept as-is so
/// the row count always matches what gets drawn.
pub fn wrap_preserve(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    if line.is_empty() {
        return vec![String::new()];
    }
    let mut output = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;
    for ch in line.chars() {
        if count >= width {
            output.push(current);
            current = String::new();
            count = 0;
        }
        current.push(ch);
        count += 1;
    }
    output.push(current);
    output
}

#[cfg(test)]
mod tests {
    use super::wrap_preserve;

    #[test]
    fn wraps_on_character_count_not_words() {
        assert_eq!(
            wrap_preserve("abcdefgh ijklmnop", 6),
            vec!["abcdef", "gh ijk", "lmnop"]
        );
    }

    #[test]
    fn empty_line_is_one_row() {
        assert_eq!(wrap_preserve("", 4), vec![String::new()]);
    }

    #[test]
    fn zero_width_is_treated_as_one() {
        assert_eq!(wrap_preserve("ab", 0), vec!["a", "b"]);
    }
}
