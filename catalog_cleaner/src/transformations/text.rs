//! Unicode-aware word capitalization.

/// A letter that has case (upper or lower). Digits, punctuation and
/// caseless scripts act as word separators.
fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

/// Case-map one cased letter so the result is again made of cased letters.
///
/// Multi-char mappings are kept only when every char of the mapping is
/// cased (`"ß"` -> `"Ss"`). Otherwise the first char is kept if it is cased
/// (`"İ"` lowercases to `"i"`, dropping the combining dot), and failing that
/// the letter is copied unchanged.
fn push_case_mapped(out: &mut String, c: char, upper: bool) {
    let mapped: Vec<char> = if upper {
        let mut chars = c.to_uppercase();
        let first = chars.next();
        first
            .into_iter()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    } else {
        c.to_lowercase().collect()
    };

    if mapped.iter().all(|&m| is_cased(m)) {
        out.extend(mapped);
    } else if let Some(&first) = mapped.first().filter(|&&m| is_cased(m)) {
        out.push(first);
    } else {
        out.push(c);
    }
}

/// Title-case a string: the first cased letter of every word is upper-cased,
/// the remaining cased letters are lower-cased.
///
/// A word starts after any character that is not a cased letter, so
/// `"o'neil"` becomes `"O'Neil"` and `"1st"` becomes `"1St"`. Cased letters
/// only ever map to cased letters, so word boundaries survive a second pass
/// and the function is idempotent.
///
/// # Examples
///
/// ```
/// use catalog_cleaner::transformations::title_case;
///
/// assert_eq!(title_case("a TALE of two cities"), "A Tale Of Two Cities");
/// assert_eq!(title_case(&title_case("élan VITAL")), "Élan Vital");
/// ```
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_cased = false;

    for c in value.chars() {
        if is_cased(c) {
            push_case_mapped(&mut out, c, !previous_cased);
            previous_cased = true;
        } else {
            out.push(c);
            previous_cased = false;
        }
    }

    out
}
