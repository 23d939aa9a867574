//! Canonical taxon names
//!
//! Taxon names are compared in canonical form: words separated by a single
//! space, lower-case, with only the first letter upper-cased
//! ("  homo   SAPIENS " becomes "Homo sapiens").

use alloc::string::String;

/// Return a taxon name in its canonical form
///
/// The result is empty if the name has no visible characters.
pub fn canonical_name(name: &str) -> String {
    let mut joined = String::with_capacity(name.len());
    for word in name.split_whitespace() {
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(word);
    }

    let lower = joined.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    // Keep characters whose upper case is not a single char ('ß' is "SS")
    let mut upper = first.to_uppercase();
    let first = match (upper.next(), upper.next()) {
        (Some(up), None) => up,
        _ => first,
    };
    let mut canon = String::with_capacity(lower.len());
    canon.push(first);
    canon.push_str(chars.as_str());
    canon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_name() {
        assert_eq!(canonical_name("Brontostoma discus"), "Brontostoma discus");
        assert_eq!(canonical_name("  Foo  bar "), "Foo bar");
        assert_eq!(canonical_name("foo bar"), "Foo bar");
        assert_eq!(canonical_name("EORAPTOR\tLUNENSIS"), "Eoraptor lunensis");
        assert_eq!(canonical_name("x"), "X");
    }

    #[test]
    fn test_canonical_name_empty() {
        assert_eq!(canonical_name(""), "");
        assert_eq!(canonical_name(" \t \n"), "");
    }

    #[test]
    fn test_canonical_name_idempotent() {
        let names = [
            "  Foo  bar ",
            "rhododendron ERICOIDES",
            "Élan vital",
            "a",
            "ßeta",
            "ŉx",
        ];
        for name in names {
            let once = canonical_name(name);
            assert_eq!(canonical_name(&once), once);
        }
        assert_eq!(canonical_name("élan VITAL"), "Élan vital");
        assert_eq!(canonical_name("ßETA"), "ßeta");
    }
}
