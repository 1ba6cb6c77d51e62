/// Join class fragments, skipping blanks and collapsing whitespace.
pub fn class_list<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_skips_blanks() {
        assert_eq!(class_list(["btn", "", "  btn-lg "]), "btn btn-lg");
    }

    #[test]
    fn test_class_list_collapses_multiline_fragments() {
        let multi = "w-full
                     bg-white   shadow";
        assert_eq!(class_list([multi, "z-50"]), "w-full bg-white shadow z-50");
    }

    #[test]
    fn test_class_list_empty() {
        assert_eq!(class_list(Vec::<&str>::new()), "");
    }
}
