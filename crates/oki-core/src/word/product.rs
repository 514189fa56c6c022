/// Join every combination of one option per slot, in slot order.
///
/// The first slot varies slowest. Identical joined strings coming from
/// different combinations are all kept. No slots yields one empty string;
/// any empty slot yields nothing.
pub(crate) fn join_product<'a, I>(slots: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut joined = vec![String::new()];
    for options in slots {
        joined = joined
            .iter()
            .flat_map(|prefix| options.iter().map(move |o| format!("{prefix}{o}")))
            .collect();
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_slot_varies_slowest() {
        let a = strings(&["A", "B"]);
        let b = strings(&["x", "y"]);
        let out = join_product([a.as_slice(), b.as_slice()]);
        assert_eq!(out, vec!["Ax", "Ay", "Bx", "By"]);
    }

    #[test]
    fn test_duplicates_retained() {
        let a = strings(&["ア", "アア"]);
        let b = strings(&["アア", "ア"]);
        let out = join_product([a.as_slice(), b.as_slice()]);
        assert_eq!(out, vec!["アアア", "アア", "アアアア", "アアア"]);
    }

    #[test]
    fn test_no_slots() {
        let out = join_product(std::iter::empty::<&[String]>());
        assert_eq!(out, vec![String::new()]);
    }

    #[test]
    fn test_empty_slot() {
        let a = strings(&["A"]);
        let out = join_product([a.as_slice(), &[]]);
        assert!(out.is_empty());
    }
}
