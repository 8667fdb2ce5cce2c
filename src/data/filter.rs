use super::model::Prize;

// ---------------------------------------------------------------------------
// Selector state: optional year and category constraints
// ---------------------------------------------------------------------------

/// User-chosen constraints. `None` means no constraint on that dimension,
/// so the default selection shows everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub year: Option<i32>,
    pub category: Option<String>,
}

/// Whether a prize passes both active selectors.
///
/// * Year: the prize's raw year is coerced to a number first; a non-numeric
///   year fails any year match.
/// * Category: case-insensitive string equality.
pub fn matches(prize: &Prize, selection: &Selection) -> bool {
    let year_ok = match selection.year {
        None => true,
        Some(y) => prize.year.as_i32() == Some(y),
    };
    let category_ok = match &selection.category {
        None => true,
        Some(c) => prize.category.eq_ignore_ascii_case(c),
    };
    year_ok && category_ok
}

/// Return indices of prizes that pass the current selection, in source order.
pub fn filtered_indices(prizes: &[Prize], selection: &Selection) -> Vec<usize> {
    prizes
        .iter()
        .enumerate()
        .filter(|(_, p)| matches(p, selection))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Laureate, YearField};

    fn prize(year: &str, category: &str, ids: &[&str]) -> Prize {
        Prize {
            year: YearField::Text(year.to_string()),
            category: category.to_string(),
            laureates: ids
                .iter()
                .map(|id| Laureate {
                    id: id.to_string(),
                    ..Default::default()
                })
                .collect(),
        }
    }

    fn sample() -> Vec<Prize> {
        vec![
            prize("1901", "Physics", &["1"]),
            prize("1902", "Physics", &["1"]),
            prize("1901", "chemistry", &["2"]),
            prize("n/a", "Physics", &["3"]),
        ]
    }

    #[test]
    fn empty_selection_is_the_identity() {
        let prizes = sample();
        let indices = filtered_indices(&prizes, &Selection::default());
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn output_is_an_order_preserving_subsequence() {
        let prizes = sample();
        let selection = Selection {
            year: None,
            category: Some("physics".into()),
        };
        let indices = filtered_indices(&prizes, &selection);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
        assert!(indices.iter().all(|&i| i < prizes.len()));
    }

    #[test]
    fn year_and_category_must_both_match() {
        let prizes = sample();
        let selection = Selection {
            year: Some(1901),
            category: Some("physics".into()),
        };
        assert_eq!(filtered_indices(&prizes, &selection), vec![0]);
    }

    #[test]
    fn category_match_is_case_insensitive() {
        let prizes = sample();
        let selection = Selection {
            year: None,
            category: Some("CHEMISTRY".into()),
        };
        assert_eq!(filtered_indices(&prizes, &selection), vec![2]);
    }

    #[test]
    fn non_numeric_year_fails_the_year_match() {
        let prizes = sample();
        let selection = Selection {
            year: Some(1901),
            category: None,
        };
        let indices = filtered_indices(&prizes, &selection);
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let selection = Selection {
            year: Some(1901),
            category: Some("Peace".into()),
        };
        assert!(filtered_indices(&[], &selection).is_empty());
    }

    #[test]
    fn categories_outside_the_fixed_set_match_by_year_only() {
        let prizes = vec![prize("1969", "economic sciences", &["9"])];
        let by_year = Selection {
            year: Some(1969),
            category: None,
        };
        assert_eq!(filtered_indices(&prizes, &by_year), vec![0]);
    }
}
