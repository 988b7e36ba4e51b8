//! Variable ordering.

use crate::pool::SlotIndex;

/// Minimum remaining values: the unassigned variable with the smallest live
/// domain, ties going to the lowest index (declaration order).
pub(crate) fn select_variable(
    domains: &[Vec<SlotIndex>],
    assigned: &[Option<SlotIndex>],
) -> Option<usize> {
    domains
        .iter()
        .zip(assigned)
        .enumerate()
        .filter(|(_, (_, value))| value.is_none())
        .min_by_key(|(i, (domain, _))| (domain.len(), *i))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(n: usize) -> Vec<SlotIndex> {
        (0..n).map(SlotIndex).collect()
    }

    #[test]
    fn smallest_domain_wins() {
        let domains = vec![domain(3), domain(1), domain(2)];
        assert_eq!(select_variable(&domains, &[None, None, None]), Some(1));
    }

    #[test]
    fn ties_go_to_declaration_order() {
        let domains = vec![domain(2), domain(2), domain(2)];
        assert_eq!(select_variable(&domains, &[None, None, None]), Some(0));
        assert_eq!(
            select_variable(&domains, &[Some(SlotIndex(0)), None, None]),
            Some(1)
        );
    }

    #[test]
    fn assigned_variables_are_skipped() {
        let domains = vec![domain(1), domain(5)];
        assert_eq!(
            select_variable(&domains, &[Some(SlotIndex(0)), None]),
            Some(1)
        );
        assert_eq!(
            select_variable(&domains, &[Some(SlotIndex(0)), Some(SlotIndex(1))]),
            None
        );
    }
}
