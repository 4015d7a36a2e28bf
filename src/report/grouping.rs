//! Grouping of missed line numbers into contiguous ranges.

use std::fmt;

/// An inclusive run of line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub from: u32,
    pub to: u32,
}

impl LineRange {
    pub fn single(line: u32) -> Self {
        Self { from: line, to: line }
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from == self.to {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{}-{}", self.from, self.to)
        }
    }
}

/// Group line numbers into ranges, scanning in the order given.
///
/// A line extends the current range only when it is exactly `to + 1`.
/// Input is expected ascending; anything else produces unmerged ranges.
pub fn group_line_ranges<I>(lines: I) -> Vec<LineRange>
where
    I: IntoIterator<Item = u32>,
{
    lines.into_iter().fold(Vec::new(), |mut groups, line| {
        match groups.last_mut() {
            Some(last) if last.to.checked_add(1) == Some(line) => last.to = line,
            _ => groups.push(LineRange::single(line)),
        }
        groups
    })
}

/// Group line numbers and format each range (`"5"` or `"7-9"`).
pub fn group_missed_lines<I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = u32>,
{
    group_line_ranges(lines)
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_group_missed_lines_example() {
        assert_eq!(
            group_missed_lines([1, 2, 3, 5, 7, 8]),
            vec!["1-3", "5", "7-8"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(group_missed_lines(Vec::<u32>::new()).is_empty());
    }

    #[test]
    fn test_single_line() {
        assert_eq!(group_missed_lines([42]), vec!["42"]);
    }

    #[test]
    fn test_unsorted_input_is_not_merged() {
        assert_eq!(group_missed_lines([3, 2, 1]), vec!["3", "2", "1"]);
        assert_eq!(group_missed_lines([1, 2, 2, 3]), vec!["1-2", "2-3"]);
    }

    #[test]
    fn test_line_range_display() {
        assert_eq!(LineRange { from: 7, to: 9 }.to_string(), "7-9");
        assert_eq!(LineRange::single(4).to_string(), "4");
    }

    #[test]
    fn test_max_line_does_not_overflow() {
        assert_eq!(group_missed_lines([u32::MAX - 1, u32::MAX]).len(), 1);
    }

    proptest! {
        #[test]
        fn prop_ranges_cover_sorted_input_exactly(
            lines in proptest::collection::btree_set(1u32..500, 0..80)
        ) {
            let lines: Vec<u32> = lines.into_iter().collect();
            let ranges = group_line_ranges(lines.iter().copied());

            let expanded: Vec<u32> = ranges.iter().flat_map(|r| r.from..=r.to).collect();
            prop_assert_eq!(&expanded, &lines);

            let runs = lines.windows(2).filter(|w| w[1] != w[0] + 1).count()
                + usize::from(!lines.is_empty());
            prop_assert_eq!(ranges.len(), runs);

            for pair in ranges.windows(2) {
                prop_assert!(pair[1].from > pair[0].to + 1);
            }
        }
    }
}
