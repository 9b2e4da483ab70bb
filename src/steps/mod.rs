// Step generation for insertion sort playback

use std::fmt;

/// The semantic kind of a visualization step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// `indices[0]` is the key about to be inserted
    Current,
    /// `indices = [j, i]`: the sorted-prefix element and the key position
    Compare,
    /// `indices = [from, to]`: `array[from]` was shifted one slot right
    Shift,
    /// `indices[0]` received the key
    Insert,
    /// `indices` are the positions known to be sorted so far
    Sorted,
    /// Every position is sorted
    Complete,
}

impl StepKind {
    /// Short lowercase name, used in logs and the status bar
    pub fn name(self) -> &'static str {
        match self {
            StepKind::Current => "current",
            StepKind::Compare => "compare",
            StepKind::Shift => "shift",
            StepKind::Insert => "insert",
            StepKind::Sorted => "sorted",
            StepKind::Complete => "complete",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One atomic, replayable unit of the sort
///
/// `snapshot` is the full array immediately after this step's effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<T = u32> {
    pub kind: StepKind,
    pub indices: Vec<usize>,
    pub snapshot: Vec<T>,
}

impl<T: Clone> Step<T> {
    fn new(kind: StepKind, indices: Vec<usize>, array: &[T]) -> Self {
        Step {
            kind,
            indices,
            snapshot: array.to_vec(),
        }
    }
}

/// Run insertion sort over a copy of `source`, recording every comparison,
/// shift, and insertion as a [`Step`].
///
/// The whole list is built up front so playback can pause, resume, and reset
/// without re-running the algorithm. Comparison is strict `>`, which keeps
/// the sort stable: equal elements are never shifted past each other.
///
/// # Example
///
/// ```
/// use sortty::steps::{generate_steps, StepKind};
///
/// let steps = generate_steps(&[5, 3, 8, 1]);
/// let first_compare = steps.iter().find(|s| s.kind == StepKind::Compare).unwrap();
/// assert_eq!(first_compare.indices, vec![0, 1]);
/// assert_eq!(steps.last().unwrap().snapshot, vec![1, 3, 5, 8]);
/// ```
pub fn generate_steps<T: PartialOrd + Clone>(source: &[T]) -> Vec<Step<T>> {
    let mut array = source.to_vec();
    let n = array.len();

    if n == 0 {
        return vec![Step::new(StepKind::Complete, Vec::new(), &array)];
    }

    let mut steps = Vec::with_capacity(2 + 3 * (n - 1));

    // Position 0 is trivially sorted
    steps.push(Step::new(StepKind::Sorted, vec![0], &array));

    for i in 1..n {
        steps.push(Step::new(StepKind::Current, vec![i], &array));

        let key = array[i].clone();
        // `hole` is j + 1 in the textbook formulation, which avoids a signed index
        let mut hole = i;

        while hole > 0 && array[hole - 1] > key {
            let j = hole - 1;
            steps.push(Step::new(StepKind::Compare, vec![j, i], &array));

            array[hole] = array[j].clone();
            steps.push(Step::new(StepKind::Shift, vec![j, hole], &array));

            hole = j;
        }

        array[hole] = key;
        steps.push(Step::new(StepKind::Insert, vec![hole], &array));
        steps.push(Step::new(StepKind::Sorted, (0..=i).collect(), &array));
    }

    steps.push(Step::new(StepKind::Complete, (0..n).collect(), &array));
    steps
}

/// Number of steps [`generate_steps`] produces for `source`, computed without
/// building snapshots.
pub fn expected_step_count<T: PartialOrd>(source: &[T]) -> usize {
    if source.is_empty() {
        return 1;
    }

    let mut count = 2;
    for i in 1..source.len() {
        // Elements before i greater than source[i] are exactly the ones shifted
        let shifts = source[..i].iter().filter(|x| **x > source[i]).count();
        count += 3 + 2 * shifts;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(steps: &[Step]) -> Vec<StepKind> {
        steps.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_empty_input_only_completes() {
        let steps = generate_steps::<u32>(&[]);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].kind, StepKind::Complete);
        assert!(steps[0].indices.is_empty());
        assert!(steps[0].snapshot.is_empty());
    }

    #[test]
    fn test_single_element() {
        let steps = generate_steps(&[42]);
        assert_eq!(kinds(&steps), vec![StepKind::Sorted, StepKind::Complete]);
        assert_eq!(steps[0].indices, vec![0]);
        assert_eq!(steps[1].indices, vec![0]);
        assert_eq!(steps[1].snapshot, vec![42]);
    }

    #[test]
    fn test_full_trace_for_two_elements() {
        let steps = generate_steps(&[2, 1]);
        assert_eq!(
            kinds(&steps),
            vec![
                StepKind::Sorted,
                StepKind::Current,
                StepKind::Compare,
                StepKind::Shift,
                StepKind::Insert,
                StepKind::Sorted,
                StepKind::Complete,
            ]
        );

        // compare carries the snapshot from before the shift
        assert_eq!(steps[2].indices, vec![0, 1]);
        assert_eq!(steps[2].snapshot, vec![2, 1]);

        assert_eq!(steps[3].indices, vec![0, 1]);
        assert_eq!(steps[3].snapshot, vec![2, 2]);

        assert_eq!(steps[4].indices, vec![0]);
        assert_eq!(steps[4].snapshot, vec![1, 2]);

        assert_eq!(steps[5].indices, vec![0, 1]);
        assert_eq!(steps[6].indices, vec![0, 1]);
    }

    #[test]
    fn test_scenario_5_3_8_1() {
        let steps = generate_steps(&[5, 3, 8, 1]);

        let first_compare = steps.iter().find(|s| s.kind == StepKind::Compare).unwrap();
        assert_eq!(first_compare.indices, vec![0, 1]);

        let last = steps.last().unwrap();
        assert_eq!(last.kind, StepKind::Complete);
        assert_eq!(last.indices, vec![0, 1, 2, 3]);
        assert_eq!(last.snapshot, vec![1, 3, 5, 8]);
        assert_eq!(steps.len(), expected_step_count(&[5, 3, 8, 1]));
    }

    #[test]
    fn test_already_sorted_has_no_compares_or_shifts() {
        let steps = generate_steps(&[1, 2, 3]);
        assert!(steps
            .iter()
            .all(|s| s.kind != StepKind::Compare && s.kind != StepKind::Shift));
        // sorted + 3 per element after the first + complete
        assert_eq!(steps.len(), 1 + 2 * 3 + 1);
    }

    #[test]
    fn test_equal_values_never_shift() {
        let steps = generate_steps(&[7, 7, 7, 7]);
        assert!(steps.iter().all(|s| s.kind != StepKind::Shift));
        assert_eq!(steps.last().unwrap().snapshot, vec![7, 7, 7, 7]);
    }

    #[test]
    fn test_stability_with_keyed_records() {
        #[derive(Debug, Clone, PartialEq)]
        struct Card(u32, char);

        impl PartialOrd for Card {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let input = vec![Card(3, 'a'), Card(1, 'b'), Card(3, 'c'), Card(1, 'd')];
        let steps = generate_steps(&input);
        let order: Vec<char> = steps.last().unwrap().snapshot.iter().map(|c| c.1).collect();
        assert_eq!(order, vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn test_sorted_steps_grow_prefix() {
        let steps = generate_steps(&[4, 3, 2, 1]);
        let prefixes: Vec<usize> = steps
            .iter()
            .filter(|s| s.kind == StepKind::Sorted)
            .map(|s| s.indices.len())
            .collect();
        assert_eq!(prefixes, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_reverse_sorted_step_count() {
        // every earlier element shifts: 1 + 2 + 3 shifts
        let input = [4, 3, 2, 1];
        assert_eq!(expected_step_count(&input), 2 + 3 * 3 + 2 * 6);
        assert_eq!(generate_steps(&input).len(), expected_step_count(&input));
    }
}
