//! In-place integer sorting strategies.
//!
//! Both algorithms are the textbook quadratic variants: bubble sort always
//! runs every pass, selection sort always swaps the pass minimum into place.

use std::fmt;

/// Capability shared by every sorting algorithm the application can select.
pub trait SortStrategy {
    /// Human-readable algorithm name.
    fn name(&self) -> &'static str;

    /// Rearranges `data` into non-decreasing order.
    fn sort(&self, data: &mut [i32]);
}

/// Repeated adjacent compare-and-swap passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BubbleSort;

impl SortStrategy for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble sort"
    }

    fn sort(&self, data: &mut [i32]) {
        let n = data.len();
        for i in 0..n.saturating_sub(1) {
            for j in 0..n - i - 1 {
                if data[j] > data[j + 1] {
                    data.swap(j, j + 1);
                }
            }
        }
    }
}

/// Repeated scan-for-minimum passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionSort;

impl SortStrategy for SelectionSort {
    fn name(&self) -> &'static str {
        "selection sort"
    }

    fn sort(&self, data: &mut [i32]) {
        let n = data.len();
        for i in 0..n.saturating_sub(1) {
            let mut min_index = i;
            for j in (i + 1)..n {
                if data[j] < data[min_index] {
                    min_index = j;
                }
            }
            data.swap(i, min_index);
        }
    }
}

/// Closed set of selectable strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Bubble,
    Selection,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Bubble, Strategy::Selection];

    /// Selector character that chooses this strategy.
    pub fn selector(self) -> char {
        match self {
            Strategy::Bubble => 'B',
            Strategy::Selection => 'S',
        }
    }
}

impl SortStrategy for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::Bubble => BubbleSort.name(),
            Strategy::Selection => SelectionSort.name(),
        }
    }

    fn sort(&self, data: &mut [i32]) {
        match self {
            Strategy::Bubble => BubbleSort.sort(data),
            Strategy::Selection => SelectionSort.sort(data),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
