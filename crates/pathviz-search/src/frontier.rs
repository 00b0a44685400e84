use std::collections::VecDeque;

use pathviz_core::Point;

/// Container of discovered-but-unexpanded cells for the unweighted searches.
///
/// The pop order is what distinguishes BFS from DFS.
pub(crate) trait Frontier {
    fn push(&mut self, p: Point);
    fn pop(&mut self) -> Option<Point>;
}

/// FIFO order (BFS).
impl Frontier for VecDeque<Point> {
    #[inline]
    fn push(&mut self, p: Point) {
        self.push_back(p);
    }

    #[inline]
    fn pop(&mut self) -> Option<Point> {
        self.pop_front()
    }
}

/// LIFO order (DFS).
impl Frontier for Vec<Point> {
    #[inline]
    fn push(&mut self, p: Point) {
        Vec::push(self, p);
    }

    #[inline]
    fn pop(&mut self) -> Option<Point> {
        Vec::pop(self)
    }
}

/// Priority-queue entry for Dijkstra / A*, ordered for use in `BinaryHeap`.
///
/// Lowest score pops first; equal scores pop in insertion order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct QueueEntry {
    pub(crate) score: i32,
    pub(crate) seq: u64,
    pub(crate) pos: Point,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest score first.
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_pops_lowest_score_then_oldest() {
        let mut heap = BinaryHeap::new();
        let entries = [(3, 0), (1, 1), (3, 2), (1, 3), (2, 4)];
        for (score, seq) in entries {
            heap.push(QueueEntry {
                score,
                seq,
                pos: Point::new(seq as i32, 0),
            });
        }
        let order: Vec<u64> = std::iter::from_fn(|| heap.pop()).map(|e| e.seq).collect();
        assert_eq!(order, vec![1, 3, 4, 0, 2]);
    }

    #[test]
    fn fifo_and_lifo() {
        let mut q: VecDeque<Point> = VecDeque::new();
        let mut s: Vec<Point> = Vec::new();
        for i in 0..3 {
            Frontier::push(&mut q, Point::new(i, 0));
            Frontier::push(&mut s, Point::new(i, 0));
        }
        assert_eq!(Frontier::pop(&mut q), Some(Point::new(0, 0)));
        assert_eq!(Frontier::pop(&mut s), Some(Point::new(2, 0)));
    }
}
