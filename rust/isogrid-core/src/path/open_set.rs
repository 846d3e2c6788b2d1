/// Binary min-heap of search nodes keyed by heuristic only.
///
/// Ties are resolved purely by heap position (sift-up on push, sift-down of
/// the last element on pop), so equal keys come out in a fixed, reproducible
/// order that is neither FIFO nor LIFO. Search results depend on this order.
#[derive(Clone, Debug, Default)]
pub struct OpenSet {
    heap: Vec<Key>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Key {
    pub heuristic: u64,
    pub node: u32,
}

impl Key {
    pub fn new(heuristic: u64, node: u32) -> Self { Self { heuristic, node } }
}

impl OpenSet {
    pub fn new() -> Self { Self { heap: Vec::new() } }

    pub fn with_capacity(capacity: usize) -> Self { Self { heap: Vec::with_capacity(capacity) } }

    pub fn push(&mut self, key: Key) {
        let mut k = self.heap.len();
        self.heap.push(key);
        while k > 0 {
            let parent = (k - 1) >> 1;
            if key.heuristic >= self.heap[parent].heuristic {
                break;
            }
            self.heap[k] = self.heap[parent];
            k = parent;
        }
        self.heap[k] = key;
    }

    /// Remove and return the key with the smallest heuristic.
    pub fn pop(&mut self) -> Option<Key> {
        let last = self.heap.pop()?;
        let Some(&top) = self.heap.first() else { return Some(last); };

        let n = self.heap.len();
        let half = n >> 1;
        let mut k = 0;
        while k < half {
            let mut child = 2 * k + 1;
            let right = child + 1;
            if right < n && self.heap[child].heuristic > self.heap[right].heuristic {
                child = right;
            }
            if last.heuristic <= self.heap[child].heuristic {
                break;
            }
            self.heap[k] = self.heap[child];
            k = child;
        }
        self.heap[k] = last;
        Some(top)
    }

    pub fn peek(&self) -> Option<&Key> { self.heap.first() }

    pub fn len(&self) -> usize { self.heap.len() }

    pub fn is_empty(&self) -> bool { self.heap.is_empty() }

    pub fn clear(&mut self) { self.heap.clear() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(open: &mut OpenSet) -> Vec<Key> { std::iter::from_fn(|| open.pop()).collect() }

    #[test]
    fn pops_in_heuristic_order() {
        let mut open = OpenSet::new();
        for (i, h) in [7u64, 3, 9, 1, 4, 4, 8].into_iter().enumerate() {
            open.push(Key::new(h, i as u32));
        }
        assert_eq!(open.len(), 7);
        assert_eq!(open.peek().map(|k| k.heuristic), Some(1));
        let order: Vec<u64> = drain(&mut open).iter().map(|k| k.heuristic).collect();
        assert_eq!(order, vec![1, 3, 4, 4, 7, 8, 9]);
        assert!(open.is_empty());
    }

    #[test]
    fn equal_keys_follow_heap_positions() {
        let mut open = OpenSet::new();
        for node in 1..=3 {
            open.push(Key::new(5, node));
        }
        let nodes: Vec<u32> = drain(&mut open).iter().map(|k| k.node).collect();
        assert_eq!(nodes, vec![1, 3, 2]);
    }

    #[test]
    fn interleaved_push_pop() {
        let mut open = OpenSet::with_capacity(4);
        open.push(Key::new(2, 0));
        open.push(Key::new(1, 1));
        assert_eq!(open.pop(), Some(Key::new(1, 1)));
        open.push(Key::new(0, 2));
        open.push(Key::new(3, 3));
        assert_eq!(open.pop(), Some(Key::new(0, 2)));
        assert_eq!(open.pop(), Some(Key::new(2, 0)));
        assert_eq!(open.pop(), Some(Key::new(3, 3)));
        assert_eq!(open.pop(), None);
        open.push(Key::new(1, 4));
        open.clear();
        assert!(open.is_empty());
    }
}
