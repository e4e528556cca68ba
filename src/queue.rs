/// A singly linked FIFO queue.
///
/// Nodes live inside a `Vec`. Slots freed by `dequeue` are kept on a free
/// list and reused by later `enqueue` calls, so a long traversal does not
/// keep growing the backing storage.
#[derive(Debug)]
pub(crate) struct Queue<T> {
    nodes: Vec<QueueNode<T>>,
    front: Option<usize>,
    rear: Option<usize>,
    free: Vec<usize>,
    len: usize,
}

#[derive(Debug)]
struct QueueNode<T> {
    value: Option<T>,
    next: Option<usize>,
}

impl<T> Queue<T> {
    pub(crate) fn new() -> Self {
        Queue {
            nodes: Vec::new(),
            front: None,
            rear: None,
            free: Vec::new(),
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    fn alloc_slot(&mut self, value: T) -> usize {
        let node = QueueNode {
            value: Some(value),
            next: None,
        };
        if let Some(idx) = self.free.pop() {
            self.nodes[idx] = node;
            idx
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }

    /// Appends `value` at the rear.
    pub(crate) fn enqueue(&mut self, value: T) {
        let idx = self.alloc_slot(value);
        match self.rear {
            Some(rear) => self.nodes[rear].next = Some(idx),
            None => self.front = Some(idx),
        }
        self.rear = Some(idx);
        self.len += 1;
    }

    /// Removes the front value, or `None` when the queue is empty.
    pub(crate) fn dequeue(&mut self) -> Option<T> {
        let idx = self.front?;
        let node = &mut self.nodes[idx];
        let value = node.value.take();
        self.front = node.next.take();
        if self.front.is_none() {
            self.rear = None;
        }
        self.free.push(idx);
        self.len -= 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut q = Queue::new();
        q.enqueue("a");
        q.enqueue("b");
        q.enqueue("c");
        assert_eq!(q.len(), 3);
        assert_eq!(q.dequeue(), Some("a"));
        assert_eq!(q.dequeue(), Some("b"));
        assert_eq!(q.dequeue(), Some("c"));
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.len(), 0);
    }

    #[test]
    fn test_empty_dequeue() {
        let mut q: Queue<u32> = Queue::new();
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.len(), 0);
    }

    #[test]
    fn test_interleaved_reuses_slots() {
        let mut q = Queue::new();
        for round in 0..100 {
            q.enqueue(round);
            q.enqueue(round + 1000);
            assert_eq!(q.dequeue(), Some(round));
            assert_eq!(q.dequeue(), Some(round + 1000));
        }
        assert_eq!(q.len(), 0);
        // freed slots are recycled instead of growing the arena
        assert!(q.nodes.len() <= 2);
    }

    #[test]
    fn test_rear_reset_after_drain() {
        let mut q = Queue::new();
        q.enqueue(1);
        assert_eq!(q.dequeue(), Some(1));
        q.enqueue(2);
        q.enqueue(3);
        assert_eq!(q.dequeue(), Some(2));
        assert_eq!(q.dequeue(), Some(3));
    }
}
