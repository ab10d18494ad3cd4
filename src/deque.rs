//! A [`BlockDeque`] is a double-ended queue that keeps its elements in a chain of fixed-size
//! blocks. Its API is similar to [`VecDeque`](std::collections::VecDeque), but growing at a full
//! end links on one new block instead of reallocating and copying the whole buffer, and inserting
//! or removing in the middle only ever moves the shorter side of the sequence.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

/// Number of element slots per block when no block size is given at construction.
pub const DEFAULT_BLOCK_SIZE: usize = 16;

/// An indexable double-ended queue backed by a list of fixed-capacity blocks.
///
/// Pushing at either end is amortized O(1): when the end block has no spare slot, a single new
/// block is allocated at that end and no existing element moves. [`insert`](BlockDeque::insert)
/// and [`remove`](BlockDeque::remove) shift the side of the sequence nearer to the touched index,
/// carrying one boundary element across each block in between, so they move at most
/// `min(index, len - index)` elements regardless of how long the deque is.
///
/// # Examples
/// ```
/// use rigatoni::BlockDeque;
/// let mut deque = BlockDeque::new();
/// deque.push_back(2);
/// deque.push_front(1);
/// deque.push_back(3);
/// assert_eq!(deque, [1, 2, 3]);
/// ```
///
/// # Iteration
/// [`iter`](BlockDeque::iter) borrows the deque and yields elements in logical order. Every
/// structural mutation bumps an internal generation counter and a live iterator panics if it
/// observes a bump, so an iterator smuggled past the borrow checker through unsafe code fails
/// fast instead of reading shifted slots.
pub struct BlockDeque<T> {
    /// Never empty. Each block is exactly `block_size` slots; slots outside the live range
    /// hold `None`.
    blocks: Vec<Box<[Option<T>]>>,
    block_size: usize,
    /// Slot of the first live element within the first block.
    front: usize,
    /// One past the slot of the last live element within the last block.
    back: usize,
    len: usize,
    generation: u64,
}

impl<T> BlockDeque<T> {
    /// Creates an empty `BlockDeque` with the default block size of 16 slots.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let mut deque = BlockDeque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque, [1, 2]);
    /// ```
    pub fn new() -> Self {
        Self::with_block_size(DEFAULT_BLOCK_SIZE)
    }

    /// Creates an empty `BlockDeque` whose blocks each hold `block_size` elements.
    ///
    /// Small blocks keep per-deque overhead low, large blocks amortize allocation better; the
    /// shifting cost of [`insert`](BlockDeque::insert) and [`remove`](BlockDeque::remove) does
    /// not depend on the block size.
    ///
    /// # Panics
    /// Panics if `block_size` is zero.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let mut deque = BlockDeque::with_block_size(4);
    /// for i in 0..10 {
    ///     deque.push_back(i);
    /// }
    /// assert_eq!(deque.block_count(), 3);
    /// assert_eq!(deque[9], 9);
    /// ```
    pub fn with_block_size(block_size: usize) -> Self {
        assert!(block_size > 0, "blocks must have positive size");
        BlockDeque {
            blocks: vec![Self::new_block(block_size)],
            block_size,
            front: 0,
            back: 0,
            len: 0,
            generation: 0,
        }
    }

    fn new_block(block_size: usize) -> Box<[Option<T>]> {
        std::iter::repeat_with(|| None).take(block_size).collect()
    }

    /// Returns the number of elements in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the deque contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let mut deque = BlockDeque::new();
    /// assert!(deque.is_empty());
    ///
    /// deque.push_back(1);
    /// assert!(!deque.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the capacity of each block in elements.
    #[inline]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns the number of blocks currently allocated. An empty deque keeps one block around
    /// so that the next push never allocates.
    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Returns the structural-mutation counter. Every push, pop, insert, remove and clear bumps
    /// it; overwriting an element in place through [`get_mut`](BlockDeque::get_mut) or
    /// `IndexMut` does not.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let mut deque = BlockDeque::new();
    /// let before = deque.generation();
    /// deque.push_back(1);
    /// assert_ne!(deque.generation(), before);
    /// ```
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Maps a logical index to (block, slot). Block 0 is trimmed at the front by `self.front`;
    /// every later block is logically full-width, so plain division does the rest.
    #[inline]
    fn locate(&self, index: usize) -> (usize, usize) {
        debug_assert!(index < self.len);
        let effective = index + self.front;
        (effective / self.block_size, effective % self.block_size)
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let deque = BlockDeque::from([1, 2, 3]);
    /// assert_eq!(deque.get(1), Some(&2));
    /// assert_eq!(deque.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let (block, slot) = self.locate(index);
        self.blocks[block][slot].as_ref()
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let mut deque = BlockDeque::from([1, 2, 3]);
    /// if let Some(item) = deque.get_mut(1) {
    ///     *item = 20;
    /// }
    /// assert_eq!(deque, [1, 20, 3]);
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let (block, slot) = self.locate(index);
        self.blocks[block][slot].as_mut()
    }

    /// Returns a reference to the first element, or `None` if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let mut deque = BlockDeque::new();
    /// assert_eq!(deque.front(), None);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.front(), Some(&1));
    /// ```
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the last element, or `None` if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let mut deque = BlockDeque::new();
    /// assert_eq!(deque.back(), None);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.back(), Some(&2));
    /// ```
    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.get(self.len - 1)
    }

    /// Returns a mutable reference to the first element, or `None` if the deque is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a mutable reference to the last element, or `None` if the deque is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            return None;
        }
        self.get_mut(self.len - 1)
    }

    /// Pushes an element onto the front of the deque.
    ///
    /// When the first block has no spare slot at its front, one new block is allocated and
    /// linked in; no existing element is moved.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let mut deque = BlockDeque::from([42, 10]);
    /// deque.push_front(100);
    /// assert_eq!(deque.pop_front(), Some(100));
    /// ```
    pub fn push_front(&mut self, item: T) {
        self.generation += 1;
        if self.front == 0 {
            self.blocks.insert(0, Self::new_block(self.block_size));
            self.front = self.block_size;
        }
        self.front -= 1;
        self.blocks[0][self.front] = Some(item);
        self.len += 1;
    }

    /// Pushes an element onto the back of the deque.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let mut deque = BlockDeque::from([42, 10]);
    /// deque.push_back(100);
    /// assert_eq!(deque.pop_back(), Some(100));
    /// ```
    pub fn push_back(&mut self, item: T) {
        self.generation += 1;
        if self.back == self.block_size {
            self.blocks.push(Self::new_block(self.block_size));
            self.back = 0;
        }
        let last = self.blocks.len() - 1;
        self.blocks[last][self.back] = Some(item);
        self.back += 1;
        self.len += 1;
    }

    /// Removes and returns the first element, or `None` if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let mut deque = BlockDeque::from([42, 10]);
    /// assert_eq!(deque.pop_front(), Some(42));
    /// assert_eq!(deque.pop_front(), Some(10));
    /// assert_eq!(deque.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.generation += 1;
        let item = self.blocks[0][self.front].take();
        self.front += 1;
        self.len -= 1;
        if self.front == self.block_size {
            if self.blocks.len() > 1 {
                self.blocks.remove(0);
                self.front = 0;
            } else {
                self.front = 0;
                self.back = 0;
            }
        }
        if self.len == 0 {
            self.front = 0;
            self.back = 0;
        }
        item
    }

    /// Removes and returns the last element, or `None` if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let mut deque = BlockDeque::from([42, 10]);
    /// assert_eq!(deque.pop_back(), Some(10));
    /// assert_eq!(deque.pop_back(), Some(42));
    /// assert_eq!(deque.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.generation += 1;
        // A front-side allocation on an empty deque can leave a spare block at the tail; the
        // last live element then sits at the end of the block before it.
        if self.back == 0 && self.blocks.len() > 1 {
            self.blocks.pop();
            self.back = self.block_size;
        }
        self.back -= 1;
        let last = self.blocks.len() - 1;
        let item = self.blocks[last][self.back].take();
        self.len -= 1;
        if self.back == 0 && self.blocks.len() > 1 {
            self.blocks.pop();
            self.back = self.block_size;
        }
        if self.len == 0 {
            self.front = 0;
            self.back = 0;
        }
        item
    }

    /// Inserts an element at position `index`, shifting whichever side of the sequence is
    /// shorter toward its end. `insert(0, …)` is `push_front` and `insert(len, …)` is
    /// `push_back`.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let mut deque = BlockDeque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// deque.insert(1, 3);
    /// assert_eq!(deque, [1, 3, 2]);
    /// ```
    /// ```should_panic
    /// # use rigatoni::BlockDeque;
    /// let mut deque = BlockDeque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// deque.insert(3, 3);
    /// ```
    pub fn insert(&mut self, index: usize, item: T) {
        assert!(index <= self.len, "index out of bounds");
        if index == 0 {
            return self.push_front(item);
        }
        if index == self.len {
            return self.push_back(item);
        }
        self.generation += 1;
        if index < self.len - index {
            self.shift_left_and_insert(index, item);
        } else {
            self.shift_right_and_insert(index, item);
        }
        self.len += 1;
    }

    /// Opens a gap at `index` by moving elements `0..index` one slot toward the front, then
    /// writes `item` into the freed slot. The freed slot is where element `index - 1` used to
    /// live, so the carry chain only has to reach that element's block.
    fn shift_left_and_insert(&mut self, index: usize, item: T) {
        let block_size = self.block_size;
        let (mut target_block, target_slot) = self.locate(index - 1);
        if self.front == 0 {
            self.blocks.insert(0, Self::new_block(block_size));
            self.front = block_size;
            target_block += 1;
        }
        self.front -= 1;
        // The hole starts at the newly vacated front slot and walks toward the target: each
        // intermediate block shifts its remainder down with one contiguous move, then swallows
        // the first element of the next block across the boundary.
        let mut hole = self.front;
        for block in 0..target_block {
            self.blocks[block][hole..block_size].rotate_left(1);
            let carried = self.blocks[block + 1][0].take();
            self.blocks[block][block_size - 1] = carried;
            hole = 0;
        }
        self.blocks[target_block][hole..=target_slot].rotate_left(1);
        self.blocks[target_block][target_slot] = Some(item);
    }

    /// Mirror image of [`shift_left_and_insert`](Self::shift_left_and_insert): moves elements
    /// `index..len` one slot toward the back and writes `item` where element `index` used to
    /// live.
    fn shift_right_and_insert(&mut self, index: usize, item: T) {
        let block_size = self.block_size;
        let (target_block, target_slot) = self.locate(index);
        if self.back == self.block_size {
            self.blocks.push(Self::new_block(block_size));
            self.back = 0;
        }
        let mut block = self.blocks.len() - 1;
        let mut hole = self.back;
        self.back += 1;
        while block > target_block {
            self.blocks[block][0..=hole].rotate_right(1);
            let carried = self.blocks[block - 1][block_size - 1].take();
            self.blocks[block][0] = carried;
            block -= 1;
            hole = block_size - 1;
        }
        self.blocks[target_block][target_slot..=hole].rotate_right(1);
        self.blocks[target_block][target_slot] = Some(item);
    }

    /// Removes and returns the element at position `index`, closing the gap by shifting
    /// whichever side of the sequence is shorter. `remove(0)` is `pop_front` and
    /// `remove(len - 1)` is `pop_back`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let mut deque = BlockDeque::from([1, 2, 3]);
    /// assert_eq!(deque.remove(1), 2);
    /// assert_eq!(deque, [1, 3]);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "index out of bounds");
        if index == 0 {
            return self.pop_front().unwrap();
        }
        if index == self.len - 1 {
            return self.pop_back().unwrap();
        }
        self.generation += 1;
        let item = if index < self.len - index {
            self.remove_from_left(index)
        } else {
            self.remove_from_right(index)
        };
        self.len -= 1;
        item
    }

    /// Closes the gap at `index` by moving elements `0..index` one slot toward the back, then
    /// retires the vacated front slot, releasing the first block if that empties it.
    fn remove_from_left(&mut self, index: usize) -> T {
        let block_size = self.block_size;
        let (target_block, target_slot) = self.locate(index);
        let item = self.blocks[target_block][target_slot]
            .take()
            .expect("slots inside the live range hold elements");
        // Walk the hole from the removal point back to the front, reversing the insert carry:
        // each block boundary pulls the last element of the previous block forward.
        let mut block = target_block;
        let mut hole = target_slot;
        while block > 0 {
            self.blocks[block][0..=hole].rotate_right(1);
            let carried = self.blocks[block - 1][block_size - 1].take();
            self.blocks[block][0] = carried;
            block -= 1;
            hole = block_size - 1;
        }
        self.blocks[0][self.front..=hole].rotate_right(1);
        self.front += 1;
        if self.front == block_size && self.blocks.len() > 1 {
            self.blocks.remove(0);
            self.front = 0;
        }
        item
    }

    /// Mirror image of [`remove_from_left`](Self::remove_from_left): moves elements
    /// `index + 1..len` one slot toward the front and retires the vacated back slot.
    fn remove_from_right(&mut self, index: usize) -> T {
        let block_size = self.block_size;
        if self.back == 0 && self.blocks.len() > 1 {
            // Spare block left behind by a front-side allocation.
            self.blocks.pop();
            self.back = block_size;
        }
        let (target_block, target_slot) = self.locate(index);
        let item = self.blocks[target_block][target_slot]
            .take()
            .expect("slots inside the live range hold elements");
        let last = self.blocks.len() - 1;
        let mut block = target_block;
        let mut hole = target_slot;
        while block < last {
            self.blocks[block][hole..block_size].rotate_left(1);
            let carried = self.blocks[block + 1][0].take();
            self.blocks[block][block_size - 1] = carried;
            block += 1;
            hole = 0;
        }
        self.blocks[last][hole..self.back].rotate_left(1);
        self.back -= 1;
        if self.back == 0 && self.blocks.len() > 1 {
            self.blocks.pop();
            self.back = block_size;
        }
        item
    }

    /// Removes the first occurrence of `item`, returning whether one was found.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let mut deque = BlockDeque::from([1, 2, 3]);
    /// assert!(deque.remove_item(&2));
    /// assert!(!deque.remove_item(&9));
    /// assert_eq!(deque, [1, 3]);
    /// ```
    pub fn remove_item(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(item) {
            Some(index) => {
                self.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns the logical index of the first element equal to `item`, or `None` if absent.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let deque = BlockDeque::from(vec![1, 2, 3, 2]);
    /// assert_eq!(deque.index_of(&2), Some(1));
    /// assert_eq!(deque.index_of(&9), None);
    /// ```
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let block_size = self.block_size;
        if self.blocks.len() == 1 {
            for slot in self.front..self.back {
                if self.blocks[0][slot].as_ref() == Some(item) {
                    return Some(slot - self.front);
                }
            }
            return None;
        }
        for slot in self.front..block_size {
            if self.blocks[0][slot].as_ref() == Some(item) {
                return Some(slot - self.front);
            }
        }
        let last = self.blocks.len() - 1;
        for block in 1..self.blocks.len() {
            let end = if block == last { self.back } else { block_size };
            for slot in 0..end {
                if self.blocks[block][slot].as_ref() == Some(item) {
                    return Some(block * block_size + slot - self.front);
                }
            }
        }
        None
    }

    /// Returns true if the deque contains an element equal to `item`.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let deque = BlockDeque::from([1, 2, 3]);
    /// assert!(deque.contains(&2));
    /// assert!(!deque.contains(&9));
    /// ```
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Drops every element and releases every block but one, which is kept emptied so the deque
    /// behaves exactly like a freshly constructed one without reallocating on the next push.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let mut deque = BlockDeque::from([1, 2, 3]);
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.block_count(), 1);
    /// ```
    pub fn clear(&mut self) {
        self.generation += 1;
        self.blocks.truncate(1);
        for slot in self.blocks[0].iter_mut() {
            *slot = None;
        }
        self.front = 0;
        self.back = 0;
        self.len = 0;
    }

    /// Clones every element into `dest` starting at `dest[start]`, in logical order.
    ///
    /// # Panics
    /// Panics if the deque does not fit into `dest[start..]`.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let deque = BlockDeque::from([1, 2, 3]);
    /// let mut dest = [0; 5];
    /// deque.copy_to(&mut dest, 1);
    /// assert_eq!(dest, [0, 1, 2, 3, 0]);
    /// ```
    pub fn copy_to(&self, dest: &mut [T], start: usize)
    where
        T: Clone,
    {
        assert!(
            start <= dest.len() && dest.len() - start >= self.len,
            "destination is too small"
        );
        for (slot, item) in dest[start..].iter_mut().zip(self.iter()) {
            *slot = item.clone();
        }
    }

    /// Returns a forward iterator over references to the elements in logical order. The
    /// iterator is lazy and can be created again at any time to restart iteration.
    ///
    /// # Examples
    /// ```
    /// # use rigatoni::BlockDeque;
    /// let deque = BlockDeque::from([1, 2, 3]);
    /// let doubled: Vec<i32> = deque.iter().map(|x| x * 2).collect();
    /// assert_eq!(doubled, [2, 4, 6]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            head: 0,
            tail: self.len,
            generation: self.generation,
        }
    }
}

impl<T> Default for BlockDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for BlockDeque<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for BlockDeque<T> {
    fn clone(&self) -> Self {
        BlockDeque {
            blocks: self.blocks.clone(),
            block_size: self.block_size,
            front: self.front,
            back: self.back,
            len: self.len,
            generation: 0,
        }
    }
}

impl<T: PartialEq> PartialEq for BlockDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BlockDeque<T> {}

impl<T: PartialEq> PartialEq<[T]> for BlockDeque<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<&[T]> for BlockDeque<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for BlockDeque<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.len == N && self.iter().eq(other.iter())
    }
}

impl<T: PartialOrd> PartialOrd for BlockDeque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for BlockDeque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for BlockDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self {
            item.hash(state);
        }
    }
}

impl<T> Index<usize> for BlockDeque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index).expect("index out of bounds")
    }
}

impl<T> IndexMut<usize> for BlockDeque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index).expect("index out of bounds")
    }
}

impl<T> Extend<T> for BlockDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for BlockDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = BlockDeque::new();
        deque.extend(iter);
        deque
    }
}

impl<T> From<Vec<T>> for BlockDeque<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for BlockDeque<T> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

/// Borrowing iterator over a [`BlockDeque`], created by [`BlockDeque::iter`]. Panics if the
/// deque's generation counter changes underneath it.
pub struct Iter<'a, T> {
    deque: &'a BlockDeque<T>,
    head: usize,
    tail: usize,
    generation: u64,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    fn check_generation(&self) {
        assert!(
            self.generation == self.deque.generation,
            "deque was structurally modified during iteration"
        );
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            deque: self.deque,
            head: self.head,
            tail: self.tail,
            generation: self.generation,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.check_generation();
        if self.head == self.tail {
            return None;
        }
        let item = self.deque.get(self.head);
        self.head += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tail - self.head;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.check_generation();
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        self.deque.get(self.tail)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> std::iter::FusedIterator for Iter<'a, T> {}

/// Owning iterator over a [`BlockDeque`], created by its `IntoIterator` impl.
pub struct IntoIter<T> {
    deque: BlockDeque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> std::iter::FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for BlockDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a BlockDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for BlockDeque<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for BlockDeque<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let vec = Vec::<T>::deserialize(deserializer)?;
        Ok(BlockDeque::from(vec))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let deque = BlockDeque::from([1, 2, 3]);
        let json = serde_json::to_string(&deque).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: BlockDeque<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, deque);
    }
}
