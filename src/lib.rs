//! Block-allocated double-ended data structures.
//!
//! The centerpiece is [`BlockDeque`], an indexable double-ended queue that stores its elements
//! in a chain of fixed-size blocks. Pushing at a full end links on one new block instead of
//! reallocating and copying the whole buffer, and mid-sequence insertion and removal shift only
//! the shorter side of the sequence, carrying boundary elements across blocks as needed.
//!
//! ```
//! use rigatoni::BlockDeque;
//! let mut deque = BlockDeque::with_block_size(4);
//! for i in 0..10 {
//!     deque.push_back(i);
//! }
//! deque.push_front(-1);
//! deque.insert(5, 99);
//! assert_eq!(deque[0], -1);
//! assert_eq!(deque[5], 99);
//! assert_eq!(deque.len(), 12);
//! ```

pub mod deque;

pub use deque::{BlockDeque, IntoIter, Iter, DEFAULT_BLOCK_SIZE};

// one tube of many
pub type Rigatone<T> = BlockDeque<T>;

/// Creates a [`BlockDeque`] containing the given elements, in order.
///
/// # Examples
/// ```
/// use rigatoni::block_deque;
/// let deque = block_deque![1, 2, 3];
/// assert_eq!(deque, [1, 2, 3]);
/// ```
#[macro_export]
macro_rules! block_deque {
    () => {
        $crate::deque::BlockDeque::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::deque::BlockDeque::<_>::from(vec![$($x),+])
    };
}

#[cfg(test)]
mod property_tests;
