//! A dynamically sized bit grid packed into unsigned words.
//!
//! Unlike a fixed square board, the dimensions are chosen at construction
//! time, so a single type can hold the `(height+1) × width` horizontal edges
//! and the `height × (width+1)` vertical edges of any playable grid. Bits are
//! stored row-major in a `Vec<T>`.

use alloc::vec;
use alloc::vec::Vec;
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bit grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitGridError {
    /// Row or column index is outside `[0..rows) × [0..cols)`.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitGridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitGridError {}

/// A `rows × cols` grid of bits stored in words of type `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BitGrid<T = u64>
where
    T: PrimInt + Unsigned + Zero,
{
    rows: usize,
    cols: usize,
    words: Vec<T>,
}

impl<T> BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of bits held by one storage word.
    const WORD_BITS: usize = mem::size_of::<T>() * 8;

    /// Create a grid with every bit cleared.
    pub fn new(rows: usize, cols: usize) -> Self {
        let bits = rows * cols;
        let len = (bits + Self::WORD_BITS - 1) / Self::WORD_BITS;
        BitGrid {
            rows,
            cols,
            words: vec![T::zero(); len],
        }
    }

    /// Total number of addressable bits (`rows * cols`).
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.is_zero())
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitGridError> {
        let (word, bit) = self.locate(row, col)?;
        Ok(self
            .words
            .get(word)
            .map_or(false, |w| ((*w >> bit) & T::one()) != T::zero()))
    }

    /// Sets the bit at (row, col) to 1, returning its previous value.
    pub fn set(&mut self, row: usize, col: usize) -> Result<bool, BitGridError> {
        let (word, bit) = self.locate(row, col)?;
        let Some(w) = self.words.get_mut(word) else {
            return Err(BitGridError::IndexOutOfBounds { row, col });
        };
        let mask = T::one() << bit;
        let was_set = (*w & mask) != T::zero();
        *w = *w | mask;
        Ok(was_set)
    }

    #[inline]
    fn locate(&self, row: usize, col: usize) -> Result<(usize, usize), BitGridError> {
        if row >= self.rows || col >= self.cols {
            return Err(BitGridError::IndexOutOfBounds { row, col });
        }
        let idx = row * self.cols + col;
        Ok((idx / Self::WORD_BITS, idx % Self::WORD_BITS))
    }
}
