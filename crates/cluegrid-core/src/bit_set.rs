//! A 64-bit set parameterised by index semantics.
//!
//! [`BitSet64`] stores up to 64 elements in a single `u64`. The mapping from
//! element values to bit indices is supplied by a [`BitSemantics`]
//! implementation, so the same container serves two roles:
//!
//! - [`ValueSet`]: symbols `1..=64` (bit `v - 1`), used for candidates
//! - [`HouseMask`]: cell offsets `0..64` within a house
//!
//! # Examples
//!
//! ```
//! use cluegrid_core::ValueSet;
//!
//! let a = ValueSet::from_iter([1, 2, 3]);
//! let b = ValueSet::from_iter([2, 3, 4]);
//!
//! assert_eq!(a | b, ValueSet::from_iter([1, 2, 3, 4]));
//! assert_eq!(a & b, ValueSet::from_iter([2, 3]));
//! assert_eq!(a.difference(b), ValueSet::from_iter([1]));
//! assert_eq!(a.first(), Some(1));
//! ```

use std::{
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    marker::PhantomData,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

/// Maps element values to bit indices `0..64` and back.
pub trait BitSemantics {
    /// The element type stored in the set.
    type Value: Copy;

    /// Converts a value into a bit index.
    ///
    /// Implementations panic on values they cannot represent.
    fn to_index(value: Self::Value) -> u8;

    /// Converts a bit index back into a value.
    fn from_index(index: u8) -> Self::Value;
}

/// Semantics for grid symbols `1..=64`.
#[derive(Debug)]
pub struct ValueSemantics;

impl BitSemantics for ValueSemantics {
    type Value = u8;

    #[inline]
    #[track_caller]
    fn to_index(value: u8) -> u8 {
        assert!(
            (1..=64).contains(&value),
            "Value must be between 1 and 64, got {value}"
        );
        value - 1
    }

    #[inline]
    fn from_index(index: u8) -> u8 {
        index + 1
    }
}

/// Semantics for cell offsets `0..64` within a house.
#[derive(Debug)]
pub struct OffsetSemantics;

impl BitSemantics for OffsetSemantics {
    type Value = u8;

    #[inline]
    #[track_caller]
    fn to_index(value: u8) -> u8 {
        assert!(value < 64, "Offset must be below 64, got {value}");
        value
    }

    #[inline]
    fn from_index(index: u8) -> u8 {
        index
    }
}

/// A set of grid symbols.
pub type ValueSet = BitSet64<ValueSemantics>;

/// A set of cell offsets within a house.
pub type HouseMask = BitSet64<OffsetSemantics>;

/// A set of up to 64 elements backed by a `u64`.
pub struct BitSet64<S> {
    bits: u64,
    _semantics: PhantomData<fn() -> S>,
}

impl<S> Clone for BitSet64<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for BitSet64<S> {}

impl<S> PartialEq for BitSet64<S> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<S> Eq for BitSet64<S> {}

impl<S> Hash for BitSet64<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<S> Default for BitSet64<S> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<S> BitSet64<S> {
    /// The empty set.
    pub const EMPTY: Self = Self::from_bits(0);

    /// Creates an empty set.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set from its raw bit representation.
    #[must_use]
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self {
            bits,
            _semantics: PhantomData,
        }
    }

    /// Creates a set containing the bit indices `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds 64.
    #[must_use]
    #[inline]
    #[track_caller]
    pub const fn full(len: u8) -> Self {
        assert!(len <= 64, "a 64-bit set holds at most 64 elements");
        if len == 64 {
            Self::from_bits(u64::MAX)
        } else {
            Self::from_bits((1u64 << len) - 1)
        }
    }

    /// Returns the raw bit representation.
    #[must_use]
    #[inline]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Returns the number of elements.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set holds no element.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the union of two sets.
    #[must_use]
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self::from_bits(self.bits | other.bits)
    }

    /// Returns the intersection of two sets.
    #[must_use]
    #[inline]
    pub const fn intersection(self, other: Self) -> Self {
        Self::from_bits(self.bits & other.bits)
    }

    /// Returns the elements of `self` that are not in `other`.
    #[must_use]
    #[inline]
    pub const fn difference(self, other: Self) -> Self {
        Self::from_bits(self.bits & !other.bits)
    }

    /// Returns `true` if every element of `self` is in `other`.
    #[must_use]
    #[inline]
    pub const fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[must_use]
    #[inline]
    pub const fn is_superset(self, other: Self) -> bool {
        other.is_subset(self)
    }
}

impl<S> BitSet64<S>
where
    S: BitSemantics,
{
    /// Creates a set holding a single element.
    #[must_use]
    #[inline]
    pub fn from_elem(value: S::Value) -> Self {
        Self::from_bits(1u64 << S::to_index(value))
    }

    /// Inserts an element, returning `true` if it was absent.
    #[inline]
    pub fn insert(&mut self, value: S::Value) -> bool {
        let mask = 1u64 << S::to_index(value);
        let absent = self.bits & mask == 0;
        self.bits |= mask;
        absent
    }

    /// Removes an element, returning `true` if it was present.
    #[inline]
    pub fn remove(&mut self, value: S::Value) -> bool {
        let mask = 1u64 << S::to_index(value);
        let present = self.bits & mask != 0;
        self.bits &= !mask;
        present
    }

    /// Returns `true` if the element is in the set.
    #[must_use]
    #[inline]
    pub fn contains(self, value: S::Value) -> bool {
        self.bits & (1u64 << S::to_index(value)) != 0
    }

    /// Returns the smallest element.
    #[must_use]
    #[inline]
    pub fn first(self) -> Option<S::Value> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        Some(S::from_index(index))
    }

    /// Returns the only element if the set holds exactly one.
    #[must_use]
    #[inline]
    pub fn as_single(self) -> Option<S::Value> {
        if self.len() == 1 { self.first() } else { None }
    }

    /// Returns an iterator over the elements in ascending order.
    #[must_use]
    #[inline]
    pub fn iter(self) -> Iter<S> {
        Iter {
            bits: self.bits,
            _semantics: PhantomData,
        }
    }
}

impl<S> fmt::Debug for BitSet64<S>
where
    S: BitSemantics,
    S::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<S> BitAnd for BitSet64<S> {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl<S> BitAndAssign for BitSet64<S> {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl<S> BitOr for BitSet64<S> {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl<S> BitOrAssign for BitSet64<S> {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl<S> FromIterator<S::Value> for BitSet64<S>
where
    S: BitSemantics,
{
    fn from_iter<I: IntoIterator<Item = S::Value>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        set.extend(iter);
        set
    }
}

impl<S> Extend<S::Value> for BitSet64<S>
where
    S: BitSemantics,
{
    fn extend<I: IntoIterator<Item = S::Value>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<S> IntoIterator for BitSet64<S>
where
    S: BitSemantics,
{
    type Item = S::Value;
    type IntoIter = Iter<S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`BitSet64`] in ascending order.
pub struct Iter<S> {
    bits: u64,
    _semantics: PhantomData<fn() -> S>,
}

impl<S> Clone for Iter<S> {
    fn clone(&self) -> Self {
        Self {
            bits: self.bits,
            _semantics: PhantomData,
        }
    }
}

impl<S> fmt::Debug for Iter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("bits", &self.bits).finish()
    }
}

impl<S> Iterator for Iter<S>
where
    S: BitSemantics,
{
    type Item = S::Value;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(S::from_index(index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl<S> DoubleEndedIterator for Iter<S>
where
    S: BitSemantics,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = (63 - self.bits.leading_zeros()) as u8;
        self.bits &= !(1u64 << index);
        Some(S::from_index(index))
    }
}

impl<S> FusedIterator for Iter<S> where S: BitSemantics {}
impl<S> ExactSizeIterator for Iter<S> where S: BitSemantics {}
