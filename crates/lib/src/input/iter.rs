use std::marker::PhantomData;

use crate::input::{FromInput, IStr, IStrError};

/// Iterator over values parsed from an [IStr].
pub struct Iter<'a, T> {
    input: &'a mut IStr,
    _marker: PhantomData<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(input: &'a mut IStr) -> Self {
        Self {
            input,
            _marker: PhantomData,
        }
    }
}

impl<T> Iterator for Iter<'_, T>
where
    T: FromInput,
{
    type Item = Result<T, IStrError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.input.try_next().transpose()
    }
}

/// Iterator over pieces of an [IStr] separated by a byte.
///
/// See [IStr::split].
pub struct SplitIter<'a> {
    input: &'a mut IStr,
    byte: u8,
}

impl<'a> SplitIter<'a> {
    pub(crate) fn new(input: &'a mut IStr, byte: u8) -> Self {
        Self { input, byte }
    }

    /// Current offset of the underlying input.
    #[inline]
    pub fn index(&self) -> usize {
        self.input.index()
    }
}

impl Iterator for SplitIter<'_> {
    type Item = IStr;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.input.split_once(self.byte)
    }
}
