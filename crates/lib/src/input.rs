//! Input parser.

mod error;
mod iter;


use core::mem;
use core::ops;
use std::str::from_utf8;

use arrayvec::ArrayVec;
use bstr::BStr;

pub use self::error::{ErrorKind, IStrError};
pub use self::iter::{Iter, SplitIter};

pub(crate) type Result<T, E = IStrError> = std::result::Result<T, E>;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
///
/// This is a cheap copyable view into the puzzle input which keeps track of
/// its offset into the original data so that errors can point at the line
/// and column that failed to parse.
#[derive(Debug, Clone, Copy)]
pub struct IStr {
    /// Remaining data to parse.
    data: &'static [u8],
    /// Offset of `data` in the original input.
    index: usize,
}

impl IStr {
    /// Construct a new input processor.
    #[inline]
    pub const fn new(data: &'static [u8]) -> Self {
        Self { data, index: 0 }
    }

    #[inline]
    const fn with_index(data: &'static [u8], index: usize) -> Self {
        Self { data, index }
    }

    /// Offset of the remaining input in the original input.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'static BStr {
        BStr::new(self.data)
    }

    /// The range in the original input covered by this string.
    #[inline]
    pub fn span(&self) -> ops::Range<usize> {
        self.index..self.index.saturating_add(self.data.len())
    }

    /// Construct an iterator over values in the current input.
    #[inline]
    pub fn iter<T>(&mut self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Split the input on the given byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let mut input = IStr::new(b"1,2,3");
    /// let parts = input.split(b',').map(|s| s.as_data()).collect::<Vec<_>>();
    /// assert_eq!(parts, [&b"1"[..], b"2", b"3"]);
    /// ```
    #[inline]
    pub fn split(&mut self, byte: u8) -> SplitIter<'_> {
        SplitIter::new(self, byte)
    }

    /// Parse the next value as `T`.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, errors with `Err(IStrError)` if there is
    /// no line or it does not contain a valid `T`.
    #[inline]
    pub fn line<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        let index = self.index;

        let Some(line) = self.try_line()? else {
            return Err(IStrError::new(index..self.index, ErrorKind::ExpectedLine));
        };

        Ok(line)
    }

    /// Parse the next line as `T`, returns `Ok(None)` if there are no more
    /// lines or the line doesn't produce a value.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        line.try_next()
    }

    /// Shorthand for using [Ws] to scan whitespace.
    #[inline]
    pub fn ws(&mut self) -> Result<usize> {
        let Ws(n) = self.next::<Ws>()?;
        Ok(n)
    }

    /// Consume `prefix` if the input starts with it.
    #[inline]
    pub fn eat(&mut self, prefix: &[u8]) -> bool {
        if !self.data.starts_with(prefix) {
            return false;
        }

        self.advance(prefix.len());
        true
    }

    /// Skip `n` bytes of input.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = &self.data[n..];
        self.index = self.index.saturating_add(n);
    }

    /// Skip leading whitespace and split off the next word.
    fn next_word(&mut self) -> Option<IStr> {
        let s = self.find(0, |b| !b.is_ascii_whitespace());
        let e = self.find(s, u8::is_ascii_whitespace);

        if s == e {
            return None;
        }

        let word = self.slice(s..e)?;
        self.advance(e);
        Some(word)
    }

    /// Split once at the given byte or until the end of input.
    pub(crate) fn split_once(&mut self, b: u8) -> Option<IStr> {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = memchr::memchr(b, self.data) else {
            let data = mem::take(&mut self.data);
            let out = IStr::with_index(data, self.index);
            self.index = self.index.saturating_add(data.len());
            return Some(out);
        };

        let out = self.slice(0..at)?;
        self.advance(at.saturating_add(1));
        Some(out)
    }

    /// Find the first position from `n` matching the predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr> {
        let index = self.index.checked_add(range.start)?;
        Some(Self::with_index(self.data.get(range)?, index))
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Error kind to use when no value could be parsed.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `Ok(None)` if the input is exhausted.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

/// Parse something out of a sequence of split inputs.
pub trait FromInputIter: Sized {
    /// Build a value from the pieces produced by the iterator.
    fn from_input_iter(it: &mut SplitIter<'_>) -> Result<Option<Self>>;
}

macro_rules! tuple {
    ($num:literal => $($ty:ident $id:ident),* $(,)?) => {
        impl<$($ty,)*> FromInput for ($($ty,)*)
        where
            $($ty: FromInput,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                $(
                    let Some($id) = p.try_next()? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($($id,)*)))
            }
        }

        impl<$($ty,)*> FromInputIter for ($($ty,)*)
        where
            $($ty: FromInput,)*
        {
            #[inline]
            fn from_input_iter(it: &mut SplitIter<'_>) -> Result<Option<Self>> {
                $(
                    let Some(mut $id) = it.next() else {
                        return Ok(None);
                    };

                    let Some($id) = <$ty>::try_from_input(&mut $id)? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($($id,)*)))
            }
        }
    }
}

tuple!(1 => A a);
tuple!(2 => A a, B b);
tuple!(3 => A a, B b, C c);
tuple!(4 => A a, B b, C c, D d);

macro_rules! integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromInput for $ty {
                #[inline]
                fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                    let Some(word) = p.next_word() else {
                        return Ok(None);
                    };

                    let Ok(string) = from_utf8(word.data) else {
                        return Err(IStrError::new(word.span(), ErrorKind::NotUtf8));
                    };

                    match string.parse() {
                        Ok(n) => Ok(Some(n)),
                        Err(..) => Err(IStrError::new(word.span(), ErrorKind::NotInteger(string))),
                    }
                }
            }
        )*
    };
}

integer!(usize, isize, u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl FromInput for IStr {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let out = *p;
        p.advance(p.len());
        Ok(Some(out))
    }
}

impl FromInput for &'static [u8] {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let data = p.data;
        p.advance(data.len());
        Ok(Some(data))
    }
}

impl FromInput for &'static str {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let span = p.span();

        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(IStrError::new(span, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

/// Consume whitespace and return the number of lines consumed.
pub struct Ws(pub usize);

impl FromInput for Ws {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let n = p.find(0, |b| !b.is_ascii_whitespace());
        let lines = memchr::memchr_iter(NL, &p.data[..n]).count();
        p.advance(n);
        Ok(Some(Self(lines)))
    }
}

/// Read a single byte.
pub struct B(pub u8);

impl FromInput for B {
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::ExpectedByte
    }

    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some(&b) = p.data.first() else {
            return Ok(None);
        };

        p.advance(1);
        Ok(Some(Self(b)))
    }
}

impl<T> FromInput for Vec<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let mut output = Vec::new();

        while let Some(element) = T::try_from_input(p)? {
            output.push(element);
        }

        Ok(Some(output))
    }
}

/// Split once per element on the byte `D`.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// let mut input = IStr::new(b"11-22");
/// let Split((a, b)) = input.next::<Split<'-', (u64, u64)>>()?;
/// assert_eq!((a, b), (11, 22));
/// # Ok::<_, lib::input::IStrError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Split<const D: char, T>(pub T);

impl<const D: char, T> FromInput for Split<D, T>
where
    T: FromInputIter,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        if p.is_empty() {
            return Ok(None);
        }

        let mut it = p.split(D as u8);

        let Some(out) = T::from_input_iter(&mut it)? else {
            return Ok(None);
        };

        Ok(Some(Self(out)))
    }
}

impl<const N: usize, T> FromInputIter for [T; N]
where
    T: FromInput,
{
    #[inline]
    fn from_input_iter(it: &mut SplitIter<'_>) -> Result<Option<Self>> {
        let index = it.index();
        let mut array = ArrayVec::<T, N>::new();

        while array.remaining_capacity() > 0 {
            let Some(mut value) = it.next() else {
                return Ok(None);
            };

            let Some(value) = T::try_from_input(&mut value)? else {
                return Ok(None);
            };

            array.push(value);
        }

        match array.into_inner() {
            Ok(array) => Ok(Some(array)),
            Err(array) => Err(IStrError::new(
                index..it.index(),
                ErrorKind::BadArray(N, array.len()),
            )),
        }
    }
}
