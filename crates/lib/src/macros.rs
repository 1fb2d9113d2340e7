/// Helper macro to build an input processor.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// struct Span {
///     start: u8,
///     end: u8,
/// }
///
/// lib::from_input! {
///     |Split((start, end)): Split<'-', (u8, u8)>| -> Span {
///         ensure!(start <= end, "reversed span");
///         Ok(Span { start, end })
///     }
/// }
///
/// let mut input = IStr::new(b"2-4\n6-3\n");
/// let span = input.line::<Span>()?;
/// assert_eq!((span.start, span.end), (2, 4));
/// assert!(input.line::<Span>().is_err());
/// # Ok::<_, lib::input::IStrError>(())
/// ```
#[macro_export]
macro_rules! from_input {
    (|$($value:ident)? $(($pat:pat))?: $ty:ty| -> $($rest:tt)*) => {
        $crate::from_input!(|[$($value)? $(($pat))?]: $ty| -> $($rest)*);
    };

    (|[$($value:tt)*]: $ty:ty| -> $out:ident $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr,
            ) -> ::core::result::Result<Option<Self>, $crate::input::IStrError> {
                let original = *p;

                let Some(value) = <$ty as $crate::input::FromInput>::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$($value)*: $ty| -> ::core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(error) => {
                        let span = original.index()..p.index();
                        *p = original;
                        Err($crate::input::IStrError::new(
                            span,
                            $crate::input::ErrorKind::Custom(error.to_string()),
                        ))
                    }
                }
            }
        }
    };
}

/// Prepare an input processor for a file in the `inputs` directory of the
/// calling crate.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);
        ($crate::input(path, read_path)?, path)
    }};
}

/// Declare the `main` function of a solver.
///
/// The solver receives the whole input and returns the answers to both parts
/// of the puzzle.
#[macro_export]
macro_rules! entry {
    ($path:literal, $solve:path) => {
        fn main() -> $crate::prelude::Result<()> {
            let opts = $crate::cli::Opts::parse()?;
            let (input, path) = $crate::input!($path);
            $crate::cli::run(&opts, path, input, $solve)
        }
    };
}
