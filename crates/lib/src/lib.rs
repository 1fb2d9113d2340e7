pub mod cli;
pub mod grid;
pub mod input;
mod macros;

use anyhow::{anyhow, Context};

use crate::input::IStr;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::grid::{Grid, GridExt, GridMut};
    pub use crate::input::{FromInput, IStr, Split, Ws, B};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub use bstr::{BStr, ByteSlice};
}

/// Read puzzle input from `read_path`, reporting errors against `path`.
///
/// The data is leaked since it lives for as long as the solver process
/// anyway, which lets parsed values borrow from it freely.
pub fn input(path: &'static str, read_path: &str) -> anyhow::Result<IStr> {
    let data = std::fs::read(read_path).with_context(|| anyhow!(path))?;
    Ok(IStr::new(Vec::leak(data)))
}
