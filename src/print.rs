//! Conditional printing.
//!
//! `Display` exists only when every element is `Display`, `Debug` only when
//! every element is `Debug`. Both print `<kind>{e1,e2,...}` with no spaces
//! and no trailing separator.
//!
//! ```
//! use dry_comparisons::prelude::*;
//!
//! assert_eq!(any_of![1, 3, 5].to_string(), "any_of{1,3,5}");
//! assert_eq!(format!("{:?}", none_of!["a"]), "none_of{\"a\"}");
//! ```

use core::fmt;
use core::mem;

use crate::combinator::Combinator;
use crate::fold::Kind;

/// Element formatting through `Display`.
pub struct Plain;

/// Element formatting through `Debug`.
pub struct Debugged;

/// Write the comma-separated elements of a tuple in style `S`.
pub trait Render<S> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! impl_render {
    ($(($E:ident, $idx:tt))*) => {
        impl<$($E: fmt::Display,)*> Render<Plain> for ($($E,)*) {
            #[allow(unused_variables, unused_mut)]
            fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut separator = "";
                $(
                    f.write_str(mem::replace(&mut separator, ","))?;
                    fmt::Display::fmt(&self.$idx, f)?;
                )*
                Ok(())
            }
        }

        impl<$($E: fmt::Debug,)*> Render<Debugged> for ($($E,)*) {
            #[allow(unused_variables, unused_mut)]
            fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut separator = "";
                $(
                    f.write_str(mem::replace(&mut separator, ","))?;
                    fmt::Debug::fmt(&self.$idx, f)?;
                )*
                Ok(())
            }
        }
    };
}

macros::for_each_tuple!(impl_render, 12);

fn braced<S, T: Render<S>>(name: &str, elements: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(name)?;
    f.write_str("{")?;
    elements.render(f)?;
    f.write_str("}")
}

impl<K: Kind, T: Render<Plain>> fmt::Display for Combinator<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        braced::<Plain, T>(K::NAME, self.elements(), f)
    }
}

impl<K: Kind, T: Render<Debugged>> fmt::Debug for Combinator<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        braced::<Debugged, T>(K::NAME, self.elements(), f)
    }
}
