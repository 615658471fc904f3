// `ok!` is a less bloaty alternative to the standard library's try operator (`?`).
// Since no error conversions happen in this crate a plain match is enough.
macro_rules! ok {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(err) => return Err(err),
        }
    };
}

/// Hidden utility module for the [`vars!`](crate::vars!) macro.
#[doc(hidden)]
pub mod __vars {
    use std::collections::BTreeMap;

    #[inline(always)]
    pub fn make() -> BTreeMap<&'static str, String> {
        BTreeMap::new()
    }

    #[inline(always)]
    pub fn add<V: ToString + ?Sized>(
        vars: &mut BTreeMap<&'static str, String>,
        key: &'static str,
        value: &V,
    ) {
        vars.insert(key, value.to_string());
    }
}

/// Creates a variable mapping from names and values.
///
/// ```rust
/// # use minisubst::vars;
/// let vars = vars!{
///     USER => "peter",
///     PORT => 8080,
/// };
/// assert_eq!(vars["PORT"], "8080");
/// ```
///
/// Alternatively if the variable name matches the key name it can
/// be omitted:
///
/// ```rust
/// # use minisubst::vars;
/// let name = "Peter";
/// let vars = vars!{ name };
/// assert_eq!(vars["name"], "Peter");
/// ```
///
/// The return value is a `BTreeMap<&'static str, String>` which implements
/// [`Vars`](crate::Vars).  Values are converted with
/// [`ToString`] and are not moved.  Names must be valid Rust identifiers;
/// for anything else build a map or a list of pairs directly.
#[macro_export]
macro_rules! vars {
    () => {
        $crate::__vars::make()
    };
    (
        $($key:ident $(=> $value:expr)?),* $(,)?
    ) => {{
        let mut vars = $crate::__vars::make();
        $(
            $crate::__vars_pair!(vars, $key $(=> $value)?);
        )*
        vars
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! __vars_pair {
    ($vars:ident, $key:ident) => {{
        $crate::__vars_pair!($vars, $key => $key);
    }};
    ($vars:ident, $key:ident => $value:expr) => {
        $crate::__vars::add(&mut $vars, stringify!($key), &$value);
    };
}
