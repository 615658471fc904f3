use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A source of variables for rendering.
///
/// Rendering only ever asks for a value by name, so anything that can map a
/// tag name to a string can be used.  Implementations are provided for the
/// standard maps, for lists of `(name, value)` pairs and for `()` which
/// resolves nothing:
///
/// ```
/// # use std::collections::HashMap;
/// let tmpl = minisubst::parse("${greeting}, ${name}!");
///
/// let mut map = HashMap::new();
/// map.insert("greeting".to_string(), "Hello".to_string());
/// map.insert("name".to_string(), "World".to_string());
/// assert_eq!(tmpl.render(&map), "Hello, World!");
///
/// assert_eq!(tmpl.render(&[("greeting", "Hi")]), "Hi, ${name}!");
/// assert_eq!(tmpl.render(&()), "${greeting}, ${name}!");
/// ```
///
/// For lists of pairs the first pair with a matching name wins.
///
/// Custom sources only need to implement [`get_var`](Vars::get_var):
///
/// ```
/// use minisubst::Vars;
///
/// struct Upper;
///
/// impl Vars for Upper {
///     fn get_var(&self, name: &str) -> Option<&str> {
///         match name {
///             "a" => Some("A"),
///             "b" => Some("B"),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(minisubst::parse("${a}${b}${c}").render(&Upper), "AB${c}");
/// ```
pub trait Vars {
    /// Looks up the value for a tag name.
    fn get_var(&self, name: &str) -> Option<&str>;
}

impl<T: Vars + ?Sized> Vars for &T {
    #[inline]
    fn get_var(&self, name: &str) -> Option<&str> {
        (**self).get_var(name)
    }
}

impl Vars for () {
    #[inline]
    fn get_var(&self, _name: &str) -> Option<&str> {
        None
    }
}

impl<K, V, S> Vars for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    #[inline]
    fn get_var(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

impl<K, V> Vars for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    #[inline]
    fn get_var(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

impl<K, V> Vars for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn get_var(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|pair| pair.0.as_ref() == name)
            .map(|pair| pair.1.as_ref())
    }
}

impl<K, V, const N: usize> Vars for [(K, V); N]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    #[inline]
    fn get_var(&self, name: &str) -> Option<&str> {
        self.as_slice().get_var(name)
    }
}

impl<K, V> Vars for Vec<(K, V)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    #[inline]
    fn get_var(&self, name: &str) -> Option<&str> {
        self.as_slice().get_var(name)
    }
}

#[test]
fn test_pair_lists() {
    let pairs = vec![("a", "1"), ("b", "2"), ("a", "3")];
    assert_eq!(pairs.get_var("a"), Some("1"));
    assert_eq!(pairs.get_var("b"), Some("2"));
    assert_eq!(pairs.get_var("c"), None);
    assert_eq!([("x", String::from("y"))].get_var("x"), Some("y"));
    assert_eq!(<[(&str, &str); 0]>::default().get_var("x"), None);
}

#[test]
fn test_maps() {
    let mut hash = HashMap::new();
    hash.insert(String::from("a"), "1");
    assert_eq!(hash.get_var("a"), Some("1"));
    assert_eq!((&hash).get_var("b"), None);

    let mut tree = BTreeMap::new();
    tree.insert("a", String::from("1"));
    assert_eq!(tree.get_var("a"), Some("1"));
    assert_eq!(().get_var("a"), None);
}
