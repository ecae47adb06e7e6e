//! Keyed lookups over map-like collections
//!
//! [`Lookup`] abstracts the maps the operations accept. Keys are borrowed the
//! same way `HashMap::get` borrows them, so a `HashMap<String, _>` is queried
//! with a `&str`.

use crate::error::{rejected, OpError, Result};
use crate::integer::CheckedInteger;
use crate::parse::parse_literal;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeMap, HashMap};

/// A key-unique associative collection queried by `Q`
pub trait Lookup<Q: ?Sized> {
    /// Type of the stored values
    type Value;

    /// Get the value stored under `key`
    fn lookup(&self, key: &Q) -> Option<&Self::Value>;
}

impl<K, V, S, Q> Lookup<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> Lookup<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

/// Get the value stored under `key`
///
/// # Examples
///
/// ```
/// use checkops_core::{find_value_by_key, ErrorKind};
/// use std::collections::HashMap;
///
/// let ranks = HashMap::from([("first", 1), ("second", 2), ("third", 3)]);
/// assert_eq!(find_value_by_key(&ranks, "second"), Ok(&2));
/// assert_eq!(
///     find_value_by_key(&ranks, "six").unwrap_err().kind(),
///     ErrorKind::KeyNotFound
/// );
/// ```
pub fn find_value_by_key<'a, M, Q>(mapping: &'a M, key: &Q) -> Result<&'a M::Value>
where
    M: Lookup<Q> + ?Sized,
    Q: fmt::Debug + ?Sized,
{
    entry(mapping, key).map_err(rejected("find_value_by_key"))
}

/// Parse the numeric text stored under `key`
///
/// The key is looked up first (`KeyNotFound`), then the stored text is parsed
/// with the rules of [`parse_integer`](crate::parse_integer) (`FormatError`,
/// or `ArithmeticOverflow` for a literal outside the range of `T`).
pub fn get_element_as_number<T, M, Q>(mapping: &M, key: &Q) -> Result<T>
where
    T: CheckedInteger,
    M: Lookup<Q> + ?Sized,
    M::Value: AsRef<str>,
    Q: fmt::Debug + ?Sized,
{
    let value = entry(mapping, key)
        .and_then(|text| parse_literal(text.as_ref()))
        .map_err(rejected("get_element_as_number"))?;

    log::trace!("get_element_as_number({key:?}) -> {value}");
    Ok(value)
}

fn entry<'a, M, Q>(mapping: &'a M, key: &Q) -> Result<&'a M::Value>
where
    M: Lookup<Q> + ?Sized,
    Q: fmt::Debug + ?Sized,
{
    mapping.lookup(key).ok_or_else(|| OpError::KeyNotFound {
        key: format!("{key:?}"),
    })
}
