use std::borrow::Borrow;
use std::collections::hash_map::{self, Entry};
use std::collections::HashMap;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use log::debug;

use crate::bag_error::{BagError, Result};

/// A bag of values, stored as a map from element to its multiplicity.
///
/// Every stored multiplicity is at least one: an element whose count drops to
/// zero is removed from the map.
#[derive(Clone)]
pub struct Multiset<T> {
    data: HashMap<T, usize>,
}

impl<T> Default for Multiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Multiset<T> {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Total number of instances, summed over all elements.
    pub fn size(&self) -> usize {
        self.data.values().sum()
    }

    /// Number of distinct elements.
    pub fn distinct_len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over `(element, multiplicity)` pairs in no particular order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.data.iter(),
        }
    }

    /// Human-readable listing of every `(element, multiplicity)` pair.
    pub fn render(&self) -> String
    where
        T: Display,
    {
        self.to_string()
    }
}

impl<T: Eq + Hash> Multiset<T> {
    /// Adds one instance of `element`.
    pub fn add(&mut self, element: T) {
        match self.data.entry(element) {
            Entry::Occupied(mut entry) => *entry.get_mut() += 1,
            Entry::Vacant(entry) => {
                entry.insert(1);
            }
        }
        debug!("added element, {} distinct", self.data.len());
    }

    /// Multiplicity of `element`, 0 if absent.
    pub fn get<Q>(&self, element: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.data.get(element).copied().unwrap_or(0)
    }

    /// Removes `n` instances of `element`.
    ///
    /// Fails with [`BagError::InvalidArgument`] if `n` is negative and with
    /// [`BagError::OutOfRange`] if fewer than `n` instances are present; the
    /// multiset is left unchanged in both cases. `n == 0` is always a no-op.
    pub fn remove_n<Q>(&mut self, element: &Q, n: i64) -> Result<()>
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        debug!("removing {} instances", n);
        let requested = match u64::try_from(n) {
            Ok(0) => return Ok(()),
            Ok(requested) => requested,
            Err(_) => return Err(BagError::InvalidArgument { n }),
        };

        let found = self.get(element);
        if requested > found as u64 {
            return Err(BagError::OutOfRange { requested, found });
        }

        // requested <= found, so it fits in usize
        let remaining = found - requested as usize;
        if remaining == 0 {
            self.data.remove(element);
        } else if let Some(count) = self.data.get_mut(element) {
            *count = remaining;
        }
        Ok(())
    }

    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.data.contains_key(element)
    }
}

impl<T: Eq + Hash> PartialEq for Multiset<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq + Hash> Eq for Multiset<T> {}

pub struct Iter<'a, T> {
    inner: hash_map::Iter<'a, T, usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(element, &count)| (element, count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> IntoIterator for &'a Multiset<T> {
    type Item = (&'a T, usize);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + Hash> Extend<T> for Multiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: Eq + Hash> FromIterator<T> for Multiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut multiset = Self::new();
        multiset.extend(iter);
        multiset
    }
}

impl<T: Display> Display for Multiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        let mut first = true;
        for (element, count) in self.iter() {
            if !first {
                writeln!(f, ",")?;
            }
            write!(f, " {{{} , {}}}", element, count)?;
            first = false;
        }
        write!(f, "\n}}\n")
    }
}

impl<T: Debug> Debug for Multiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.data.iter()).finish()
    }
}
