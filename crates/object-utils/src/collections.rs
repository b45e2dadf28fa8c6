//! Sorting and grouping helpers.

use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub country: String,
    pub city: String,
}

impl City {
    pub fn new(country: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            city: city.into(),
        }
    }
}

/// Sorts by country, then by city, both ascending. The sort is stable.
///
/// Names are compared case-insensitively, so `"belarus"` sorts before `"Poland"`.
/// Names that differ only in case fall back to byte order.
pub fn sort_cities_array(mut cities: Vec<City>) -> Vec<City> {
    cities.sort_by_cached_key(|c| {
        (
            c.country.to_lowercase(),
            c.city.to_lowercase(),
            c.country.clone(),
            c.city.clone(),
        )
    });
    cities
}

/// Keys mapped to lists of values, iterated in first-insertion order.
#[derive(Clone, Debug)]
pub struct Multimap<K, V> {
    entries: IndexMap<K, Vec<V>>,
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for Multimap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq + Hash, V> Multimap<K, V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Appends `value` to the list under `key`.
    pub fn insert(&mut self, key: K, value: V) {
        self.entries.entry(key).or_default().push(value);
    }

    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<(K, Vec<V>)> {
        self.entries.into_iter().collect()
    }
}

impl<K: Eq + Hash, V> Default for Multimap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> From<Multimap<K, V>> for IndexMap<K, Vec<V>> {
    fn from(map: Multimap<K, V>) -> Self {
        map.entries
    }
}

/// Groups `items` by `key_selector`, collecting `value_selector` of each item.
///
/// ```
/// use object_utils::{City, group};
///
/// let cities = [
///     City::new("Belarus", "Brest"),
///     City::new("Russia", "Omsk"),
///     City::new("Belarus", "Grodno"),
/// ];
/// let grouped = group(&cities, |c| c.country.clone(), |c| c.city.clone());
/// assert_eq!(grouped.get(&"Belarus".to_string()).unwrap(), ["Brest", "Grodno"]);
/// assert_eq!(grouped.keys().collect::<Vec<_>>(), ["Belarus", "Russia"]);
/// ```
pub fn group<T, K, V>(
    items: impl IntoIterator<Item = T>,
    key_selector: impl Fn(&T) -> K,
    value_selector: impl Fn(&T) -> V,
) -> Multimap<K, V>
where
    K: Eq + Hash,
{
    let mut groups = Multimap::new();
    for item in items {
        groups.insert(key_selector(&item), value_selector(&item));
    }
    groups
}
