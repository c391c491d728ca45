//!
//! A string-keyed map preserving the insertion order.
//!

use std::collections::HashMap;

///
/// A string-keyed map preserving the insertion order.
///
/// Replacing the value of an existing key keeps the key at its original position.
///
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    /// The entries in insertion order.
    entries: Vec<(String, V)>,
    /// The entry positions by key.
    positions: HashMap<String, usize>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    ///
    /// Inserts a value, returning the replaced one if the key was already present.
    ///
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        match self.positions.get(key.as_str()) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    ///
    /// Returns the value for `key`, inserting the one produced by `default` first if absent.
    ///
    pub fn get_or_insert_with(&mut self, key: &str, default: impl FnOnce() -> V) -> &mut V {
        let position = match self.positions.get(key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.positions.insert(key.to_owned(), position);
                self.entries.push((key.to_owned(), default()));
                position
            }
        };
        &mut self.entries[position].1
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.positions
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    ///
    /// Iterates over the entries in insertion order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::OrderedMap;

    #[test]
    fn keeps_insertion_order() {
        let mut map = OrderedMap::default();
        map.insert("zeta".to_owned(), 1);
        map.insert("alpha".to_owned(), 2);
        map.insert("mu".to_owned(), 3);

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mu"]);
    }

    #[test]
    fn replacing_keeps_position() {
        let mut map = OrderedMap::default();
        map.insert("first".to_owned(), 1);
        map.insert("second".to_owned(), 2);

        assert_eq!(map.insert("first".to_owned(), 10), Some(1));
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![("first", &10), ("second", &2)]
        );
    }

    #[test]
    fn get_or_insert_with_creates_once() {
        let mut map: OrderedMap<Vec<u32>> = OrderedMap::default();
        map.get_or_insert_with("group", Vec::new).push(1);
        map.get_or_insert_with("group", || unreachable!()).push(2);

        assert_eq!(map.get("group"), Some(&vec![1, 2]));
        assert!(map.contains_key("group"));
        assert!(!map.contains_key("other"));
    }
}
