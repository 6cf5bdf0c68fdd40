//! Style lookup across own and fallback style candidates.

use std::collections::HashMap;

use tracing::trace;

/// Anything that can answer "what is the value of this property?".
///
/// Implemented by the DOM-like layer for inline styles, computed styles or
/// matched rules.
pub trait StyleSource {
    /// Get the raw value of `property`, if set.
    fn property_value(&self, property: &str) -> Option<&str>;
}

impl<T: StyleSource + ?Sized> StyleSource for &T {
    fn property_value(&self, property: &str) -> Option<&str> {
        (**self).property_value(property)
    }
}

impl StyleSource for HashMap<String, String> {
    fn property_value(&self, property: &str) -> Option<&str> {
        self.get(property).map(String::as_str)
    }
}

/// A property-name to value style map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    properties: HashMap<String, String>,
}

impl StyleMap {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, returning the map.
    pub fn with(mut self, property: &str, value: &str) -> Self {
        self.set(property, value);
        self
    }

    /// Set a property.
    pub fn set(&mut self, property: &str, value: &str) {
        self.properties
            .insert(property.to_string(), value.to_string());
    }

    /// Remove a property, returning its old value.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.properties.remove(property)
    }

    /// Get the number of properties set.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if no property is set.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl StyleSource for StyleMap {
    fn property_value(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn non_empty<S: StyleSource>(source: Option<&S>, property: &str) -> Option<String> {
    source
        .and_then(|s| s.property_value(property))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Resolve `property` for each `(own[i], fallback[i])` pair.
///
/// A pair resolves to the own value if it is non-empty, otherwise to the
/// fallback value if that is non-empty. Pairs that resolve to nothing are left
/// out, so the result can be shorter than either input. When the lists differ
/// in length, the missing side of a pair defines nothing.
pub fn get_styles<O, F>(property: &str, own: &[O], fallback: &[F]) -> Vec<String>
where
    O: StyleSource,
    F: StyleSource,
{
    (0..own.len().max(fallback.len()))
        .filter_map(|i| {
            let resolved = non_empty(own.get(i), property)
                .or_else(|| non_empty(fallback.get(i), property));
            if resolved.is_none() {
                trace!(property, pair = i, "Style pair has no value");
            }
            resolved
        })
        .collect()
}

/// The first value [`get_styles`] would resolve for `property`.
pub fn first_style<O, F>(property: &str, own: &[O], fallback: &[F]) -> Option<String>
where
    O: StyleSource,
    F: StyleSource,
{
    get_styles(property, own, fallback).into_iter().next()
}
