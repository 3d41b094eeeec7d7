use std::collections::BTreeMap;

use crate::{
    animation::ease::Ease,
    foundation::error::{DrawError, DrawResult},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// Leaf or branch of a [`ValueTree`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum TweenValue {
    Number(f64),
    Tree(ValueTree),
}

impl From<f64> for TweenValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<ValueTree> for TweenValue {
    fn from(value: ValueTree) -> Self {
        Self::Tree(value)
    }
}

impl TweenValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Tree(_) => None,
        }
    }

    pub fn as_tree(&self) -> Option<&ValueTree> {
        match self {
            Self::Number(_) => None,
            Self::Tree(tree) => Some(tree),
        }
    }

    /// Same shape as `self` with every leaf set to NaN.
    fn undefined_like(&self) -> Self {
        match self {
            Self::Number(_) => Self::Number(f64::NAN),
            Self::Tree(tree) => Self::Tree(ValueTree(
                tree.0
                    .iter()
                    .map(|(k, v)| (k.clone(), v.undefined_like()))
                    .collect(),
            )),
        }
    }
}

impl Lerp for TweenValue {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Self::Number(a), Self::Number(b)) => Self::Number(<f64 as Lerp>::lerp(a, b, t)),
            (Self::Tree(a), Self::Tree(b)) => Self::Tree(<ValueTree as Lerp>::lerp(a, b, t)),
            // shape mismatch: leaves are undefined
            (a, _) => a.undefined_like(),
        }
    }
}

/// Named numeric attributes, possibly nested, interpolated alongside drawing progress.
///
/// Keys are kept ordered so frames serialize deterministically.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ValueTree(BTreeMap<String, TweenValue>);

impl ValueTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a tree from its JSON object form, e.g. `{"x": 0, "color": {"r": 255}}`.
    pub fn from_json(s: &str) -> DrawResult<Self> {
        serde_json::from_str(s).map_err(|e| DrawError::serde(format!("invalid value tree: {e}")))
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<TweenValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TweenValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&TweenValue> {
        self.0.get(key)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(TweenValue::as_number)
    }

    pub fn tree(&self, key: &str) -> Option<&ValueTree> {
        self.get(key).and_then(TweenValue::as_tree)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Lerp for ValueTree {
    /// Walks the keys of `a`; a key missing from `b` yields NaN leaves, keys only in `b` are
    /// dropped.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self(
            a.0.iter()
                .map(|(key, av)| {
                    let v = match b.0.get(key) {
                        Some(bv) => <TweenValue as Lerp>::lerp(av, bv, t),
                        None => av.undefined_like(),
                    };
                    (key.clone(), v)
                })
                .collect(),
        )
    }
}

/// Interpolate two same-shaped trees at linear fraction `t` under `ease`.
///
/// The curve is evaluated once and every leaf is blended by the eased fraction. `t` outside
/// `[0, 1]` extrapolates. Inputs are not modified.
pub fn interpolate(from: &ValueTree, to: &ValueTree, t: f64, ease: Ease) -> ValueTree {
    <ValueTree as Lerp>::lerp(from, to, ease.apply(t))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;
