use serde::ser::{Serialize, SerializeMap, Serializer};
use std::ops::{Index, IndexMut};

use crate::error::ValidationError;
use crate::models::analysis::criterion::Criterion;

/// A value for every criterion, stored by `Criterion::index`.
///
/// Being array-backed, a map with a missing criterion cannot be built from
/// typed code. Untyped input goes through [`CriterionMap::try_from_pairs`].
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionMap<T>([T; Criterion::COUNT]);

impl<T> CriterionMap<T> {
    pub fn from_fn(mut f: impl FnMut(Criterion) -> T) -> Self {
        CriterionMap(std::array::from_fn(|i| f(Criterion::ALL[i])))
    }

    pub fn get(&self, criterion: Criterion) -> &T {
        &self.0[criterion.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, &T)> {
        Criterion::ALL.into_iter().zip(self.0.iter())
    }

    pub fn map<U>(&self, mut f: impl FnMut(Criterion, &T) -> U) -> CriterionMap<U> {
        CriterionMap::from_fn(|c| f(c, self.get(c)))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T: Copy> CriterionMap<T> {
    /// Builds a map from loosely-keyed pairs, failing on the first criterion
    /// with no value. Later duplicates overwrite earlier ones.
    pub fn try_from_pairs<K, I>(pairs: I) -> Result<Self, ValidationError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut slots: [Option<T>; Criterion::COUNT] = [None; Criterion::COUNT];
        for (key, value) in pairs {
            let criterion: Criterion = key.as_ref().parse()?;
            slots[criterion.index()] = Some(value);
        }

        for criterion in Criterion::ALL {
            if slots[criterion.index()].is_none() {
                return Err(ValidationError::MissingCriterion(criterion));
            }
        }
        Ok(CriterionMap::from_fn(|c| {
            slots[c.index()].unwrap_or_else(|| unreachable!("checked above"))
        }))
    }
}

impl<T> Index<Criterion> for CriterionMap<T> {
    type Output = T;

    fn index(&self, criterion: Criterion) -> &T {
        self.get(criterion)
    }
}

impl<T> IndexMut<Criterion> for CriterionMap<T> {
    fn index_mut(&mut self, criterion: Criterion) -> &mut T {
        &mut self.0[criterion.index()]
    }
}

impl<T: Serialize> Serialize for CriterionMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Criterion::COUNT))?;
        for (criterion, value) in self.iter() {
            map.serialize_entry(criterion.name(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_pairs_reports_first_missing_criterion() {
        let pairs = Criterion::ALL
            .iter()
            .filter(|c| **c != Criterion::Uniqueness)
            .map(|c| (c.name(), 10.0));
        assert_eq!(
            CriterionMap::try_from_pairs(pairs),
            Err(ValidationError::MissingCriterion(Criterion::Uniqueness))
        );
    }

    #[test]
    fn try_from_pairs_rejects_misspelled_keys() {
        let result = CriterionMap::try_from_pairs([("readabilty", 1.0)]);
        assert!(matches!(result, Err(ValidationError::UnknownCriterion(_))));
    }

    #[test]
    fn serializes_every_criterion_by_name() {
        let map = CriterionMap::from_fn(|c| c.index());
        let value = serde_json::to_value(&map).unwrap();
        assert_eq!(value["readability"], 0);
        assert_eq!(value["social_integration"], 8);
        assert_eq!(value.as_object().unwrap().len(), Criterion::COUNT);
    }
}
