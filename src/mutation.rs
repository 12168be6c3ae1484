use crate::compat::{String, ToString, Vec};
use crate::search_params::SearchParams;

/// A prepared mutation of a [`SearchParams`] store.
///
/// Useful when the edits to make are data rather than code, e.g. when
/// building a list of steps to hand to
/// [`ParamsFactory::compose`](crate::ParamsFactory::compose).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    AddParam { key: String, value: String },
    AddParamList(Vec<(String, String)>),
    RemoveParam(String),
    RemoveParamList(Vec<String>),
    AddOrReplaceParam { key: String, value: String },
    AddOrReplaceParamList(Vec<(String, String)>),
}

impl Mutation {
    pub fn add(key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        Self::AddParam {
            key: key.as_ref().to_string(),
            value: value.as_ref().to_string(),
        }
    }

    pub fn add_list<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::AddParamList(owned_pairs(pairs))
    }

    pub fn remove(key: impl AsRef<str>) -> Self {
        Self::RemoveParam(key.as_ref().to_string())
    }

    pub fn remove_list<I>(keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::RemoveParamList(keys.into_iter().map(|k| k.as_ref().to_string()).collect())
    }

    pub fn add_or_replace(key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        Self::AddOrReplaceParam {
            key: key.as_ref().to_string(),
            value: value.as_ref().to_string(),
        }
    }

    pub fn add_or_replace_list<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::AddOrReplaceParamList(owned_pairs(pairs))
    }

    /// Run this mutation against `params`.
    pub fn apply_to(self, params: &mut SearchParams) {
        match self {
            Self::AddParam { key, value } => params.add_param(key, value),
            Self::AddParamList(pairs) => params.add_param_list(pairs),
            Self::RemoveParam(key) => params.remove_param(key),
            Self::RemoveParamList(keys) => params.remove_param_list(keys),
            Self::AddOrReplaceParam { key, value } => params.add_or_replace_param(key, value),
            Self::AddOrReplaceParamList(pairs) => params.add_or_replace_param_list(pairs),
        };
    }
}

fn owned_pairs<I, K, V>(pairs: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
        .collect()
}
