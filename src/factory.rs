use crate::compat::String;
use crate::mutation::Mutation;
use crate::param_map::ParamMap;
use crate::search_params::SearchParams;

/// Build a [`ParamsFactory`] over the parameters in `query`.
///
/// ```
/// use search_params_helper::search_params_factory;
///
/// let mut params = search_params_factory("?key1=value1");
/// assert_eq!(params.add_param("key2", "value2"), "key1=value1&key2=value2");
/// ```
pub fn search_params_factory(query: &str) -> ParamsFactory {
    ParamsFactory::new(query)
}

/// Factory surface over one shared [`SearchParams`] store.
///
/// Every mutation edits the store in place and returns the serialized query
/// string (no leading `?`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamsFactory {
    params: SearchParams,
}

impl ParamsFactory {
    pub fn new(query: &str) -> Self {
        Self {
            params: SearchParams::parse(query),
        }
    }

    /// The shared store.
    pub fn search_params(&self) -> &SearchParams {
        &self.params
    }

    pub fn into_inner(self) -> SearchParams {
        self.params
    }

    pub fn add_param(&mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> String {
        self.params.add_param(key, value).serialize()
    }

    pub fn add_param_list<I, K, V>(&mut self, pairs: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.params.add_param_list(pairs).serialize()
    }

    pub fn remove_param(&mut self, key: impl AsRef<str>) -> String {
        self.params.remove_param(key).serialize()
    }

    pub fn remove_param_list<I>(&mut self, keys: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.params.remove_param_list(keys).serialize()
    }

    pub fn add_or_replace_param(&mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> String {
        self.params.add_or_replace_param(key, value).serialize()
    }

    pub fn add_or_replace_param_list<I, K, V>(&mut self, pairs: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.params.add_or_replace_param_list(pairs).serialize()
    }

    pub fn get_param(&self, key: impl AsRef<str>) -> Option<&str> {
        self.params.get_param(key)
    }

    pub fn get_param_list<I>(&self, keys: I) -> ParamMap<Option<&str>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.params.get_param_list(keys)
    }

    pub fn get_all_params(&self) -> ParamMap<&str> {
        self.params.get_all_params()
    }

    pub fn get_url_search_params(&self) -> String {
        self.params.serialize()
    }

    /// Run each operation in order against the shared store, then return
    /// the serialized result once.
    ///
    /// Operations are either [`Mutation`] values or closures taking
    /// `&mut ParamsFactory`; mix them by boxing the closures. See also the
    /// [`compose!`](crate::compose!) macro.
    pub fn compose<I>(&mut self, operations: I) -> String
    where
        I: IntoIterator,
        I::Item: Operation,
    {
        for operation in operations {
            operation.apply(self);
        }
        self.get_url_search_params()
    }
}

impl From<SearchParams> for ParamsFactory {
    fn from(params: SearchParams) -> Self {
        Self { params }
    }
}

/// A step accepted by [`ParamsFactory::compose`].
pub trait Operation {
    fn apply(self, factory: &mut ParamsFactory);
}

impl<F> Operation for F
where
    F: FnOnce(&mut ParamsFactory),
{
    fn apply(self, factory: &mut ParamsFactory) {
        self(factory);
    }
}

impl Operation for Mutation {
    fn apply(self, factory: &mut ParamsFactory) {
        self.apply_to(&mut factory.params);
    }
}

/// Variadic form of [`ParamsFactory::compose`].
///
/// ```
/// use search_params_helper::{Mutation, ParamsFactory, compose, search_params_factory};
///
/// let mut params = search_params_factory("?a=1&b=2");
/// let query = compose!(
///     params,
///     Mutation::remove("a"),
///     |p: &mut ParamsFactory| {
///         p.add_param("c", "3");
///     },
/// );
/// assert_eq!(query, "b=2&c=3");
/// ```
#[macro_export]
macro_rules! compose {
    ($factory:expr $(, $operation:expr)* $(,)?) => {{
        let factory: &mut $crate::ParamsFactory = &mut $factory;
        $( $crate::Operation::apply($operation, &mut *factory); )*
        factory.get_url_search_params()
    }};
}
