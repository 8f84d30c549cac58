use model::order::spec::OrderSpec;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

/// Caller-supplied tag naming a dataset. Deliberately just a string tag:
/// the engine stays decoupled from any storage or ORM type hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetType(String);

impl DatasetType {
    pub fn new(name: impl Into<String>) -> Self {
        DatasetType(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatasetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
enum OrderSupport {
    /// The requested order must match attributes and directions.
    Exact(OrderSpec),
    /// Multi-ordering mode: any per-attribute direction combination over
    /// this attribute sequence is supported.
    AnyDirection(OrderSpec),
}

impl OrderSupport {
    fn matches(&self, requested: &OrderSpec) -> bool {
        match self {
            OrderSupport::Exact(spec) => {
                spec.same_attributes(requested)
                    && spec
                        .definitions()
                        .iter()
                        .zip(requested.definitions().iter())
                        .all(|(a, b)| a.direction == b.direction)
            }
            OrderSupport::AnyDirection(spec) => spec.same_attributes(requested),
        }
    }
}

/// Which dataset types support keyset pagination for which orderings, and
/// which require it above a row-count threshold.
///
/// Built once at process start and read-only afterwards; pass it by
/// reference rather than holding it in a global, so tests can supply
/// their own. Reloading it is a full rebuild, never an in-place mutation
/// visible to in-flight requests.
#[derive(Debug, Clone, Default)]
pub struct CapabilityRegistry {
    supported: HashMap<DatasetType, Vec<OrderSupport>>,
    enforced: HashMap<DatasetType, u64>,
}

impl CapabilityRegistry {
    pub fn builder() -> CapabilityRegistryBuilder {
        CapabilityRegistryBuilder::default()
    }

    pub fn supports(&self, dataset: &DatasetType, order: &OrderSpec) -> bool {
        self.supported
            .get(dataset)
            .is_some_and(|entries| entries.iter().any(|e| e.matches(order)))
    }

    /// Row-count threshold above which keyset pagination is mandatory for
    /// this dataset, if one was registered.
    pub fn enforcement(&self, dataset: &DatasetType) -> Option<u64> {
        self.enforced.get(dataset).copied()
    }

    pub fn is_enforced(&self, dataset: &DatasetType) -> bool {
        self.enforced.contains_key(dataset)
    }
}

#[derive(Debug, Default)]
pub struct CapabilityRegistryBuilder {
    supported: HashMap<DatasetType, Vec<OrderSupport>>,
    enforced: HashMap<DatasetType, u64>,
}

impl CapabilityRegistryBuilder {
    pub fn register(mut self, dataset: DatasetType, order: OrderSpec) -> Self {
        self.supported
            .entry(dataset)
            .or_default()
            .push(OrderSupport::Exact(order));
        self
    }

    /// Registers the attribute sequence with every direction combination
    /// supported.
    pub fn register_any_direction(mut self, dataset: DatasetType, order: OrderSpec) -> Self {
        self.supported
            .entry(dataset)
            .or_default()
            .push(OrderSupport::AnyDirection(order));
        self
    }

    /// Marks keyset pagination as mandatory for the dataset once it holds
    /// more than `threshold_rows` rows.
    pub fn enforce(mut self, dataset: DatasetType, threshold_rows: u64) -> Self {
        self.enforced.insert(dataset, threshold_rows);
        self
    }

    pub fn build(self) -> CapabilityRegistry {
        CapabilityRegistry {
            supported: self.supported,
            enforced: self.enforced,
        }
    }
}
