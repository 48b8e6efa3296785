use crate::error::FieldError;
use crate::fields::{FieldConstraint, FieldName, ValidationVerdict, validate};
use ahash::AHashMap;

/// The per-field constraint table for one wizard deployment.
///
/// Constraints are static configuration: the catalog is assembled once at
/// session construction and never mutated afterwards. Fields without an entry
/// are treated as unconstrained.
#[derive(Debug, Clone)]
pub struct ConstraintCatalog {
    constraints: AHashMap<FieldName, FieldConstraint>,
}

impl ConstraintCatalog {
    /// An empty catalog; every field passes until a constraint is registered.
    pub fn empty() -> Self {
        Self {
            constraints: AHashMap::new(),
        }
    }

    /// The observed file-transfer wizard table. All nine fields are mandatory
    /// with inclusive character bounds.
    pub fn transfer_defaults() -> Self {
        Self::empty()
            .with_constraint(FieldName::Name, FieldConstraint::required(10, 100))
            .with_constraint(FieldName::Description, FieldConstraint::required(10, 500))
            .with_constraint(FieldName::Host, FieldConstraint::required(10, 15))
            .with_constraint(FieldName::Port, FieldConstraint::required(4, 5))
            .with_constraint(FieldName::User, FieldConstraint::required(3, 20))
            .with_constraint(FieldName::Password, FieldConstraint::required(8, 32))
            .with_constraint(FieldName::Origin, FieldConstraint::required(3, 100))
            .with_constraint(FieldName::Destination, FieldConstraint::required(3, 100))
            .with_constraint(FieldName::Regex, FieldConstraint::required(5, 50))
    }

    /// Registers (or replaces) the constraint for `field`.
    pub fn with_constraint(mut self, field: FieldName, constraint: FieldConstraint) -> Self {
        self.constraints.insert(field, constraint);
        self
    }

    pub fn constraint(&self, field: FieldName) -> Option<&FieldConstraint> {
        self.constraints.get(&field)
    }

    /// Checks one value against the registered constraint for `field`.
    pub fn check(&self, field: FieldName, value: &str) -> ValidationVerdict {
        match self.constraints.get(&field) {
            Some(constraint) => validate(field, value, constraint),
            None => ValidationVerdict::Valid,
        }
    }

    /// Checks a whole stage payload, returning every failure in field order.
    pub fn check_all<'a, I>(&self, fields: I) -> Vec<FieldError>
    where
        I: IntoIterator<Item = (FieldName, &'a str)>,
    {
        fields
            .into_iter()
            .filter_map(|(field, value)| self.check(field, value).into_err())
            .collect()
    }
}

impl Default for ConstraintCatalog {
    /// Defaults to the observed transfer table, the way reference data ships
    /// with the crate.
    fn default() -> Self {
        Self::transfer_defaults()
    }
}
