//! Local consistency rules for classes.
//!
//! Rules run on a [`ClassRecord`], a normalized copy of the class's
//! attributes. Every violation is reported; the record is only repaired when
//! correction is enabled. The decoder emits from the record afterwards, so a
//! repair changes the output and a report alone does not.

use serde_json::{Map, Value};

use super::diagnostics::{Diagnostic, Reporter, codes};
use crate::document::bool_field;
use crate::vocab::{ClassStereotype, Stereotype};

const CLASS: &str = "Class";

// ============================================================================
// ORDER
// ============================================================================

/// A class's `order`, as declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Order {
    Absent,
    /// `"*"`: orderless, emitted as 0.
    Unbounded,
    /// A positive order.
    Finite(u64),
    /// Anything else, kept verbatim for reporting.
    Invalid(String),
}

impl Order {
    pub fn from_field(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::Number(n)) => match n.as_u64() {
                Some(v) if v > 0 => Self::Finite(v),
                _ => Self::Invalid(n.to_string()),
            },
            Some(Value::String(s)) if s == "*" => Self::Unbounded,
            Some(Value::String(s)) => match s.parse::<u64>() {
                Ok(v) if v > 0 => Self::Finite(v),
                _ => Self::Invalid(s.clone()),
            },
            Some(other) => Self::Invalid(other.to_string()),
        }
    }

    /// Numeric value as emitted (`*` is 0). None when absent or invalid.
    pub fn value(&self) -> Option<u64> {
        match self {
            Self::Unbounded => Some(0),
            Self::Finite(v) => Some(*v),
            Self::Absent | Self::Invalid(_) => None,
        }
    }
}

/// Default order for a stereotype: 2 for `type`, 1 for anything else.
pub fn default_order(stereotype: &Stereotype) -> u64 {
    if stereotype.is(ClassStereotype::Type.as_str()) { 2 } else { 1 }
}

// ============================================================================
// CLASS RECORD
// ============================================================================

/// The attributes of one class definition that rules inspect and repair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassRecord {
    pub id: String,
    pub stereotype: Stereotype,
    pub is_extensional: Option<bool>,
    pub is_powertype: Option<bool>,
    pub is_derived: Option<bool>,
    pub is_abstract: Option<bool>,
    pub order: Order,
}

impl ClassRecord {
    pub fn from_object(id: &str, object: &Map<String, Value>) -> Self {
        Self {
            id: id.to_string(),
            stereotype: Stereotype::from_field(object.get("stereotype")),
            is_extensional: bool_field(object, "isExtensional"),
            is_powertype: bool_field(object, "isPowertype"),
            is_derived: bool_field(object, "isDerived"),
            is_abstract: bool_field(object, "isAbstract"),
            order: Order::from_field(object.get("order")),
        }
    }

    fn is(&self, stereotype: ClassStereotype) -> bool {
        self.stereotype.is(stereotype.as_str())
    }

    /// The order to emit: the declared one when valid, else the default.
    pub fn resolved_order(&self) -> u64 {
        self.order
            .value()
            .unwrap_or_else(|| default_order(&self.stereotype))
    }
}

// ============================================================================
// RULES
// ============================================================================

/// Attribute rules tying `isExtensional` to `collective` and `isPowertype`
/// to `type`. The first matching rule ends the check.
pub fn check_class_attributes(record: &mut ClassRecord, correct: bool, reporter: &mut Reporter) {
    let is_type = record.is(ClassStereotype::Type);
    let is_collective = record.is(ClassStereotype::Collective);
    let absent = record.stereotype.is_absent();

    if !is_type && record.is_extensional.is_some() && record.is_powertype.is_some() {
        if record.is_powertype == Some(true) {
            reporter.add(
                Diagnostic::error(
                    CLASS,
                    &record.id,
                    "'isPowertype' true (only allowed for 'type') conflicts with a declared \
                     'isExtensional' (only allowed for 'collective'); the output is \
                     semantically invalid",
                )
                .with_code(codes::CONFLICTING_ATTRIBUTES),
            );
        }
    } else if absent && record.is_extensional.is_some() {
        infer_stereotype(
            record,
            "isExtensional",
            ClassStereotype::Collective,
            correct,
            reporter,
        );
    } else if absent && record.is_powertype.is_some() {
        if record.is_powertype == Some(true) {
            infer_stereotype(
                record,
                "isPowertype",
                ClassStereotype::Type,
                correct,
                reporter,
            );
        }
    } else if !is_collective && record.is_extensional.is_some() {
        let action = if correct { "removed" } else { "should be removed" };
        reporter.add(
            Diagnostic::warning(
                CLASS,
                &record.id,
                format!(
                    "attribute 'isExtensional' {action}: it is only allowed in classes \
                     with stereotype 'collective'"
                ),
            )
            .with_code(codes::ATTRIBUTE_NOT_ALLOWED),
        );
        if correct {
            record.is_extensional = None;
        }
    } else if !is_type && record.is_powertype == Some(true) {
        let action = if correct { "set" } else { "should be set" };
        reporter.add(
            Diagnostic::warning(
                CLASS,
                &record.id,
                format!(
                    "attribute 'isPowertype' {action} to false: it can only be true in \
                     classes with stereotype 'type'"
                ),
            )
            .with_code(codes::ATTRIBUTE_NOT_ALLOWED),
        );
        if correct {
            record.is_powertype = Some(false);
        }
    }
}

fn infer_stereotype(
    record: &mut ClassRecord,
    attribute: &str,
    implied: ClassStereotype,
    correct: bool,
    reporter: &mut Reporter,
) {
    let action = if correct { "set" } else { "implied" };
    reporter.add(
        Diagnostic::warning(
            CLASS,
            &record.id,
            format!(
                "stereotype {action} to '{}' as the class declares '{attribute}', \
                 only allowed with that stereotype",
                implied.as_str()
            ),
        )
        .with_code(codes::STEREOTYPE_INFERRED),
    );
    if correct {
        record.stereotype = Stereotype::declared(implied.as_str());
    }
}

/// Order rules: invalid values fall back to the default, `type` classes
/// need an order above 1, other classes an order of 1.
pub fn check_class_order(record: &mut ClassRecord, correct: bool, reporter: &mut Reporter) {
    if let Order::Invalid(raw) = &record.order {
        reporter.add(
            Diagnostic::warning(
                CLASS,
                &record.id,
                format!(
                    "invalid order '{raw}'; default value {} used",
                    default_order(&record.stereotype)
                ),
            )
            .with_code(codes::INVALID_ORDER),
        );
        record.order = Order::Absent;
        return;
    }

    let is_type = record.is(ClassStereotype::Type);
    let violation = match record.order {
        Order::Finite(1) if is_type => {
            Some("classes with stereotype 'type' must have an order greater than 1")
        }
        Order::Finite(n) if !is_type && n > 1 => {
            Some("classes with stereotype other than 'type' must have order 1")
        }
        _ => None,
    };
    if let Some(reason) = violation {
        let action = if correct { "reset to its default" } else { "kept" };
        reporter.add(
            Diagnostic::warning(CLASS, &record.id, format!("order {action}: {reason}"))
                .with_code(codes::INVALID_ORDER),
        );
        if correct {
            record.order = Order::Absent;
        }
    }
}

/// Run every local class rule in priority order.
pub fn check_class(record: &mut ClassRecord, correct: bool, reporter: &mut Reporter) {
    check_class_attributes(record, correct, reporter);
    check_class_order(record, correct, reporter);
}
