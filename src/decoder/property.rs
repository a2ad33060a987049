//! Property decoder, including the Cardinality nodes it spawns.

use serde_json::Value;

use super::DecodeContext;
use crate::document::{IndexedObject, referenced_id, referenced_ids, str_field};
use crate::graph::literals;
use crate::validation::{Diagnostic, codes};
use crate::vocab::{AggregationKind, ElementType, PropertyStereotype, Stereotype, terms};

/// Suffix of the Cardinality node derived from a property id.
pub const CARDINALITY_SUFFIX: &str = "_cardinality";

/// Bounds parsed from a cardinality string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardinalityBounds {
    /// The value as declared.
    pub value: String,
    pub lower: String,
    pub upper: String,
}

impl CardinalityBounds {
    /// Split `"<lower>..<upper>"` or `"<n>"`. A `*` lower bound reads as 0;
    /// a single value (or an empty upper bound) is both bounds.
    pub fn parse(value: &str) -> Self {
        let (lower, upper) = match value.split_once("..") {
            Some((lower, "")) => (lower, lower),
            Some((lower, upper)) => (lower, upper),
            None => (value, value),
        };
        let lower = if lower == "*" { "0" } else { lower };
        Self {
            value: value.to_string(),
            lower: lower.to_string(),
            upper: upper.to_string(),
        }
    }

    pub fn lower_is_valid(&self) -> bool {
        is_numeral(&self.lower)
    }

    pub fn upper_is_valid(&self) -> bool {
        self.upper == "*" || is_numeral(&self.upper)
    }
}

fn is_numeral(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Decode every Property definition.
pub fn decode_properties(ctx: &mut DecodeContext<'_>) {
    for (_, obj) in ctx.definitions(ElementType::Property) {
        set_property_defaults(ctx, &obj);
        set_property_relations(ctx, &obj);
        set_property_cardinality(ctx, &obj);
    }
}

fn set_property_defaults(ctx: &mut DecodeContext<'_>, obj: &IndexedObject<'_>) {
    for term in [terms::IS_DERIVED, terms::IS_ORDERED, terms::IS_READ_ONLY] {
        let declared = obj.get(term).and_then(Value::as_bool);
        ctx.bool_or_default(obj, term, declared);
    }
}

fn set_property_relations(ctx: &mut DecodeContext<'_>, obj: &IndexedObject<'_>) {
    let subject = ctx.node(obj.id);

    match str_field(obj.object, terms::AGGREGATION_KIND) {
        None => {
            let none = AggregationKind::None.as_str();
            ctx.reporter.default_applied(obj.type_name, obj.id, terms::AGGREGATION_KIND, none);
            ctx.graph.add_individual(&subject, terms::AGGREGATION_KIND, none);
        }
        Some(declared) => {
            let lowered = declared.to_lowercase();
            if AggregationKind::parse(&lowered).is_none() {
                ctx.reporter
                    .invalid_enum_value(obj.type_name, obj.id, terms::AGGREGATION_KIND, declared);
            }
            ctx.graph.add_individual(&subject, terms::AGGREGATION_KIND, &lowered);
        }
    }

    if let Some(type_id) = referenced_id(obj.object, terms::PROPERTY_TYPE) {
        ctx.relate(obj.id, terms::PROPERTY_TYPE, type_id);
    }

    let stereotype = Stereotype::from_field(obj.get(terms::STEREOTYPE));
    ctx.stereotype(obj, &stereotype, false, |name| {
        PropertyStereotype::parse(name).is_some()
    });

    for subsetted in referenced_ids(obj.object, "subsettedProperties") {
        ctx.relate(obj.id, terms::SUBSETS_PROPERTY, subsetted);
    }
    for redefined in referenced_ids(obj.object, "redefinedProperties") {
        ctx.relate(obj.id, terms::REDEFINES_PROPERTY, redefined);
    }
}

fn set_property_cardinality(ctx: &mut DecodeContext<'_>, obj: &IndexedObject<'_>) {
    let declared = match obj.get(terms::CARDINALITY) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => return,
    };
    let bounds = CardinalityBounds::parse(&declared);

    let cardinality_id = format!("{}{CARDINALITY_SUFFIX}", obj.id);
    let cardinality = ctx.node(&cardinality_id);
    ctx.graph.add_type(&cardinality, ElementType::Cardinality.type_name());
    ctx.relate(obj.id, terms::CARDINALITY, &cardinality_id);
    ctx.graph.add_literal(
        &cardinality,
        terms::CARDINALITY_VALUE,
        literals::text(&bounds.value, None),
    );
    ctx.graph.add_literal(
        &cardinality,
        terms::LOWER_BOUND,
        literals::text(&bounds.lower, None),
    );
    ctx.graph.add_literal(
        &cardinality,
        terms::UPPER_BOUND,
        literals::text(&bounds.upper, None),
    );

    if !bounds.lower_is_valid() {
        report_bound(ctx, obj, "lower", &bounds.lower);
    }
    if !bounds.upper_is_valid() {
        report_bound(ctx, obj, "upper", &bounds.upper);
    }
}

fn report_bound(ctx: &mut DecodeContext<'_>, obj: &IndexedObject<'_>, which: &str, bound: &str) {
    ctx.reporter.add(
        Diagnostic::warning(
            obj.type_name,
            obj.id,
            format!("invalid cardinality {which} bound '{bound}'; stored as is"),
        )
        .with_code(codes::INVALID_CARDINALITY),
    );
}
