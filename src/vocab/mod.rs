//! The OntoUML Vocabulary: namespace, term construction, and term names.
//!
//! All classes, properties, and individuals emitted by the decoder live in
//! the `https://w3id.org/ontouml#` namespace. Term names are kept as string
//! constants so decoders never spell a predicate twice.

pub mod enums;

use oxrdf::NamedNode;

pub use enums::{
    AggregationKind, ClassStereotype, ElementType, OntologicalNature, PropertyStereotype,
    RelationStereotype, Stereotype,
};

/// Namespace of the OntoUML Vocabulary.
pub const ONTOUML_NS: &str = "https://w3id.org/ontouml#";

/// Node for a vocabulary class, property, or individual.
pub fn ontouml_ref(entity: &str) -> NamedNode {
    NamedNode::new_unchecked(format!("{ONTOUML_NS}{entity}"))
}

/// Local name of a vocabulary IRI, or None when the IRI is outside the namespace.
pub fn local_name(iri: &str) -> Option<&str> {
    iri.strip_prefix(ONTOUML_NS)
}

/// Names of vocabulary properties emitted by the specialized decoders.
pub mod terms {
    // Class
    pub const ORDER: &str = "order";
    pub const STEREOTYPE: &str = "stereotype";
    pub const RESTRICTED_TO: &str = "restrictedTo";
    pub const IS_POWERTYPE: &str = "isPowertype";
    pub const IS_EXTENSIONAL: &str = "isExtensional";
    pub const IS_DERIVED: &str = "isDerived";
    pub const IS_ABSTRACT: &str = "isAbstract";
    pub const ATTRIBUTE: &str = "attribute";
    pub const LITERAL: &str = "literal";

    // Property and Cardinality
    pub const IS_ORDERED: &str = "isOrdered";
    pub const IS_READ_ONLY: &str = "isReadOnly";
    pub const AGGREGATION_KIND: &str = "aggregationKind";
    pub const PROPERTY_TYPE: &str = "propertyType";
    pub const SUBSETS_PROPERTY: &str = "subsetsProperty";
    pub const REDEFINES_PROPERTY: &str = "redefinesProperty";
    pub const CARDINALITY: &str = "cardinality";
    pub const CARDINALITY_VALUE: &str = "cardinalityValue";
    pub const LOWER_BOUND: &str = "lowerBound";
    pub const UPPER_BOUND: &str = "upperBound";

    // Relation
    pub const RELATION_END: &str = "relationEnd";
    pub const SOURCE_END: &str = "sourceEnd";
    pub const TARGET_END: &str = "targetEnd";

    // Generalization and GeneralizationSet
    pub const GENERAL: &str = "general";
    pub const SPECIFIC: &str = "specific";
    pub const GENERALIZATION: &str = "generalization";
    pub const CATEGORIZER: &str = "categorizer";
    pub const IS_DISJOINT: &str = "isDisjoint";
    pub const IS_COMPLETE: &str = "isComplete";

    // Project, Package, Diagram
    pub const PROJECT: &str = "project";
    pub const MODEL: &str = "model";
    pub const DIAGRAM: &str = "diagram";
    pub const CONTAINS_MODEL_ELEMENT: &str = "containsModelElement";
    pub const OWNER: &str = "owner";
    pub const CONTAINS_VIEW: &str = "containsView";

    // Views and shapes
    pub const IS_VIEW_OF: &str = "isViewOf";
    pub const SHAPE: &str = "shape";
    pub const SOURCE_VIEW: &str = "sourceView";
    pub const TARGET_VIEW: &str = "targetView";
    pub const TOP_LEFT_POSITION: &str = "topLeftPosition";
    pub const POINT: &str = "point";
    pub const X_COORDINATE: &str = "xCoordinate";
    pub const Y_COORDINATE: &str = "yCoordinate";
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
}
