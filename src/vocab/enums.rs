//! Enumeration tables of the OntoUML Vocabulary.
//!
//! Closed sets used by the decoders: the element types that have a
//! specialized decoder, the class/relation/property stereotypes, the
//! ontological natures a class can be restricted to, and aggregation kinds.

// ============================================================================
// ELEMENT TYPES
// ============================================================================

/// The closed set of element types the decoder knows about.
///
/// `Cardinality` and `Point` never appear in input documents; they are
/// created by the Property and shape decoders. Unknown `type` values are
/// not represented here: the generic walker still asserts them, but no
/// specialized decoder matches them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementType {
    // Containers
    Project,
    Package,
    Diagram,

    // Model elements
    Class,
    Property,
    Relation,
    Generalization,
    GeneralizationSet,
    Literal,
    Note,
    Cardinality,

    // Views
    ClassView,
    PackageView,
    GeneralizationSetView,
    RelationView,
    GeneralizationView,
    NoteView,

    // Shapes
    Rectangle,
    Text,
    Path,
    Point,
}

impl ElementType {
    /// Every element type, in decode order of their specialized decoders.
    pub const ALL: [Self; 21] = [
        Self::Project,
        Self::Package,
        Self::Diagram,
        Self::Class,
        Self::Property,
        Self::Relation,
        Self::Generalization,
        Self::GeneralizationSet,
        Self::Literal,
        Self::Note,
        Self::Cardinality,
        Self::ClassView,
        Self::PackageView,
        Self::GeneralizationSetView,
        Self::RelationView,
        Self::GeneralizationView,
        Self::NoteView,
        Self::Rectangle,
        Self::Text,
        Self::Path,
        Self::Point,
    ];

    /// The element-view family.
    pub const ELEMENT_VIEWS: [Self; 6] = [
        Self::ClassView,
        Self::PackageView,
        Self::GeneralizationSetView,
        Self::RelationView,
        Self::GeneralizationView,
        Self::NoteView,
    ];

    /// Types kept by the `model_only` filter.
    pub const MODEL_ELEMENTS: [Self; 6] = [
        Self::Class,
        Self::Property,
        Self::Generalization,
        Self::GeneralizationSet,
        Self::Relation,
        Self::Cardinality,
    ];

    /// The `type` string used in documents and the vocabulary class name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Project => "Project",
            Self::Package => "Package",
            Self::Diagram => "Diagram",
            Self::Class => "Class",
            Self::Property => "Property",
            Self::Relation => "Relation",
            Self::Generalization => "Generalization",
            Self::GeneralizationSet => "GeneralizationSet",
            Self::Literal => "Literal",
            Self::Note => "Note",
            Self::Cardinality => "Cardinality",
            Self::ClassView => "ClassView",
            Self::PackageView => "PackageView",
            Self::GeneralizationSetView => "GeneralizationSetView",
            Self::RelationView => "RelationView",
            Self::GeneralizationView => "GeneralizationView",
            Self::NoteView => "NoteView",
            Self::Rectangle => "Rectangle",
            Self::Text => "Text",
            Self::Path => "Path",
            Self::Point => "Point",
        }
    }

    /// Parse a document `type` string. Returns None for unknown types.
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.type_name() == name)
    }

    /// Returns true for types kept by the `model_only` filter.
    pub fn is_model_element(&self) -> bool {
        Self::MODEL_ELEMENTS.contains(self)
    }

    /// Returns true for the element-view family.
    pub fn is_element_view(&self) -> bool {
        Self::ELEMENT_VIEWS.contains(self)
    }

    /// Returns true for views drawn as connectors between two other views.
    pub fn is_connector_view(&self) -> bool {
        matches!(self, Self::RelationView | Self::GeneralizationView)
    }

    /// Returns true for shapes positioned by a top-left point.
    pub fn is_rectangular_shape(&self) -> bool {
        matches!(self, Self::Rectangle | Self::Text)
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

// ============================================================================
// STEREOTYPE (possibly absent)
// ============================================================================

/// A stereotype as declared on a source object.
///
/// Absence is a distinct state rather than an empty string: a declared
/// empty stereotype is present (and invalid), an absent one is missing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Stereotype {
    #[default]
    Absent,
    Declared(String),
}

impl Stereotype {
    /// Sentinel used when rendering an absent stereotype.
    pub const ABSENT: &'static str = "null";

    /// Read the `stereotype` field of an object.
    pub fn from_field(value: Option<&serde_json::Value>) -> Self {
        match value {
            None | Some(serde_json::Value::Null) => Self::Absent,
            Some(serde_json::Value::String(s)) => Self::Declared(s.clone()),
            Some(other) => Self::Declared(other.to_string()),
        }
    }

    pub fn declared(name: impl Into<String>) -> Self {
        Self::Declared(name.into())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns true if the stereotype is declared with exactly this name.
    pub fn is(&self, name: &str) -> bool {
        matches!(self, Self::Declared(s) if s == name)
    }

    /// The declared name, or the `"null"` sentinel.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Absent => Self::ABSENT,
            Self::Declared(s) => s,
        }
    }

    /// The declared name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Declared(s) => Some(s),
        }
    }
}

impl std::fmt::Display for Stereotype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CLASS STEREOTYPES
// ============================================================================

/// Individuals of `ontouml:ClassStereotype`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassStereotype {
    Type,
    HistoricalRole,
    HistoricalRoleMixin,
    Event,
    Situation,
    Category,
    Mixin,
    RoleMixin,
    PhaseMixin,
    Kind,
    Collective,
    Quantity,
    Relator,
    Quality,
    Mode,
    Subkind,
    Role,
    Phase,
    Enumeration,
    Datatype,
    Abstract,
}

impl ClassStereotype {
    pub const ALL: [Self; 21] = [
        Self::Type,
        Self::HistoricalRole,
        Self::HistoricalRoleMixin,
        Self::Event,
        Self::Situation,
        Self::Category,
        Self::Mixin,
        Self::RoleMixin,
        Self::PhaseMixin,
        Self::Kind,
        Self::Collective,
        Self::Quantity,
        Self::Relator,
        Self::Quality,
        Self::Mode,
        Self::Subkind,
        Self::Role,
        Self::Phase,
        Self::Enumeration,
        Self::Datatype,
        Self::Abstract,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::HistoricalRole => "historicalRole",
            Self::HistoricalRoleMixin => "historicalRoleMixin",
            Self::Event => "event",
            Self::Situation => "situation",
            Self::Category => "category",
            Self::Mixin => "mixin",
            Self::RoleMixin => "roleMixin",
            Self::PhaseMixin => "phaseMixin",
            Self::Kind => "kind",
            Self::Collective => "collective",
            Self::Quantity => "quantity",
            Self::Relator => "relator",
            Self::Quality => "quality",
            Self::Mode => "mode",
            Self::Subkind => "subkind",
            Self::Role => "role",
            Self::Phase => "phase",
            Self::Enumeration => "enumeration",
            Self::Datatype => "datatype",
            Self::Abstract => "abstract",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

// ============================================================================
// RELATION STEREOTYPES
// ============================================================================

/// Individuals of `ontouml:RelationStereotype`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelationStereotype {
    BringsAbout,
    Characterization,
    Comparative,
    ComponentOf,
    Creation,
    Derivation,
    ExternalDependence,
    HistoricalDependence,
    Instantiation,
    Manifestation,
    Material,
    Mediation,
    MemberOf,
    Participation,
    Participational,
    SubCollectionOf,
    SubQuantityOf,
    Termination,
    Triggers,
}

impl RelationStereotype {
    pub const ALL: [Self; 19] = [
        Self::BringsAbout,
        Self::Characterization,
        Self::Comparative,
        Self::ComponentOf,
        Self::Creation,
        Self::Derivation,
        Self::ExternalDependence,
        Self::HistoricalDependence,
        Self::Instantiation,
        Self::Manifestation,
        Self::Material,
        Self::Mediation,
        Self::MemberOf,
        Self::Participation,
        Self::Participational,
        Self::SubCollectionOf,
        Self::SubQuantityOf,
        Self::Termination,
        Self::Triggers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BringsAbout => "bringsAbout",
            Self::Characterization => "characterization",
            Self::Comparative => "comparative",
            Self::ComponentOf => "componentOf",
            Self::Creation => "creation",
            Self::Derivation => "derivation",
            Self::ExternalDependence => "externalDependence",
            Self::HistoricalDependence => "historicalDependence",
            Self::Instantiation => "instantiation",
            Self::Manifestation => "manifestation",
            Self::Material => "material",
            Self::Mediation => "mediation",
            Self::MemberOf => "memberOf",
            Self::Participation => "participation",
            Self::Participational => "participational",
            Self::SubCollectionOf => "subCollectionOf",
            Self::SubQuantityOf => "subQuantityOf",
            Self::Termination => "termination",
            Self::Triggers => "triggers",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

// ============================================================================
// PROPERTY STEREOTYPES
// ============================================================================

/// Individuals of `ontouml:PropertyStereotype`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyStereotype {
    Begin,
    End,
}

impl PropertyStereotype {
    pub const ALL: [Self; 2] = [Self::Begin, Self::End];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Begin => "begin",
            Self::End => "end",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

// ============================================================================
// ONTOLOGICAL NATURES
// ============================================================================

/// Individuals of `ontouml:OntologicalNature`, the values of `restrictedTo`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OntologicalNature {
    Abstract,
    Collective,
    Event,
    ExtrinsicMode,
    FunctionalComplex,
    IntrinsicMode,
    Quality,
    Quantity,
    Relator,
    Situation,
    Type,
}

impl OntologicalNature {
    pub const ALL: [Self; 11] = [
        Self::Abstract,
        Self::Collective,
        Self::Event,
        Self::ExtrinsicMode,
        Self::FunctionalComplex,
        Self::IntrinsicMode,
        Self::Quality,
        Self::Quantity,
        Self::Relator,
        Self::Situation,
        Self::Type,
    ];

    /// Spelling used in documents (`restrictedTo` array items).
    pub fn document_name(&self) -> &'static str {
        match self {
            Self::Abstract => "abstract",
            Self::Collective => "collective",
            Self::Event => "event",
            Self::ExtrinsicMode => "extrinsic-mode",
            Self::FunctionalComplex => "functional-complex",
            Self::IntrinsicMode => "intrinsic-mode",
            Self::Quality => "quality",
            Self::Quantity => "quantity",
            Self::Relator => "relator",
            Self::Situation => "situation",
            Self::Type => "type",
        }
    }

    /// Name of the vocabulary individual.
    pub fn individual(&self) -> &'static str {
        match self {
            Self::Abstract => "abstractNature",
            Self::Collective => "collectiveNature",
            Self::Event => "eventNature",
            Self::ExtrinsicMode => "extrinsicModeNature",
            Self::FunctionalComplex => "functionalComplexNature",
            Self::IntrinsicMode => "intrinsicModeNature",
            Self::Quality => "qualityNature",
            Self::Quantity => "quantityNature",
            Self::Relator => "relatorNature",
            Self::Situation => "situationNature",
            Self::Type => "typeNature",
        }
    }

    pub fn from_document_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.document_name() == name)
    }
}

// ============================================================================
// AGGREGATION KINDS
// ============================================================================

/// Individuals of `ontouml:AggregationKind`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AggregationKind {
    #[default]
    None,
    Shared,
    Composite,
}

impl AggregationKind {
    pub const ALL: [Self; 3] = [Self::None, Self::Shared, Self::Composite];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Shared => "shared",
            Self::Composite => "composite",
        }
    }

    /// Parse a document value; documents use upper case (`"COMPOSITE"`).
    pub fn parse(name: &str) -> Option<Self> {
        let lowered = name.to_lowercase();
        Self::ALL.into_iter().find(|k| k.as_str() == lowered)
    }
}
