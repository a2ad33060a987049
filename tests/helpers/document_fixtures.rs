//! Common OntoUML documents for tests.

use serde_json::{Value, json};

/// A single class with nothing but a name.
pub fn bare_person_class() -> Value {
    json!({"id": "c1", "type": "Class", "name": "Person"})
}

/// A class with the given extra fields merged in.
pub fn class_with(fields: Value) -> Value {
    let mut class = bare_person_class();
    if let (Value::Object(map), Value::Object(fields)) = (&mut class, fields) {
        map.extend(fields);
    }
    class
}

/// A package holding a single class with one attribute.
pub fn class_with_attribute(cardinality: &str) -> Value {
    json!({
        "id": "pkg",
        "type": "Package",
        "name": "Root",
        "contents": [
            {
                "id": "person",
                "type": "Class",
                "name": "Person",
                "stereotype": "kind",
                "properties": [
                    {
                        "id": "age",
                        "type": "Property",
                        "name": "age",
                        "cardinality": cardinality,
                        "propertyType": {"id": "number", "type": "Class"}
                    }
                ]
            },
            {"id": "number", "type": "Class", "name": "Number", "stereotype": "datatype"}
        ]
    })
}

/// A class typing a stereotyped property.
pub fn event_boundary(class_stereotype: Option<&str>, property_stereotype: &str) -> Value {
    let mut owner = json!({"id": "ev", "type": "Class", "name": "Birth"});
    if let (Some(stereotype), Value::Object(map)) = (class_stereotype, &mut owner) {
        map.insert("stereotype".to_string(), json!(stereotype));
    }
    json!({
        "id": "pkg",
        "type": "Package",
        "name": "Root",
        "contents": [
            owner,
            {
                "id": "holder",
                "type": "Class",
                "name": "Holder",
                "stereotype": "kind",
                "properties": [
                    {
                        "id": "start",
                        "type": "Property",
                        "name": "start",
                        "stereotype": property_stereotype,
                        "propertyType": {"id": "ev", "type": "Class"}
                    }
                ]
            }
        ]
    })
}

/// A complete project: model with classes, a generalization, and a relation,
/// plus one diagram with views, rectangles, and a path.
pub fn sample_project() -> Value {
    json!({
        "id": "proj",
        "type": "Project",
        "name": "Sample",
        "model": {
            "id": "pkg",
            "type": "Package",
            "name": "Root",
            "contents": [
                {
                    "id": "person",
                    "type": "Class",
                    "name": "Person",
                    "description": "A human being",
                    "stereotype": "kind",
                    "restrictedTo": ["functional-complex"],
                    "properties": [
                        {
                            "id": "age",
                            "type": "Property",
                            "name": "age",
                            "cardinality": "1",
                            "propertyType": {"id": "number", "type": "Class"}
                        }
                    ]
                },
                {"id": "number", "type": "Class", "name": "Number", "stereotype": "datatype"},
                {"id": "student", "type": "Class", "name": "Student", "stereotype": "role"},
                {
                    "id": "gen1",
                    "type": "Generalization",
                    "general": {"id": "person", "type": "Class"},
                    "specific": {"id": "student", "type": "Class"}
                },
                {
                    "id": "gs1",
                    "type": "GeneralizationSet",
                    "name": "Roles",
                    "isDisjoint": true,
                    "generalizations": [{"id": "gen1", "type": "Generalization"}]
                },
                {
                    "id": "rel1",
                    "type": "Relation",
                    "name": "knows",
                    "stereotype": "material",
                    "properties": [
                        {
                            "id": "rel1_src",
                            "type": "Property",
                            "cardinality": "0..*",
                            "propertyType": {"id": "person", "type": "Class"}
                        },
                        {
                            "id": "rel1_tgt",
                            "type": "Property",
                            "cardinality": "1..*",
                            "propertyType": {"id": "student", "type": "Class"}
                        }
                    ]
                }
            ]
        },
        "diagrams": [
            {
                "id": "d1",
                "type": "Diagram",
                "name": "Main",
                "owner": {"id": "pkg", "type": "Package"},
                "contents": [
                    {
                        "id": "cv1",
                        "type": "ClassView",
                        "modelElement": {"id": "person", "type": "Class"},
                        "shape": {
                            "id": "cv1_rect",
                            "type": "Rectangle",
                            "x": 10,
                            "y": 20,
                            "width": 100,
                            "height": 50
                        }
                    },
                    {
                        "id": "cv2",
                        "type": "ClassView",
                        "modelElement": {"id": "student", "type": "Class"},
                        "shape": {
                            "id": "cv2_rect",
                            "type": "Rectangle",
                            "x": 10,
                            "y": 120,
                            "width": 100,
                            "height": 50
                        }
                    },
                    {
                        "id": "gv1",
                        "type": "GeneralizationView",
                        "modelElement": {"id": "gen1", "type": "Generalization"},
                        "source": {"id": "cv2", "type": "ClassView"},
                        "target": {"id": "cv1", "type": "ClassView"},
                        "shape": {
                            "id": "gv1_path",
                            "type": "Path",
                            "points": [{"x": 60, "y": 120}, {"x": 60, "y": 70}]
                        }
                    }
                ]
            }
        ]
    })
}

/// A class declaring every attribute, consistently with its stereotype.
pub fn declared_class(stereotype: &str, order: u64, is_powertype: bool) -> Value {
    let mut class = json!({
        "id": "c1",
        "type": "Class",
        "name": "Person",
        "stereotype": stereotype,
        "order": order,
        "isAbstract": false,
        "isDerived": false,
        "isPowertype": is_powertype
    });
    if let (true, Value::Object(map)) = (stereotype == "collective", &mut class) {
        map.insert("isExtensional".to_string(), json!(true));
    }
    class
}

/// A property declaring every attribute, typed by a class stub.
pub fn declared_property(id: &str) -> Value {
    json!({
        "id": id,
        "type": "Property",
        "name": id,
        "isDerived": false,
        "isOrdered": true,
        "isReadOnly": false,
        "aggregationKind": "none",
        "propertyType": {"id": "c1", "type": "Class"}
    })
}

/// A material relation declaring every attribute, with two declared ends.
pub fn declared_relation() -> Value {
    json!({
        "id": "r1",
        "type": "Relation",
        "name": "knows",
        "stereotype": "material",
        "isDerived": false,
        "isAbstract": true,
        "properties": [declared_property("e1"), declared_property("e2")]
    })
}
