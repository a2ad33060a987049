//! Shape decoders: rectangular shapes and paths, with their Point nodes.

use serde_json::{Map, Value};

use super::DecodeContext;
use crate::document::IndexedObject;
use crate::graph::literals;
use crate::validation::{Diagnostic, codes};
use crate::vocab::{ElementType, terms};

/// Suffix of a rectangular shape's top-left Point node.
pub const POINT_SUFFIX: &str = "_point";

/// Integer coordinate from a number or numeral string.
fn coordinate(object: &Map<String, Value>, axis: &str) -> Option<i64> {
    match object.get(axis)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Create a Point node with both coordinates. Returns false, creating
/// nothing, when either coordinate is missing or not an integer.
fn create_point(ctx: &mut DecodeContext<'_>, point_id: &str, source: &Map<String, Value>) -> bool {
    let (Some(x), Some(y)) = (coordinate(source, "x"), coordinate(source, "y")) else {
        return false;
    };
    let point = ctx.node(point_id);
    ctx.graph.add_type(&point, ElementType::Point.type_name());
    ctx.graph.add_literal(&point, terms::X_COORDINATE, literals::integer(x));
    ctx.graph.add_literal(&point, terms::Y_COORDINATE, literals::integer(y));
    true
}

fn report_coordinates(ctx: &mut DecodeContext<'_>, obj: &IndexedObject<'_>, point_id: &str) {
    ctx.reporter.add(
        Diagnostic::error(
            obj.type_name,
            obj.id,
            format!("point '{point_id}' needs integer 'x' and 'y' coordinates"),
        )
        .with_code(codes::INVALID_COORDINATE),
    );
}

/// `topLeftPosition` of every Rectangle and Text.
pub fn decode_rectangular_shapes(ctx: &mut DecodeContext<'_>) {
    let shapes = ElementType::ALL
        .into_iter()
        .filter(|kind| kind.is_rectangular_shape());
    for kind in shapes {
        for (_, obj) in ctx.definitions(kind) {
            let point_id = format!("{}{POINT_SUFFIX}", obj.id);
            if create_point(ctx, &point_id, obj.object) {
                ctx.relate(obj.id, terms::TOP_LEFT_POSITION, &point_id);
            } else {
                report_coordinates(ctx, &obj, &point_id);
            }
        }
    }
}

/// One `point` per entry of a Path's `points`, numbered from zero.
pub fn decode_paths(ctx: &mut DecodeContext<'_>) {
    for (_, obj) in ctx.definitions(ElementType::Path) {
        let Some(Value::Array(points)) = obj.get("points") else {
            continue;
        };
        for (i, entry) in points.iter().enumerate() {
            let point_id = format!("{}{POINT_SUFFIX}_{i}", obj.id);
            let created = match entry {
                Value::Object(source) => create_point(ctx, &point_id, source),
                _ => false,
            };
            if created {
                ctx.relate(obj.id, terms::POINT, &point_id);
            } else {
                report_coordinates(ctx, &obj, &point_id);
            }
        }
    }
}
