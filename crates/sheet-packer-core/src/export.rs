use crate::model::PackingResult;
use serde_json::{json, Value};

/// Serialize a `PackingResult` as the camelCase contract object
/// `{ placed, totalLength, totalAreaUsed, unplaced }` consumed by the quoting
/// and UI layers.
pub fn to_json_value(result: &PackingResult) -> Value {
    let placed_val: Vec<Value> = result
        .placed
        .iter()
        .map(|p| {
            json!({
                "originalId": p.original_id,
                "x": p.x,
                "y": p.y,
                "width": p.width,
                "height": p.height,
                "rotated": p.rotated,
            })
        })
        .collect();
    json!({
        "placed": placed_val,
        "totalLength": result.total_length,
        "totalAreaUsed": result.total_area_used,
        "unplaced": result.unplaced,
    })
}

/// Compact JSON string of the contract object.
pub fn to_json_string(result: &PackingResult) -> crate::error::Result<String> {
    serde_json::to_string(&to_json_value(result))
        .map_err(|e| crate::error::SheetPackerError::Encode(e.to_string()))
}

/// Pretty-printed JSON string of the contract object.
pub fn to_json_string_pretty(result: &PackingResult) -> crate::error::Result<String> {
    serde_json::to_string_pretty(&to_json_value(result))
        .map_err(|e| crate::error::SheetPackerError::Encode(e.to_string()))
}
