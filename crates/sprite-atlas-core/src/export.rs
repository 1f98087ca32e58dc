use crate::model::Layout;
use serde_json::{Value, json};

/// Flatten frames keyed by name, with bin size and rejects at top level.
/// Shape: `{ frames: { name: { frame, trimmed, spriteSourceSize, sourceSize } }, meta }`.
/// Compatible with engine pipelines expecting TexturePacker-like JSON hash.
pub fn to_json_hash(layout: &Layout) -> Value {
    let mut frames = serde_json::Map::new();
    for fr in &layout.frames {
        let frame = json!({"x": fr.frame.x, "y": fr.frame.y, "w": fr.frame.w, "h": fr.frame.h});
        let sprite_source_size =
            json!({"x": fr.source.x, "y": fr.source.y, "w": fr.source.w, "h": fr.source.h});
        let source_size = json!({"w": fr.source_size.0, "h": fr.source_size.1});
        frames.insert(
            fr.key.clone(),
            json!({
                "frame": frame,
                "trimmed": fr.trimmed,
                "spriteSourceSize": sprite_source_size,
                "sourceSize": source_size,
            }),
        );
    }
    json!({
        "frames": frames,
        "meta": {
            "app": "sprite-atlas",
            "version": env!("CARGO_PKG_VERSION"),
            "format": "RGBA8888",
            "size": {"w": layout.width, "h": layout.height},
            "unplaced": layout.unplaced,
        }
    })
}
