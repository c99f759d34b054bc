//! Recursive manifest merging.

use serde_json::Value;

/// Merge `overlay` into `base`, returning the union.
///
/// Nested objects merge key-by-key; arrays and scalars from `overlay`
/// replace the value in `base`. Keys already present in `base` keep
/// their position; new keys are appended in `overlay` order.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut a), Value::Object(b)) => {
            for (key, incoming) in b {
                match a.get_mut(&key) {
                    Some(existing) => {
                        let previous = existing.take();
                        *existing = deep_merge(previous, incoming);
                    }
                    None => {
                        a.insert(key, incoming);
                    }
                }
            }
            Value::Object(a)
        }
        (_, overlay) => overlay,
    }
}
