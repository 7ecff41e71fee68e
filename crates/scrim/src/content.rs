//! The content collaborator: whatever the caller wants shown inside the
//! dialog window.
//!
//! The host imposes nothing on content beyond "renderable by the embedding
//! renderer". Content is instantiated with its own default properties merged
//! underneath the caller-supplied ones.

use std::any::type_name;

use convert_case::{Case, Casing};
use serde_json::{Map, Value};

/// Properties handed to content when it is shown. Opaque to the host.
pub type Props = Map<String, Value>;

/// Caller-supplied modal content.
pub trait Content {
    /// Name used in logs and debug output. Defaults to the munged type name.
    fn name(&self) -> String {
        let full = type_name::<Self>();
        let short = full.rsplit("::").next().unwrap_or(full);
        short.to_case(Case::Snake)
    }

    /// Default properties, merged underneath caller-supplied props.
    fn default_props(&self) -> Props {
        Props::new()
    }

    /// Called when this content becomes the session's active renderer, with
    /// the merged properties it will be shown with.
    fn mounted(&self, _props: &Props) {}

    /// Called when this content stops being the active renderer, either
    /// because the session closed or because the content was swapped.
    fn unmounted(&self) {}
}

/// Merge caller props over content defaults. Caller keys win on collision.
pub(crate) fn merge_props(defaults: Props, overrides: Option<&Props>) -> Props {
    let mut merged = defaults;
    if let Some(overrides) = overrides {
        for (k, v) in overrides {
            merged.insert(k.clone(), v.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    /// Content stub with one default prop.
    struct Greeter;

    impl Content for Greeter {
        fn default_props(&self) -> Props {
            let mut p = Props::new();
            p.insert("greeting".into(), json!("hello"));
            p
        }
    }

    #[test]
    fn default_name_is_munged_type_name() {
        assert_eq!(Greeter.name(), "greeter");
    }

    #[test]
    fn caller_props_win_on_collision() {
        let mut over = Props::new();
        over.insert("greeting".into(), json!("hi"));
        over.insert("count".into(), json!(2));
        let merged = merge_props(Greeter.default_props(), Some(&over));
        assert_eq!(merged.get("greeting").unwrap(), "hi");
        assert_eq!(merged.get("count").unwrap(), 2);
    }

    #[test]
    fn absent_overrides_keep_defaults() {
        let merged = merge_props(Greeter.default_props(), None);
        assert_eq!(merged.get("greeting").unwrap(), "hello");
    }
}
