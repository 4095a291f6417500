//! Focus statement builder configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Descriptor lookup for one path.
///
/// `field` names the path's discriminant version field; `by` maps its values
/// to descriptor fragments; `default` covers unset or unrecognized values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorMap {
    pub field: String,
    #[serde(default)]
    pub by: BTreeMap<String, String>,
    pub default: String,
}

/// Per-path focus statement templates and descriptor maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusBuilder {
    #[serde(default)]
    pub templates: BTreeMap<String, String>,
    #[serde(default)]
    pub descriptors: BTreeMap<String, DescriptorMap>,
}

/// The `focusStatement` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusStatementSection {
    #[serde(default)]
    pub builder: FocusBuilder,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_deserializes_from_contract_shape() {
        let section: FocusStatementSection = serde_json::from_value(json!({
            "builder": {
                "templates": {
                    "levelUp": "I want to grow toward {descriptor}, starting with {experiment}."
                },
                "descriptors": {
                    "levelUp": {
                        "field": "levelUpType",
                        "by": {"craft": "deeper technical mastery"},
                        "default": "greater responsibility and impact"
                    }
                }
            }
        }))
        .unwrap();

        let map = &section.builder.descriptors["levelUp"];
        assert_eq!(map.field, "levelUpType");
        assert_eq!(map.by["craft"], "deeper technical mastery");
        assert_eq!(map.default, "greater responsibility and impact");
    }

    #[test]
    fn empty_section_defaults() {
        let section: FocusStatementSection = serde_json::from_value(json!({})).unwrap();
        assert!(section.builder.templates.is_empty());
        assert!(section.builder.descriptors.is_empty());
    }
}
