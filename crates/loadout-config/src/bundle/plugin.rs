use serde::{Deserialize, Serialize};

use crate::bundle::assets::CopyAssetsOptions;
use crate::bundle::html::HtmlOptions;

/// One plugin invocation in the ordered plugin list.
///
/// The set is closed: the base list carries HTML page generation, and
/// production appends the asset-copy step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginDescriptor {
    Html(HtmlOptions),
    CopyAssets(CopyAssetsOptions),
}

impl PluginDescriptor {
    pub fn name(&self) -> &'static str {
        match self {
            PluginDescriptor::Html(_) => "html",
            PluginDescriptor::CopyAssets(_) => "copy-assets",
        }
    }

    pub fn is_copy_assets(&self) -> bool {
        matches!(self, PluginDescriptor::CopyAssets(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_serialize_with_a_plugin_tag() {
        let descriptor = PluginDescriptor::CopyAssets(CopyAssetsOptions::default());
        let value = serde_json::to_value(&descriptor).expect("serialize");
        assert_eq!(value["plugin"], "copy-assets");
        assert_eq!(value["from"], "assets");
    }

    #[test]
    fn descriptors_round_trip_through_json() {
        let descriptor = PluginDescriptor::Html(HtmlOptions {
            title: Some("Savings".to_string()),
            ..HtmlOptions::default()
        });
        let json = serde_json::to_string(&descriptor).expect("serialize");
        let back: PluginDescriptor = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, descriptor);
    }
}
