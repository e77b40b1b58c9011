//! Program structure submitted by the visual editor.
//!
//! Field names mirror the editor's wire format, so a program serialized from
//! the canvas deserializes here without translation. The compiler never
//! mutates these structures; generation produces new text output.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A complete visual program: every function authored on the canvas, plus
/// any UI components dropped onto it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramStructure {
    /// Function id -> definition. Insertion order decides emission order.
    #[serde(default)]
    pub functions: IndexMap<String, FunctionDef>,

    /// UI components dropped onto the canvas, in drop order.
    #[serde(default, rename = "htmlComponents")]
    pub html_components: Vec<UiComponent>,

    /// When set, the generated program ends with a web-app bootstrap that
    /// invokes the entry point once the page loads.
    #[serde(default, rename = "hasHtmlComponents")]
    pub has_html_components: bool,
}

impl ProgramStructure {
    /// Parse a program from the editor's JSON wire format.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// One function authored on the canvas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionDef {
    /// Display name; the fixed literal `main` marks the entry point.
    pub name: String,

    #[serde(default)]
    pub parameters: Vec<String>,

    /// Ordered block sequence forming the function body.
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// One node of the block tree, tagged `"category.operation"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Block {
    #[serde(default, rename = "type")]
    pub tag: String,

    /// Parameter name -> literal/expression text, as typed in the editor.
    #[serde(default)]
    pub params: HashMap<String, String>,

    /// Output variable this block's result is bound to, visible to later
    /// blocks.
    #[serde(default, rename = "variableName", skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,

    /// Receiver a host-object operation acts on (a prior block's result).
    #[serde(default, rename = "sourceRef", skip_serializing_if = "Option::is_none")]
    pub source_ref: Option<String>,

    /// Nested body for container blocks.
    #[serde(default, rename = "childBlocks")]
    pub child_blocks: Vec<Block>,

    /// Alternate body for branching blocks; rendered only when `has_else`.
    #[serde(default, rename = "elseBlocks")]
    pub else_blocks: Vec<Block>,

    #[serde(default, rename = "hasElse")]
    pub has_else: bool,
}

impl Block {
    /// Parameter text, treating an empty string the same as absent.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Output variable name, if the block names a non-empty one.
    pub fn output_var(&self) -> Option<&str> {
        self.variable_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Receiver name, if the block names a non-empty one.
    pub fn receiver(&self) -> Option<&str> {
        self.source_ref.as_deref().filter(|name| !name.is_empty())
    }
}

/// A UI component instance dropped onto the canvas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiComponent {
    /// Identifier the generated code declares and targets.
    pub id: String,

    /// Element type, e.g. `div` or `button`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Display name shown in the editor palette.
    #[serde(default)]
    pub name: String,

    /// Style property -> value, applied in declaration order.
    #[serde(default)]
    pub properties: IndexMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_editor_wire_format() {
        let json = r#"{
            "functions": {
                "fn_1": {
                    "name": "main",
                    "blocks": [
                        {
                            "type": "variables.declareVariable",
                            "params": {"name": "total", "value": "0"},
                            "variableName": "total"
                        }
                    ]
                }
            },
            "htmlComponents": [
                {"id": "comp_1", "type": "button", "name": "Button",
                 "properties": {"color": "white", "padding": "10px"}}
            ],
            "hasHtmlComponents": true
        }"#;

        let program = ProgramStructure::from_json(json).unwrap();
        assert_eq!(program.functions.len(), 1);
        let func = &program.functions["fn_1"];
        assert_eq!(func.name, "main");
        assert_eq!(func.blocks[0].tag, "variables.declareVariable");
        assert_eq!(func.blocks[0].param("name"), Some("total"));
        assert!(program.has_html_components);

        let comp = &program.html_components[0];
        assert_eq!(comp.kind, "button");
        // Declaration order survives the round trip.
        let props: Vec<_> = comp.properties.keys().collect();
        assert_eq!(props, ["color", "padding"]);
    }

    #[test]
    fn empty_params_fall_back_to_absent() {
        let block = Block {
            tag: "ui.alert".to_string(),
            params: HashMap::from([("message".to_string(), String::new())]),
            ..Default::default()
        };
        assert_eq!(block.param("message"), None);
        assert_eq!(block.param("missing"), None);
        assert_eq!(block.output_var(), None);
    }
}
