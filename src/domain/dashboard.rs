// Dashboard domain model
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Fields the platform accepts that are not modelled here; sent through untouched
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardDefinition {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub widgets: Vec<Widget>,
    pub layout_type: String,
    #[serde(default)]
    pub is_read_only: bool,
    #[serde(default)]
    pub notify_list: Vec<String>,
    #[serde(default)]
    pub template_variables: Vec<TemplateVariable>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: u64,
    /// Widget payload as the platform defines it; `type` names the widget kind
    pub definition: serde_json::Value,
    pub layout: WidgetLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetLayout {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateVariable {
    pub name: String,
    pub prefix: String,
    #[serde(default)]
    pub available_values: Vec<String>,
    pub default: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Widget {
    pub fn kind(&self) -> Option<&str> {
        self.definition.get("type").and_then(|t| t.as_str())
    }

    pub fn title(&self) -> Option<&str> {
        self.definition.get("title").and_then(|t| t.as_str())
    }
}

impl DashboardDefinition {
    /// Widget ids that occur more than once, in order of their second occurrence
    pub fn duplicate_widget_ids(&self) -> Vec<u64> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for widget in &self.widgets {
            if !seen.insert(widget.id) && !duplicates.contains(&widget.id) {
                duplicates.push(widget.id);
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget(id: u64, kind: &str) -> Widget {
        Widget {
            id,
            definition: json!({ "type": kind, "title": format!("Widget {}", id) }),
            layout: WidgetLayout {
                x: 0,
                y: 0,
                width: 2,
                height: 2,
                extra: ExtraFields::new(),
            },
        }
    }

    fn dashboard(widgets: Vec<Widget>) -> DashboardDefinition {
        DashboardDefinition {
            title: "Ops".to_string(),
            description: String::new(),
            widgets,
            layout_type: "ordered".to_string(),
            is_read_only: false,
            notify_list: vec![],
            template_variables: vec![],
            extra: ExtraFields::new(),
        }
    }

    #[test]
    fn test_duplicate_widget_ids() {
        let unique = dashboard(vec![widget(1, "timeseries"), widget(2, "heatmap")]);
        assert!(unique.duplicate_widget_ids().is_empty());

        let clashing = dashboard(vec![
            widget(1, "timeseries"),
            widget(2, "heatmap"),
            widget(1, "toplist"),
            widget(1, "query_value"),
        ]);
        assert_eq!(clashing.duplicate_widget_ids(), vec![1]);
    }

    #[test]
    fn test_widget_accessors() {
        let w = widget(7, "heatmap");
        assert_eq!(w.kind(), Some("heatmap"));
        assert_eq!(w.title(), Some("Widget 7"));
    }

    #[test]
    fn test_serializes_platform_shape() {
        let mut def = dashboard(vec![widget(1, "query_value")]);
        def.template_variables.push(TemplateVariable {
            name: "site".to_string(),
            prefix: "site_id".to_string(),
            available_values: vec![],
            default: "*".to_string(),
            extra: ExtraFields::new(),
        });

        let body = serde_json::to_value(&def).unwrap();
        assert_eq!(body["layout_type"], "ordered");
        assert_eq!(body["is_read_only"], false);
        assert_eq!(body["widgets"][0]["definition"]["type"], "query_value");
        assert_eq!(body["widgets"][0]["layout"]["width"], 2);
        assert_eq!(body["template_variables"][0]["default"], "*");
    }

    #[test]
    fn test_unmodelled_fields_pass_through() {
        let raw = json!({
            "title": "Ops",
            "layout_type": "ordered",
            "reflow_type": "fixed",
            "widgets": [{
                "id": 1,
                "definition": { "type": "note", "content": "hi" },
                "layout": { "x": 0, "y": 0, "width": 2, "height": 2, "is_column_break": true }
            }]
        });

        let def: DashboardDefinition = serde_json::from_value(raw).unwrap();
        assert_eq!(def.extra["reflow_type"], "fixed");

        let body = serde_json::to_value(&def).unwrap();
        assert_eq!(body["reflow_type"], "fixed");
        assert_eq!(body["widgets"][0]["layout"]["is_column_break"], true);
        assert_eq!(body["widgets"][0]["definition"]["content"], "hi");
    }
}
