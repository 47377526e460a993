use serde::{Deserialize, Serialize};

/// Single-row application config surfaced to the dashboard UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub id: i64,
    pub app_name: String,
    pub accent_color: String,
    pub hire_label: String,
    pub review_label: String,
    pub reject_label: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            id: 1,
            app_name: "AURASCAN".to_string(),
            accent_color: "#00FFFF".to_string(),
            hire_label: "HIRE".to_string(),
            review_label: "REVIEW".to_string(),
            reject_label: "REJECT".to_string(),
        }
    }
}

impl AppConfig {
    /// Field-wise merge: absent fields keep their current value, last writer
    /// wins. The row id is fixed and never updated.
    pub fn merge(&mut self, update: AppConfigUpdate) {
        if let Some(v) = update.app_name {
            self.app_name = v;
        }
        if let Some(v) = update.accent_color {
            self.accent_color = v;
        }
        if let Some(v) = update.hire_label {
            self.hire_label = v;
        }
        if let Some(v) = update.review_label {
            self.review_label = v;
        }
        if let Some(v) = update.reject_label {
            self.reject_label = v;
        }
    }
}

/// Partial config update accepted by POST /api/config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfigUpdate {
    pub app_name: Option<String>,
    pub accent_color: Option<String>,
    pub hire_label: Option<String>,
    pub review_label: Option<String>,
    pub reject_label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_updates_only_named_fields() {
        let mut config = AppConfig::default();
        config.merge(AppConfigUpdate {
            app_name: Some("Foo".to_string()),
            ..Default::default()
        });

        assert_eq!(config.app_name, "Foo");
        assert_eq!(config.accent_color, "#00FFFF");
        assert_eq!(config.hire_label, "HIRE");
        assert_eq!(config.id, 1);
    }

    #[test]
    fn test_merge_last_writer_wins() {
        let mut config = AppConfig::default();
        config.merge(AppConfigUpdate {
            accent_color: Some("#FF0000".to_string()),
            ..Default::default()
        });
        config.merge(AppConfigUpdate {
            accent_color: Some("#00FF00".to_string()),
            ..Default::default()
        });

        assert_eq!(config.accent_color, "#00FF00");
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::to_value(AppConfig::default()).unwrap();
        assert!(json.get("appName").is_some());
        assert!(json.get("accentColor").is_some());
        assert!(json.get("rejectLabel").is_some());
    }
}
