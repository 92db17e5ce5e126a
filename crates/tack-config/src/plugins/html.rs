use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// HTML page generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HtmlOptions {
    /// Inject script and link tags (off when the template places them itself)
    #[serde(default)]
    pub inject: bool,

    /// Emit the mobile viewport meta tag
    #[serde(default = "default_true")]
    pub mobile: bool,

    /// Id of the element the application mounts into
    #[serde(default = "default_app_mount_id")]
    pub app_mount_id: String,

    /// Template module used to render the page
    #[serde(default = "default_template")]
    pub template: String,

    /// Generated page name; the plugin writes `index.html` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// `lang` attribute of the `<html>` tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            inject: false,
            mobile: true,
            app_mount_id: default_app_mount_id(),
            template: default_template(),
            filename: None,
            title: None,
            lang: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_app_mount_id() -> String {
    "root".to_string()
}

fn default_template() -> String {
    "html-webpack-template".to_string()
}
