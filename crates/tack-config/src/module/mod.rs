//! Transformation rules for the `module` section.

mod pattern;
mod rule;

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use pattern::FilePattern;
pub use rule::{Extraction, LoaderUse, Rule, chain};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModuleRules {
    /// Rules run on the raw source before any regular loader (linting).
    #[serde(default)]
    pub pre_loaders: Vec<Rule>,

    #[serde(default)]
    pub loaders: Vec<Rule>,
}

impl ModuleRules {
    /// Loader names applied to `path`, in the order they actually run.
    ///
    /// Matching chains are concatenated in rule order and the whole request
    /// runs right to left, with pre-loaders ahead of regular loaders.
    ///
    /// # Example
    ///
    /// ```
    /// use tack_config::{FilePattern, ModuleRules, Rule, chain};
    /// use std::path::Path;
    ///
    /// let mut rules = ModuleRules::default();
    /// rules
    ///     .loaders
    ///     .push(Rule::new(FilePattern::new(r"\.less$").unwrap(), chain(["style", "css", "less"])));
    ///
    /// assert_eq!(rules.loaders_for(Path::new("theme.less")), vec!["less", "css", "style"]);
    /// ```
    pub fn loaders_for(&self, path: &Path) -> Vec<&str> {
        let mut order = application_order(&self.pre_loaders, path);
        order.extend(application_order(&self.loaders, path));
        order
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.pre_loaders.iter().chain(self.loaders.iter())
    }
}

fn application_order<'a>(rules: &'a [Rule], path: &Path) -> Vec<&'a str> {
    let mut names: Vec<&str> = rules
        .iter()
        .filter(|rule| rule.matches(path))
        .flat_map(|rule| rule.declared_chain().iter().map(|l| l.loader.as_str()))
        .collect();
    names.reverse();
    names
}
