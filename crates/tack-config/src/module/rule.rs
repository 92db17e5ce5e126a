use std::fmt;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ConfigError, Result};
use crate::module::pattern::FilePattern;

/// One loader in a chain, with its query options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LoaderUse {
    pub loader: String,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub options: Map<String, Value>,
}

impl LoaderUse {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: Map::new(),
        }
    }

    /// Parse a request string such as `file?hash=sha512&digest=hex`.
    ///
    /// Query values are kept as strings.
    pub fn parse(request: &str) -> Result<Self> {
        let (name, query) = match request.split_once('?') {
            Some((name, query)) => (name, Some(query)),
            None => (request, None),
        };

        if name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "loader".to_string(),
                message: format!("missing loader name in '{request}'"),
            });
        }

        let mut loader = Self::new(name);
        for pair in query.into_iter().flat_map(|q| q.split('&')).filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, "true"));
            loader
                .options
                .insert(key.to_string(), Value::String(value.to_string()));
        }
        Ok(loader)
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for LoaderUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.options.is_empty() {
            return f.write_str(&self.loader);
        }
        let query = serde_json::to_string(&self.options).map_err(|_| fmt::Error)?;
        write!(f, "{}?{}", self.loader, query)
    }
}

/// Build a plain chain from loader names, in declaration order.
pub fn chain<I, S>(names: I) -> Vec<LoaderUse>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(LoaderUse::new).collect()
}

/// Routes a chain through the style-extraction plugin instead of inlining it.
///
/// `fallback` is only used when extraction is disabled at bundle time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Extraction {
    pub fallback: LoaderUse,
    pub chain: Vec<LoaderUse>,
}

/// A transformation rule: which files, and which loaders in which order.
///
/// A rule either declares `loaders` directly or an `extract` block. Loaders
/// are listed in composition order: the last one runs first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Rule {
    pub test: FilePattern,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub loaders: Vec<LoaderUse>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract: Option<Extraction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<PathBuf>,
}

impl Rule {
    pub fn new(test: FilePattern, loaders: Vec<LoaderUse>) -> Self {
        Self {
            test,
            loaders,
            extract: None,
            include: None,
        }
    }

    pub fn extracted(test: FilePattern, fallback: LoaderUse, chain: Vec<LoaderUse>) -> Self {
        Self {
            test,
            loaders: Vec::new(),
            extract: Some(Extraction { fallback, chain }),
            include: None,
        }
    }

    pub fn include(mut self, path: impl Into<PathBuf>) -> Self {
        self.include = Some(path.into());
        self
    }

    /// Loaders in declaration order, whichever form the rule uses.
    pub fn declared_chain(&self) -> &[LoaderUse] {
        match &self.extract {
            Some(extraction) => &extraction.chain,
            None => &self.loaders,
        }
    }

    pub fn is_extracted(&self) -> bool {
        self.extract.is_some()
    }

    /// Whether the bundler would run this rule on `path`.
    pub fn matches(&self, path: &Path) -> bool {
        if let Some(include) = &self.include {
            if !path.starts_with(include) {
                return false;
            }
        }
        self.test.is_match(&path.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_query_into_options() {
        let loader = LoaderUse::parse("file?hash=sha512&digest=hex&name=[hash].[ext]").unwrap();
        assert_eq!(loader.loader, "file");
        assert_eq!(loader.options["hash"], "sha512");
        assert_eq!(loader.options["digest"], "hex");
        assert_eq!(loader.options["name"], "[hash].[ext]");
    }

    #[test]
    fn parse_without_query() {
        let loader = LoaderUse::parse("image-webpack").unwrap();
        assert_eq!(loader, LoaderUse::new("image-webpack"));
        assert_eq!(loader.to_string(), "image-webpack");
    }

    #[test]
    fn parse_rejects_missing_name() {
        assert!(LoaderUse::parse("?limit=1").is_err());
    }

    #[test]
    fn display_renders_json_query() {
        let loader = LoaderUse::new("babel").with_option("cacheDirectory", true);
        assert_eq!(loader.to_string(), r#"babel?{"cacheDirectory":true}"#);
    }

    #[test]
    fn include_restricts_matches() {
        let rule = Rule::new(FilePattern::new(r"\.jsx?$").unwrap(), chain(["babel"]))
            .include("/app/src");

        assert!(rule.matches(Path::new("/app/src/index.js")));
        assert!(!rule.matches(Path::new("/app/node_modules/react/index.js")));
        assert!(!rule.matches(Path::new("/app/src/styles.css")));
    }

    #[test]
    fn extracted_rule_exposes_its_chain() {
        let rule = Rule::extracted(
            FilePattern::new(r"\.less$").unwrap(),
            LoaderUse::new("style"),
            chain(["css", "less"]),
        );
        assert!(rule.is_extracted());
        let names: Vec<_> = rule.declared_chain().iter().map(|l| l.loader.as_str()).collect();
        assert_eq!(names, vec!["css", "less"]);
    }
}
