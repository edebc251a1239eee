use crate::config::{DEFAULT_BRANCH, RAW_CONTENT_HOST, REPO_WEB_HOST};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoRefError {
    #[error("repository reference {0:?} is not of the form owner/repo")]
    MissingSlash(String),
    #[error("repository reference {0:?} has an empty owner or name")]
    EmptyPart(String),
}

/// Repository a README came from, used to resolve its relative image paths
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoRef {
    owner: String,
    name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw-content URL for a path inside the repository's default branch
    pub fn raw_url(&self, path: &str) -> String {
        format!(
            "https://{RAW_CONTENT_HOST}/{}/{}/{DEFAULT_BRANCH}/{path}",
            self.owner, self.name
        )
    }
}

impl FromStr for RepoRef {
    type Err = RepoRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (owner, name) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| RepoRefError::MissingSlash(s.to_owned()))?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(RepoRefError::EmptyPart(s.to_owned()));
        }
        Ok(Self::new(owner, name))
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Resolve an image source found in a README.
///
/// - `https://github.com/o/r/blob/<path>` becomes the raw-content URL for `<path>`
/// - other web URLs, `data:` URIs and protocol-relative `//` sources pass through
/// - relative paths resolve against `repo` when one is known, after dropping a
///   leading `./`, `../` or `/`
pub fn resolve_image_src<'a>(src: &'a str, repo: Option<&RepoRef>) -> Cow<'a, str> {
    if src.starts_with("http") {
        return raw_from_blob(src).map_or(Cow::Borrowed(src), Cow::Owned);
    }
    if src.starts_with("data:") || src.starts_with("//") {
        return Cow::Borrowed(src);
    }
    match repo {
        Some(repo) => {
            let cleaned = src
                .strip_prefix("./")
                .or_else(|| src.strip_prefix("../"))
                .unwrap_or(src)
                .trim_start_matches('/');
            Cow::Owned(repo.raw_url(cleaned))
        }
        None => Cow::Borrowed(src),
    }
}

fn raw_from_blob(url: &str) -> Option<String> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let path = rest.strip_prefix(REPO_WEB_HOST)?.strip_prefix('/')?;
    path.contains("/blob/")
        .then(|| format!("https://{RAW_CONTENT_HOST}/{}", path.replacen("/blob/", "/", 1)))
}
