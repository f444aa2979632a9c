//! `owner/repo` repository names

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::RepoNameError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoName {
    owner: String,
    name: String,
}

impl RepoName {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepoName {
    type Err = RepoNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RepoNameError::Empty);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(RepoNameError::Whitespace(s.to_string()));
        }

        let (owner, name) = s
            .split_once('/')
            .ok_or_else(|| RepoNameError::NotOwnerRepo(s.to_string()))?;

        if name.contains('/') {
            return Err(RepoNameError::NotOwnerRepo(s.to_string()));
        }
        if owner.is_empty() || name.is_empty() {
            return Err(RepoNameError::EmptyPart(s.to_string()));
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl TryFrom<String> for RepoName {
    type Error = RepoNameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RepoName> for String {
    fn from(repo: RepoName) -> Self {
        repo.to_string()
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
