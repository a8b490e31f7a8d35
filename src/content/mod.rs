//! Hard-coded portfolio content.
//!
//! Everything here is `'static` and immutable: the store is defined at
//! compile time and views only ever borrow from it.

mod data;

use std::collections::HashMap;

use thiserror::Error;

pub use data::{PROFILE, PROJECTS};

/// One portfolio entry.
#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Display order is significant.
    pub tags: &'static [&'static str],
    pub github: &'static str,
    /// When absent the detail view has no "Live Demo" link.
    pub demo: Option<&'static str>,
    pub image: &'static str,
    pub technical_details: &'static [&'static str],
    pub features: &'static [&'static str],
    pub challenges: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Blog,
    Mail,
}

impl SocialKind {
    pub fn label(self) -> &'static str {
        match self {
            SocialKind::GitHub => "GitHub",
            SocialKind::LinkedIn => "LinkedIn",
            SocialKind::Blog => "Blog",
            SocialKind::Mail => "Mail",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: &'static str,
    pub title: Option<&'static str>,
}

/// The portfolio owner, shown in the nav bar and the hero section.
#[derive(Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub about: &'static str,
    pub social: &'static [SocialLink],
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    #[error("duplicate project id `{id}` at positions {first} and {second}")]
    DuplicateId {
        id: &'static str,
        first: usize,
        second: usize,
    },

    #[error("project at position {index} has an empty id")]
    EmptyId { index: usize },
}

/// Immutable view over a profile and its ordered projects.
#[derive(Debug, Clone, Copy)]
pub struct ContentStore {
    profile: &'static Profile,
    projects: &'static [Project],
}

impl ContentStore {
    pub const fn new(profile: &'static Profile, projects: &'static [Project]) -> Self {
        Self { profile, projects }
    }

    /// The content compiled into the binary.
    pub fn builtin() -> Self {
        Self::new(&PROFILE, &PROJECTS)
    }

    pub fn profile(&self) -> &'static Profile {
        self.profile
    }

    pub fn projects(&self) -> &'static [Project] {
        self.projects
    }

    pub fn get(&self, id: &str) -> Option<&'static Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen: HashMap<&'static str, usize> = HashMap::new();
        for (index, project) in self.projects.iter().enumerate() {
            if project.id.is_empty() {
                return Err(ContentError::EmptyId { index });
            }
            if let Some(&first) = seen.get(project.id) {
                return Err(ContentError::DuplicateId {
                    id: project.id,
                    first,
                    second: index,
                });
            }
            seen.insert(project.id, index);
        }
        Ok(())
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DUPES: [Project; 3] = [
        stub("alpha"),
        stub("beta"),
        stub("alpha"),
    ];

    static BLANK: [Project; 1] = [stub("")];

    const fn stub(id: &'static str) -> Project {
        Project {
            id,
            title: "stub",
            description: "",
            tags: &[],
            github: "https://github.com/example/stub",
            demo: None,
            image: "/api/placeholder/800/400",
            technical_details: &[],
            features: &[],
            challenges: &[],
        }
    }

    #[test]
    fn builtin_store_is_valid() {
        assert_eq!(ContentStore::builtin().validate(), Ok(()));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let store = ContentStore::new(&PROFILE, &DUPES);
        assert_eq!(
            store.validate(),
            Err(ContentError::DuplicateId {
                id: "alpha",
                first: 0,
                second: 2
            })
        );
    }

    #[test]
    fn empty_id_is_rejected() {
        let store = ContentStore::new(&PROFILE, &BLANK);
        assert_eq!(store.validate(), Err(ContentError::EmptyId { index: 0 }));
    }
}
