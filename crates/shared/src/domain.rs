use serde::{Deserialize, Serialize};

macro_rules! ref_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

ref_newtype!(SpeciesRef);

/// One person record as served by the directory API.
///
/// Measurements stay strings: the API reports values such as `"unknown"` or
/// `"1,358"` and they are only ever displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub gender: String,
    #[serde(default)]
    pub species: Vec<SpeciesRef>,
}

impl Person {
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn classify(&self, refs: &ClassificationRefs) -> Classification {
        Classification {
            is_human: self.species.contains(&refs.human),
            is_droid: self.species.contains(&refs.droid),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassificationRefs {
    pub human: SpeciesRef,
    pub droid: SpeciesRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Human,
    Droid,
    Unknown,
}

/// Membership flags against the two reference species.
///
/// Both flags can be set at once; nothing upstream guarantees exclusivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub is_human: bool,
    pub is_droid: bool,
}

impl Classification {
    pub fn icons(self) -> Vec<Icon> {
        let mut icons = Vec::with_capacity(2);
        if self.is_human {
            icons.push(Icon::Human);
        }
        if self.is_droid {
            icons.push(Icon::Droid);
        }
        if icons.is_empty() {
            icons.push(Icon::Unknown);
        }
        icons
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::None, SortMode::Ascending, SortMode::Descending];

    pub fn label(self) -> &'static str {
        match self {
            SortMode::None => "Select Sorting",
            SortMode::Ascending => "Sort By Name (A-Z)",
            SortMode::Descending => "Sort By Name (Z-A)",
        }
    }
}

/// Everything the loader produces for one session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Directory {
    pub people: Vec<Person>,
    pub refs: ClassificationRefs,
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
