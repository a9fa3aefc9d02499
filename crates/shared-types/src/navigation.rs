use serde::{Deserialize, Serialize};

/// Top-level division of the guide. Each section has its own chapter list
/// in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    General,
    Bronze,
    Silver,
    Gold,
    #[serde(rename = "plat")]
    Platinum,
    #[serde(rename = "adv")]
    Advanced,
}

/// All sections in display order.
pub const ALL_SECTIONS: &[Section] = &[
    Section::General,
    Section::Bronze,
    Section::Silver,
    Section::Gold,
    Section::Platinum,
    Section::Advanced,
];

impl Section {
    /// Stable key used in URLs and select values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::General => "general",
            Section::Bronze => "bronze",
            Section::Silver => "silver",
            Section::Gold => "gold",
            Section::Platinum => "plat",
            Section::Advanced => "adv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::General => "General",
            Section::Bronze => "Bronze",
            Section::Silver => "Silver",
            Section::Gold => "Gold",
            Section::Platinum => "Platinum",
            Section::Advanced => "Advanced",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        ALL_SECTIONS.iter().copied().find(|s| s.as_str() == key)
    }
}

/// A named run of modules inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub name: String,
    /// Module ids in reading order.
    pub items: Vec<String>,
}

impl Chapter {
    pub fn new(name: impl Into<String>, items: &[&str]) -> Self {
        Self {
            name: name.into(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Chapter lists for every section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModuleOrdering {
    sections: Vec<(Section, Vec<Chapter>)>,
}

impl ModuleOrdering {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, section: Section, chapters: Vec<Chapter>) -> Self {
        self.sections.retain(|(s, _)| *s != section);
        self.sections.push((section, chapters));
        self
    }

    pub fn chapters(&self, section: Section) -> &[Chapter] {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, chapters)| chapters.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, section: Section, module_id: &str) -> bool {
        self.chapters(section)
            .iter()
            .any(|chapter| chapter.items.iter().any(|id| id == module_id))
    }
}

/// Sidebar entry for one module, supplied by the content provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleLink {
    pub id: String,
    pub title: String,
    pub section: Section,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub id: String,
    pub title: String,
    pub section: Section,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionInfo {
    pub id: String,
    pub title: String,
    /// Ids of the modules that list this problem.
    pub modules_with_problem: Vec<String>,
}

/// The page a layout is rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LayoutInfo {
    Module(ModuleInfo),
    Solution(SolutionInfo),
}

impl LayoutInfo {
    pub fn id(&self) -> &str {
        match self {
            LayoutInfo::Module(m) => &m.id,
            LayoutInfo::Solution(s) => &s.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            LayoutInfo::Module(m) => &m.title,
            LayoutInfo::Solution(s) => &s.title,
        }
    }
}

/// Sidebar group rendered as one accordion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinkGroup {
    pub label: String,
    pub children: Vec<ModuleLink>,
}

impl NavLinkGroup {
    pub fn contains(&self, module_id: &str) -> bool {
        self.children.iter().any(|link| link.id == module_id)
    }
}

/// Layout data shared with every sidebar consumer.
///
/// Everything derived from the page kind is resolved here, once, so
/// consumers never branch on [`LayoutInfo`] themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutData {
    pub info: LayoutInfo,
    pub links: Vec<ModuleLink>,
    pub ordering: ModuleOrdering,
    pub active_ids: Vec<String>,
    pub initial_section: Section,
}

impl LayoutData {
    pub fn resolve(info: LayoutInfo, links: Vec<ModuleLink>, ordering: ModuleOrdering) -> Self {
        let active_ids = match &info {
            LayoutInfo::Module(m) => vec![m.id.clone()],
            LayoutInfo::Solution(s) => s.modules_with_problem.clone(),
        };
        let initial_section = match &info {
            LayoutInfo::Module(m) => m.section,
            // Later sections win when a problem appears in several.
            LayoutInfo::Solution(_) => ALL_SECTIONS
                .iter()
                .rev()
                .copied()
                .find(|section| active_ids.iter().any(|id| ordering.contains(*section, id)))
                .unwrap_or(Section::General),
        };

        Self {
            info,
            links,
            ordering,
            active_ids,
            initial_section,
        }
    }

    pub fn is_active(&self, module_id: &str) -> bool {
        self.active_ids.iter().any(|id| id == module_id)
    }

    /// Build the accordion groups for `section` from the ordering and the
    /// link list. Ordered ids with no matching link are dropped.
    pub fn groups(&self, section: Section) -> Vec<NavLinkGroup> {
        self.ordering
            .chapters(section)
            .iter()
            .map(|chapter| NavLinkGroup {
                label: chapter.name.clone(),
                children: chapter
                    .items
                    .iter()
                    .filter_map(|id| {
                        let link = self.links.iter().find(|link| &link.id == id);
                        if link.is_none() {
                            tracing::warn!(module = %id, chapter = %chapter.name, "ordered module has no link");
                        }
                        link.cloned()
                    })
                    .collect(),
            })
            .collect()
    }
}
