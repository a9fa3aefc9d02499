//! Static guide catalog: module metadata, chapter ordering and solutions.
//!
//! The catalog is embedded at build time and parsed once. A catalog that
//! fails to parse leaves the site with empty navigation rather than a
//! crash.

use serde::Deserialize;
use shared_types::{
    AppError, Chapter, LayoutData, LayoutInfo, ModuleInfo, ModuleLink, ModuleOrdering, Section,
    SolutionInfo,
};
use std::sync::OnceLock;

const CATALOG_JSON: &str = include_str!("../content/catalog.json");

static CATALOG: OnceLock<Catalog> = OnceLock::new();

#[derive(Debug, Deserialize)]
struct SectionChapters {
    section: Section,
    chapters: Vec<Chapter>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    modules: Vec<ModuleInfo>,
    #[serde(default)]
    ordering: Vec<SectionChapters>,
    #[serde(default)]
    solutions: Vec<SolutionInfo>,
}

/// Parsed, query-ready catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    modules: Vec<ModuleInfo>,
    solutions: Vec<SolutionInfo>,
    ordering: ModuleOrdering,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let raw: RawCatalog = serde_json::from_str(json)
            .map_err(|err| AppError::internal(format!("catalog: {err}")))?;

        let ordering = raw
            .ordering
            .into_iter()
            .fold(ModuleOrdering::new(), |ordering, entry| {
                ordering.with_section(entry.section, entry.chapters)
            });

        Ok(Self {
            modules: raw.modules,
            solutions: raw.solutions,
            ordering,
        })
    }

    pub fn module(&self, id: &str) -> Option<&ModuleInfo> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn solution(&self, id: &str) -> Option<&SolutionInfo> {
        self.solutions.iter().find(|s| s.id == id)
    }

    pub fn modules_in(&self, section: Section) -> impl Iterator<Item = &ModuleInfo> {
        self.modules.iter().filter(move |m| m.section == section)
    }

    pub fn solutions(&self) -> &[SolutionInfo] {
        &self.solutions
    }

    pub fn links(&self) -> Vec<ModuleLink> {
        self.modules
            .iter()
            .map(|m| ModuleLink {
                id: m.id.clone(),
                title: m.title.clone(),
                section: m.section,
                url: module_url(m.section, &m.id),
            })
            .collect()
    }

    /// Everything the sidebar needs for one page.
    pub fn layout_data(&self, info: LayoutInfo) -> LayoutData {
        LayoutData::resolve(info, self.links(), self.ordering.clone())
    }
}

pub fn module_url(section: Section, id: &str) -> String {
    format!("/{}/{id}", section.as_str())
}

/// The embedded catalog, parsed on first use.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| match Catalog::from_json(CATALOG_JSON) {
        Ok(catalog) => {
            tracing::debug!(
                modules = catalog.modules.len(),
                solutions = catalog.solutions.len(),
                "catalog loaded"
            );
            catalog
        }
        Err(err) => {
            tracing::error!(%err, "failed to parse catalog, navigation will be empty");
            Catalog::default()
        }
    })
}
