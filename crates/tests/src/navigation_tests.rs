use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{
    Chapter, LayoutData, LayoutInfo, ModuleInfo, ModuleLink, ModuleOrdering, Section,
    SolutionInfo,
};

fn link(id: &str, section: Section) -> ModuleLink {
    ModuleLink {
        id: id.into(),
        title: id.to_uppercase(),
        section,
        url: format!("/{}/{id}", section.as_str()),
    }
}

fn ordering() -> ModuleOrdering {
    ModuleOrdering::new()
        .with_section(
            Section::Bronze,
            vec![Chapter::new("Getting Started", &["time-comp", "intro-ds"])],
        )
        .with_section(Section::Silver, vec![Chapter::new("Graphs", &["dfs"])])
        .with_section(Section::Gold, vec![Chapter::new("Graphs", &["bfs"])])
}

fn links() -> Vec<ModuleLink> {
    vec![
        link("time-comp", Section::Bronze),
        link("intro-ds", Section::Bronze),
        link("dfs", Section::Silver),
        link("bfs", Section::Gold),
    ]
}

fn solution(modules: &[&str]) -> LayoutInfo {
    LayoutInfo::Solution(SolutionInfo {
        id: "cses-1192".into(),
        title: "Counting Rooms".into(),
        modules_with_problem: modules.iter().map(|s| s.to_string()).collect(),
    })
}

#[test]
fn module_page_opens_its_own_section() {
    let info = LayoutInfo::Module(ModuleInfo {
        id: "dfs".into(),
        title: "Depth First Search".into(),
        section: Section::Silver,
    });
    let data = LayoutData::resolve(info, links(), ordering());
    assert_eq!(data.initial_section, Section::Silver);
    assert_eq!(data.active_ids, vec!["dfs".to_string()]);
}

#[test]
fn solution_page_opens_latest_matching_section() {
    let data = LayoutData::resolve(solution(&["dfs", "bfs"]), links(), ordering());
    assert_eq!(data.initial_section, Section::Gold);
    assert!(data.is_active("dfs"));
    assert!(data.is_active("bfs"));
    assert!(!data.is_active("time-comp"));
}

#[test]
fn solution_without_listed_modules_opens_general() {
    let data = LayoutData::resolve(solution(&["unknown"]), links(), ordering());
    assert_eq!(data.initial_section, Section::General);
}

#[test]
fn groups_follow_chapter_order_and_skip_missing_links() {
    let data = LayoutData::resolve(solution(&[]), vec![link("intro-ds", Section::Bronze)], ordering());
    let groups = data.groups(Section::Bronze);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].label, "Getting Started");
    let ids: Vec<&str> = groups[0].children.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["intro-ds"]);
    assert!(data.groups(Section::Advanced).is_empty());
}

#[test]
fn layout_info_carries_kind_discriminant() {
    let value = json!({
        "kind": "module",
        "id": "time-comp",
        "title": "Time Complexity",
        "section": "bronze"
    });
    let info: LayoutInfo = serde_json::from_value(value).unwrap();
    assert_eq!(info.id(), "time-comp");
    assert!(matches!(info, LayoutInfo::Module(ref m) if m.section == Section::Bronze));

    let encoded = serde_json::to_value(solution(&["dfs"])).unwrap();
    assert_eq!(encoded["kind"], "solution");
}

#[test]
fn section_keys_round_trip_through_select_values() {
    for section in shared_types::ALL_SECTIONS {
        assert_eq!(Section::from_key(section.as_str()), Some(*section));
    }
    assert_eq!(Section::from_key("diamond"), None);
}
