use std::fmt;

// ---------------------------------------------------------------------------
// Resource catalog – widgets that open as pages or drop onto the whiteboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Math,
    Language,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Math => write!(f, "Math"),
            Category::Language => write!(f, "Language"),
        }
    }
}

/// Which page a resource opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    WordCloud,
    Chart,
    HundredsSquare,
    NumberLine,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub kind: ResourceKind,
}

pub static RESOURCES: [Resource; 4] = [
    Resource {
        id: "wordcloud",
        title: "Word Cloud",
        description: "Creates a visualisation of multiple words",
        category: Category::Language,
        kind: ResourceKind::WordCloud,
    },
    Resource {
        id: "chart",
        title: "Charts and Graphs",
        description: "Interactive charts for visualizing mathematical concepts and data",
        category: Category::Math,
        kind: ResourceKind::Chart,
    },
    Resource {
        id: "hundreds-square",
        title: "Hundreds Square",
        description: "Interactive hundreds square for exploring number patterns and times tables",
        category: Category::Math,
        kind: ResourceKind::HundredsSquare,
    },
    Resource {
        id: "number-line",
        title: "Interactive Number Line",
        description: "Explore number patterns and relationships with an adjustable, interactive number line",
        category: Category::Math,
        kind: ResourceKind::NumberLine,
    },
];

/// Resources matching a category (`None` = all) and a case-insensitive
/// substring of title or description. An empty query matches everything.
pub fn search<'a>(
    resources: &'a [Resource],
    query: &str,
    category: Option<Category>,
) -> Vec<&'a Resource> {
    let query = query.trim().to_lowercase();
    resources
        .iter()
        .filter(|r| category.map_or(true, |c| r.category == c))
        .filter(|r| {
            r.title.to_lowercase().contains(&query)
                || r.description.to_lowercase().contains(&query)
        })
        .collect()
}
