use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobCategory {
    pub name: &'static str,
    pub description: &'static str,
}

/// Known categories, in display order.
pub const CATALOGUE: &[JobCategory] = &[
    JobCategory {
        name: "Administration",
        description: "Clerical, records and front-office roles in city offices",
    },
    JobCategory {
        name: "Engineering",
        description: "Civil, electrical and infrastructure works",
    },
    JobCategory {
        name: "Healthcare",
        description: "Clinics, hospitals and community health programs",
    },
    JobCategory {
        name: "Education",
        description: "Teaching and support staff for public schools",
    },
    JobCategory {
        name: "Public Safety",
        description: "Fire services, civil protection and disaster response",
    },
    JobCategory {
        name: "Sanitation",
        description: "Waste collection, water and environmental services",
    },
    JobCategory {
        name: "Information Technology",
        description: "Software, networks and digital public services",
    },
    JobCategory {
        name: "Finance",
        description: "Budgeting, accounting and revenue collection",
    },
    JobCategory {
        name: "Transportation",
        description: "Public transit, traffic management and fleet operations",
    },
    JobCategory {
        name: "Social Services",
        description: "Welfare, family support and community outreach",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryStat {
    #[schema(example = "Engineering")]
    pub name: String,
    pub description: String,
    #[schema(example = 3)]
    pub count: u64,
}

impl From<&JobCategory> for CategoryStat {
    fn from(category: &JobCategory) -> Self {
        Self {
            name: category.name.to_string(),
            description: category.description.to_string(),
            count: 0,
        }
    }
}

/// Every catalogue entry with a zero count.
pub fn zero_filled() -> Vec<CategoryStat> {
    CATALOGUE.iter().map(CategoryStat::from).collect()
}

/// Merges stored `(category, count)` pairs into the catalogue.
/// Categories absent from the catalogue are appended with an empty description.
pub fn merge_counts<I>(counts: I) -> Vec<CategoryStat>
where
    I: IntoIterator<Item = (String, u64)>,
{
    let mut stats = zero_filled();

    for (name, count) in counts {
        match stats.iter_mut().find(|s| s.name == name) {
            Some(stat) => stat.count += count,
            None => stats.push(CategoryStat {
                name,
                description: String::new(),
                count,
            }),
        }
    }

    stats
}
