use serde::{Serialize, Serializer};

/// Sentinel category id meaning "no category filter".
pub const ALL_CATEGORIES: &str = "0";

/// Fixed code -> display name table.
///
/// Serializes as a JSON object whose keys keep declaration order.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [(&'static str, &'static str)],
}

impl Catalog {
    pub fn get(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, name)| *name)
    }

    pub fn codes(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(code, _)| *code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(code, name)| (code, name)))
    }
}

/// Region code -> display name for every region the frontend offers
pub static REGIONS: Catalog = Catalog {
    entries: &[
        ("US", "United States"),
        ("NG", "Nigeria"),
        ("GB", "United Kingdom"),
        ("CA", "Canada"),
        ("AU", "Australia"),
        ("IN", "India"),
        ("DE", "Germany"),
        ("FR", "France"),
        ("JP", "Japan"),
        ("BR", "Brazil"),
        ("MX", "Mexico"),
        ("ZA", "South Africa"),
        ("GH", "Ghana"),
        ("KE", "Kenya"),
        ("EG", "Egypt"),
        ("KR", "South Korea"),
        ("ID", "Indonesia"),
        ("PH", "Philippines"),
        ("PK", "Pakistan"),
        ("TR", "Turkey"),
    ],
};

/// YouTube video category id -> display name
pub static CATEGORIES: Catalog = Catalog {
    entries: &[
        (ALL_CATEGORIES, "All Categories"),
        ("1", "Film & Animation"),
        ("2", "Autos & Vehicles"),
        ("10", "Music"),
        ("15", "Pets & Animals"),
        ("17", "Sports"),
        ("20", "Gaming"),
        ("22", "People & Blogs"),
        ("23", "Comedy"),
        ("24", "Entertainment"),
        ("25", "News & Politics"),
        ("26", "Howto & Style"),
        ("27", "Education"),
        ("28", "Science & Technology"),
        ("29", "Nonprofits & Activism"),
    ],
};

/// Display name for a region code, echoing the code back when it is unknown.
pub fn region_name(code: &str) -> String {
    REGIONS.get(code).unwrap_or(code).to_string()
}

/// Display name for a category id, echoing the id back when it is unknown.
pub fn category_name(id: &str) -> String {
    CATEGORIES.get(id).unwrap_or(id).to_string()
}
