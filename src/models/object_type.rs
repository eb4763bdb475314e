use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObjectType {
    Mobile,
    Computer,
    Bijstand,
}

impl ObjectType {
    pub const ALL: [ObjectType; 3] = [ObjectType::Mobile, ObjectType::Computer, ObjectType::Bijstand];

    /// Value stored in `objecten.type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Mobile => "Mobile",
            ObjectType::Computer => "Computer",
            ObjectType::Bijstand => "Bijstand",
        }
    }

    /// Convert DB string → enum (exact match)
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// Helper: convert operator input (any case, surrounding blanks ignored)
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|t| t.as_str().eq_ignore_ascii_case(s))
    }

    pub fn subcategorie_options(&self) -> &'static [&'static str] {
        match self {
            ObjectType::Mobile => &["GSM", "Tablet", "Sim", "SD-kaart", "USB-drive", "Andere"],
            ObjectType::Computer => &["Laptop", "Desktop", "Losse HD", "Andere"],
            ObjectType::Bijstand => &[],
        }
    }

    pub fn os_options(&self) -> &'static [&'static str] {
        match self {
            ObjectType::Mobile => &["Android", "GrapheneOS", "iOS", "Andere"],
            ObjectType::Computer => &["Windows", "Linux", "MacOS", "Chromebook", "Andere"],
            ObjectType::Bijstand => &[],
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
