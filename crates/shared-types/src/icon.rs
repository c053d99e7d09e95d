use serde::Serialize;

/// Symbolic glyph names understood by the UI's icon renderer.
///
/// Kept UI-agnostic so the type crate never depends on an icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    MapPin,
    DollarSign,
    Package,
    Shield,
    Leaf,
    Search,
    Bell,
    User,
    Eye,
    Download,
    CheckCircle,
    Clock,
}

impl IconName {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::MapPin => "map-pin",
            IconName::DollarSign => "dollar-sign",
            IconName::Package => "package",
            IconName::Shield => "shield",
            IconName::Leaf => "leaf",
            IconName::Search => "search",
            IconName::Bell => "bell",
            IconName::User => "user",
            IconName::Eye => "eye",
            IconName::Download => "download",
            IconName::CheckCircle => "check-circle",
            IconName::Clock => "clock",
        }
    }
}
