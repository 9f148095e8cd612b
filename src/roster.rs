/// Canonical team names for the Argentine Primera División as they appear on
/// the source site. Short display forms and full names both occur in the
/// scraped text, so both are listed.
const KNOWN_TEAMS: [&str; 35] = [
    "Aldosivi",
    "Ind. Rivadavia Mza",
    "Banfield",
    "Lanús",
    "Barracas",
    "Argentinos Jrs.",
    "Belgrano",
    "Tigre",
    "Central Córdoba",
    "Racing",
    "Defensa",
    "Huracán",
    "Estudiantes",
    "Boca Jrs.",
    "Godoy Cruz",
    "San Martín SJ",
    "Independiente",
    "Instituto",
    "Newell's",
    "Platense",
    "River",
    "San Lorenzo",
    "Dep. Riestra",
    "Vélez",
    "Talleres",
    "Central",
    "Sarmiento",
    "At. Tucumán",
    "Newell's Old Boys",
    "Unión Santa Fe",
    "River Plate",
    "Gimnasia La Plata",
    "Deportivo Riestra",
    "Vélez Sarsfield",
    "Talleres de Córdoba",
];

/// Fixed set of canonical team names used to recognize teams in scraped text.
///
/// Entries are kept sorted by descending length so that resolution prefers a
/// longer, more specific name over a shorter one that is a substring of it
/// ("River Plate" must be tried before "River").
#[derive(Debug, Clone)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Build a roster from any collection of canonical names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        Self { names }
    }

    /// Resolve a raw side substring to a canonical name: the longest roster
    /// entry contained anywhere in `text` wins. Case-sensitive.
    pub fn resolve<'a>(&'a self, text: &str) -> Option<&'a str> {
        self.names
            .iter()
            .map(String::as_str)
            .find(|name| text.contains(name))
    }
}

impl Default for Roster {
    /// The production roster of known Argentine Primera División teams.
    fn default() -> Self {
        Self::new(KNOWN_TEAMS)
    }
}
