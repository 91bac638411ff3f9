use std::fmt;
use std::str::FromStr;

/// Pre-defined questions offered as buttons under the chat input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickAction {
    Create,
    Edit,
    Schedule,
    Questions,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::Create,
        QuickAction::Edit,
        QuickAction::Schedule,
        QuickAction::Questions,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            QuickAction::Create => "cadastrar",
            QuickAction::Edit => "editar",
            QuickAction::Schedule => "agenda",
            QuickAction::Questions => "duvidas",
        }
    }

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            QuickAction::Create => "Como cadastrar paciente?",
            QuickAction::Edit => "Como editar informações?",
            QuickAction::Schedule => "Sobre a agenda",
            QuickAction::Questions => "Outras dúvidas",
        }
    }

    /// The question sent on the user's behalf.
    pub fn question(self) -> &'static str {
        match self {
            QuickAction::Create => "Como cadastrar um novo paciente?",
            QuickAction::Edit => "Como editar informações de um paciente?",
            QuickAction::Schedule => "Como funciona a agenda de sessões?",
            QuickAction::Questions => "Outras dúvidas",
        }
    }

    /// Zero-based slot used for the Alt+1..4 shortcuts.
    pub fn from_slot(slot: usize) -> Option<Self> {
        Self::ALL.get(slot).copied()
    }
}

impl fmt::Display for QuickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for QuickAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        QuickAction::ALL
            .into_iter()
            .find(|action| action.tag() == tag)
            .ok_or_else(|| {
                let known: Vec<&str> = QuickAction::ALL.iter().map(|a| a.tag()).collect();
                format!(
                    "unknown quick action '{}' (expected one of: {})",
                    s.trim(),
                    known.join(", ")
                )
            })
    }
}
