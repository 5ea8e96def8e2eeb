const CORRECT_INSTRUCTION: &str = "Tu es un correcteur professionnel de langue française.
Corrige uniquement les fautes d'orthographe, de grammaire, de conjugaison et de ponctuation.
Conserve le style, le ton et la structure du texte original.
Ne modifie pas le sens ni n'ajoute de contenu.";

const SUMMARIZE_INSTRUCTION: &str = "Tu es un expert en résumé de textes.
Crée un résumé concis et pertinent qui capture les points clés et les idées principales.
Le résumé doit être significativement plus court que le texte original tout en conservant l'essentiel.";

const REORGANIZE_INSTRUCTION: &str = "Tu es un expert en organisation et mise en forme de textes.
Réorganise le texte de manière claire et structurée avec :
- Une structure logique avec titres et sous-titres si approprié
- Des paragraphes bien délimités
- Une présentation professionnelle et lisible
- Conservation du contenu original sans ajout d'informations";

/// Transformation applied to a submitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAction {
    /// Fix spelling, grammar and punctuation only.
    Correct,
    /// Produce a materially shorter summary.
    Summarize,
    /// Restructure for readability without adding content.
    Reorganize,
}

impl TextAction {
    /// Fixed system message steering the model.
    pub fn instruction(&self) -> &'static str {
        match self {
            TextAction::Correct => CORRECT_INSTRUCTION,
            TextAction::Summarize => SUMMARIZE_INSTRUCTION,
            TextAction::Reorganize => REORGANIZE_INSTRUCTION,
        }
    }

    /// Label stored with each persisted record. Also the route segment.
    pub fn label(&self) -> &'static str {
        match self {
            TextAction::Correct => "corriger",
            TextAction::Summarize => "resumer",
            TextAction::Reorganize => "organiser",
        }
    }
}

impl std::fmt::Display for TextAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
