//! The four grammars the pipeline reconciles (§1): TypeScript, JavaScript,
//! CSS, and HTML. TSX is a variant of the TypeScript grammar.

use tree_sitter::Language;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Grammar {
    TypeScript,
    Tsx,
    JavaScript,
    Css,
    Html,
}

impl Grammar {
    #[must_use]
    pub fn language(self) -> Language {
        match self {
            Grammar::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Grammar::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Grammar::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Grammar::Css => tree_sitter_css::LANGUAGE.into(),
            Grammar::Html => tree_sitter_html::LANGUAGE.into(),
        }
    }

    /// The grammar selected for a given LSP `languageId` (§4.K step 2).
    #[must_use]
    pub fn from_language_id(language_id: &str) -> Option<Grammar> {
        match language_id {
            "html" => Some(Grammar::Html),
            "typescript" => Some(Grammar::TypeScript),
            "javascript" => Some(Grammar::JavaScript),
            "tsx" => Some(Grammar::Tsx),
            "jsx" => Some(Grammar::JavaScript),
            // svelte/vue embed an HTML-like outer document; the outer
            // resolver treats them as HTML and descends into embedded
            // <script>/<style> blocks separately.
            "svelte" | "vue" => Some(Grammar::Html),
            _ => None,
        }
    }
}
