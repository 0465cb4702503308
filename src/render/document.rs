//! Document assembly: equation fragments → complete LaTeX source.
//!
//! Fragments are interpolated verbatim, both as typeset markup and inside
//! a verbatim block showing the literal source. No escaping or validation
//! is performed; the caller is trusted to supply valid LaTeX.

/// Fixed preamble emitted once at the top of every document.
const PREAMBLE: &str = r"\documentclass[11pt]{article}
\usepackage[utf8]{inputenc}
\usepackage[T1]{fontenc}
\usepackage[a4paper,margin=2.2cm]{geometry}
\usepackage{amsmath, amssymb, amsfonts}
\usepackage{bm}
\usepackage{mathtools}
\usepackage{lmodern}
\usepackage{microtype}
\usepackage{relsize}
\usepackage{upgreek}
\usepackage{physics}
\usepackage{xcolor}
\usepackage{hyperref}
\hypersetup{colorlinks=true,linkcolor=black,urlcolor=blue}
\setlength{\parskip}{0.6em}
\setlength{\parindent}{0pt}
";

const CLOSING: &str = "\n\\end{document}\n";

/// Directive appended after each fragment when page breaks are requested.
pub const PAGE_BREAK: &str = "\\clearpage";

/// Assemble a complete LaTeX document from ordered equation fragments.
///
/// Each fragment gets a numbered heading, the fragment itself as typeset
/// markup, and its literal source inside a verbatim block. When
/// `page_break_between` is set, a page break follows every fragment,
/// including the last.
pub fn build_document(title: &str, fragments: &[String], page_break_between: bool) -> String {
    let mut doc = String::with_capacity(PREAMBLE.len() + 256 * fragments.len());

    doc.push_str(PREAMBLE);
    doc.push_str("\n\\begin{document}\n");
    doc.push_str("\\begin{center}\n");
    doc.push_str(&format!("{{\\LARGE \\textbf{{{title}}}}}\n"));
    doc.push_str("\\end{center}\n");
    doc.push_str("\\vspace{1em}\n");

    for (index, fragment) in fragments.iter().enumerate() {
        doc.push_str(&format!("\n\\textbf{{Equation {}}}\n", index + 1));
        doc.push_str(&equation_block(fragment, page_break_between));
    }

    doc.push_str(CLOSING);
    doc
}

/// Render one fragment as a typeset block followed by its literal source.
fn equation_block(fragment: &str, add_page_break: bool) -> String {
    let mut block = format!(
        "\n\
         % ---- equation block ----\n\
         \\noindent\n\
         {fragment}\n\
         \n\
         \\vspace{{0.4em}}\n\
         \\textbf{{LaTeX literal:}}\n\
         \\begin{{verbatim}}\n\
         {fragment}\n\
         \\end{{verbatim}}\n\
         \\vspace{{0.8em}}\n",
    );

    if add_page_break {
        block.push_str(PAGE_BREAK);
        block.push('\n');
    }

    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn emits_preamble_and_closing_once() {
        let doc = build_document("Equations", &fragments(&["$x$"]), false);
        assert_eq!(doc.matches("\\documentclass").count(), 1);
        assert_eq!(doc.matches("\\begin{document}").count(), 1);
        assert_eq!(doc.matches("\\end{document}").count(), 1);
    }

    #[test]
    fn interpolates_title() {
        let doc = build_document("Physics Homework", &fragments(&["$x$"]), false);
        assert!(doc.contains("{\\LARGE \\textbf{Physics Homework}}"));
    }

    #[test]
    fn numbers_headings_in_order() {
        let doc = build_document("Equations", &fragments(&["a", "b", "c"]), false);
        for n in 1..=3 {
            assert_eq!(doc.matches(&format!("\\textbf{{Equation {n}}}")).count(), 1);
        }
        let first = doc.find("Equation 1").unwrap();
        let second = doc.find("Equation 2").unwrap();
        let third = doc.find("Equation 3").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn embeds_fragment_verbatim_and_literal() {
        let doc = build_document("Equations", &fragments(&["$E = mc^2$"]), false);
        assert_eq!(doc.matches("$E = mc^2$").count(), 2);
        assert!(doc.contains("\\begin{verbatim}\n$E = mc^2$\n\\end{verbatim}"));
    }

    #[test]
    fn page_break_flag_emits_one_break_per_fragment() {
        let with = build_document("Equations", &fragments(&["a", "b", "c"]), true);
        assert_eq!(with.matches(PAGE_BREAK).count(), 3);

        let without = build_document("Equations", &fragments(&["a", "b", "c"]), false);
        assert_eq!(without.matches(PAGE_BREAK).count(), 0);
    }

    #[test]
    fn page_break_follows_the_last_fragment() {
        let doc = build_document("Equations", &fragments(&["a"]), true);
        let break_at = doc.rfind(PAGE_BREAK).unwrap();
        let closing_at = doc.rfind("\\end{document}").unwrap();
        assert!(break_at < closing_at);
        assert!(break_at > doc.find("\\begin{verbatim}").unwrap());
    }

    #[test]
    fn fragment_content_is_not_escaped() {
        let doc = build_document(
            "Equations",
            &fragments(&["\\input{/etc/passwd}"]),
            false,
        );
        assert!(doc.contains("\\input{/etc/passwd}"));
    }
}
