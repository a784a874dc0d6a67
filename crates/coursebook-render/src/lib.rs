/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Typesetting command assembly for the coursebook build.
 */

//! Builds the pandoc invocation that renders a set of course pages.
//!
//! [`PandocCommand`] is a pure builder: given the structured configuration
//! (output path, page list, metadata files, template, filter executables,
//! formatting flags) it produces one deterministic argument vector or
//! shell-quoted command line. It never executes anything; the build
//! orchestration owns process spawning.

use std::path::PathBuf;

/// The executable name the assembled command line starts with.
pub const PANDOC_BIN: &str = "pandoc";

/// Structured configuration for one pandoc invocation.
///
/// The formatting flags default to how the rendered book is built:
/// numbered sections, a two-level table of contents, self-contained
/// output, and the `tango` highlight style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PandocCommand {
    output: PathBuf,
    inputs: Vec<PathBuf>,
    metadata_files: Vec<PathBuf>,
    template: Option<String>,
    filters: Vec<PathBuf>,
    number_sections: bool,
    toc_depth: usize,
    self_contained: bool,
    highlight_style: String,
}

impl PandocCommand {
    pub fn new(output: impl Into<PathBuf>) -> PandocCommand {
        PandocCommand {
            output: output.into(),
            inputs: Vec::new(),
            metadata_files: Vec::new(),
            template: None,
            filters: Vec::new(),
            number_sections: true,
            toc_depth: 2,
            self_contained: true,
            highlight_style: "tango".to_string(),
        }
    }

    /// Append one input page. Pages are typeset in insertion order.
    pub fn input(mut self, path: impl Into<PathBuf>) -> PandocCommand {
        self.inputs.push(path.into());
        self
    }

    pub fn inputs<I, P>(mut self, paths: I) -> PandocCommand
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.inputs.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn metadata_file(mut self, path: impl Into<PathBuf>) -> PandocCommand {
        self.metadata_files.push(path.into());
        self
    }

    pub fn template(mut self, name: impl Into<String>) -> PandocCommand {
        self.template = Some(name.into());
        self
    }

    /// Append one filter executable. Filters run in insertion order.
    pub fn filter(mut self, path: impl Into<PathBuf>) -> PandocCommand {
        self.filters.push(path.into());
        self
    }

    pub fn number_sections(mut self, enabled: bool) -> PandocCommand {
        self.number_sections = enabled;
        self
    }

    pub fn toc_depth(mut self, depth: usize) -> PandocCommand {
        self.toc_depth = depth;
        self
    }

    pub fn self_contained(mut self, enabled: bool) -> PandocCommand {
        self.self_contained = enabled;
        self
    }

    pub fn highlight_style(mut self, style: impl Into<String>) -> PandocCommand {
        self.highlight_style = style.into();
        self
    }

    /// The argument vector, without the program name.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["-o".to_string(), self.output.display().to_string()];
        if self.number_sections {
            args.push("--number-sections".to_string());
        }
        args.push("--toc".to_string());
        args.push(format!("--toc-depth={}", self.toc_depth));
        if self.self_contained {
            args.push("--self-contained".to_string());
        }
        args.push(format!("--highlight-style={}", self.highlight_style));
        for metadata_file in &self.metadata_files {
            args.push(format!("--metadata-file={}", metadata_file.display()));
        }
        if let Some(template) = &self.template {
            args.push(format!("--template={}", template));
        }
        for filter in &self.filters {
            args.push(format!("--filter={}", filter.display()));
        }
        for input in &self.inputs {
            args.push(input.display().to_string());
        }
        args
    }

    /// The full command as one shell-quoted line.
    pub fn command_line(&self) -> String {
        let mut parts = vec![PANDOC_BIN.to_string()];
        parts.extend(self.args().iter().map(|arg| shell_quote(arg)));
        let line = parts.join(" ");
        tracing::debug!(command = %line, "assembled pandoc command");
        line
    }
}

/// Quote an argument for a POSIX shell when it needs it.
fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=+:@%".contains(c));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags() {
        let cmd = PandocCommand::new("book.html").input("index.md");
        assert_eq!(
            cmd.args(),
            vec![
                "-o",
                "book.html",
                "--number-sections",
                "--toc",
                "--toc-depth=2",
                "--self-contained",
                "--highlight-style=tango",
                "index.md",
            ]
        );
    }

    #[test]
    fn test_full_invocation_is_deterministic() {
        let cmd = PandocCommand::new("out/book.html")
            .metadata_file("meta/book.yaml")
            .template("course")
            .filter("bin/relocate-solutions")
            .filter("bin/responsive-tables")
            .filter("bin/select-image-format")
            .toc_depth(3)
            .inputs(["pages/01-intro.md", "pages/02-basics.md"]);
        assert_eq!(
            cmd.command_line(),
            "pandoc -o out/book.html --number-sections --toc --toc-depth=3 \
             --self-contained --highlight-style=tango \
             --metadata-file=meta/book.yaml --template=course \
             --filter=bin/relocate-solutions --filter=bin/responsive-tables \
             --filter=bin/select-image-format pages/01-intro.md pages/02-basics.md"
        );
    }

    #[test]
    fn test_flags_can_be_disabled() {
        let cmd = PandocCommand::new("book.pdf")
            .number_sections(false)
            .self_contained(false)
            .input("page.md");
        let args = cmd.args();
        assert!(!args.contains(&"--number-sections".to_string()));
        assert!(!args.contains(&"--self-contained".to_string()));
        assert!(args.contains(&"--toc".to_string()));
    }

    #[test]
    fn test_quotes_paths_with_spaces() {
        let cmd = PandocCommand::new("my book.html").input("chapter one.md");
        let line = cmd.command_line();
        assert!(line.contains("'my book.html'"));
        assert!(line.contains("'chapter one.md'"));
    }
}
