//! The `terraform-docs` command tree the formatter pages are generated from.

use crate::command::{Command, Flag, Kind};

const SECTIONS: &str = "[all, data-sources, footer, header, inputs, modules, outputs, providers, requirements, resources]";

/// Leaf formatter taking a module path.
fn formatter(name: &str, short: &str) -> Command {
    Command::new(&format!("{} [PATH]", name)).short(short).kind(Kind::Formatter)
}

fn markup_flags(cmd: Command) -> Command {
    cmd.flag(Flag::bool("anchor", true, "create anchor links").persistent())
        .flag(Flag::bool("default", true, "show Default column or section").persistent())
        .flag(Flag::int("indent", 2, "indention level of sections [1, 2, 3, 4, 5]").persistent())
        .flag(Flag::bool("required", true, "show Required column or section").persistent())
        .flag(Flag::bool("sensitive", true, "show Sensitive column or section").persistent())
        .flag(Flag::bool("type", true, "show Type column or section").persistent())
}

fn asciidoc() -> Command {
    markup_flags(
        formatter("asciidoc", "Generate AsciiDoc of inputs and outputs")
            .subcommand(formatter("document", "Generate AsciiDoc document of inputs and outputs"))
            .subcommand(formatter("table", "Generate AsciiDoc tables of inputs and outputs")),
    )
}

fn markdown() -> Command {
    markup_flags(
        formatter("markdown", "Generate Markdown of inputs and outputs")
            .flag(Flag::bool("escape", true, "escape special characters").persistent())
            .flag(Flag::bool("html", true, "use HTML tags in genereted output").persistent())
            .subcommand(formatter("document", "Generate Markdown document of inputs and outputs"))
            .subcommand(formatter("table", "Generate Markdown tables of inputs and outputs")),
    )
}

fn tfvars() -> Command {
    Command::new("tfvars")
        .short("Generate terraform.tfvars of inputs")
        .kind(Kind::Formatter)
        .not_runnable()
        .subcommand(formatter("hcl", "Generate HCL format of terraform.tfvars of inputs"))
        .subcommand(formatter("json", "Generate JSON format of terraform.tfvars of inputs"))
}

fn completion() -> Command {
    let shell = |name: &str| {
        Command::new(name).short(&format!("Generate shell completion for {}", name))
    };
    Command::new("completion SHELL")
        .short("Generate shell completion code for the specified shell (bash, zsh, fish)")
        .example("terraform-docs completion bash > ~/.terraform-docs-completion")
        .not_runnable()
        .subcommand(shell("bash"))
        .subcommand(shell("fish"))
        .subcommand(shell("zsh"))
}

/// Build the full `terraform-docs` tree.
pub fn terraform_docs() -> Command {
    Command::new("terraform-docs [PATH]")
        .short("A utility to generate documentation from Terraform modules in various output formats")
        .long(
            "A utility to generate documentation from Terraform modules in various output formats",
        )
        .example("terraform-docs markdown table ./my-module\nterraform-docs json --sort=false ./my-module")
        .flag(Flag::string("config", ".terraform-docs.yml", "config file name").short('c').persistent())
        .flag(Flag::string("footer-from", "", "relative path of a file to read footer from").persistent())
        .flag(Flag::string("header-from", "main.tf", "relative path of a file to read header from").persistent())
        .flag(Flag::strings("hide", &format!("hide section {}", SECTIONS)).persistent())
        .flag(Flag::bool("lockfile", true, "read .terraform.lock.hcl if exist").persistent())
        .flag(Flag::bool("output-check", false, "check if content of output file is up to date").persistent())
        .flag(Flag::string("output-file", "", "file path to insert output into").persistent())
        .flag(Flag::string("output-mode", "inject", "output to file method [inject, replace]").persistent())
        .flag(
            Flag::string(
                "output-template",
                "<!-- BEGIN_TF_DOCS -->\\n{{ .Content }}\\n<!-- END_TF_DOCS -->",
                "output template",
            )
            .persistent(),
        )
        .flag(Flag::bool("output-values", false, "inject output values into outputs").persistent())
        .flag(Flag::string("output-values-from", "", "inject output values from file into outputs").persistent())
        .flag(Flag::bool("read-comments", true, "use comments as description when description is empty").persistent())
        .flag(Flag::bool("recursive", false, "update submodules recursively").persistent())
        .flag(Flag::string("recursive-path", "modules", "submodules path to recursively update").persistent())
        .flag(Flag::strings("show", &format!("show section {}", SECTIONS)).persistent())
        .flag(Flag::bool("sort", true, "sort items").persistent())
        .flag(Flag::string("sort-by", "name", "sort items by criteria [name, required, type]").persistent())
        .subcommand(asciidoc())
        .subcommand(formatter("json", "Generate JSON of inputs and outputs").flag(Flag::bool(
            "escape",
            true,
            "escape special characters",
        )))
        .subcommand(markdown())
        .subcommand(formatter("pretty", "Generate colorized pretty of inputs and outputs").flag(Flag::bool(
            "color",
            true,
            "colorize printed result",
        )))
        .subcommand(tfvars())
        .subcommand(formatter("toml", "Generate TOML of inputs and outputs"))
        .subcommand(formatter("xml", "Generate XML of inputs and outputs"))
        .subcommand(formatter("yaml", "Generate YAML of inputs and outputs"))
        .subcommand(completion())
        .subcommand(Command::new("version").short("Print the version number of terraform-docs"))
        .subcommand(
            Command::new("help [command]")
                .short("Help about any command")
                .kind(Kind::HelpTopic),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn documentable_paths(cmd: &Command, out: &mut Vec<String>) {
        for child in cmd.documentable_children() {
            out.push(child.path());
            documentable_paths(child, out);
        }
    }

    #[test]
    fn every_formatter_is_documentable() {
        let mut paths = Vec::new();
        documentable_paths(&terraform_docs(), &mut paths);
        assert_eq!(
            paths,
            vec![
                "terraform-docs asciidoc",
                "terraform-docs asciidoc document",
                "terraform-docs asciidoc table",
                "terraform-docs json",
                "terraform-docs markdown",
                "terraform-docs markdown document",
                "terraform-docs markdown table",
                "terraform-docs pretty",
                "terraform-docs tfvars",
                "terraform-docs tfvars hcl",
                "terraform-docs tfvars json",
                "terraform-docs toml",
                "terraform-docs xml",
                "terraform-docs yaml",
            ]
        );
    }

    #[test]
    fn leaf_formatters_resolve() {
        let root = terraform_docs();
        let layout = crate::config::Config::new(chrono::NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()).layout;

        fn leaves<'a>(cmd: &'a Command, out: &mut Vec<&'a Command>) {
            for child in cmd.documentable_children() {
                if child.documentable_children().next().is_none() {
                    out.push(child);
                }
                leaves(child, out);
            }
        }
        let mut found = Vec::new();
        leaves(&root, &mut found);
        for leaf in found {
            let name = layout.formatter_name(&leaf.path());
            assert!(tfdocs_format::create_formatter(&name).is_ok(), "{} has no formatter", name);
        }
    }

    #[test]
    fn markup_flags_are_inherited_by_children() {
        let root = terraform_docs();
        let markdown = root.children().iter().find(|c| c.name() == "markdown").unwrap();
        let table = markdown.children().iter().find(|c| c.name() == "table").unwrap();
        assert!(table.own_flags().is_empty());
        let inherited: Vec<&str> = table.inherited_flags().iter().map(|f| f.name.as_str()).collect();
        assert!(inherited.contains(&"config"));
        assert!(inherited.contains(&"escape"));
        assert!(inherited.contains(&"indent"));
    }

    #[test]
    fn internal_commands_are_skipped() {
        let root = terraform_docs();
        for name in ["completion", "version", "help"] {
            let cmd = root.children().iter().find(|c| c.name() == name).unwrap();
            assert!(!cmd.is_documentable(), "{} should not be documented", name);
        }
    }
}
