//! Page renderer — assembles the markdown reference page of one command.

use crate::command::{flag_usages, Command, Flag};
use crate::example::ExampleEmbedder;
use crate::link::{Layout, Link};
use anyhow::Result;
use chrono::NaiveDate;

pub struct PageRenderer<'a> {
    layout: &'a Layout,
    examples: &'a ExampleEmbedder<'a>,
    generated_on: NaiveDate,
}

impl<'a> PageRenderer<'a> {
    pub fn new(layout: &'a Layout, examples: &'a ExampleEmbedder<'a>, generated_on: NaiveDate) -> Self {
        Self {
            layout,
            examples,
            generated_on,
        }
    }

    /// Render the page of `cmd`. Sections without data are left out.
    pub fn render(&self, cmd: &Command) -> Result<String> {
        let name = cmd.path();
        let mut buf = String::new();

        buf.push_str(&format!("## {}\n\n", name));
        buf.push_str(&format!("{}\n\n", cmd.short_description()));
        buf.push_str("### Synopsis\n\n");
        buf.push_str(&format!("{}\n\n", cmd.long_description()));

        if cmd.is_runnable() {
            buf.push_str(&format!("```\n{}\n```\n\n", cmd.use_line()));
        }

        if let Some(example) = cmd.example_text() {
            buf.push_str("### Examples\n\n");
            buf.push_str(&format!("```\n{}\n```\n\n", example));
        }

        options(&mut buf, "### Options", cmd.own_flags());
        options(&mut buf, "### Options inherited from parent commands", cmd.inherited_flags());

        if cmd.documentable_children().next().is_none() {
            buf.push_str(&self.examples.embed(&name)?);
        } else {
            self.see_also(&mut buf, cmd);
        }

        if cmd.auto_gen_tag() {
            buf.push_str(&format!(
                "###### Auto generated on {}\n",
                self.generated_on.format("%-d-%b-%Y")
            ));
        }
        Ok(buf)
    }

    fn see_also(&self, buf: &mut String, cmd: &Command) {
        buf.push_str("### SEE ALSO\n\n");
        for child in cmd.documentable_children() {
            buf.push_str(&self.bullet("* ", child));
            for grandchild in child.documentable_children() {
                buf.push_str(&self.bullet("  * ", grandchild));
            }
        }
        buf.push('\n');
    }

    fn bullet(&self, marker: &str, cmd: &Command) -> String {
        let link = Link::new(&cmd.path(), self.layout);
        format!("{}{}\t - {}\n", marker, link.markdown(), cmd.short_description())
    }
}

fn options(buf: &mut String, heading: &str, flags: &[Flag]) {
    if flags.is_empty() {
        return;
    }
    buf.push_str(heading);
    buf.push_str("\n\n```\n");
    buf.push_str(&flag_usages(flags));
    buf.push_str("```\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Kind;
    use crate::config::Config;
    use crate::example::fakes::Fake;

    fn config() -> Config {
        Config::new(NaiveDate::from_ymd_opt(2021, 3, 4).unwrap())
    }

    fn render(cmd: &Command, fake: &Fake) -> String {
        let config = config();
        let examples = ExampleEmbedder::new(fake, fake, &config.example, &config.layout);
        let renderer = PageRenderer::new(&config.layout, &examples, config.generated_on);
        renderer.render(cmd).unwrap()
    }

    #[test]
    fn leaf_page_layout() {
        let root = Command::new("terraform-docs [PATH]")
            .subcommand(
                Command::new("json [PATH]")
                    .short("Generate JSON of inputs and outputs")
                    .kind(Kind::Formatter)
                    .flag(Flag::bool("escape", true, "escape special characters")),
            )
            .build();
        let page = render(&root.children()[0], &Fake::with_text("{}"));

        assert_eq!(
            page,
            concat!(
                "## terraform-docs json\n\n",
                "Generate JSON of inputs and outputs\n\n",
                "### Synopsis\n\n",
                "Generate JSON of inputs and outputs\n\n",
                "```\nterraform-docs json [PATH] [flags]\n```\n\n",
                "### Options\n\n",
                "```\n      --escape   escape special characters (default true)\n```\n\n",
                "### Example\n\n",
                "Given the [`demo`](/demo/) module:\n\n",
                "```shell\nterraform-docs json ./demo/\n```\n\n",
                "generates the following output:\n\n",
                "    {}\n\n",
                "###### Auto generated on 4-Mar-2021\n",
            )
        );
    }

    #[test]
    fn no_flags_no_options_sections() {
        let cmd = Command::new("yaml").short("Generate YAML").kind(Kind::Formatter).build();
        let page = render(&cmd, &Fake::with_text("a: b"));
        assert!(!page.contains("### Options"));
        assert!(!page.contains("```\n```"));
    }

    #[test]
    fn inherited_options_section() {
        let root = Command::new("terraform-docs [PATH]")
            .flag(Flag::string("config", ".terraform-docs.yml", "config file name").short('c').persistent())
            .subcommand(Command::new("toml [PATH]").short("Generate TOML").kind(Kind::Formatter))
            .build();
        let page = render(&root.children()[0], &Fake::with_text("x"));
        assert!(!page.contains("### Options\n"));
        assert!(page.contains(concat!(
            "### Options inherited from parent commands\n\n",
            "```\n  -c, --config string   config file name (default \".terraform-docs.yml\")\n```\n\n",
        )));
    }

    #[test]
    fn examples_block_verbatim() {
        let cmd = Command::new("xml")
            .short("Generate XML")
            .kind(Kind::Formatter)
            .example("terraform-docs xml .\nterraform-docs xml ./modules/vpc")
            .build();
        let page = render(&cmd, &Fake::with_text("<module/>"));
        assert!(page.contains("### Examples\n\n```\nterraform-docs xml .\nterraform-docs xml ./modules/vpc\n```\n\n"));
    }

    #[test]
    fn group_page_lists_children_and_grandchildren() {
        let root = Command::new("terraform-docs [PATH]")
            .short("A utility to generate documentation from Terraform modules")
            .subcommand(
                Command::new("markdown [PATH]")
                    .short("Generate Markdown of inputs and outputs")
                    .kind(Kind::Formatter)
                    .subcommand(Command::new("document [PATH]").short("Generate Markdown document").kind(Kind::Formatter))
                    .subcommand(Command::new("table [PATH]").short("Generate Markdown tables").kind(Kind::Formatter)),
            )
            .subcommand(Command::new("json [PATH]").short("Generate JSON").kind(Kind::Formatter))
            .subcommand(Command::new("secret").short("Hidden").kind(Kind::Formatter).hidden())
            .subcommand(Command::new("version").short("Print the version"))
            .build();
        let fake = Fake::with_text("unused");
        let page = render(&root, &fake);

        assert!(page.contains(concat!(
            "### SEE ALSO\n\n",
            "* [terraform-docs markdown](/docs/formats/markdown.md)\t - Generate Markdown of inputs and outputs\n",
            "  * [terraform-docs markdown document](/docs/formats/markdown-document.md)\t - Generate Markdown document\n",
            "  * [terraform-docs markdown table](/docs/formats/markdown-table.md)\t - Generate Markdown tables\n",
            "* [terraform-docs json](/docs/formats/json.md)\t - Generate JSON\n",
            "\n",
            "###### Auto generated on 4-Mar-2021\n",
        )));
        assert!(!page.contains("secret"));
        assert!(!page.contains("version"));
        assert!(!page.contains("### Example\n"));
        assert!(fake.resolved.borrow().is_empty());
    }

    #[test]
    fn not_runnable_has_no_usage_block() {
        let root = Command::new("terraform-docs [PATH]")
            .subcommand(
                Command::new("tfvars")
                    .short("Generate terraform.tfvars of inputs")
                    .kind(Kind::Formatter)
                    .not_runnable()
                    .subcommand(Command::new("hcl [PATH]").short("Generate HCL").kind(Kind::Formatter)),
            )
            .build();
        let page = render(&root.children()[0], &Fake::with_text("x"));
        assert!(page.starts_with(concat!(
            "## terraform-docs tfvars\n\n",
            "Generate terraform.tfvars of inputs\n\n",
            "### Synopsis\n\n",
            "Generate terraform.tfvars of inputs\n\n",
            "### SEE ALSO\n\n",
        )));
    }

    #[test]
    fn footer_can_be_disabled() {
        let cmd = Command::new("json").short("JSON").kind(Kind::Formatter).disable_auto_gen_tag().build();
        let page = render(&cmd, &Fake::with_text("{}"));
        assert!(!page.contains("Auto generated"));
        assert!(page.ends_with("    {}\n\n"));
    }
}
