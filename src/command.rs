//! Command tree model — the metadata of one CLI subcommand that the page
//! renderer reads, plus the single "is this a formatter page?" predicate.

/// Classification of a command, fixed when the tree is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Selects an output formatter; gets a reference page.
    Formatter,
    /// Any other subcommand (completion, version, the root itself).
    #[default]
    Internal,
    /// A help-only placeholder.
    HelpTopic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagType {
    Bool,
    Int,
    String,
    Strings,
}

/// A flag as it appears in an options table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    pub name: String,
    pub shorthand: Option<char>,
    pub value_type: FlagType,
    pub default: String,
    pub usage: String,
    /// Persistent flags are inherited by every descendant.
    pub persistent: bool,
}

impl Flag {
    fn new(name: &str, value_type: FlagType, default: String, usage: &str) -> Self {
        Self {
            name: name.to_string(),
            shorthand: None,
            value_type,
            default,
            usage: usage.to_string(),
            persistent: false,
        }
    }

    pub fn bool(name: &str, default: bool, usage: &str) -> Self {
        Self::new(name, FlagType::Bool, default.to_string(), usage)
    }

    pub fn int(name: &str, default: i64, usage: &str) -> Self {
        Self::new(name, FlagType::Int, default.to_string(), usage)
    }

    pub fn string(name: &str, default: &str, usage: &str) -> Self {
        Self::new(name, FlagType::String, default.to_string(), usage)
    }

    /// Comma-separated list flag; defaults to empty.
    pub fn strings(name: &str, usage: &str) -> Self {
        Self::new(name, FlagType::Strings, String::new(), usage)
    }

    pub fn short(mut self, shorthand: char) -> Self {
        self.shorthand = Some(shorthand);
        self
    }

    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }

    fn type_name(&self) -> Option<&'static str> {
        match self.value_type {
            FlagType::Bool => None,
            FlagType::Int => Some("int"),
            FlagType::String => Some("string"),
            FlagType::Strings => Some("strings"),
        }
    }

    /// ` (default "x")`, or nothing when the default is the type's zero value.
    fn default_suffix(&self) -> String {
        match self.value_type {
            FlagType::Bool if self.default == "true" => " (default true)".to_string(),
            FlagType::Int if self.default != "0" => format!(" (default {})", self.default),
            FlagType::String if !self.default.is_empty() => format!(" (default \"{}\")", self.default),
            FlagType::Strings if !self.default.is_empty() => format!(" (default [{}])", self.default),
            _ => String::new(),
        }
    }
}

/// Render flags as an aligned usage table, one flag per line, in
/// declaration order:
///
/// ```text
///   -c, --config string   config file name (default ".terraform-docs.yml")
///       --sort            sort items (default true)
/// ```
pub fn flag_usages(flags: &[Flag]) -> String {
    let heads: Vec<String> = flags
        .iter()
        .map(|flag| {
            let mut head = match flag.shorthand {
                Some(c) => format!("  -{}, --{}", c, flag.name),
                None => format!("      --{}", flag.name),
            };
            if let Some(type_name) = flag.type_name() {
                head.push(' ');
                head.push_str(type_name);
            }
            head
        })
        .collect();
    let width = heads.iter().map(|h| h.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (head, flag) in heads.iter().zip(flags) {
        out.push_str(&format!(
            "{:<width$}   {}{}\n",
            head,
            flag.usage,
            flag.default_suffix(),
            width = width
        ));
    }
    out
}

/// One subcommand. Built with the `Command::new(..).short(..)` builder, then
/// finalized once from the root with [`Command::build`].
#[derive(Debug, Clone)]
pub struct Command {
    use_template: String,
    short: String,
    long: Option<String>,
    example: Option<String>,
    flags: Vec<Flag>,
    inherited: Vec<Flag>,
    children: Vec<Command>,
    kind: Kind,
    hidden: bool,
    deprecated: Option<String>,
    runnable: bool,
    disable_auto_gen_tag: bool,
    path: Vec<String>,
}

impl Command {
    /// `use_template` is the usage line without parents, e.g. `json [PATH]`;
    /// its first word is the command name.
    pub fn new(use_template: &str) -> Self {
        let name = use_template.split_whitespace().next().unwrap_or_default();
        Self {
            use_template: use_template.to_string(),
            short: String::new(),
            long: None,
            example: None,
            flags: Vec::new(),
            inherited: Vec::new(),
            children: Vec::new(),
            kind: Kind::default(),
            hidden: false,
            deprecated: None,
            runnable: true,
            disable_auto_gen_tag: false,
            path: vec![name.to_string()],
        }
    }

    pub fn short(mut self, text: &str) -> Self {
        self.short = text.to_string();
        self
    }

    pub fn long(mut self, text: &str) -> Self {
        self.long = Some(text.to_string());
        self
    }

    pub fn example(mut self, text: &str) -> Self {
        self.example = Some(text.to_string());
        self
    }

    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    pub fn flag(mut self, flag: Flag) -> Self {
        self.flags.push(flag);
        self
    }

    pub fn subcommand(mut self, child: Command) -> Self {
        self.children.push(child);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn deprecated(mut self, message: &str) -> Self {
        self.deprecated = Some(message.to_string());
        self
    }

    /// Mark a command that only groups subcommands.
    pub fn not_runnable(mut self) -> Self {
        self.runnable = false;
        self
    }

    pub fn disable_auto_gen_tag(mut self) -> Self {
        self.disable_auto_gen_tag = true;
        self
    }

    /// Resolve command paths and inherited flags for the whole tree.
    pub fn build(self) -> Self {
        self.build_under(&[], &[])
    }

    fn build_under(mut self, parent_path: &[String], parent_flags: &[Flag]) -> Self {
        let name = self.name().to_string();
        self.path = parent_path.to_vec();
        self.path.push(name);

        self.inherited = parent_flags
            .iter()
            .filter(|f| !self.flags.iter().any(|own| own.name == f.name))
            .cloned()
            .collect();

        let mut passed_down = self.inherited.clone();
        passed_down.extend(self.flags.iter().filter(|f| f.persistent).cloned());

        let path = self.path.clone();
        self.children = std::mem::take(&mut self.children)
            .into_iter()
            .map(|child| child.build_under(&path, &passed_down))
            .collect();
        self
    }

    pub fn name(&self) -> &str {
        self.use_template.split_whitespace().next().unwrap_or_default()
    }

    /// Space-separated path from the root, e.g. `terraform-docs markdown table`.
    pub fn path(&self) -> String {
        self.path.join(" ")
    }

    pub fn short_description(&self) -> &str {
        &self.short
    }

    /// Long description, falling back to the short one.
    pub fn long_description(&self) -> &str {
        self.long.as_deref().unwrap_or(&self.short)
    }

    pub fn example_text(&self) -> Option<&str> {
        self.example.as_deref()
    }

    pub fn own_flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn inherited_flags(&self) -> &[Flag] {
        &self.inherited
    }

    pub fn children(&self) -> &[Command] {
        &self.children
    }

    pub fn is_runnable(&self) -> bool {
        self.runnable
    }

    pub fn auto_gen_tag(&self) -> bool {
        !self.disable_auto_gen_tag
    }

    /// Parent path plus the use template, with `[flags]` appended when the
    /// command takes any flags.
    pub fn use_line(&self) -> String {
        let mut line = match self.path.split_last() {
            Some((_, parents)) if !parents.is_empty() => {
                format!("{} {}", parents.join(" "), self.use_template)
            }
            _ => self.use_template.clone(),
        };
        let has_flags = !self.flags.is_empty() || !self.inherited.is_empty();
        if has_flags && !line.contains("[flags]") {
            line.push_str(" [flags]");
        }
        line
    }

    /// Not hidden, not deprecated, and either runnable or grouping an
    /// available subcommand.
    pub fn is_available(&self) -> bool {
        if self.hidden || self.deprecated.is_some() {
            return false;
        }
        self.runnable || self.children.iter().any(Command::is_available)
    }

    pub fn is_help_topic(&self) -> bool {
        self.kind == Kind::HelpTopic
    }

    /// Whether this command gets a formatter reference page. The walker and
    /// the SEE ALSO index both use this, so they never disagree.
    pub fn is_documentable(&self) -> bool {
        self.is_available() && !self.is_help_topic() && self.kind == Kind::Formatter
    }

    pub fn documentable_children(&self) -> impl Iterator<Item = &Command> {
        self.children.iter().filter(|c| c.is_documentable())
    }
}
