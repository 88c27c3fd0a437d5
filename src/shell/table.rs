//! Static command table with prefix autocomplete.

/// Primitive step a command performs. Commands list these in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ClearScreen,
    Banner,
    Welcome,
    Help,
    Whoami,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
    Social,
    Email,
    Resume,
    Quote,
    Joke,
    Time,
    Matrix,
    Hack,
    History,
}

/// Grouping used by the help screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Information,
    Professional,
    Contact,
    Fun,
    Utilities,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Information,
        Category::Professional,
        Category::Contact,
        Category::Fun,
        Category::Utilities,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::Information => "📋 Information Commands:",
            Category::Professional => "💼 Professional:",
            Category::Contact => "📞 Contact & Social:",
            Category::Fun => "🎮 Fun & Extras:",
            Category::Utilities => "🔧 Utilities:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    pub summary: &'static str,
    pub category: Category,
    pub actions: &'static [Action],
}

const fn cmd(
    name: &'static str,
    summary: &'static str,
    category: Category,
    actions: &'static [Action],
) -> Command {
    Command { name, summary, category, actions }
}

const REDRAW: &[Action] = &[Action::ClearScreen, Action::Banner, Action::Welcome];

pub const EXIT_ALIASES: [&str; 3] = ["exit", "quit", "q"];

/// More than this many prefix matches is treated as "not found".
pub const MAX_SUGGESTIONS: usize = 5;

/// Lookup table keyed by lowercase name. Declaration order is preserved for
/// help output and suggestions.
#[derive(Debug, Clone)]
pub struct CommandTable {
    commands: Vec<Command>,
}

impl CommandTable {
    pub fn new(commands: Vec<Command>) -> Self {
        debug_assert!(
            commands
                .iter()
                .enumerate()
                .all(|(i, c)| commands[..i].iter().all(|d| d.name != c.name)),
            "duplicate command name"
        );
        Self { commands }
    }

    pub fn portfolio() -> Self {
        use Action::*;
        use Category::{Fun, Information, Professional, Utilities};

        Self::new(vec![
            cmd("help", "Show this help message", Information, &[Help]),
            cmd("whoami", "Quick introduction", Information, &[Whoami]),
            cmd("about", "About me and my background", Information, &[About]),
            cmd("skills", "My technical skills and expertise", Professional, &[Skills]),
            cmd("projects", "View my recent projects", Professional, &[Projects]),
            cmd("experience", "Work experience and education", Professional, &[Experience]),
            cmd("contact", "Get in touch with me", Category::Contact, &[Contact]),
            cmd("social", "My social media links", Category::Contact, &[Social]),
            cmd("email", "Send me an email", Category::Contact, &[Email]),
            cmd("resume", "Download my resume", Professional, &[Resume]),
            cmd("quote", "Random inspirational quote", Fun, &[Quote]),
            cmd("joke", "Random programming joke", Fun, &[Joke]),
            cmd("time", "Show current time", Utilities, &[Time]),
            cmd("matrix", "Matrix effect (Easter egg!)", Fun, &[Matrix]),
            cmd("hack", "Hacking simulator (Easter egg!)", Fun, &[Hack]),
            cmd("history", "Show command history", Utilities, &[History]),
            cmd("banner", "Display the banner again", Utilities, REDRAW),
            cmd("clear", "Clear the terminal screen", Utilities, REDRAW),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.name)
    }

    /// Names starting with `prefix`, in declaration order. An empty prefix
    /// matches everything.
    pub fn suggestions(&self, prefix: &str) -> Vec<&'static str> {
        let prefix = prefix.to_lowercase();
        self.names().filter(|name| name.starts_with(&prefix)).collect()
    }

    pub fn is_exit(input: &str) -> bool {
        EXIT_ALIASES.contains(&input)
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::portfolio()
    }
}
