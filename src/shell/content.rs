//! Text rendered by the individual portfolio commands.

use super::screen::Screen;
use super::session::{Session, HISTORY_DISPLAY};
use super::table::{Category, CommandTable};
use chrono::Local;
use console::style;
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::{self, Write};

fn gray<D>(text: D) -> console::StyledObject<D> {
    style(text).black().bright()
}

fn label<D>(text: D) -> console::StyledObject<D> {
    style(text).green()
}

pub const QUOTES: [(&str, &str); 8] = [
    ("First, solve the problem. Then, write the code.", "John Johnson"),
    ("Code is like humor. When you have to explain it, it's bad.", "Cory House"),
    ("Make it work, make it right, make it fast.", "Kent Beck"),
    ("Programming isn't about what you know; it's about what you can figure out.", "Chris Pine"),
    ("The best error message is the one that never shows up.", "Thomas Fuchs"),
    ("Simplicity is the soul of efficiency.", "Austin Freeman"),
    ("Clean code always looks like it was written by someone who cares.", "Robert C. Martin"),
    (
        "Any fool can write code that a computer can understand. Good programmers write code that humans can understand.",
        "Martin Fowler",
    ),
];

pub const JOKES: [&str; 7] = [
    "Why do programmers prefer dark mode?\nBecause light attracts bugs! 🐛",
    "How many programmers does it take to change a light bulb?\nNone. It's a hardware problem! 💡",
    "Why do Java developers wear glasses?\nBecause they don't C#! 👓",
    "What's a programmer's favorite place to hang out?\nThe Foo Bar! 🍺",
    "Why did the programmer quit their job?\nBecause they didn't get arrays! 📊",
    "How do you comfort a JavaScript bug?\nYou console it! 🐛",
    "Why did the developer go broke?\nBecause they used up all their cache! 💰",
];

const LANGUAGES: [(&str, u32); 5] = [
    ("Python", 90),
    ("JavaScript", 85),
    ("C++", 80),
    ("Java", 75),
    ("TypeScript", 70),
];

const HACK_STEPS: [&str; 6] = [
    "Connecting to mainframe",
    "Bypassing firewall",
    "Cracking encryption",
    "Downloading data",
    "Covering tracks",
    "HACK COMPLETE!",
];

pub fn welcome<W: Write>(out: &mut Screen<W>) -> io::Result<()> {
    out.type_out(&label("Welcome to my Interactive Portfolio!").to_string())?;
    out.line(gray("Type 'help' to see available commands"))?;
    out.line(gray("Type 'exit' or 'quit' to leave"))?;
    out.blank()
}

pub fn farewell<W: Write>(out: &mut Screen<W>) -> io::Result<()> {
    let rule = "═".repeat(59);
    out.blank()?;
    out.line(style(format!("╔{rule}╗")).cyan())?;
    out.line(style(format!("║  {:<57}║", "Thanks for visiting my portfolio!")).cyan())?;
    out.line(style(format!("║  {:<56}║", "Hope to hear from you soon! 👋")).cyan())?;
    out.line(style(format!("╚{rule}╝")).cyan())?;
    out.blank()
}

/// Help screen, generated from the table so it never drifts from it.
pub fn help<W: Write>(out: &mut Screen<W>, table: &CommandTable) -> io::Result<()> {
    let rule = "═".repeat(59);
    out.line(style(format!("╔{rule}╗")).cyan().bold())?;
    out.line(style(format!("║{:^59}║", "AVAILABLE COMMANDS")).cyan().bold())?;
    out.line(style(format!("╚{rule}╝")).cyan().bold())?;

    for category in Category::ALL {
        out.blank()?;
        out.line(label(category.title()))?;
        for cmd in table.commands().iter().filter(|c| c.category == category) {
            out.line(format_args!("  {}{}", style(format!("{:<14}", cmd.name)).bold(), cmd.summary))?;
        }
    }

    out.blank()?;
    out.line(label("🚪 Exit:"))?;
    out.line(format_args!("  {}Exit the portfolio", style(format!("{:<14}", "exit/quit")).bold()))?;
    out.blank()?;
    let rule = "━".repeat(59);
    out.line(gray(&rule))?;
    out.line(gray("💡 Tip: Try typing partial commands for autocomplete suggestions!"))?;
    out.line(gray(&rule))
}

pub fn whoami<W: Write>(out: &mut Screen<W>) -> io::Result<()> {
    out.heading("$ whoami")?;
    out.line(label("Developer • Designer • Problem Solver"))?;
    out.blank()?;
    out.line("A passionate tech enthusiast who turns coffee into code ☕")?;
    out.line("and ideas into reality 💡")?;
    out.blank()?;
    out.line(format_args!("{} Available for exciting opportunities!", style("Current Status:").yellow()))?;
    out.line(format_args!("{} India 🇮🇳", style("Location:").yellow()))?;
    out.line(format_args!("{} Web Dev, ML/AI, Automation, Open Source", style("Interests:").yellow()))?;
    out.blank()?;
    out.line(gray("Type 'about' for more details"))
}

pub fn about<W: Write>(out: &mut Screen<W>) -> io::Result<()> {
    out.heading("About Me")?;
    out.line("Hi! 👋 I'm a passionate developer who loves creating innovative solutions")?;
    out.line("and building amazing digital experiences.")?;
    out.blank()?;
    out.line(label("What I Do:"))?;
    for item in [
        "🌐 Full-stack web development",
        "🤖 Machine Learning & AI",
        "📱 Mobile application development",
        "🎨 UI/UX design",
        "⚡ Automation & scripting",
    ] {
        out.line(format_args!("  • {item}"))?;
    }
    out.blank()?;
    out.line(label("My Philosophy:"))?;
    out.line("I believe in writing clean, efficient code and creating user experiences")?;
    out.line("that make a difference. Every project is an opportunity to learn something")?;
    out.line("new and push the boundaries of what's possible.")?;
    out.blank()?;
    out.line(label("When I'm Not Coding:"))?;
    for item in [
        "📚 Reading tech blogs and documentation",
        "🎮 Exploring new technologies",
        "💡 Working on side projects",
        "🌱 Contributing to open source",
    ] {
        out.line(format_args!("  • {item}"))?;
    }
    out.blank()?;
    out.line(style("💡 \"Code is poetry written in logic\"").yellow())
}

/// Twenty-cell bar, one cell per 5%.
pub fn skill_bar(level: u32) -> (usize, usize) {
    let filled = (level.min(100) / 5) as usize;
    (filled, 20 - filled)
}

pub fn skills<W: Write>(out: &mut Screen<W>) -> io::Result<()> {
    out.heading("Technical Skills")?;
    out.line(label("Programming Languages:"))?;
    for (skill, level) in LANGUAGES {
        let (filled, empty) = skill_bar(level);
        out.line(format_args!(
            "  ▸ {skill:<15} {}{}  {level}%",
            style("█".repeat(filled)).green(),
            gray("░".repeat(empty))
        ))?;
        out.pause(0.1)?;
    }

    let sections: [(&str, &[&str]); 3] = [
        (
            "Web Development:",
            &[
                "Frontend: React, Vue.js, HTML5, CSS3, TailwindCSS",
                "Backend: Node.js, Express, Django, Flask",
                "Database: MongoDB, PostgreSQL, MySQL, Firebase",
            ],
        ),
        ("Mobile Development:", &["React Native", "Android (Java/Kotlin)", "Flutter"]),
        (
            "Tools & Technologies:",
            &[
                "Version Control: Git, GitHub",
                "DevOps: Docker, AWS, Firebase",
                "ML/AI: TensorFlow, PyTorch, Scikit-learn, OpenCV",
                "Automation: Selenium, Puppeteer, BeautifulSoup",
            ],
        ),
    ];
    for (title, items) in sections {
        out.blank()?;
        out.line(label(title))?;
        for item in items {
            out.line(format_args!("  • {item}"))?;
            out.pause(0.1)?;
        }
    }
    Ok(())
}

struct Project {
    name: &'static str,
    blurb: &'static str,
    tech: &'static str,
    features: &'static str,
    status: &'static str,
}

const PROJECTS: [Project; 5] = [
    Project {
        name: "JEE-CODE Platform",
        blurb: "Competitive coding platform with multi-language support",
        tech: "React, Node.js, Monaco Editor, Express",
        features: "25+ problems | Real-time execution | Test cases",
        status: "Status: Live & Production Ready",
    },
    Project {
        name: "Indian Sign Language Detection",
        blurb: "ML-powered ISL recognition system",
        tech: "Python, TensorFlow, OpenCV, Mediapipe",
        features: "A-Z alphabets | 0-9 digits | Real-time detection",
        status: "Accuracy: 94%+ on test dataset",
    },
    Project {
        name: "Google Form Automation Bot",
        blurb: "Intelligent form filling with human-like behavior",
        tech: "Python, Selenium, Google Sheets API",
        features: "Auto-resume | Smart delays | Error recovery",
        status: "Processed 1000+ forms successfully",
    },
    Project {
        name: "Monkeytype Clone",
        blurb: "Speed typing application with real-time metrics",
        tech: "HTML5, CSS3, Vanilla JavaScript",
        features: "WPM tracking | Multiple modes | Dark theme",
        status: "60 FPS smooth animation",
    },
    Project {
        name: "Terminal Portfolio",
        blurb: "Interactive CLI portfolio (you're using it!)",
        tech: "Rust, ANSI colors",
        features: "Autocomplete | Easter eggs | Animations",
        status: "Single static binary",
    },
];

pub fn projects<W: Write>(out: &mut Screen<W>) -> io::Result<()> {
    out.heading("Featured Projects")?;
    for (i, p) in PROJECTS.iter().enumerate() {
        out.line(format_args!("{} {}", style(format!("[{:02}]", i + 1)).yellow(), style(p.name).bold()))?;
        out.line(format_args!("     {}", gray(p.blurb)))?;
        out.line(format_args!("     {} {}", style("Tech:").blue(), p.tech))?;
        out.line(format_args!("     {} {}", label("⭐ Features:"), p.features))?;
        out.line(format_args!("     {}", gray(format!("┗━► {}", p.status))))?;
        out.blank()?;
    }
    let rule = "━".repeat(59);
    out.line(gray(&rule))?;
    out.line(gray("View all projects: github.com/yourusername"))?;
    out.line(gray(&rule))
}

pub fn experience<W: Write>(out: &mut Screen<W>) -> io::Result<()> {
    out.heading("Experience & Education")?;
    out.line(label("📚 Education:"))?;
    out.line(format_args!("  {}", style("Bachelor of Technology in Computer Science").bold()))?;
    out.line(format_args!("  {}", gray("Specialized in Machine Learning & Web Development")))?;
    out.line("  • Graduated with Honors")?;
    out.line("  • Relevant Coursework: DS&A, DBMS, ML, AI, Web Technologies")?;
    out.blank()?;
    out.line(label("💼 Professional Experience:"))?;
    out.blank()?;
    out.line(format_args!("  {} {}", style("Full-Stack Developer").bold(), gray("| 2023 - Present")))?;
    for item in [
        "Developed 10+ full-stack web applications",
        "Implemented ML models in production environments",
        "Created automation tools saving 100+ hours of manual work",
        "Mentored junior developers and conducted code reviews",
    ] {
        out.line(format_args!("  • {item}"))?;
    }
    out.blank()?;
    out.line(label("🏆 Achievements:"))?;
    for item in [
        "🥇 Built coding platform serving 1000+ users",
        "🚀 Developed 5+ production-ready ML models",
        "⚡ Automated workflows reducing processing time by 80%",
        "💻 Contributed to 10+ open-source projects",
        "📊 Improved application performance by 60%",
    ] {
        out.line(format_args!("  • {item}"))?;
    }
    out.blank()?;
    out.line(label("📜 Certifications:"))?;
    for item in [
        "Machine Learning Specialization",
        "Full-Stack Web Development",
        "Cloud Computing Fundamentals",
    ] {
        out.line(format_args!("  • {item}"))?;
    }
    Ok(())
}

pub fn contact<W: Write>(out: &mut Screen<W>) -> io::Result<()> {
    out.heading("Contact Information")?;
    for (key, value) in [
        ("📧 Email:", "your.email@example.com"),
        ("📱 Phone:", "+91 XXXXX-XXXXX"),
        ("🌍 Location:", "India"),
        ("💼 LinkedIn:", "linkedin.com/in/yourprofile"),
        ("🐱 GitHub:", "github.com/yourusername"),
        ("🌐 Website:", "yourwebsite.com"),
        ("💬 Discord:", "yourusername#1234"),
    ] {
        out.line(format_args!("{} {value}", label(format!("{key:<15}"))))?;
    }
    out.blank()?;
    let rule = "═".repeat(59);
    out.line(style(format!("╔{rule}╗")).yellow())?;
    out.line(style(format!("║  {:<56}║", "💼 Currently open to exciting opportunities!")).yellow())?;
    out.line(style(format!("║  {:<56}║", "📬 Feel free to reach out for collaborations!")).yellow())?;
    out.line(style(format!("╚{rule}╝")).yellow())?;
    out.blank()?;
    out.line(gray("Response time: Usually within 24 hours"))
}

pub fn social<W: Write>(out: &mut Screen<W>) -> io::Result<()> {
    out.heading("Social Media & Links")?;
    for (key, url, note) in [
        ("🐱 GitHub:", "https://github.com/yourusername", "Check out my open-source projects!"),
        ("💼 LinkedIn:", "https://linkedin.com/in/yourprofile", "Let's connect professionally!"),
        ("🐦 Twitter:", "https://twitter.com/yourusername", "Follow for tech updates!"),
        ("📷 Instagram:", "https://instagram.com/yourusername", "Behind the scenes content!"),
        ("🌐 Portfolio:", "https://yourwebsite.com", "Full portfolio website!"),
        ("📝 Blog:", "https://yourblog.com", "Tech articles and tutorials!"),
    ] {
        out.line(format_args!("{} {url}", label(format!("{key:<15}"))))?;
        out.line(format_args!("{:20}{}", "", gray(format!("↳ {note}"))))?;
        out.blank()?;
    }
    Ok(())
}

pub fn email<W: Write>(out: &mut Screen<W>) -> io::Result<()> {
    out.line(label("📧 Opening email client..."))?;
    out.spinner("Preparing email", 1.0)?;
    out.blank()?;
    out.line(format_args!(
        "{} {}",
        style("Send an email to:").cyan(),
        style("your.email@example.com").bold()
    ))?;
    out.line(gray("Subject: Portfolio Inquiry"))
}

pub fn resume<W: Write>(out: &mut Screen<W>) -> io::Result<()> {
    out.line(label("📄 Preparing resume download..."))?;
    out.spinner("Fetching resume", 1.5)?;
    out.heading("Resume Download")?;
    out.line(label("📥 Download Links:"))?;
    out.line("  • PDF Format:  https://yourwebsite.com/resume.pdf")?;
    out.line("  • DOCX Format: https://yourwebsite.com/resume.docx")?;
    out.line("  • LaTeX Source: https://github.com/yourusername/resume")?;
    out.blank()?;
    out.line(label("📊 Resume Highlights:"))?;
    for item in [
        "10+ projects showcased",
        "3+ years of experience",
        "15+ technical skills listed",
        "5+ certifications",
    ] {
        out.line(format_args!("  • {item}"))?;
    }
    out.blank()?;
    out.line(gray(format!("Last updated: {}", Local::now().format("%B %Y"))))?;
    out.line(style("✨ Pro tip: Check my GitHub for a live resume repository!").yellow())
}

pub fn quote<W: Write>(out: &mut Screen<W>) -> io::Result<()> {
    let (text, author) = *QUOTES.choose(out.rng()).unwrap_or(&QUOTES[0]);
    out.heading("💡 Inspirational Quote")?;
    out.line(style(format!("\"{text}\"")).yellow())?;
    out.line(gray(format!("— {author}")))
}

pub fn joke<W: Write>(out: &mut Screen<W>) -> io::Result<()> {
    let joke = *JOKES.choose(out.rng()).unwrap_or(&JOKES[0]);
    out.heading("😄 Programming Joke")?;
    for line in joke.lines() {
        out.line(style(line).yellow())?;
    }
    Ok(())
}

pub fn time<W: Write>(out: &mut Screen<W>) -> io::Result<()> {
    let now = Local::now();
    out.heading("🕐 Current Time")?;
    out.line(format_args!("{}  {}", label("Date:"), now.format("%A, %B %d, %Y")))?;
    out.line(format_args!("{}  {}", label("Time:"), now.format("%I:%M:%S %p")))?;
    out.line(format_args!("{}  UTC{}", label("Zone:"), now.format("%:z")))
}

pub fn matrix<W: Write>(out: &mut Screen<W>) -> io::Result<()> {
    out.line(label("Initializing Matrix..."))?;
    out.pause(1.0)?;
    for _ in 0..10 {
        let line: String = (0..60)
            .map(|_| if out.rng().gen_bool(0.5) { '1' } else { '0' })
            .collect();
        out.line(label(line))?;
        out.pause(0.1)?;
    }
    out.blank()?;
    out.line(style("Wake up, Neo... 🕶️").cyan())
}

pub fn hack<W: Write>(out: &mut Screen<W>) -> io::Result<()> {
    out.line(style("[!] INITIALIZING HACKING SEQUENCE").red().bold())?;
    out.pause(0.5)?;
    for step in HACK_STEPS {
        out.spinner(step, 1.0)?;
    }
    out.blank()?;
    out.line(style("[✓] Just kidding! You've been pranked! 😄").green().bold())
}

pub fn history<W: Write>(out: &mut Screen<W>, session: &Session) -> io::Result<()> {
    out.heading("Command History")?;
    let recent = session.recent(HISTORY_DISPLAY);
    if recent.is_empty() {
        return out.line(gray("No commands in history yet."));
    }
    for (i, cmd) in recent.iter().enumerate() {
        out.line(format_args!("{}  {cmd}", style(format!("{:2}", i + 1)).yellow()))?;
    }
    Ok(())
}

pub fn suggestions<W: Write>(out: &mut Screen<W>, names: &[&str]) -> io::Result<()> {
    out.blank()?;
    out.line(style("💡 Did you mean:").yellow())?;
    for name in names {
        out.line(format_args!("   → {}", label(name)))?;
    }
    out.blank()
}

pub fn not_found<W: Write>(out: &mut Screen<W>, input: &str) -> io::Result<()> {
    out.line(format_args!("{}{}", style("❌ Command not found: ").red(), style(input).red().bold()))?;
    out.line(gray("Type 'help' to see available commands"))?;
    out.blank()
}

pub fn failure<W: Write>(out: &mut Screen<W>, err: &crate::FolioError) -> io::Result<()> {
    out.line(style(format!("❌ Error: {err}")).red())?;
    out.blank()
}
