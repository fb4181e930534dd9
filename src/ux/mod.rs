use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::compiler;
use crate::intent::{present, Category, DesignIntent, JobType, Modifier, ModifierSet};
use crate::knowledge::catalog;
use crate::synth::{Generated, Source};

pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn show_prompt(generated: &Generated, synthesizer: &str) {
    let origin = match generated.source {
        Source::Synthesized => format!("[{synthesizer}]").green().bold(),
        Source::Compiled => "[compiler]".yellow().bold(),
    };
    println!("\n=== PROMPT === {origin}");
    if let Some(reason) = &generated.fallback_reason {
        println!("{} {}", "synthesis failed:".red(), reason);
    }
    println!("{}\n", generated.prompt);
}

pub fn show_description(description: &str) {
    println!("=== விளக்கம் ===");
    println!("{}\n", description.italic());
}

pub fn show_modifiers(mods: &ModifierSet) {
    let line: Vec<String> = Modifier::ALL
        .into_iter()
        .map(|m| {
            if mods.contains(m) {
                format!("[x] {}", m.id()).green().to_string()
            } else {
                format!("[ ] {}", m.id())
            }
        })
        .collect();
    println!("{}", line.join("  "));
}

/// Options, styles and the follow-up question for one category.
pub fn print_catalog(category: Category) {
    println!("\n{} ({})", category.default_title_en().bold(), category.default_title_ta());
    let options = catalog::options(category);
    if !options.is_empty() {
        println!("  {}", "options:".cyan());
        for o in options {
            println!("    {:<14} {} / {}", o.id, o.name_en, o.name_ta);
        }
    }
    println!("  {}", "styles:".cyan());
    for s in catalog::styles(category) {
        println!("    {:<14} {} / {}", s.id, s.name_en, s.name_ta);
    }
    if let Some(q) = catalog::question(category) {
        println!("  {} {} / {}", "question:".cyan(), q.question_en, q.question_ta);
        for c in q.choices {
            println!("    - {c}");
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefineCommand {
    Toggle(Modifier),
    /// Replace the extra note; blank keeps the current one.
    Note(String),
    Show,
    Help,
    Done,
}

impl RefineCommand {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((h, r)) => (h, r.trim()),
            None => (line, ""),
        };
        match head.to_ascii_lowercase().as_str() {
            "" | "show" | "regenerate" => Some(Self::Show),
            "note" => Some(Self::Note(rest.to_string())),
            "help" | "?" => Some(Self::Help),
            "done" | "quit" | "q" | "exit" => Some(Self::Done),
            other => Modifier::from_id(other).map(Self::Toggle),
        }
    }
}

/// State of an interactive refinement session.
#[derive(Debug, Clone)]
pub struct Refinement {
    pub intent: DesignIntent,
    pub modifiers: ModifierSet,
    pub prompt: String,
}

impl Refinement {
    pub fn new(intent: DesignIntent, modifiers: ModifierSet, prompt: String) -> Self {
        Self { intent, modifiers, prompt }
    }

    /// Apply one command; returns false once the session should end. Every
    /// change recompiles the prompt with the active modifiers.
    pub fn apply(&mut self, job: Option<&JobType>, cmd: RefineCommand) -> bool {
        match cmd {
            RefineCommand::Toggle(m) => {
                self.modifiers.toggle(m);
            }
            RefineCommand::Note(note) => {
                if present(&note).is_some() {
                    self.intent.extra_note = note;
                }
            }
            RefineCommand::Show | RefineCommand::Help => {}
            RefineCommand::Done => return false,
        }
        self.prompt = compiler::compile(job, &self.intent, &self.modifiers);
        true
    }
}

fn print_refine_help() {
    let ids: Vec<&str> = Modifier::ALL.iter().map(|m| m.id()).collect();
    println!("commands: {} | note <text> | show | done", ids.join(" | "));
}

/// Read commands from stdin until `done` or EOF.
pub fn refine_loop(job: Option<&JobType>, mut state: Refinement) -> io::Result<Refinement> {
    print_refine_help();
    let stdin = io::stdin();
    loop {
        show_modifiers(&state.modifiers);
        print!("{} ", "refine>".bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let Some(cmd) = RefineCommand::parse(&line) else {
            println!("{} {}", "unknown command:".red(), line.trim());
            print_refine_help();
            continue;
        };
        if cmd == RefineCommand::Help {
            print_refine_help();
            continue;
        }
        if !state.apply(job, cmd) {
            break;
        }
        println!("\n{}\n", state.prompt);
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(RefineCommand::parse("lock-layout"), Some(RefineCommand::Toggle(Modifier::LockLayout)));
        assert_eq!(RefineCommand::parse(" MORE_FESTIVE \n"), Some(RefineCommand::Toggle(Modifier::MoreFestive)));
        assert_eq!(
            RefineCommand::parse("note add a peacock border"),
            Some(RefineCommand::Note("add a peacock border".into()))
        );
        assert_eq!(RefineCommand::parse("note"), Some(RefineCommand::Note(String::new())));
        assert_eq!(RefineCommand::parse(""), Some(RefineCommand::Show));
        assert_eq!(RefineCommand::parse("q"), Some(RefineCommand::Done));
        assert_eq!(RefineCommand::parse("sparkle"), None);
    }

    #[test]
    fn toggling_recompiles_with_modifiers() {
        let job = JobType::new(Category::Festival);
        let mut state = Refinement::new(DesignIntent::default(), ModifierSet::new(), String::new());

        assert!(state.apply(Some(&job), RefineCommand::Toggle(Modifier::LockLayout)));
        assert!(state.modifiers.contains(Modifier::LockLayout));
        assert!(state.prompt.contains(crate::knowledge::LOCK_LAYOUT));

        state.apply(Some(&job), RefineCommand::Toggle(Modifier::LockLayout));
        assert!(state.modifiers.is_empty());
        assert!(!state.prompt.contains(crate::knowledge::LOCK_LAYOUT));
    }

    #[test]
    fn blank_note_keeps_existing_note() {
        let intent = DesignIntent { extra_note: "gold border".into(), ..DesignIntent::default() };
        let mut state = Refinement::new(intent, ModifierSet::new(), String::new());
        state.apply(None, RefineCommand::Note("  ".into()));
        assert_eq!(state.intent.extra_note, "gold border");
        assert!(state.prompt.contains("gold border"));

        state.apply(None, RefineCommand::Note("peacock motifs".into()));
        assert!(state.prompt.contains("peacock motifs"));
        assert!(!state.apply(None, RefineCommand::Done));
    }
}
