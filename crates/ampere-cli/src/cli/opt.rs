use clap::ArgAction;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ampere", about = "Knowledge checks, quizzes and mock exams for course content")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Parse and validate page and question bank files
    Validate(Validate),

    /// Answer one inline check of a page
    Check(Check),

    /// Take the quiz of a page
    Quiz(Quiz),

    /// Take a mock exam drawn from a question bank
    Exam(Exam),

    /// Write JSON schemas for the content files
    Schema(Schema),
}

#[derive(Debug, Parser)]
pub(crate) struct Validate {
    #[arg(required = true)]
    pub(crate) paths: Vec<PathBuf>,

    #[arg(
        long,
        default_missing_value("true"),
        default_value("true"),
        num_args(0..=1),
        require_equals(true),
        action = ArgAction::Set
    )]
    pub(crate) strict: bool,
}

#[derive(Debug, Parser)]
pub(crate) struct Check {
    pub(crate) file: PathBuf,
    pub(crate) id: String,
}

#[derive(Debug, Parser)]
pub(crate) struct Quiz {
    pub(crate) file: PathBuf,
}

#[derive(Debug, Parser)]
pub(crate) struct Exam {
    pub(crate) file: PathBuf,

    /// Number of questions, defaults to the bank's exam setting
    #[arg(short, long)]
    pub(crate) count: Option<usize>,

    /// Seed for a reproducible draw
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,

    /// Follow the bank's difficulty distribution and categories
    #[arg(short, long)]
    pub(crate) balanced: bool,
}

#[derive(Debug, Parser)]
pub(crate) struct Schema {
    #[arg(required = true)]
    pub(crate) output_folder: PathBuf,
}
