use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "insightx", about = "Conversational analytics over a payments dataset")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the dataset CSV path from config.
    #[arg(long, global = true)]
    pub dataset: Option<String>,

    /// Override the schema notes file from config.
    #[arg(long, global = true)]
    pub schema: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a natural-language analytics question and get a narrative answer.
    Ask(AskArgs),
    /// Show the planner's task decomposition without executing anything.
    Plan(PlanArgs),
    /// Run a single guarded SQL query against the dataset.
    Query(QueryArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct AskArgs {
    /// The analytics question.
    pub question: String,

    /// Also print the unified response JSON (the machine contract).
    #[arg(long)]
    pub json: bool,

    /// Skip narrative generation; print the unified response JSON only.
    #[arg(long)]
    pub no_narrative: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct PlanArgs {
    /// The analytics question.
    pub question: String,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct QueryArgs {
    /// A single SELECT statement.
    pub sql: String,
}
