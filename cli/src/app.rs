use insightx_core::api::{
    load_default, validate, AppConfig, AppContext, CliError, Dataset, PipelineError,
};

use crate::commands::cli::{Args, AskArgs, Commands, PlanArgs, QueryArgs};

pub async fn run(args: Args) -> Result<i32, CliError> {
    let mut cfg = load_default().map_err(|e| CliError::Config(e.to_string()))?;

    if let Some(path) = &args.dataset {
        cfg.dataset.csv_path = path.clone();
    }
    if let Some(path) = &args.schema {
        cfg.dataset.schema_path = path.clone();
    }

    match args.command {
        Commands::Ask(a) => cmd_ask(cfg, a).await,
        Commands::Plan(p) => cmd_plan(cfg, p).await,
        Commands::Query(q) => cmd_query(cfg, q).await,
    }
}

async fn cmd_ask(cfg: AppConfig, args: AskArgs) -> Result<i32, CliError> {
    let ctx = AppContext::initialize(cfg).await?;

    if args.no_narrative {
        let unified = ctx
            .pipeline()
            .run_analysis(&args.question)
            .await
            .map_err(PipelineError::from)?;
        println!("{}", serde_json::to_string_pretty(&unified)?);
        return Ok(0);
    }

    let report = ctx
        .pipeline()
        .run(&args.question)
        .await
        .map_err(PipelineError::from)?;

    match (&report.answer, &report.composition_error) {
        (Some(answer), _) => println!("{answer}"),
        (None, Some(reason)) => {
            eprintln!("narrative unavailable: {reason}");
            eprintln!("(analysis results follow)");
            println!("{}", serde_json::to_string_pretty(&report.response)?);
        }
        (None, None) => {}
    }

    if args.json && report.answer.is_some() {
        println!("\n--- response JSON ---");
        println!("{}", serde_json::to_string_pretty(&report.response)?);
    }

    Ok(0)
}

async fn cmd_plan(cfg: AppConfig, args: PlanArgs) -> Result<i32, CliError> {
    let ctx = AppContext::initialize(cfg).await?;
    let tasks = ctx
        .pipeline()
        .plan(&args.question)
        .await
        .map_err(PipelineError::from)?;

    for (idx, task) in tasks.iter().enumerate() {
        println!("{}. {}", idx + 1, task.task_name);
        if !task.task_description.is_empty() {
            println!("   {}", task.task_description);
        }
        println!("   SQL: {}", task.sql_query);
    }

    Ok(0)
}

async fn cmd_query(cfg: AppConfig, args: QueryArgs) -> Result<i32, CliError> {
    let dataset = Dataset::from_csv(&cfg.dataset.csv_path, &cfg.dataset.table_name)
        .await
        .map_err(PipelineError::from)?;

    let query = validate(&args.sql).map_err(|r| CliError::Command(r.reason))?;
    let rows = insightx_core::api::execute(&dataset, &query)
        .await
        .map_err(|e| CliError::Command(e.message))?;

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(0)
}
