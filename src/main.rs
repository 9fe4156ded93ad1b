use admitbot::{
    Assistant,
    AssistantConfig,
    Error,
    LatencyConfig,
    Reply,
    Result,
    chat,
    faq,
    generation::{GenerationRequest, TextGenerator},
    matcher,
    mcp,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{
    AskArgs,
    CatalogAction,
    Cli,
    Command,
    ConfigAction,
    FaqArgs,
    GenerateArgs,
    RankArgs,
};

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("ADMITBOT_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Config(format!("failed to start tokio runtime: {e}")))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let mut config = AssistantConfig::resolve(cli.config.as_deref())?;
    if cli.no_delay {
        config.latency = LatencyConfig::none();
    }

    match cli.command {
        Command::Ask(args) => cmd_ask(config, &args)?,
        Command::Rank(args) => cmd_rank(&Assistant::new(config)?, &args)?,
        Command::Faq(args) => cmd_faq(&config, &args)?,
        Command::Generate(args) => cmd_generate(config, &args)?,
        Command::Catalog { action } => {
            let assistant = Assistant::new(config)?;
            match action {
                CatalogAction::List { json } => catalog_list(&assistant, json)?,
                CatalogAction::Show { id, json } => {
                    catalog_show(&assistant, &id, json)?
                }
            }
        }
        Command::Chat(args) => {
            let assistant = Assistant::new(config)?;
            let stdin = std::io::stdin();
            runtime()?.block_on(chat::run_session(
                &assistant,
                args.strategy,
                stdin.lock(),
                std::io::stdout(),
            ))?;
        }
        Command::Mcp => mcp::run_mcp(config)?,
        Command::Config { action } => match action {
            ConfigAction::Show => {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        },
        Command::Completions(args) => args.generate(),
    }

    Ok(())
}

fn cmd_ask(config: AssistantConfig, args: &AskArgs) -> Result<()> {
    let assistant = Assistant::new(config)?;
    let rt = runtime()?;

    if args.json {
        let reply = rt
            .block_on(assistant.reply(&args.query, args.strategy))
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "answer failed");
                Reply::apology(args.strategy)
            });
        println!("{}", serde_json::to_string_pretty(&reply)?);
    } else {
        let answer = rt.block_on(assistant.respond(&args.query, args.strategy));
        println!("{answer}");
    }

    Ok(())
}

fn cmd_rank(assistant: &Assistant, args: &RankArgs) -> Result<()> {
    let ranked = matcher::rank(
        &args.query,
        assistant.store().entries(),
        &assistant.config().matcher,
    );
    let count = args.count.unwrap_or(ranked.len());
    let ranked = &ranked[..count.min(ranked.len())];

    if args.json {
        let items: Vec<serde_json::Value> = ranked
            .iter()
            .map(|s| {
                serde_json::json!({
                    "id": s.entry.id,
                    "title": s.entry.title,
                    "category": s.entry.category,
                    "score": s.score,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if ranked.is_empty() {
        println!("No entries match '{}'", args.query);
    } else {
        for s in ranked {
            println!("{}\t#{}\t{}", s.score, s.entry.id, s.entry.title);
        }
    }

    Ok(())
}

fn cmd_faq(config: &AssistantConfig, args: &FaqArgs) -> Result<()> {
    let faqs = faq::default_faqs();
    let best = faq::find_best_faq_match(&args.query, &faqs, &config.faq);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&best)?);
        return Ok(());
    }

    match best {
        Some(entry) => {
            println!("[{}] {}", entry.category, entry.question);
            println!("{}", entry.answer);
        }
        None => {
            println!("No FAQ match");
            println!("{}", faq::generate_fallback_response(&args.query));
        }
    }

    Ok(())
}

fn cmd_generate(config: AssistantConfig, args: &GenerateArgs) -> Result<()> {
    let assistant = Assistant::new(config)?;
    let mut request = GenerationRequest::new(&args.input)
        .with_parameters(assistant.config().generation.parameters);
    if let Some(context) = &args.context {
        request = request.with_context(context);
    }

    let response = runtime()?.block_on(assistant.generator().generate(&request))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", response.generated_text);
        eprintln!(
            "tokens: {} in, {} out ({})",
            response.input_token_count,
            response.generated_token_count,
            response.stop_reason
        );
    }

    Ok(())
}

fn catalog_list(assistant: &Assistant, json: bool) -> Result<()> {
    let entries = assistant.store().entries();

    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else {
        for entry in entries {
            println!(
                "{}\t{}\t{}",
                entry.id,
                entry.category.label(),
                entry.title
            );
        }
    }
    Ok(())
}

fn catalog_show(assistant: &Assistant, id: &str, json: bool) -> Result<()> {
    let entry = assistant.store().get(id).ok_or_else(|| Error::NotFound {
        kind: "entry",
        name: id.to_string(),
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(entry)?);
    } else {
        println!("{} ({})", entry.title, entry.category.label());
        if !entry.last_updated.is_empty() {
            println!("Last updated: {}", entry.last_updated);
        }
        if !entry.tags.is_empty() {
            println!("Tags: {}", entry.tags.join(", "));
        }
        println!();
        println!("{}", entry.content);
    }
    Ok(())
}
