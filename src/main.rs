use clap::Parser;
use docscout::{
    Corpus,
    DocsDir,
    browse,
    cli::{self, Cli, Command},
    error,
    mcp,
    resources,
    search::{self, SearchParams},
    text_util,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("DOCSCOUT_LOG") {
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

fn main() -> error::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Command::Completions(args) = &cli.command {
        args.generate();
        return Ok(());
    }

    let docs_dir = DocsDir::resolve(cli.docs_dir.as_deref())?;
    let corpus = Corpus::new(docs_dir.root());

    match cli.command {
        Command::Search(args) => cmd_search(&corpus, args)?,
        Command::Category(args) => cmd_category(&corpus, &args)?,
        Command::Get(args) => cmd_get(&corpus, &args)?,
        Command::List(args) => cmd_list(&corpus, args.json)?,
        Command::Mcp(args) => {
            let config = mcp::ServerConfig::default().with_name(args.name);
            mcp::run_mcp(corpus, config)?;
        }
        Command::Completions(_) => {}
    }

    Ok(())
}

fn cmd_search(corpus: &Corpus, args: cli::SearchArgs) -> error::Result<()> {
    let params = SearchParams {
        query: args.query,
        scope: args.category,
        limit: args.count,
    };
    let outcome = search::execute_search(&params, corpus);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if args.markdown {
        print!("{}", search::format_markdown(&outcome));
    } else {
        search::format_human(&outcome);
    }
    Ok(())
}

fn cmd_category(corpus: &Corpus, args: &cli::CategoryArgs) -> error::Result<()> {
    let outcome = browse::browse(corpus, args.category);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", browse::format_markdown(&outcome));
    }
    Ok(())
}

fn cmd_get(corpus: &Corpus, args: &cli::GetArgs) -> error::Result<()> {
    let content = resources::read(corpus, &args.reference)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&content)?);
    } else if args.line_numbers {
        println!("{}", text_util::add_line_numbers(&content.text, 1));
    } else {
        print!("{}", content.text);
    }
    Ok(())
}

fn cmd_list(corpus: &Corpus, json: bool) -> error::Result<()> {
    let descriptors = resources::list(corpus);

    if json {
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
    } else if descriptors.is_empty() {
        println!("No documents found in {}", corpus.root().display());
    } else {
        for d in &descriptors {
            println!("{:.1}\t{}\t{}", d.priority, d.uri, d.name);
        }
    }
    Ok(())
}
