//! `bel-resources` - command line utilities for BEL namespaces, annotations,
//! and knowledge documents.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bel_resources::config::Config;
use bel_resources::convert::{annotation_to_namespace, namespace_to_annotation};
use bel_resources::document::split_file_to_annotations_and_definitions;
use bel_resources::github::GitHubClient;
use bel_resources::resource::fetch::{resource_from_lines, ResourceClient};
use bel_resources::types::{NamespaceDomain, Section};
use bel_resources::writers::{write_annotation, write_namespace, NamespaceOptions};

/// Location meaning standard input or output.
const STDIO: &str = "-";

#[derive(Parser)]
#[command(name = "bel-resources", version, about = "Utilities for BEL namespaces, annotations, and documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Namespace file utilities
    #[command(subcommand)]
    Namespace(NamespaceCommand),
    /// Annotation file utilities
    #[command(subcommand)]
    Annotation(AnnotationCommand),
    /// Knowledge document utilities
    #[command(subcommand)]
    Document(DocumentCommand),
    /// GitHub lookups
    #[command(subcommand)]
    Github(GithubCommand),
}

#[derive(Args)]
struct IoArgs {
    /// Input resource: path, URL, or `-` for stdin
    #[arg(short = 'f', long = "file", default_value = STDIO)]
    file: String,
    /// Output path, or `-` for stdout
    #[arg(short = 'o', long = "output", default_value = STDIO)]
    output: String,
}

#[derive(Subcommand)]
enum NamespaceCommand {
    /// Build a namespace from a list of names
    Write {
        name: String,
        keyword: String,
        domain: NamespaceDomain,
        citation: String,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        species: Option<String>,
        #[arg(long = "version")]
        namespace_version: Option<String>,
        #[arg(long)]
        contact: Option<String>,
        #[arg(long)]
        license: Option<String>,
        /// File with one name (or `name|encoding`) per line
        #[arg(long, default_value = STDIO)]
        values: String,
        /// Output path, or `-` for stdout
        #[arg(short = 'o', long, default_value = STDIO)]
        output: String,
    },
    /// Convert a namespace file to an annotation file
    ConvertToAnnotation(IoArgs),
}

#[derive(Subcommand)]
enum AnnotationCommand {
    /// Convert an annotation file to a namespace file
    ConvertToNamespace {
        #[command(flatten)]
        io: IoArgs,
        /// Custom keyword, useful if the annotation keyword is too long
        #[arg(long)]
        keyword: Option<String>,
        #[arg(long)]
        author: Option<String>,
    },
}

#[derive(Subcommand)]
enum DocumentCommand {
    /// Show how a document splits into properties, definitions, and statements
    Split {
        /// Input document: path, URL, or `-` for stdin
        #[arg(short = 'f', long = "file", default_value = STDIO)]
        file: String,
    },
}

#[derive(Subcommand)]
enum GithubCommand {
    /// Raw URL of a file at its most recent commit
    Url { owner: String, repo: String, path: String },
    /// SHA of the most recent commit touching a file
    Hash { owner: String, repo: String, path: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;

    match cli.command {
        Command::Namespace(cmd) => run_namespace(cmd, &config).await,
        Command::Annotation(cmd) => run_annotation(cmd, &config).await,
        Command::Document(cmd) => run_document(cmd, &config).await,
        Command::Github(cmd) => run_github(cmd, &config).await,
    }
}

async fn run_namespace(cmd: NamespaceCommand, config: &Config) -> Result<()> {
    match cmd {
        NamespaceCommand::Write {
            name,
            keyword,
            domain,
            citation,
            author,
            description,
            species,
            namespace_version,
            contact,
            license,
            values,
            output,
        } => {
            let lines = read_local_lines(&values)?;
            let values = parse_value_list(&lines);

            let mut options = NamespaceOptions::new(name, keyword);
            options.domain = Some(domain);
            options.description = description;
            options.species = species;
            options.version = namespace_version;
            options.author.name = Some(author.unwrap_or_else(|| config.author.clone()));
            options.author.contact = contact.or_else(|| config.contact.clone());
            options.author.copyright = license;
            options.citation.name = Some(citation);

            let mut out = open_output(&output)?;
            write_namespace(&mut out, &values, &options)?;
            out.flush()?;
        }
        NamespaceCommand::ConvertToAnnotation(args) => {
            let resource = load_resource(&args.file, config).await?;
            let (options, values) = namespace_to_annotation(&resource)?;
            let mut out = open_output(&args.output)?;
            write_annotation(&mut out, &values, &options)?;
            out.flush()?;
        }
    }
    Ok(())
}

async fn run_annotation(cmd: AnnotationCommand, config: &Config) -> Result<()> {
    let AnnotationCommand::ConvertToNamespace { io: args, keyword, author } = cmd;

    let resource = load_resource(&args.file, config).await?;
    let author = author.unwrap_or_else(|| config.author.clone());
    let (options, values) = annotation_to_namespace(&resource, keyword.as_deref(), Some(&author))?;

    let mut out = open_output(&args.output)?;
    write_namespace(&mut out, &values, &options)?;
    out.flush()?;
    Ok(())
}

async fn run_document(cmd: DocumentCommand, config: &Config) -> Result<()> {
    let DocumentCommand::Split { file } = cmd;

    let lines = load_lines(&file, config).await?;
    let sections = split_file_to_annotations_and_definitions(&lines);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for section in [Section::Document, Section::Definition, Section::Statement] {
        let lines = sections.section(section);
        writeln!(out, "# {} ({} lines)", section.name(), lines.len())?;
        for line in lines {
            writeln!(out, "{:>6}  {}", line.line_number, line.text)?;
        }
    }
    Ok(())
}

async fn run_github(cmd: GithubCommand, config: &Config) -> Result<()> {
    let client = GitHubClient::new(config);
    let result = match cmd {
        GithubCommand::Url { owner, repo, path } => client.get_github_url(&owner, &repo, &path).await?,
        GithubCommand::Hash { owner, repo, path } => client.get_github_hash(&owner, &repo, &path).await?,
    };
    println!("{result}");
    Ok(())
}

/// Read lines from a path, URL, or stdin.
async fn load_lines(location: &str, config: &Config) -> Result<Vec<String>> {
    if location == STDIO {
        return read_local_lines(location);
    }
    let lines = ResourceClient::new(config).get_lines(location).await?;
    Ok(lines)
}

async fn load_resource(location: &str, config: &Config) -> Result<bel_resources::BelResource> {
    let lines = load_lines(location, config).await?;
    let label = if location == STDIO { "<stdin>" } else { location };
    resource_from_lines(label, &lines).with_context(|| format!("Could not read resource {label}"))
}

fn read_local_lines(location: &str) -> Result<Vec<String>> {
    if location == STDIO {
        return io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read stdin");
    }
    Ok(bel_resources::resource::fetch::read_path_lines(location)?)
}

/// One value per line, optionally with `|encoding`.
fn parse_value_list(lines: &[String]) -> BTreeMap<String, String> {
    lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(|l| match l.rsplit_once('|') {
            Some((name, encoding)) => (name.trim().to_string(), encoding.trim().to_string()),
            None => (l.to_string(), String::new()),
        })
        .collect()
}

fn open_output(location: &str) -> Result<Box<dyn Write>> {
    if location == STDIO {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    let file = File::create(location).with_context(|| format!("Failed to create {location}"))?;
    Ok(Box::new(BufWriter::new(file)))
}
