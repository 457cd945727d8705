use std::io;
use std::path;

use anyhow::anyhow;
use anyhow::Result;
use clap::Arg;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use tokio::fs;
use yansi::Paint;

use crate::application::chat;
use crate::configuration::Config;
use crate::domain::models::GenerateResponse;
use crate::domain::models::Modality;
use crate::infrastructure::api::ApiClient;
use crate::infrastructure::api::FileUpload;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .value_parser(clap::value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_text() -> Command {
    return Command::new("text")
        .about("Generates markdown from a text prompt.")
        .arg(
            Arg::new("prompt")
                .help("The prompt to send.")
                .required(true),
        );
}

fn subcommand_upload(name: &'static str, about: &'static str) -> Command {
    return Command::new(name)
        .about(about)
        .arg(
            Arg::new("file")
                .help("Path of the file to upload.")
                .required(true),
        )
        .arg(
            Arg::new("prompt")
                .long("prompt")
                .help("Optional prompt to send alongside the file."),
        );
}

pub fn build() -> Command {
    return Command::new("quill")
        .about("Terminal client for a Gemini generation API. Generate markdown from text, images, documents, or audio, and chat with full history replay.")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_text())
        .subcommand(subcommand_upload(
            "image",
            "Generates markdown from an image file.",
        ))
        .subcommand(subcommand_upload(
            "document",
            "Generates markdown from a document file.",
        ))
        .subcommand(subcommand_upload(
            "audio",
            "Generates markdown from an audio file.",
        ))
        .subcommand(Command::new("chat").about("Starts an interactive chat session."))
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .global(true)
                .help(format!(
                    "The generation API base URL. Falls back to the {env} environment variable, then {default}.",
                    env = crate::configuration::BASE_URL_ENV,
                    default = crate::configuration::DEFAULT_BASE_URL
                )),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .global(true)
                .help("Model the backend should use. Defaults to the backend's own choice."),
        )
        .arg(
            Arg::new("system-instruction")
                .long("system-instruction")
                .global(true)
                .help("System instruction forwarded with the request."),
        )
        .arg(
            Arg::new("provider")
                .short('p')
                .long("provider")
                .global(true)
                .help("Backend provider, e.g. 'gemini' or 'lmstudio'."),
        );
}

async fn read_upload(matches: &ArgMatches) -> Result<FileUpload> {
    let file_path = matches.get_one::<String>("file").unwrap();
    let bytes = fs::read(file_path).await?;
    let file_name = path::Path::new(file_path)
        .file_name()
        .ok_or_else(|| return anyhow!("Not a file path: {file_path}"))?
        .to_string_lossy()
        .to_string();

    return Ok(FileUpload { file_name, bytes });
}

fn print_response(response: &GenerateResponse) {
    if let Some(error) = response.app_error() {
        eprintln!("{}", Paint::red(error));
        return;
    }

    if let Some(model) = &response.model {
        eprintln!("{}", Paint::new(format!("Model: {model}")).dimmed());
    }

    println!("{}", response.text.as_deref().unwrap_or("").trim_end());
}

async fn run_upload(modality: Modality, matches: &ArgMatches) -> Result<()> {
    let config = Config::resolve(matches);
    let client = ApiClient::new(&config.base_url);
    let upload = read_upload(matches).await?;
    let prompt = matches.get_one::<String>("prompt").map(String::as_str);

    let response = client
        .generate_from_file(modality, upload, prompt, &config.generate_options())
        .await?;

    print_response(&response);
    return Ok(());
}

pub async fn parse() -> Result<()> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcommand_matches)) => {
            let shell = subcommand_matches.get_one::<Shell>("shell").copied().unwrap();
            print_completions(shell, &mut build());
        }
        Some(("text", subcommand_matches)) => {
            let config = Config::resolve(subcommand_matches);
            let client = ApiClient::new(&config.base_url);
            let prompt = subcommand_matches.get_one::<String>("prompt").unwrap();

            let response = client
                .generate_text(prompt, &config.generate_options())
                .await?;
            print_response(&response);
        }
        Some(("image", subcommand_matches)) => {
            run_upload(Modality::Image, subcommand_matches).await?;
        }
        Some(("document", subcommand_matches)) => {
            run_upload(Modality::Document, subcommand_matches).await?;
        }
        Some(("audio", subcommand_matches)) => {
            run_upload(Modality::Audio, subcommand_matches).await?;
        }
        Some(("chat", subcommand_matches)) => {
            let config = Config::resolve(subcommand_matches);
            let client = ApiClient::new(&config.base_url);
            chat::start(&client, &config.generate_options()).await?;
        }
        _ => {}
    }

    return Ok(());
}
