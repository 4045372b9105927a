use std::io::Read;
use std::path::PathBuf;
use std::collections::HashMap;
use clap::Parser;
use serde::Deserialize;
use crate::code_writer::CodeFileOptions;

mod code_generator;
mod code_writer;
mod schema;
mod schema_dmmf;
mod type_gen;

const DEFAULT_CONFIG_PATH: &'static str = "resolver-typegen.json";
const DEFAULT_CLIENT_PACKAGE: &'static str = "@prisma/client";
const DEFAULT_INDENT: &'static str = "    ";
const DEFAULT_PROFILE_NAME: &'static str = "default";

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    let config = read_config_from_args(&args);

    let client_package = config
        .as_ref()
        .and_then(|c| c.client.as_ref())
        .map(|c| c.as_str())
        .unwrap_or(DEFAULT_CLIENT_PACKAGE)
        .to_string();

    let indent = config
        .as_ref()
        .and_then(|c| c.indent.as_ref())
        .map(|i| i.as_str())
        .unwrap_or(DEFAULT_INDENT)
        .to_string();

    let line_break = config
        .as_ref()
        .and_then(|c| c.line_break.as_ref())
        .map(|l| l.clone())
        .unwrap_or_else(|| default_line_break());

    let output_directory: String = if let Some(output) = args.output {
        output
    } else if let Some(output_dir) = config.as_ref().and_then(|c| c.output_directory.as_ref()) {
        output_dir.to_string()
    } else {
        panic!("No output directory was given")
    };

    let fetch: FetchMethod = if let Some(file) = args.file {
        FetchMethod::File { path: PathBuf::from(file) }
    } else if let Some(config) = &config {
        let profile_name: String = args.profile.unwrap_or(DEFAULT_PROFILE_NAME.to_string());
        if let Some(profiles) = &config.profiles {
            match profiles.get(&profile_name) {
                Some(ConfigProfile::File { path }) => FetchMethod::File { path: PathBuf::from(path) },
                Some(ConfigProfile::Pipe) => FetchMethod::Pipe,
                None => panic!("No profile named \"{}\"", profile_name)
            }
        } else {
            panic!("No schema document was provided and default profile is not defined in config file")
        }
    } else {
        panic!("No schema document was provided")
    };

    let options = CodegenOptions {
        output_directory: PathBuf::from(output_directory),
        line_break,
        indent,
        client_package,
        fetch
    };

    execute(options).await;
}

fn read_config_from_args(args: &Cli) -> Option<CodegenJsonConfig> {
    match &args.config {
        Some(path) => {
            match read_config(path) {
                Some(config) => Some(config),
                None => panic!("Unable to locate config file {}", path)
            }
        },
        None => read_config(DEFAULT_CONFIG_PATH)
    }
}

fn read_config(path: &str) -> Option<CodegenJsonConfig> {
    if !std::path::Path::new(path).exists() {
        return None;
    }
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) => panic!("Unable to read config file {}: {}", path, error)
    };
    let deserializer = &mut serde_json::Deserializer::from_str(&content);
    match serde_path_to_error::deserialize(deserializer) {
        Ok(config) => Some(config),
        Err(error) => panic!("Invalid config file {}: {}", path, error)
    }
}

#[derive(Parser)]
struct Cli {
    #[arg(short, long, help = "Path to config file from working directory, default: resolver-typegen.json")]
    config: Option<String>,
    #[arg(short, long, help = "Profile used from config file, default: default")]
    profile: Option<String>,
    #[arg(short, long, help = "Path to the schema document JSON, override config file")]
    file: Option<String>,
    #[arg(short, long, help = "Output directory, override config file")]
    output: Option<String>,
}

fn default_line_break() -> String {
    if cfg!(windows) {
        "\r\n"
    } else {
        "\n"
    }.to_string()
}

#[derive(Deserialize)]
struct CodegenJsonConfig {
    profiles: Option<HashMap<String, ConfigProfile>>,
    #[serde(rename = "outputDirectory")]
    output_directory: Option<String>,
    #[serde(rename = "lineBreak")]
    line_break: Option<String>,
    indent: Option<String>,
    client: Option<String>,
}

#[derive(Deserialize)]
#[serde(tag = "method")]
enum ConfigProfile {
    File { path: String },
    Pipe
}

async fn execute(options: CodegenOptions) {
    let raw_content = match &options.fetch {
        FetchMethod::File { path } => read_file(path).await,
        FetchMethod::Pipe => read_pipe()
    };
    let document = match schema_dmmf::from_document_string(&raw_content) {
        Ok(document) => document,
        Err(error) => panic!("Unable to parse schema document: {}", error)
    };
    let write_options = CodeFileOptions {
        indent: options.indent,
        line_break: options.line_break
    };
    code_generator::write_files(document, options.output_directory, write_options, options.client_package).await;
}

struct CodegenOptions {
    output_directory: PathBuf,
    line_break: String,
    indent: String,
    client_package: String,
    fetch: FetchMethod
}

enum FetchMethod {
    File { path: PathBuf },
    Pipe
}

async fn read_file(path: &PathBuf) -> String {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(error) => panic!("Unable to read schema document {}: {}", path.display(), error)
    }
}

fn read_pipe() -> String {
    let mut buffer = String::new();
    match std::io::stdin().read_to_string(&mut buffer) {
        Ok(_) => buffer,
        Err(error) => panic!("Unable to read schema document from stdin: {}", error)
    }
}
