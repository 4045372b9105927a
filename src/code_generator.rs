use std::process;
use std::path::{Path, PathBuf};
use futures::future;
use tokio::fs;
use crate::code_writer::CodeFileOptions;
use crate::schema::SchemaDocument;
use crate::type_gen::TypeGenerator;

const EMBEDDED_HASH_PREFIX: &'static str = "// hash:";

fn io_error_abort(context: &str, error: std::io::Error) -> ! {
    eprintln!("{}", context);
    eprintln!("IO error: {}", error);
    process::exit(1)
}

pub async fn write_files(
    document: SchemaDocument,
    output_directory: PathBuf,
    options: CodeFileOptions,
    client_package: String
) {
    if !output_directory.exists() {
        if let Err(error) = fs::create_dir(&output_directory).await {
            io_error_abort(
                &format!("Unable to create output directory {}, does the parent folder exist?", output_directory.display()),
                error
            )
        }
    }

    let scaffold_task = async {
        let path = output_directory.join("context.ts");
        if path.exists() {
            println!("context.ts - already exists");
        } else {
            write_context_scaffold(&path, &options, &client_package).await;
            println!("context.ts - created");
        }
    };

    let types_task = async {
        let content = TypeGenerator::new(&document, &options, &client_package).generate();
        let path = output_directory.join("types.ts");
        let result = overwrite_on_diff(&path, &content, &options).await;
        result.log("types.ts");
    };

    future::join(scaffold_task, types_task).await;
}

async fn write_context_scaffold(path: &Path, options: &CodeFileOptions, client_package: &str) {
    let scaffold = include_str!("../resources/context.template")
        .replace("__CLIENT_PACKAGE__", client_package)
        .replace("\t", &options.indent)
        .replace("\n", &options.line_break);
    if let Err(error) = fs::write(path, scaffold).await {
        io_error_abort(&format!("Unable to create new file {}", path.display()), error)
    }
}

async fn overwrite_on_diff(path: &Path, new_content: &str, options: &CodeFileOptions) -> FileWriteResult {
    let new_hash = crc32fast::hash(new_content.as_bytes());
    let existed = path.exists();

    if existed && embedded_hash(path).await == Some(new_hash) {
        return FileWriteResult::NoChange;
    }

    let content_with_hash = format!("{}{}{}{}", EMBEDDED_HASH_PREFIX, new_hash, options.line_break, new_content);
    if let Err(error) = fs::write(path, content_with_hash).await {
        io_error_abort(&format!("Unable to write to file {}", path.display()), error)
    }

    if existed {
        FileWriteResult::Overwritten
    } else {
        FileWriteResult::Created
    }
}

async fn embedded_hash(path: &Path) -> Option<u32> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(error) => io_error_abort(
            &format!("Failed while trying to read embedded hash from {}", path.display()),
            error
        )
    };
    let first_line = content.lines().next()?;
    let hash_string = first_line.strip_prefix(EMBEDDED_HASH_PREFIX)?;
    hash_string.trim_end().parse().ok()
}

enum FileWriteResult {
    Overwritten,
    NoChange,
    Created
}

impl FileWriteResult {
    fn log(&self, file_name: &str) {
        match &self {
            FileWriteResult::Created => println!("{} - created", file_name),
            FileWriteResult::NoChange => println!("{} - skipped (no change)", file_name),
            FileWriteResult::Overwritten => println!("{} - overwritten", file_name)
        }
    }
}
